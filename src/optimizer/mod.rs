use ndarray::Array1;

/// Trait for gradient-based optimizers.
///
/// Optimizers only update parameters from gradients; the training loop lives
/// in [`Trainer`](crate::trainer::Trainer).
pub trait Optimizer<P> {
    /// Performs an optimization step. Returns new parameters, inputs are not mutated.
    fn step(&self, params: &P, gradients: &P) -> P;

    fn learning_rate(&self) -> f64;
}

/// Plain gradient descent:
/// ```text
/// θ ← θ - η · ∇L(θ)
/// ```
/// The trainer feeds it full-batch gradients that are already averaged over
/// the rows, so each step is one batch gradient-descent update.
#[derive(Clone, Copy, Debug)]
pub struct GradientDescent {
    lr: f64,
}

impl GradientDescent {
    /// Creates a new optimizer with the specified learning rate.
    ///
    /// The rate is validated when training starts, not here.
    pub fn new(lr: f64) -> Self {
        Self { lr }
    }
}

impl Optimizer<Array1<f64>> for GradientDescent {
    fn step(&self, params: &Array1<f64>, gradients: &Array1<f64>) -> Array1<f64> {
        params - &(gradients * self.lr)
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }
}
