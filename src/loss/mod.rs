use ndarray::Array1;

/// A differentiable loss over a batch of logits.
///
/// Implementors must define:
/// - How to compute the scalar loss value (for logging/metrics).
/// - How to compute the gradient of the loss w.r.t. the logits.
///
/// The gradient is passed to the model's `backward()` method.
pub trait Loss {
    /// Mean loss over the batch.
    fn loss(&self, logits: &Array1<f64>, targets: &Array1<f64>) -> f64;

    /// ∂L/∂logits, already divided by the batch size.
    fn grad_wrt_prediction(&self, logits: &Array1<f64>, targets: &Array1<f64>) -> Array1<f64>;
}

/// Binary Cross-Entropy loss with logits input (the logistic-regression
/// negative log-likelihood).
///
/// Computes: `L = -(t * log(σ(z)) + (1-t) * log(1 - σ(z)))`
/// using the stable formulation: `max(z,0) - z*t + log(1 + exp(-|z|))`
///
/// Gradient w.r.t. logits: `∂L/∂z = (σ(z) - t) / n`
#[derive(Clone, Copy, Debug, Default)]
pub struct BCEWithLogitsLoss;

impl Loss for BCEWithLogitsLoss {
    fn loss(&self, logits: &Array1<f64>, targets: &Array1<f64>) -> f64 {
        let n = logits.len();
        if n == 0 {
            return 0.0;
        }
        let total: f64 = logits
            .iter()
            .zip(targets.iter())
            .map(|(&z, &t)| z.max(0.0) - z * t + (-z.abs()).exp().ln_1p())
            .sum();
        total / n as f64
    }

    fn grad_wrt_prediction(&self, logits: &Array1<f64>, targets: &Array1<f64>) -> Array1<f64> {
        let n = logits.len().max(1) as f64;
        let probs = logits.mapv(crate::model::sigmoid);
        (probs - targets) / n
    }
}
