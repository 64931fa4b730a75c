// trainer/mod.rs
use crate::dataset::{DesignMatrix, Passenger};
use crate::error::{Result, TitanicError};
use crate::features::FeatureExtractor;
use crate::loss::{BCEWithLogitsLoss, Loss};
use crate::model::{
    Fitted, LogisticModel, LogisticRegression, Predictor, TrainableModel, WeightVector,
};
use crate::optimizer::{GradientDescent, Optimizer};
use crate::preprocessing::{FittedNormalizer, FittedTransformer, NormalizationMode};
use ndarray::Array1;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Outcome of [`Trainer::fit`].
#[derive(Clone, Debug)]
pub struct FitResult {
    /// Trained weights plus the normalizer they were trained behind.
    pub predictor: Predictor,
    /// Mean training loss before every update, followed by the loss of the
    /// final weights. `loss_history[0]` is always the zero-weight loss.
    pub loss_history: Vec<f64>,
    /// Number of completed gradient-descent iterations.
    pub iterations: usize,
}

impl FitResult {
    pub fn weights(&self) -> WeightVector {
        self.predictor.weights()
    }

    pub fn initial_loss(&self) -> Option<f64> {
        self.loss_history.first().copied()
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.loss_history.last().copied()
    }
}

/// Batch gradient descent for logistic regression.
///
/// Weights start at zero and are updated once per iteration with the
/// gradient averaged over every training row. There is no convergence check:
/// the loop runs `max_iterations` times unless the optional deadline, checked
/// between iterations, expires first.
///
/// Built via [`TrainerBuilder`]; immutable afterwards and reusable.
pub struct Trainer<L = BCEWithLogitsLoss, O = GradientDescent>
where
    L: Loss,
    O: Optimizer<Array1<f64>>,
{
    pub(crate) max_iterations: usize,
    pub(crate) verbose: bool,
    pub(crate) log_every: usize,
    pub(crate) normalization: NormalizationMode,
    pub(crate) max_duration: Option<Duration>,
    pub(crate) loss_fn: L,
    pub(crate) optimizer: O,
}

/// Fluent builder for constructing a `Trainer` with custom hyperparameters.
///
/// Defaults:
/// - `max_iterations`: 1000
/// - `verbose`: true
/// - `log_every`: 100
/// - `normalization`: [`NormalizationMode::PerRow`]
/// - `max_duration`: none
pub struct TrainerBuilder<L, O>
where
    L: Loss,
    O: Optimizer<Array1<f64>>,
{
    max_iterations: usize,
    verbose: bool,
    log_every: usize,
    normalization: NormalizationMode,
    max_duration: Option<Duration>,
    loss_fn: L,
    optimizer: O,
}

impl<L, O> TrainerBuilder<L, O>
where
    L: Loss,
    O: Optimizer<Array1<f64>>,
{
    pub fn new(loss_fn: L, optimizer: O) -> Self {
        Self {
            max_iterations: 1000,
            verbose: true,
            log_every: 100,
            normalization: NormalizationMode::default(),
            max_duration: None,
            loss_fn,
            optimizer,
        }
    }

    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// When `false`, suppresses the periodic loss log lines.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn log_every(mut self, every: usize) -> Self {
        self.log_every = every;
        self
    }

    pub fn normalization(mut self, mode: NormalizationMode) -> Self {
        self.normalization = mode;
        self
    }

    /// Wall-clock budget, checked between iterations only.
    pub fn max_duration(mut self, limit: Duration) -> Self {
        self.max_duration = Some(limit);
        self
    }

    pub fn build(self) -> Trainer<L, O> {
        Trainer {
            max_iterations: self.max_iterations,
            verbose: self.verbose,
            log_every: self.log_every,
            normalization: self.normalization,
            max_duration: self.max_duration,
            loss_fn: self.loss_fn,
            optimizer: self.optimizer,
        }
    }
}

impl Trainer<BCEWithLogitsLoss, GradientDescent> {
    /// Builder preloaded with the logistic loss and plain gradient descent.
    pub fn logistic(learning_rate: f64) -> TrainerBuilder<BCEWithLogitsLoss, GradientDescent> {
        TrainerBuilder::new(BCEWithLogitsLoss, GradientDescent::new(learning_rate))
    }
}

impl<L, O> Trainer<L, O>
where
    L: Loss,
    O: Optimizer<Array1<f64>>,
{
    /// Convenience constructor that starts the builder pattern.
    pub fn builder(loss_fn: L, optimizer: O) -> TrainerBuilder<L, O> {
        TrainerBuilder::new(loss_fn, optimizer)
    }

    /// Train on labeled passengers.
    ///
    /// Extracts every record, fits the configured normalizer on the raw
    /// vectors, normalizes them, and runs gradient descent.
    ///
    /// # Errors
    /// - [`TitanicError::EmptyData`] if `passengers` is empty
    /// - [`TitanicError::MissingLabel`] if any record has no label
    /// - [`TitanicError::InvalidParameter`] for a non-finite or non-positive learning rate
    pub fn fit(&self, passengers: &[Passenger]) -> Result<FitResult> {
        if passengers.is_empty() {
            return Err(TitanicError::EmptyData("training set is empty".into()));
        }

        let labels = passengers
            .iter()
            .map(|p| {
                p.target().ok_or(TitanicError::MissingLabel {
                    passenger_id: p.passenger_id,
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        let raw = FeatureExtractor::new().extract_all(passengers);
        let normalizer: FittedNormalizer = self.normalization.fit(&raw)?;
        let rows = normalizer.transform_all(&raw);
        let data = DesignMatrix::from_rows(&rows, &labels)?;

        let (model, loss_history, iterations) = self.fit_matrix(&data)?;
        Ok(FitResult {
            predictor: Predictor::from_model(model, normalizer),
            loss_history,
            iterations,
        })
    }

    /// Run gradient descent on an already-normalized design matrix.
    ///
    /// Returns the fitted model, the loss history (see [`FitResult::loss_history`])
    /// and the number of completed iterations.
    pub fn fit_matrix(
        &self,
        data: &DesignMatrix,
    ) -> Result<(LogisticModel<Fitted>, Vec<f64>, usize)> {
        let lr = self.optimizer.learning_rate();
        if !lr.is_finite() || lr <= 0.0 {
            return Err(TitanicError::InvalidParameter(format!(
                "learning rate must be positive and finite, got {}",
                lr
            )));
        }

        let x = data.features();
        let y = data.labels();
        let mut model = LogisticRegression::new();
        let mut loss_history = Vec::new();
        let log_every = self.log_every.max(1);

        info!(
            rows = data.n_rows(),
            iterations = self.max_iterations,
            learning_rate = lr,
            normalization = %self.normalization,
            "training started"
        );

        let started = Instant::now();
        let mut completed = 0;
        for iteration in 0..self.max_iterations {
            if let Some(limit) = self.max_duration {
                if started.elapsed() >= limit {
                    warn!(
                        completed,
                        budget = self.max_iterations,
                        "training deadline reached, stopping early"
                    );
                    break;
                }
            }

            let logits = model.forward(x);
            let loss = self.loss_fn.loss(&logits, y);
            loss_history.push(loss);

            let grad_logits = self.loss_fn.grad_wrt_prediction(&logits, y);
            let grads = model.backward(x, &grad_logits);
            let new_params = self.optimizer.step(model.params(), &grads);
            model.update_params(&new_params);
            completed += 1;

            if self.verbose && iteration % log_every == 0 {
                info!(iteration, loss, "training progress");
            } else {
                debug!(iteration, loss, "iteration complete");
            }
        }

        let final_loss = self.loss_fn.loss(&model.forward(x), y);
        loss_history.push(final_loss);
        info!(
            iterations = completed,
            final_loss,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "training finished"
        );

        Ok((model.into_fitted(), loss_history, completed))
    }
}
