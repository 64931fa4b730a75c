//! Binary logistic regression without a separate bias term.
//!
//! The intercept is feature 0 of every [`FeatureVector`], so its weight plays
//! the role of the bias.

use crate::features::{FeatureVector, N_FEATURES};
use crate::model::{Fitted, InferenceModel, TrainableModel, Unfitted, WeightVector};
use ndarray::{Array1, Array2};
use std::marker::PhantomData;

/// Logistic function `1 / (1 + e^-z)`.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// A logistic regression model with state encoded at the type level.
///
/// This enforces, at compile time, that `predict()` cannot be called on an
/// untrained model.
#[derive(Clone, Debug)]
pub struct LogisticModel<S> {
    weights: Array1<f64>,
    _state: PhantomData<S>,
}

/// Alias for an **unfitted** model, the starting point for [`Trainer`](crate::trainer::Trainer).
pub type LogisticRegression = LogisticModel<Unfitted>;

impl LogisticModel<Unfitted> {
    /// Creates a model with all weights set to zero.
    pub fn new() -> Self {
        Self {
            weights: Array1::zeros(N_FEATURES),
            _state: PhantomData,
        }
    }

    /// Warm start from explicit weights.
    pub fn from_weights(weights: &WeightVector) -> Self {
        Self {
            weights: Array1::from(weights.as_slice().to_vec()),
            _state: PhantomData,
        }
    }
}

impl Default for LogisticModel<Unfitted> {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward pass: logits `X · w`.
/// Backward pass: `∇w = Xᵀ · grad`, where `grad` is the loss gradient w.r.t. the logits.
impl TrainableModel for LogisticModel<Unfitted> {
    type Input = Array2<f64>;
    type Prediction = Array1<f64>;
    type Params = Array1<f64>;
    type Gradients = Array1<f64>;
    type Output = LogisticModel<Fitted>;

    fn forward(&self, x: &Self::Input) -> Self::Prediction {
        x.dot(&self.weights)
    }

    fn backward(&self, x: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients {
        x.t().dot(grad_output)
    }

    fn params(&self) -> &Self::Params {
        &self.weights
    }

    fn update_params(&mut self, params: &Self::Params) {
        self.weights = params.clone();
    }

    fn into_fitted(self) -> LogisticModel<Fitted> {
        let mut values = [0.0; N_FEATURES];
        for (dst, src) in values.iter_mut().zip(self.weights.iter()) {
            *dst = *src;
        }
        LogisticModel::<Fitted>::new(WeightVector::new(values))
    }
}

impl LogisticModel<Fitted> {
    pub fn new(weights: WeightVector) -> Self {
        Self {
            weights: Array1::from(weights.as_slice().to_vec()),
            _state: PhantomData,
        }
    }

    pub fn weights(&self) -> WeightVector {
        let mut values = [0.0; N_FEATURES];
        for (dst, src) in values.iter_mut().zip(self.weights.iter()) {
            *dst = *src;
        }
        WeightVector::new(values)
    }

    /// Linear score `w · x` for an already-normalized vector.
    pub fn logit(&self, features: &FeatureVector) -> f64 {
        self.weights
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum()
    }

    pub fn predict_proba(&self, features: &FeatureVector) -> f64 {
        sigmoid(self.logit(features))
    }
}

/// Decision rule: survived iff the probability is strictly above `0.5`.
impl InferenceModel for LogisticModel<Fitted> {
    type Input = FeatureVector;
    type Output = bool;

    fn predict(&self, input: &FeatureVector) -> bool {
        self.predict_proba(input) > 0.5
    }
}
