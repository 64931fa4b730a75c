//! Logistic regression with the training state encoded in the type.
//!
//! - [`LogisticModel<Unfitted>`]: trainable: forward/backward passes over a design matrix.
//! - [`LogisticModel<Fitted>`]: inference only, holds a [`WeightVector`].
//! - [`Predictor`]: extraction + normalization + fitted model, record in, label out.

pub mod logistic;
pub mod predictor;
pub mod state;
pub mod weights;

pub use logistic::{sigmoid, LogisticModel, LogisticRegression};
pub use predictor::Predictor;
pub use state::{Fitted, Unfitted};
pub use weights::WeightVector;

/// Training-side interface of a model.
pub trait TrainableModel {
    type Input;
    type Prediction;
    type Params;
    type Gradients;
    type Output;

    fn forward(&self, input: &Self::Input) -> Self::Prediction;
    fn backward(&self, input: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients;
    fn params(&self) -> &Self::Params;
    fn update_params(&mut self, new_params: &Self::Params);

    fn into_fitted(self) -> Self::Output;
}

/// Inference-side interface of a trained model.
pub trait InferenceModel {
    type Input;
    type Output;

    fn predict(&self, input: &Self::Input) -> Self::Output;

    fn predict_batch(&self, inputs: &[Self::Input]) -> Vec<Self::Output> {
        inputs.iter().map(|x| self.predict(x)).collect()
    }
}
