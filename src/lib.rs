//! # titanic-survival
//!
//! Binary logistic regression that predicts whether a Titanic passenger
//! survived, trained with full-batch gradient descent.
//!
//! ## Core Design Principles
//!
//! - **Stateful Type Safety**: models carry their training state in the type
//!   (`Unfitted` vs `Fitted`), so an untrained model cannot predict.
//! - **Training/Inference Separation**: a fitted model holds only its weights;
//!   the loop lives in [`trainer`], driven by a [`loss::Loss`] and an
//!   [`optimizer::Optimizer`].
//! - **Immutable Predictors**: a [`model::Predictor`] never mutates its
//!   weights, so it can be shared freely across threads.
//!
//! ## Quick Start
//!
//! ```no_run
//! use titanic_survival::dataset::load_passengers;
//! use titanic_survival::serialization::WeightStore;
//! use titanic_survival::trainer::Trainer;
//!
//! # fn main() -> titanic_survival::Result<()> {
//! let passengers = load_passengers("data/train.csv")?;
//!
//! let trainer = Trainer::logistic(0.01).max_iterations(1000).build();
//! let result = trainer.fit(&passengers)?;
//! WeightStore::save_to_file(&result.weights(), "model/weights.csv")?;
//!
//! for (id, survived) in result.predictor.predict_batch(&passengers) {
//!     println!("{id}: {survived}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - `dataset`: passenger records, lenient CSV loading, the design matrix
//! - `features`: the ten-component feature vector and the honorific table
//! - `preprocessing`: per-row and per-column standardization
//! - `model`: type-state logistic model, weights, record-level predictor
//! - `loss` / `optimizer` / `trainer`: gradient-descent training
//! - `serialization`: weight file format and binary parameter persistence
//! - `metrics`: accuracy, precision, recall, F1
//! - `config`: JSON training configuration

pub mod config;
pub mod dataset;
pub mod error;
pub mod features;
pub mod loss;
pub mod metrics;
pub mod model;
pub mod optimizer;
pub mod preprocessing;
pub mod serialization;
pub mod trainer;

pub use config::TrainingConfig;
pub use dataset::{Passenger, Port};
pub use error::{Result, TitanicError};
pub use features::{FeatureExtractor, FeatureVector, N_FEATURES};
pub use metrics::{accuracy, ClassificationMetrics};
pub use model::{Predictor, WeightVector};
pub use preprocessing::{FittedNormalizer, NormalizationMode};
pub use serialization::WeightStore;
pub use trainer::{FitResult, Trainer, TrainerBuilder};
