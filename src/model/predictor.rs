//! Record-level inference: extraction, normalization, and the fitted model
//! bundled behind one immutable value.

use crate::dataset::Passenger;
use crate::features::{FeatureExtractor, FeatureVector};
use crate::model::{Fitted, InferenceModel, LogisticModel, WeightVector};
use crate::preprocessing::{FittedNormalizer, FittedTransformer};

/// Turns raw passengers into survival decisions.
///
/// Holds the weights read-only; nothing is shared or mutated between calls.
#[derive(Clone, Debug)]
pub struct Predictor {
    extractor: FeatureExtractor,
    normalizer: FittedNormalizer,
    model: LogisticModel<Fitted>,
}

impl Predictor {
    pub fn new(weights: WeightVector, normalizer: FittedNormalizer) -> Self {
        Self::from_model(LogisticModel::<Fitted>::new(weights), normalizer)
    }

    pub fn from_model(model: LogisticModel<Fitted>, normalizer: FittedNormalizer) -> Self {
        Self {
            extractor: FeatureExtractor::new(),
            normalizer,
            model,
        }
    }

    pub fn weights(&self) -> WeightVector {
        self.model.weights()
    }

    pub fn normalizer(&self) -> &FittedNormalizer {
        &self.normalizer
    }

    /// Normalized feature vector exactly as the model sees it.
    pub fn features(&self, passenger: &Passenger) -> FeatureVector {
        self.normalizer.transform(&self.extractor.extract(passenger))
    }

    /// Survival probability in `(0, 1)`.
    pub fn predict_proba(&self, passenger: &Passenger) -> f64 {
        self.model.predict_proba(&self.features(passenger))
    }

    /// `true` iff the survival probability is strictly above `0.5`.
    pub fn predict(&self, passenger: &Passenger) -> bool {
        self.model.predict(&self.features(passenger))
    }

    /// `(passenger_id, survived)` for every record, in input order.
    pub fn predict_batch(&self, passengers: &[Passenger]) -> Vec<(u32, bool)> {
        passengers
            .iter()
            .map(|p| (p.passenger_id, self.predict(p)))
            .collect()
    }
}
