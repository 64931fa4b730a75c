use crate::error::{Result, TitanicError};
use crate::features::{FeatureVector, N_FEATURES};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// One learned coefficient per feature position, in [`FeatureVector`] order.
///
/// Produced by the trainer or loaded through
/// [`WeightStore`](crate::serialization::WeightStore); read-only afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightVector([f64; N_FEATURES]);

impl WeightVector {
    pub fn new(values: [f64; N_FEATURES]) -> Self {
        Self(values)
    }

    pub fn zeros() -> Self {
        Self([0.0; N_FEATURES])
    }

    /// Linear score `w · x`.
    pub fn dot(&self, features: &FeatureVector) -> f64 {
        self.0
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_array(self) -> [f64; N_FEATURES] {
        self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl Index<usize> for WeightVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl From<[f64; N_FEATURES]> for WeightVector {
    fn from(values: [f64; N_FEATURES]) -> Self {
        Self(values)
    }
}

impl TryFrom<Vec<f64>> for WeightVector {
    type Error = TitanicError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        let got_features = values.len();
        let array: [f64; N_FEATURES] =
            values
                .try_into()
                .map_err(|_| TitanicError::FeatureMismatch {
                    expected_features: N_FEATURES,
                    got_features,
                })?;
        Ok(Self(array))
    }
}
