//! Element-wise pseudo z-score used by the first generation of weight files.
//!
//! Each component is treated as its own population of size one padded to the
//! vector width: `mean = x / 10`, `std = sqrt((x - mean)^2 / 10)`. The result
//! collapses every nonzero component to `±sqrt(10)` and leaves zeros alone.
//! It carries no information beyond the sign pattern, but weights trained
//! behind it only make sense behind it again.

use crate::error::{Result, TitanicError};
use crate::features::{FeatureVector, N_FEATURES};
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElementwiseNormalizerParams {
    pub n_features: usize,
}

/// Stateless element-wise normalizer; its own fitted form.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementwiseNormalizer;

impl ElementwiseNormalizer {
    pub fn new() -> Self {
        Self
    }
}

/// Apply the legacy formula to every component of `row`.
pub fn normalize_elementwise(row: &FeatureVector) -> FeatureVector {
    let n = N_FEATURES as f64;
    let mut out = row.to_array();
    for value in out.iter_mut() {
        let mean = *value / n;
        let std = ((*value - mean) * (*value - mean) / n).sqrt();
        if std != 0.0 {
            *value = (*value - mean) / std;
        }
    }
    FeatureVector::new(out)
}

impl Transformer for ElementwiseNormalizer {
    type Fitted = ElementwiseNormalizer;

    fn fit(&self, rows: &[FeatureVector]) -> Result<Self::Fitted> {
        if rows.is_empty() {
            return Err(TitanicError::EmptyData(
                "Cannot fit ElementwiseNormalizer on empty data".to_string(),
            ));
        }
        Ok(*self)
    }
}

impl FittedTransformer for ElementwiseNormalizer {
    type Params = ElementwiseNormalizerParams;

    fn transform(&self, row: &FeatureVector) -> FeatureVector {
        normalize_elementwise(row)
    }

    fn extract_params(&self) -> Self::Params {
        ElementwiseNormalizerParams {
            n_features: N_FEATURES,
        }
    }

    fn from_params(params: Self::Params) -> Result<Self> {
        if params.n_features != N_FEATURES {
            return Err(TitanicError::FeatureMismatch {
                expected_features: N_FEATURES,
                got_features: params.n_features,
            });
        }
        Ok(Self)
    }
}
