//! Per-row z-score: each vector is centred and scaled by the mean and
//! population standard deviation of its own components.
//!
//! It needs no learned state, so fitting is trivial and nothing has to be
//! stored next to the weights. Weight files from the first generation of the
//! model were trained behind [`ElementwiseNormalizer`](super::ElementwiseNormalizer)
//! instead and are not interchangeable with weights trained here.

use crate::error::{Result, TitanicError};
use crate::features::{FeatureVector, N_FEATURES};
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use serde::{Deserialize, Serialize};

/// Serializable parameters (trivial - just the width).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RowStandardizerParams {
    pub n_features: usize,
}

/// Stateless per-row standardizer; its own fitted form.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowStandardizer;

impl RowStandardizer {
    pub fn new() -> Self {
        Self
    }
}

/// `(x - mean) / std` over the components of `row`; unchanged when `std == 0`.
pub fn standardize_row(row: &FeatureVector) -> FeatureVector {
    let n = N_FEATURES as f64;
    let mean = row.iter().sum::<f64>() / n;
    let std = (row.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n).sqrt();
    if std == 0.0 {
        return *row;
    }
    let mut out = row.to_array();
    for value in out.iter_mut() {
        *value = (*value - mean) / std;
    }
    FeatureVector::new(out)
}

impl Transformer for RowStandardizer {
    type Fitted = RowStandardizer;

    fn fit(&self, rows: &[FeatureVector]) -> Result<Self::Fitted> {
        if rows.is_empty() {
            return Err(TitanicError::EmptyData(
                "Cannot fit RowStandardizer on empty data".to_string(),
            ));
        }
        Ok(*self)
    }
}

impl FittedTransformer for RowStandardizer {
    type Params = RowStandardizerParams;

    fn transform(&self, row: &FeatureVector) -> FeatureVector {
        standardize_row(row)
    }

    fn extract_params(&self) -> Self::Params {
        RowStandardizerParams {
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
