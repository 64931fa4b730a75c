//! Standard Scaler (population-level z-score normalization).
//!
//! Column means and population standard deviations are learned once from the
//! training rows and applied identically at training and inference time:
//! ```text
//! z = (x - u) / s
//! ```
//! Columns with `s == 0` (the intercept, or any constant feature) are passed
//! through unchanged.
//!
//! # Example
//! ```ignore
//! use titanic_survival::preprocessing::{FittedTransformer, StandardScaler, Transformer};
//!
//! let fitted = StandardScaler::new().fit(&rows)?;
//! fitted.save_to_file("model/scaler.bin")?;
//! let scaled = fitted.transform(&rows[0]);
//! ```

use crate::error::{Result, TitanicError};
use crate::features::{FeatureVector, N_FEATURES};
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

/// Serializable parameters for a fitted StandardScaler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandardScalerParams {
    /// Mean of each feature.
    pub mean: Vec<f64>,
    /// Population standard deviation of each feature.
    pub std: Vec<f64>,
}

/// StandardScaler transformer (unfitted).
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardScaler;

impl StandardScaler {
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for StandardScaler {
    type Fitted = FittedStandardScaler;

    fn fit(&self, rows: &[FeatureVector]) -> Result<Self::Fitted> {
        if rows.is_empty() {
            return Err(TitanicError::EmptyData(
                "Cannot fit StandardScaler on empty data".to_string(),
            ));
        }

        let data: Vec<f64> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        let x = Array2::from_shape_vec((rows.len(), N_FEATURES), data)
            .map_err(|e| TitanicError::InvalidParameter(e.to_string()))?;

        let mean = x
            .mean_axis(Axis(0))
            .ok_or_else(|| TitanicError::EmptyData("no rows to average".to_string()))?;
        let std = x.std_axis(Axis(0), 0.0); // population std (ddof=0)

        let mut fitted = FittedStandardScaler {
            mean: [0.0; N_FEATURES],
            std: [0.0; N_FEATURES],
        };
        for i in 0..N_FEATURES {
            fitted.mean[i] = mean[i];
            fitted.std[i] = std[i];
        }
        Ok(fitted)
    }
}

/// Fitted StandardScaler ready for inference.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedStandardScaler {
    mean: [f64; N_FEATURES],
    std: [f64; N_FEATURES],
}

impl FittedStandardScaler {
    pub fn mean(&self) -> &[f64; N_FEATURES] {
        &self.mean
    }

    pub fn std(&self) -> &[f64; N_FEATURES] {
        &self.std
    }
}

impl FittedTransformer for FittedStandardScaler {
    type Params = StandardScalerParams;

    fn transform(&self, row: &FeatureVector) -> FeatureVector {
        let mut out = row.to_array();
        for (i, value) in out.iter_mut().enumerate() {
            if self.std[i] != 0.0 {
                *value = (*value - self.mean[i]) / self.std[i];
            }
        }
        FeatureVector::new(out)
    }

    fn extract_params(&self) -> Self::Params {
        StandardScalerParams {
            mean: self.mean.to_vec(),
            std: self.std.to_vec(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self> {
        let to_array = |values: Vec<f64>| -> Result<[f64; N_FEATURES]> {
            let got_features = values.len();
            values
                .try_into()
                .map_err(|_| TitanicError::FeatureMismatch {
                    expected_features: N_FEATURES,
                    got_features,
                })
        };
        Ok(Self {
            mean: to_array(params.mean)?,
            std: to_array(params.std)?,
        })
    }
}
