//! Feature normalization applied between extraction and the model.
//!
//! Three strategies are available, selected with [`NormalizationMode`]:
//!
//! - [`NormalizationMode::PerRow`]: z-score over the ten components of each
//!   vector ([`RowStandardizer`]). Stateless, so a weight file alone is enough
//!   for inference. This is the default.
//! - [`NormalizationMode::Standard`]: per-column z-score with statistics
//!   learned from the training set ([`StandardScaler`]). The fitted scaler
//!   must be persisted alongside the weights.
//! - [`NormalizationMode::Elementwise`]: the degenerate per-component formula
//!   ([`ElementwiseNormalizer`]) that first-generation weight files were
//!   trained with. Only useful to run those files unchanged.
//!
//! All follow the same rule: a position whose standard deviation is zero is
//! left unchanged.

pub mod scaling;
pub mod traits;

pub use scaling::{
    normalize_elementwise, standardize_row, ElementwiseNormalizer, ElementwiseNormalizerParams,
    FittedStandardScaler, RowStandardizer, RowStandardizerParams, StandardScaler,
    StandardScalerParams,
};
pub use traits::{FittedTransformer, Transformer};

use crate::error::{Result, TitanicError};
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which normalization strategy to fit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    #[default]
    PerRow,
    Standard,
    Elementwise,
}

impl NormalizationMode {
    /// Fit the chosen normalizer on raw (unnormalized) training rows.
    pub fn fit(self, rows: &[FeatureVector]) -> Result<FittedNormalizer> {
        match self {
            NormalizationMode::PerRow => RowStandardizer::new().fit(rows).map(FittedNormalizer::PerRow),
            NormalizationMode::Standard => {
                StandardScaler::new().fit(rows).map(FittedNormalizer::Standard)
            }
            NormalizationMode::Elementwise => ElementwiseNormalizer::new()
                .fit(rows)
                .map(FittedNormalizer::Elementwise),
        }
    }
}

impl fmt::Display for NormalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizationMode::PerRow => write!(f, "per_row"),
            NormalizationMode::Standard => write!(f, "standard"),
            NormalizationMode::Elementwise => write!(f, "elementwise"),
        }
    }
}

impl FromStr for NormalizationMode {
    type Err = TitanicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "per_row" | "row" => Ok(NormalizationMode::PerRow),
            "standard" | "column" => Ok(NormalizationMode::Standard),
            "elementwise" | "legacy" => Ok(NormalizationMode::Elementwise),
            other => Err(TitanicError::InvalidParameter(format!(
                "unknown normalization mode {:?} (expected per_row, standard or elementwise)",
                other
            ))),
        }
    }
}

/// Serializable form of a [`FittedNormalizer`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum NormalizerParams {
    PerRow(RowStandardizerParams),
    Standard(StandardScalerParams),
    Elementwise(ElementwiseNormalizerParams),
}

/// A fitted normalizer of either kind.
#[derive(Clone, Debug, PartialEq)]
pub enum FittedNormalizer {
    PerRow(RowStandardizer),
    Standard(FittedStandardScaler),
    Elementwise(ElementwiseNormalizer),
}

impl FittedNormalizer {
    pub fn per_row() -> Self {
        FittedNormalizer::PerRow(RowStandardizer::new())
    }

    pub fn elementwise() -> Self {
        FittedNormalizer::Elementwise(ElementwiseNormalizer::new())
    }

    pub fn mode(&self) -> NormalizationMode {
        match self {
            FittedNormalizer::PerRow(_) => NormalizationMode::PerRow,
            FittedNormalizer::Standard(_) => NormalizationMode::Standard,
            FittedNormalizer::Elementwise(_) => NormalizationMode::Elementwise,
        }
    }
}

impl Default for FittedNormalizer {
    fn default() -> Self {
        Self::per_row()
    }
}

impl FittedTransformer for FittedNormalizer {
    type Params = NormalizerParams;

    fn transform(&self, row: &FeatureVector) -> FeatureVector {
        match self {
            FittedNormalizer::PerRow(n) => n.transform(row),
            FittedNormalizer::Standard(s) => s.transform(row),
            FittedNormalizer::Elementwise(e) => e.transform(row),
        }
    }

    fn extract_params(&self) -> Self::Params {
        match self {
            FittedNormalizer::PerRow(n) => NormalizerParams::PerRow(n.extract_params()),
            FittedNormalizer::Standard(s) => NormalizerParams::Standard(s.extract_params()),
            FittedNormalizer::Elementwise(e) => NormalizerParams::Elementwise(e.extract_params()),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self> {
        match params {
            NormalizerParams::PerRow(p) => RowStandardizer::from_params(p).map(FittedNormalizer::PerRow),
            NormalizerParams::Standard(p) => {
                FittedStandardScaler::from_params(p).map(FittedNormalizer::Standard)
            }
            NormalizerParams::Elementwise(p) => {
                ElementwiseNormalizer::from_params(p).map(FittedNormalizer::Elementwise)
            }
        }
    }
}
