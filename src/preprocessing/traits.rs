//! Core traits for feature normalizers.
//!
//! - [`Transformer`]: unfitted, learns statistics from the training rows.
//! - [`FittedTransformer`]: holds the learned statistics, normalizes single
//!   vectors, and can be persisted.

use crate::error::Result;
use crate::features::FeatureVector;
use crate::serialization::SerializableParams;
use std::path::Path;

/// Trait for unfitted transformers.
pub trait Transformer: Clone {
    /// The fitted transformer type ready for inference.
    type Fitted: FittedTransformer;

    /// Learn parameters from the training rows.
    ///
    /// # Errors
    /// Returns [`EmptyData`](crate::error::TitanicError::EmptyData) when
    /// `rows` is empty.
    fn fit(&self, rows: &[FeatureVector]) -> Result<Self::Fitted>;

    /// Fit and transform the same rows in one step.
    fn fit_transform(&self, rows: &[FeatureVector]) -> Result<Vec<FeatureVector>> {
        let fitted = self.fit(rows)?;
        Ok(fitted.transform_all(rows))
    }
}

/// Trait for fitted transformers ready for inference.
///
/// `extract_params()` followed by `from_params()` is a round-trip.
pub trait FittedTransformer: Clone {
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;

    /// Normalize one feature vector.
    fn transform(&self, row: &FeatureVector) -> FeatureVector;

    fn transform_all(&self, rows: &[FeatureVector]) -> Vec<FeatureVector> {
        rows.iter().map(|row| self.transform(row)).collect()
    }

    fn extract_params(&self) -> Self::Params;

    fn from_params(params: Self::Params) -> Result<Self>
    where
        Self: Sized;

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = self.extract_params().to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(path)?;
        let params = Self::Params::from_bytes(&bytes)?;
        Self::from_params(params)
    }
}
