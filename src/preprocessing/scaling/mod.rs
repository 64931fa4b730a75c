//! Feature scaling transformers.

pub mod elementwise;
pub mod row;
pub mod standard;

pub use elementwise::{normalize_elementwise, ElementwiseNormalizer, ElementwiseNormalizerParams};
pub use row::{standardize_row, RowStandardizer, RowStandardizerParams};
pub use standard::{FittedStandardScaler, StandardScaler, StandardScalerParams};
