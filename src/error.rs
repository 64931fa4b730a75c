//! Error types for training, inference, and persistence.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TitanicError>;

/// Error type for every fallible operation in the crate.
///
/// Soft problems (unknown honorifics, unparsable numeric fields) never reach
/// this type: they are logged and replaced by `0.0` during loading and
/// feature extraction.
#[derive(Debug, Error)]
pub enum TitanicError {
    /// Empty data provided where non-empty was required.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A training record carries no survival label.
    #[error("Missing label for passenger {passenger_id}")]
    MissingLabel { passenger_id: u32 },

    /// Feature dimension mismatch (e.g. a persisted weight vector of the wrong length).
    #[error("Feature mismatch: expected {expected_features} features, got {got_features}")]
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },

    /// Invalid hyperparameter value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input file does not have the expected layout or contents.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader/writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<bincode::Error> for TitanicError {
    fn from(err: bincode::Error) -> Self {
        TitanicError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_empty_data() {
        let err = TitanicError::EmptyData("no rows".to_string());
        assert!(err.to_string().contains("Empty data"));
    }

    #[test]
    fn test_error_display_missing_label() {
        let err = TitanicError::MissingLabel { passenger_id: 42 };
        assert_eq!(err.to_string(), "Missing label for passenger 42");
    }

    #[test]
    fn test_error_display_feature_mismatch() {
        let err = TitanicError::FeatureMismatch {
            expected_features: 10,
            got_features: 9,
        };
        assert!(err.to_string().contains("expected 10 features, got 9"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: TitanicError = io_err.into();
        assert!(matches!(err, TitanicError::Io(_)));
    }

    #[test]
    fn test_error_from_bincode_error() {
        let bad_bytes: &[u8] = &[0xff, 0xff, 0xff, 0xff];
        let bincode_result: std::result::Result<String, bincode::Error> =
            bincode::deserialize(bad_bytes);
        if let Err(e) = bincode_result {
            let err: TitanicError = e.into();
            assert!(matches!(err, TitanicError::Serialization(_)));
        }
    }

    #[test]
    fn test_error_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: TitanicError = json_err.into();
        assert!(matches!(err, TitanicError::Config(_)));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = TitanicError::InvalidParameter("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
