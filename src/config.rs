//! Training configuration loaded from JSON files.

use crate::error::{Result, TitanicError};
use crate::loss::BCEWithLogitsLoss;
use crate::optimizer::GradientDescent;
use crate::preprocessing::NormalizationMode;
use crate::trainer::Trainer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Hyperparameters for a training run.
///
/// Every field is optional in the JSON form; missing fields take the
/// defaults below.
///
/// ```json
/// { "learning_rate": 0.05, "max_iterations": 2000, "normalization": "standard" }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Gradient-descent step size (default 0.01)
    pub learning_rate: f64,
    /// Number of full-batch iterations (default 1000)
    pub max_iterations: usize,
    /// Feature normalization strategy (default `per_row`)
    pub normalization: NormalizationMode,
    /// Log the loss every this many iterations (default 100)
    pub log_every: usize,
    /// Emit periodic progress logs (default true)
    pub verbose: bool,
    /// Optional wall-clock budget in seconds
    pub max_duration_secs: Option<f64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            max_iterations: 1000,
            normalization: NormalizationMode::PerRow,
            log_every: 100,
            verbose: true,
            max_duration_secs: None,
        }
    }
}

impl TrainingConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(TitanicError::InvalidParameter(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if self.log_every == 0 {
            return Err(TitanicError::InvalidParameter(
                "log_every must be at least 1".into(),
            ));
        }
        if let Some(secs) = self.max_duration_secs {
            if !secs.is_finite() || secs < 0.0 {
                return Err(TitanicError::InvalidParameter(format!(
                    "max_duration_secs must be non-negative, got {}",
                    secs
                )));
            }
        }
        Ok(())
    }

    /// Validated trainer with logistic loss and plain gradient descent.
    pub fn trainer(&self) -> Result<Trainer<BCEWithLogitsLoss, GradientDescent>> {
        self.validate()?;
        let mut builder = Trainer::logistic(self.learning_rate)
            .max_iterations(self.max_iterations)
            .normalization(self.normalization)
            .log_every(self.log_every)
            .verbose(self.verbose);
        if let Some(secs) = self.max_duration_secs {
            builder = builder.max_duration(Duration::from_secs_f64(secs));
        }
        Ok(builder.build())
    }
}
