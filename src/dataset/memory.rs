use crate::error::{Result, TitanicError};
use crate::features::{FeatureVector, N_FEATURES};
use ndarray::{Array1, Array2};

/// Normalized feature rows plus their labels, ready for gradient descent.
#[derive(Clone, Debug)]
pub struct DesignMatrix {
    x: Array2<f64>,
    y: Array1<f64>,
}

impl DesignMatrix {
    pub fn new(x: Array2<f64>, y: Array1<f64>) -> Result<Self> {
        if x.nrows() != y.len() {
            return Err(TitanicError::InvalidParameter(format!(
                "x has {} rows but y has {} labels",
                x.nrows(),
                y.len()
            )));
        }
        if x.nrows() == 0 {
            return Err(TitanicError::EmptyData("design matrix has no rows".into()));
        }
        if x.ncols() != N_FEATURES {
            return Err(TitanicError::FeatureMismatch {
                expected_features: N_FEATURES,
                got_features: x.ncols(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn from_rows(rows: &[FeatureVector], labels: &[f64]) -> Result<Self> {
        let data: Vec<f64> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        let x = Array2::from_shape_vec((rows.len(), N_FEATURES), data)
            .map_err(|e| TitanicError::InvalidParameter(e.to_string()))?;
        Self::new(x, Array1::from(labels.to_vec()))
    }

    pub fn features(&self) -> &Array2<f64> {
        &self.x
    }

    pub fn labels(&self) -> &Array1<f64> {
        &self.y
    }

    pub fn n_rows(&self) -> usize {
        self.x.nrows()
    }
}
