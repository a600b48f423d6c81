use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("cannot fit a scaler on an empty design matrix")]
    EmptyMatrix,
    #[error("expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

// ---------------------------------------------------------------------------
// StandardScaler – per-feature z-score transform
// ---------------------------------------------------------------------------

/// Per-feature standardization (zero mean, unit variance), fitted once on the
/// full design matrix. The classifier is only ever trained on transformed
/// inputs, so inference must apply the identical transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Array1<f64>,
    std: Array1<f64>,
}

impl StandardScaler {
    /// Fit per-column mean and (population) standard deviation.
    pub fn fit(x: &Array2<f64>) -> Result<Self, ScaleError> {
        if x.nrows() == 0 {
            return Err(ScaleError::EmptyMatrix);
        }
        let mean = x.mean_axis(Axis(0)).ok_or(ScaleError::EmptyMatrix)?;
        let std = x.std_axis(Axis(0), 0.0);
        Ok(StandardScaler { mean, std })
    }

    /// Number of features this scaler was fitted on.
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Transform a whole design matrix.
    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, ScaleError> {
        self.check_len(x.ncols())?;
        let mut out = x.to_owned();
        for (j, mut column) in out.axis_iter_mut(Axis(1)).enumerate() {
            let (mean, std) = (self.mean[j], self.std[j]);
            column.mapv_inplace(|v| scale_one(v, mean, std));
        }
        Ok(out)
    }

    /// Transform one raw input row into z-scores.
    pub fn transform_input(&self, raw: &[f64]) -> Result<Vec<f64>, ScaleError> {
        self.check_len(raw.len())?;
        Ok(raw
            .iter()
            .enumerate()
            .map(|(j, &v)| scale_one(v, self.mean[j], self.std[j]))
            .collect())
    }

    /// Map z-scores back to raw feature values.
    pub fn inverse_transform_input(&self, scaled: &[f64]) -> Result<Vec<f64>, ScaleError> {
        self.check_len(scaled.len())?;
        Ok(scaled
            .iter()
            .enumerate()
            .map(|(j, &z)| unscale_one(z, self.mean[j], self.std[j]))
            .collect())
    }

    fn check_len(&self, actual: usize) -> Result<(), ScaleError> {
        if actual != self.n_features() {
            return Err(ScaleError::DimensionMismatch {
                expected: self.n_features(),
                actual,
            });
        }
        Ok(())
    }
}

/// Zero-variance features scale to 0 rather than dividing by zero.
fn scale_one(value: f64, mean: f64, std: f64) -> f64 {
    if std == 0.0 {
        0.0
    } else {
        (value - mean) / std
    }
}

fn unscale_one(z: f64, mean: f64, std: f64) -> f64 {
    if std == 0.0 {
        mean
    } else {
        z * std + mean
    }
}
