use std::collections::BTreeMap;

use thiserror::Error;

use crate::data::features;
use crate::data::model::Diagnosis;
use crate::model::classifier::{ClassProbabilities, LogisticModel};
use crate::model::scaler::{ScaleError, StandardScaler};

// ---------------------------------------------------------------------------
// Inference path: raw input → scale → classify
// ---------------------------------------------------------------------------

/// Raw (unscaled) feature values keyed by canonical feature name. Created per
/// interaction and never persisted.
pub type UserInput = BTreeMap<String, f64>;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("input is missing required feature '{0}'")]
    MissingFeature(String),
    #[error(transparent)]
    Scale(#[from] ScaleError),
}

/// The predictor's output: a discrete class plus both class probabilities.
#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    pub diagnosis: Diagnosis,
    pub probabilities: ClassProbabilities,
}

/// The two fitted artifacts, ready for inference.
#[derive(Debug, Clone)]
pub struct Predictor {
    pub scaler: StandardScaler,
    pub model: LogisticModel,
}

impl Predictor {
    /// Scale the input with the fitted scaler and run the classifier.
    /// Every one of the 30 features must be present.
    pub fn predict(&self, input: &UserInput) -> Result<Prediction, PredictError> {
        let mut raw = Vec::with_capacity(features::FEATURE_COUNT);
        for name in features::feature_names() {
            let value = input
                .get(&name)
                .copied()
                .ok_or(PredictError::MissingFeature(name))?;
            raw.push(value);
        }

        let scaled = self.scaler.transform_input(&raw)?;
        let probabilities = self.model.predict_proba(&scaled);
        let diagnosis = if probabilities.malignant >= 0.5 {
            Diagnosis::Malignant
        } else {
            Diagnosis::Benign
        };

        Ok(Prediction {
            diagnosis,
            probabilities,
        })
    }
}
