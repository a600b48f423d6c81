use std::path::Path;

use crate::data::features;
use crate::data::loader;
use crate::data::model::CytologyDataset;
use crate::model::artifacts;
use crate::model::predict::{Prediction, Predictor, UserInput};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Default location of the dataset CSV (slider bounds and radar scaling).
pub const DEFAULT_DATA_PATH: &str = "data/data.csv";
/// Default directory holding the two trained artifacts.
pub const DEFAULT_MODEL_DIR: &str = "model";

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<CytologyDataset>,

    /// Current raw slider values, keyed by canonical feature name.
    pub inputs: UserInput,

    /// The fitted scaler + classifier (None until artifacts are loaded).
    pub predictor: Option<Predictor>,

    /// Prediction for the current inputs (recomputed on every change).
    pub prediction: Option<Prediction>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            inputs: UserInput::new(),
            predictor: None,
            prediction: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Load the dataset and the trained artifacts from their default paths.
    /// Failures are reported through the status line, not fatal: the user can
    /// still open a dataset by hand or run the trainer.
    pub fn load_defaults(&mut self) {
        match loader::load_csv(Path::new(DEFAULT_DATA_PATH)) {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => {
                log::warn!("no dataset at {DEFAULT_DATA_PATH}: {e}");
                self.status_message =
                    Some(format!("No dataset at {DEFAULT_DATA_PATH} (File → Open…)"));
            }
        }

        match artifacts::load(Path::new(DEFAULT_MODEL_DIR)) {
            Ok(predictor) => {
                self.predictor = Some(predictor);
                self.repredict();
            }
            Err(e) => {
                log::warn!("no trained model in {DEFAULT_MODEL_DIR}: {e:#}");
                self.status_message =
                    Some("No trained model found; run `cargo run --bin train` first".to_string());
            }
        }
    }

    /// Ingest a newly loaded dataset and reset every slider to the feature's
    /// observed mean.
    pub fn set_dataset(&mut self, dataset: CytologyDataset) {
        self.inputs = features::feature_names()
            .into_iter()
            .zip(dataset.stats.iter())
            .map(|(name, stats)| (name, stats.mean))
            .collect();
        self.dataset = Some(dataset);
        self.status_message = None;
        self.repredict();
    }

    /// Recompute the prediction from the current inputs.
    pub fn repredict(&mut self) {
        let Some(predictor) = &self.predictor else {
            self.prediction = None;
            return;
        };
        if self.inputs.is_empty() {
            self.prediction = None;
            return;
        }
        match predictor.predict(&self.inputs) {
            Ok(prediction) => self.prediction = Some(prediction),
            Err(e) => {
                log::error!("prediction failed: {e}");
                self.status_message = Some(format!("Prediction failed: {e}"));
                self.prediction = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::features::FEATURE_COUNT;
    use crate::data::model::{Diagnosis, Record};

    fn dataset() -> CytologyDataset {
        let record = |diagnosis, base: f64| Record {
            diagnosis,
            features: (0..FEATURE_COUNT).map(|j| base + j as f64).collect(),
        };
        CytologyDataset::from_records(vec![
            record(Diagnosis::Benign, 0.0),
            record(Diagnosis::Malignant, 4.0),
        ])
    }

    #[test]
    fn sliders_start_at_the_feature_means() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        assert_eq!(state.inputs.len(), FEATURE_COUNT);
        assert_eq!(state.inputs["radius_mean"], 2.0);
        assert_eq!(state.inputs["fractal_dimension_worst"], 31.0);
    }

    #[test]
    fn no_predictor_means_no_prediction() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.repredict();
        assert!(state.prediction.is_none());
    }
}
