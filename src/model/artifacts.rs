use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::data::features::FEATURE_COUNT;
use crate::model::classifier::LogisticModel;
use crate::model::predict::Predictor;
use crate::model::scaler::StandardScaler;

// ---------------------------------------------------------------------------
// Durable state: the two serialized artifacts
// ---------------------------------------------------------------------------

pub const SCALER_FILE: &str = "scaler.json";
pub const MODEL_FILE: &str = "model.json";

/// Write both fitted artifacts into `dir`, creating it if needed.
pub fn save(dir: &Path, scaler: &StandardScaler, model: &LogisticModel) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating artifact directory {}", dir.display()))?;
    write_json(&dir.join(SCALER_FILE), scaler)?;
    write_json(&dir.join(MODEL_FILE), model)?;
    Ok(())
}

/// Load both artifacts from `dir` and validate that they agree on the feature
/// schema. Missing or unreadable artifacts are fatal.
pub fn load(dir: &Path) -> Result<Predictor> {
    let scaler: StandardScaler = read_json(&dir.join(SCALER_FILE))?;
    let model: LogisticModel = read_json(&dir.join(MODEL_FILE))?;

    ensure!(
        scaler.n_features() == FEATURE_COUNT,
        "scaler covers {} features, expected {FEATURE_COUNT}",
        scaler.n_features()
    );
    ensure!(
        model.weights.len() == FEATURE_COUNT,
        "model has {} weights, expected {FEATURE_COUNT}",
        model.weights.len()
    );

    Ok(Predictor { scaler, model })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serializing artifact")?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
