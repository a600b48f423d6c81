//! Offline trainer: fit the scaler and the classifier, print the evaluation,
//! write the two artifacts.
//!
//! Usage: `train [data_csv] [model_dir]`
//! (defaults: `data/data.csv`, `model`)

use std::path::PathBuf;

use anyhow::{Context, Result};

use cytovis::data::loader;
use cytovis::model::artifacts;
use cytovis::model::train::{train, TrainOptions};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let data_path = PathBuf::from(args.next().unwrap_or_else(|| "data/data.csv".to_string()));
    let model_dir = PathBuf::from(args.next().unwrap_or_else(|| "model".to_string()));

    let dataset = loader::load_csv(&data_path)
        .with_context(|| format!("loading dataset {}", data_path.display()))?;
    let (benign, malignant) = dataset.class_counts();
    log::info!(
        "loaded {} samples ({benign} benign / {malignant} malignant)",
        dataset.len()
    );

    let outcome = train(&dataset, &TrainOptions::default())?;

    println!("Accuracy: {:.4}", outcome.report.accuracy);
    println!("Classification report:");
    println!("{}", outcome.report);

    artifacts::save(&model_dir, &outcome.scaler, &outcome.model)?;
    println!(
        "Wrote {} and {} to {}",
        artifacts::SCALER_FILE,
        artifacts::MODEL_FILE,
        model_dir.display()
    );

    Ok(())
}
