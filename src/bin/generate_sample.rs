//! Writes a synthetic cytology dataset in the expected CSV schema (id,
//! diagnosis, 30 feature columns, trailing unnamed column) so the trainer and
//! the app can be exercised without the real data file.
//!
//! Usage: `generate_sample [output_csv]` (default: `data/data.csv`)

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use cytovis::data::features::{self, BASE_MEASUREMENTS};

/// Per-class profile of one base measurement: (mean, standard deviation),
/// loosely matching the published class statistics of the dataset.
struct MeasurementProfile {
    benign: (f64, f64),
    malignant: (f64, f64),
}

fn profiles() -> [MeasurementProfile; 10] {
    let p = |benign, malignant| MeasurementProfile { benign, malignant };
    [
        p((12.15, 1.78), (17.46, 3.20)),     // radius
        p((17.91, 3.99), (21.60, 3.77)),     // texture
        p((78.08, 11.79), (115.4, 21.9)),    // perimeter
        p((462.8, 134.3), (978.4, 368.0)),   // area
        p((0.0925, 0.0134), (0.1029, 0.0126)), // smoothness
        p((0.0801, 0.0337), (0.1452, 0.0540)), // compactness
        p((0.0461, 0.0434), (0.1608, 0.0750)), // concavity
        p((0.0257, 0.0159), (0.0880, 0.0344)), // concave points
        p((0.1742, 0.0248), (0.1929, 0.0276)), // symmetry
        p((0.0629, 0.0067), (0.0627, 0.0075)), // fractal dimension
    ]
}

const SAMPLES: usize = 400;
const MALIGNANT_FRACTION: f64 = 0.37;

fn main() -> Result<()> {
    env_logger::init();

    let path = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| "data/data.csv".to_string()),
    );
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut rng = StdRng::seed_from_u64(42);
    let profiles = profiles();

    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("opening {}", path.display()))?;

    let mut header = vec!["id".to_string(), "diagnosis".to_string()];
    header.extend(features::feature_names());
    header.push("Unnamed: 32".to_string());
    writer.write_record(&header).context("writing header")?;

    for i in 0..SAMPLES {
        let is_malignant = rng.gen_bool(MALIGNANT_FRACTION);

        // Draw the ten mean measurements, then derive the standard-error and
        // worst aggregations from them.
        let mut means = Vec::with_capacity(BASE_MEASUREMENTS.len());
        let mut ses = Vec::with_capacity(BASE_MEASUREMENTS.len());
        let mut worsts = Vec::with_capacity(BASE_MEASUREMENTS.len());
        for profile in &profiles {
            let (mu, sd) = if is_malignant {
                profile.malignant
            } else {
                profile.benign
            };
            let normal = Normal::new(mu, sd).context("building distribution")?;
            let mean = normal.sample(&mut rng).max(1e-4);
            means.push(mean);
            ses.push(mean * rng.gen_range(0.02..0.10));
            worsts.push(mean * rng.gen_range(1.08..1.45));
        }

        let mut row = vec![
            format!("{}", 842_301 + i),
            if is_malignant { "M" } else { "B" }.to_string(),
        ];
        for block in [&means, &ses, &worsts] {
            row.extend(block.iter().map(|v| format!("{v:.6}")));
        }
        row.push(String::new());
        writer
            .write_record(&row)
            .with_context(|| format!("writing row {i}"))?;
    }

    writer.flush().context("flushing output")?;
    println!("Wrote {SAMPLES} samples to {}", path.display());
    Ok(())
}
