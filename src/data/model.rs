use std::fmt;

use ndarray::{Array1, Array2};

use super::features::FEATURE_COUNT;

// ---------------------------------------------------------------------------
// Diagnosis – the binary label
// ---------------------------------------------------------------------------

/// The two diagnostic classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    Benign,
    Malignant,
}

impl Diagnosis {
    /// Numeric code used by the training pipeline: benign = 0, malignant = 1.
    pub fn code(self) -> usize {
        match self {
            Diagnosis::Benign => 0,
            Diagnosis::Malignant => 1,
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnosis::Benign => write!(f, "Benign"),
            Diagnosis::Malignant => write!(f, "Malignant"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one dataset row
// ---------------------------------------------------------------------------

/// One sample: a diagnosis plus the 30 feature values in canonical order
/// (see [`super::features::feature_names`]).
#[derive(Debug, Clone)]
pub struct Record {
    pub diagnosis: Diagnosis,
    pub features: Vec<f64>,
}

// ---------------------------------------------------------------------------
// FeatureStats – observed per-feature range
// ---------------------------------------------------------------------------

/// Observed min/max/mean of one feature over the loaded dataset. Drives the
/// slider bounds and the radar chart's min-max normalization.
#[derive(Debug, Clone, Copy)]
pub struct FeatureStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl FeatureStats {
    /// Min-max normalize a raw value into the dataset's observed range.
    /// Degenerate ranges map to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range.abs() < f64::EPSILON {
            0.0
        } else {
            (value - self.min) / range
        }
    }
}

// ---------------------------------------------------------------------------
// CytologyDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full cleaned dataset with precomputed per-feature statistics.
/// Immutable after loading.
#[derive(Debug, Clone)]
pub struct CytologyDataset {
    /// All samples (rows).
    pub records: Vec<Record>,
    /// Per-feature min/max/mean, aligned with the canonical feature order.
    pub stats: Vec<FeatureStats>,
}

impl CytologyDataset {
    /// Build the dataset and its per-feature statistics from loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut stats = Vec::with_capacity(FEATURE_COUNT);
        for j in 0..FEATURE_COUNT {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            let mut sum = 0.0;
            for record in &records {
                let v = record.features[j];
                min = min.min(v);
                max = max.max(v);
                sum += v;
            }
            let mean = if records.is_empty() {
                0.0
            } else {
                sum / records.len() as f64
            };
            stats.push(FeatureStats { min, max, mean });
        }
        CytologyDataset { records, stats }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// (benign, malignant) sample counts.
    pub fn class_counts(&self) -> (usize, usize) {
        let malignant = self
            .records
            .iter()
            .filter(|r| r.diagnosis == Diagnosis::Malignant)
            .count();
        (self.records.len() - malignant, malignant)
    }

    /// The n×30 design matrix of raw feature values.
    pub fn feature_matrix(&self) -> Array2<f64> {
        let mut matrix = Array2::zeros((self.records.len(), FEATURE_COUNT));
        for (i, record) in self.records.iter().enumerate() {
            for (j, &value) in record.features.iter().enumerate() {
                matrix[[i, j]] = value;
            }
        }
        matrix
    }

    /// Label vector with benign = 0.0, malignant = 1.0.
    pub fn labels(&self) -> Array1<f64> {
        self.records
            .iter()
            .map(|r| r.diagnosis.code() as f64)
            .collect()
    }
}
