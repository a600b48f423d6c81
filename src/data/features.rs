use std::fmt;

// ---------------------------------------------------------------------------
// Feature schema
// ---------------------------------------------------------------------------

/// Total number of features: ten base measurements × three aggregations.
pub const FEATURE_COUNT: usize = 30;

/// The ten base measurements of the cell nuclei, in dataset column order.
///
/// `concave points` keeps its interior space; that is how the dataset names
/// the column (`concave points_mean` etc.).
pub const BASE_MEASUREMENTS: [&str; 10] = [
    "radius",
    "texture",
    "perimeter",
    "area",
    "smoothness",
    "compactness",
    "concavity",
    "concave points",
    "symmetry",
    "fractal_dimension",
];

/// How a base measurement is aggregated across the nuclei of one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// Mean over all nuclei.
    Mean,
    /// Standard error of the mean.
    StdError,
    /// Mean of the three largest values.
    Worst,
}

impl Aggregation {
    pub const ALL: [Aggregation; 3] = [
        Aggregation::Mean,
        Aggregation::StdError,
        Aggregation::Worst,
    ];

    /// Column-name suffix used by the dataset.
    pub fn suffix(self) -> &'static str {
        match self {
            Aggregation::Mean => "mean",
            Aggregation::StdError => "se",
            Aggregation::Worst => "worst",
        }
    }

    /// Position of this aggregation's block of ten columns in the canonical
    /// feature order.
    pub fn block(self) -> usize {
        match self {
            Aggregation::Mean => 0,
            Aggregation::StdError => 1,
            Aggregation::Worst => 2,
        }
    }

    /// Human-readable label for chart legends and slider sections.
    pub fn label(self) -> &'static str {
        match self {
            Aggregation::Mean => "Mean",
            Aggregation::StdError => "Standard error",
            Aggregation::Worst => "Worst",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Column name for one measurement/aggregation pair, e.g. `radius_mean`.
pub fn feature_name(base: &str, aggregation: Aggregation) -> String {
    format!("{base}_{}", aggregation.suffix())
}

/// The canonical ordered list of all 30 feature names: the ten mean columns,
/// then the ten standard-error columns, then the ten worst columns. This is
/// the dataset's column order and the order used by the scaler and the model.
pub fn feature_names() -> Vec<String> {
    Aggregation::ALL
        .iter()
        .flat_map(|&agg| {
            BASE_MEASUREMENTS
                .iter()
                .map(move |base| feature_name(base, agg))
        })
        .collect()
}

/// Index of a measurement/aggregation pair in the canonical feature order.
pub fn feature_index(measurement: usize, aggregation: Aggregation) -> usize {
    aggregation.block() * BASE_MEASUREMENTS.len() + measurement
}

/// Human-readable label for a base measurement, e.g. `fractal_dimension` →
/// `Fractal dimension`.
pub fn measurement_label(base: &str) -> String {
    let spaced = base.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}
