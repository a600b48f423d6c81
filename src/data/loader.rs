use std::path::Path;

use thiserror::Error;

use super::features::{self, FEATURE_COUNT};
use super::model::{CytologyDataset, Diagnosis, Record};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while loading the dataset. All of these are
/// fatal; there is no partial load.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    #[error("row {row}: unknown diagnosis label '{value}' (expected 'B' or 'M')")]
    UnknownDiagnosis { row: usize, value: String },
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    BadValue {
        row: usize,
        column: String,
        value: String,
    },
    #[error("dataset contains no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load the cytology dataset from a CSV file.
///
/// The file must carry a header row with a `diagnosis` column (values `B` or
/// `M`) and the 30 feature columns named in [`features::feature_names`]. Any
/// other columns — the `id` column and the trailing unnamed column the raw
/// export carries — are dropped.
pub fn load_csv(path: &Path) -> Result<CytologyDataset, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let diagnosis_idx = headers
        .iter()
        .position(|h| h == "diagnosis")
        .ok_or_else(|| DatasetError::MissingColumn("diagnosis".to_string()))?;

    let names = features::feature_names();
    let mut column_indices = Vec::with_capacity(FEATURE_COUNT);
    for name in &names {
        let idx = headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DatasetError::MissingColumn(name.clone()))?;
        column_indices.push(idx);
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result?;

        let diagnosis = match row.get(diagnosis_idx).unwrap_or("").trim() {
            "M" => Diagnosis::Malignant,
            "B" => Diagnosis::Benign,
            other => {
                return Err(DatasetError::UnknownDiagnosis {
                    row: row_no,
                    value: other.to_string(),
                });
            }
        };

        let mut values = Vec::with_capacity(FEATURE_COUNT);
        for (k, &col_idx) in column_indices.iter().enumerate() {
            let raw = row.get(col_idx).unwrap_or("").trim();
            let value = raw.parse::<f64>().map_err(|_| DatasetError::BadValue {
                row: row_no,
                column: names[k].clone(),
                value: raw.to_string(),
            })?;
            values.push(value);
        }

        records.push(Record {
            diagnosis,
            features: values,
        });
    }

    if records.is_empty() {
        return Err(DatasetError::Empty);
    }

    Ok(CytologyDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Write a CSV in the raw export's shape: id and trailing unnamed columns
    /// included, features valued `base + column index`.
    fn write_dataset(dir: &Path, rows: &[(&str, f64)]) -> std::path::PathBuf {
        let names = features::feature_names();
        let mut text = format!("id,diagnosis,{},Unnamed: 32\n", names.join(","));
        for (i, (diagnosis, base)) in rows.iter().enumerate() {
            let cells: Vec<String> = (0..FEATURE_COUNT)
                .map(|j| format!("{}", base + j as f64))
                .collect();
            text.push_str(&format!("{},{},{},\n", 10000 + i, diagnosis, cells.join(",")));
        }
        let path = dir.join("data.csv");
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn loads_and_maps_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(dir.path(), &[("M", 1.0), ("B", 5.0), ("B", 3.0)]);

        let ds = load_csv(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.class_counts(), (2, 1));
        assert_eq!(ds.records[0].diagnosis, Diagnosis::Malignant);
        assert_eq!(ds.records[1].diagnosis, Diagnosis::Benign);
        // id and the unnamed column are dropped; features come back in order.
        assert_eq!(ds.records[0].features[0], 1.0);
        assert_eq!(ds.records[0].features[29], 30.0);
    }

    #[test]
    fn rejects_unknown_diagnosis() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(dir.path(), &[("M", 1.0), ("X", 2.0)]);

        let err = load_csv(&path).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::UnknownDiagnosis { row: 1, .. }
        ));
    }

    #[test]
    fn rejects_missing_feature_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "id,diagnosis,radius_mean\n1,M,17.99\n").unwrap();

        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn(_)));
    }

    #[test]
    fn rejects_non_numeric_cells() {
        let dir = tempfile::tempdir().unwrap();
        let names = features::feature_names();
        let mut text = format!("id,diagnosis,{}\n", names.join(","));
        let mut cells = vec!["1.0".to_string(); FEATURE_COUNT];
        cells[4] = "n/a".to_string();
        text.push_str(&format!("1,B,{}\n", cells.join(",")));
        let path = dir.path().join("data.csv");
        std::fs::write(&path, text).unwrap();

        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, DatasetError::BadValue { row: 0, .. }));
    }

    #[test]
    fn rejects_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(dir.path(), &[]);

        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }
}
