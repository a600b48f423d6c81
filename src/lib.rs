//! CytoVis – a small diagnostic-support tool.
//!
//! A logistic-regression classifier predicts whether a breast-mass cell
//! sample is benign or malignant from 30 cytology measurements. The offline
//! trainer (`cargo run --bin train`) fits a standard scaler and the
//! classifier on the dataset and writes both as JSON artifacts; the
//! interactive app loads the artifacts and predicts live from slider inputs,
//! next to a radar chart of the normalized feature groups.

pub mod app;
pub mod color;
pub mod data;
pub mod model;
pub mod state;
pub mod ui;
