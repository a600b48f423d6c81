/// Model layer: standardization, the linear classifier, and the training and
/// inference paths around them.
///
/// ```text
///  CytologyDataset ──► train ──► StandardScaler + LogisticModel
///                                        │
///                                        ▼
///                                artifacts (scaler.json, model.json)
///                                        │
///                                        ▼
///  UserInput ─────────────────────► Predictor ──► Prediction
/// ```
///
/// The trainer runs once, offline; the app only ever sees the two serialized
/// artifacts.

pub mod artifacts;
pub mod classifier;
pub mod metrics;
pub mod predict;
pub mod scaler;
pub mod train;
