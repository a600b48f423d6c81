/// Data layer: the feature schema, core types, and the CSV loader.
///
/// ```text
///  data.csv
///      │
///      ▼
///  ┌────────┐
///  │ loader │  drop id / unused columns, map diagnosis B,M → 0,1
///  └────────┘
///      │
///      ▼
///  ┌─────────────────┐
///  │ CytologyDataset │  Vec<Record>, per-feature min/max/mean
///  └─────────────────┘
/// ```

pub mod features;
pub mod loader;
pub mod model;
