/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  rows of typed cells, column index
///   └──────────┘
/// ```
///
/// The Dataset is read-only after load; reporting and plotting borrow it.

pub mod loader;
pub mod model;
