//! # cognitive-explorer
//!
//! Exploratory analysis of a simulated cognitive-load CSV dataset. One
//! invocation runs a fixed four-stage pipeline:
//!
//! 1. [`locate`] – resolve `simulated_cognitive_data.csv` by probing a `data`
//!    folder next to the executable, then one and two directories above.
//! 2. [`data::loader`] – parse the CSV into an in-memory [`data::model::Dataset`].
//! 3. [`report`] – print shape, columns, dtypes, a row preview, descriptive
//!    statistics and the overload value counts.
//! 4. [`viz`] – show up to three distribution charts and a correlation
//!    heatmap, one blocking window at a time.
//!
//! The dataset is schema-optional: any expected column may be absent, and the
//! report/plot steps that need it are skipped silently.

pub mod data;
pub mod locate;
pub mod report;
pub mod stats;
pub mod viz;
