//! Chart layer: column-gated chart specs plus the egui window that shows
//! them.
//!
//! Charts display strictly one at a time, in a fixed order: effort histogram
//! → duration histogram → overload counts → correlation heatmap. The process
//! owns a single event loop, so the whole sequence runs through one window;
//! dismissing a chart brings up the next. A chart whose column is missing is
//! skipped without comment; only the heatmap announces its skip.

pub mod charts;
pub mod colormap;
pub mod show;

use anyhow::Result;

use crate::data::model::Dataset;

use self::charts::Chart;

/// The charts this dataset supports, in display order.
pub fn chart_sequence(ds: &Dataset) -> Vec<Chart> {
    let mut sequence = Vec::new();

    match charts::effort_histogram(ds) {
        Some(hist) => sequence.push(Chart::Histogram(hist)),
        None => log::info!("no mental_effort column, skipping effort histogram"),
    }
    match charts::duration_histogram(ds) {
        Some(hist) => sequence.push(Chart::Histogram(hist)),
        None => log::info!("no task_duration_min column, skipping duration histogram"),
    }
    match charts::overload_counts(ds) {
        Some(counts) => sequence.push(Chart::Counts(counts)),
        None => log::info!("no cognitive_overload column, skipping count plot"),
    }
    if let Some(matrix) = charts::correlation_heatmap(ds) {
        sequence.push(Chart::Heatmap(matrix));
    }

    sequence
}

/// Render every applicable chart, blocking until the viewer has dismissed
/// them all. Prints the informational skip line when fewer than two numeric
/// columns rule out the heatmap.
pub fn plot_all(ds: &Dataset) -> Result<()> {
    let sequence = chart_sequence(ds);

    // The heatmap, when present, is always the final entry.
    if !matches!(sequence.last(), Some(Chart::Heatmap(_))) {
        println!("\n[INFO] Not enough numeric columns for correlation heatmap.");
    }

    show::run_sequence(sequence)
}
