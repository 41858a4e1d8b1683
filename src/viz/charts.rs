//! Chart specifications, computed independently of any rendering backend.
//!
//! Each builder returns `None` when the column(s) it needs are absent; the
//! caller simply skips that window. Rendering lives in [`super::show`].

use crate::data::model::Dataset;
use crate::stats;

pub const HISTOGRAM_BINS: usize = 20;
/// Points evaluated along the density overlay curve.
const KDE_GRID: usize = 200;

// ---------------------------------------------------------------------------
// Chart – one entry of the display sequence
// ---------------------------------------------------------------------------

/// A fully computed chart, ready to render. The whole sequence is built up
/// front and shown through a single window, one chart at a time.
#[derive(Debug, Clone)]
pub enum Chart {
    Histogram(Histogram),
    Counts(CountPlot),
    Heatmap(CorrelationMatrix),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Histogram(h) => &h.title,
            Chart::Counts(c) => &c.title,
            Chart::Heatmap(m) => &m.title,
        }
    }
}

// ---------------------------------------------------------------------------
// Histogram with density overlay
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct HistogramBin {
    pub center: f64,
    pub width: f64,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct Histogram {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bins: Vec<HistogramBin>,
    /// Gaussian-KDE curve in count units, empty when the data cannot carry one.
    pub density: Vec<[f64; 2]>,
}

/// Distribution of reported mental effort, gated on the `mental_effort` column.
pub fn effort_histogram(ds: &Dataset) -> Option<Histogram> {
    if !ds.has_column("mental_effort") {
        return None;
    }
    Some(build_histogram(
        "Distribution of Reported Mental Effort",
        "Mental Effort (1-10 scale)",
        &ds.numeric_column("mental_effort"),
    ))
}

/// Task duration distribution, gated on the `task_duration_min` column.
pub fn duration_histogram(ds: &Dataset) -> Option<Histogram> {
    if !ds.has_column("task_duration_min") {
        return None;
    }
    Some(build_histogram(
        "Task Duration (minutes)",
        "Minutes",
        &ds.numeric_column("task_duration_min"),
    ))
}

fn build_histogram(title: &str, x_label: &str, values: &[f64]) -> Histogram {
    let (bins, bin_width) = bin_values(values, HISTOGRAM_BINS);
    let density = kde_overlay(values, bin_width);
    Histogram {
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: "Count".to_string(),
        bins,
        density,
    }
}

/// Equal-width bins over [min, max]. The max value lands in the last bin.
fn bin_values(values: &[f64], n_bins: usize) -> (Vec<HistogramBin>, f64) {
    if values.is_empty() || n_bins == 0 {
        return (Vec::new(), 0.0);
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    // All-identical values still get one full-width bin.
    let width = if span > 0.0 { span / n_bins as f64 } else { 1.0 };

    let mut counts = vec![0usize; n_bins];
    for &v in values {
        let idx = if span > 0.0 {
            (((v - min) / span) * n_bins as f64).floor() as usize
        } else {
            0
        };
        counts[idx.min(n_bins - 1)] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            center: min + (i as f64 + 0.5) * width,
            width,
            count,
        })
        .collect();
    (bins, width)
}

/// Gaussian KDE with Scott's bandwidth, scaled to count units (density × n ×
/// bin width) so the curve overlays the histogram the way seaborn's
/// `histplot(kde=True)` does.
fn kde_overlay(values: &[f64], bin_width: f64) -> Vec<[f64; 2]> {
    let n = values.len();
    if n < 2 {
        return Vec::new();
    }
    let sd = stats::std_dev(values);
    if !sd.is_finite() || sd <= 0.0 {
        return Vec::new();
    }
    let h = sd * (n as f64).powf(-0.2);

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let lo = min - 3.0 * h;
    let hi = max + 3.0 * h;
    let step = (hi - lo) / (KDE_GRID - 1) as f64;

    let norm = 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * h * n as f64);
    let scale = n as f64 * bin_width;

    (0..KDE_GRID)
        .map(|i| {
            let x = lo + i as f64 * step;
            let density: f64 = values
                .iter()
                .map(|&v| {
                    let z = (x - v) / h;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            [x, density * scale]
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Categorical count plot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CountPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// (category label, frequency), sorted by category value. Nulls dropped.
    pub bars: Vec<(String, usize)>,
}

/// Overload frequency bars, gated on the `cognitive_overload` column.
pub fn overload_counts(ds: &Dataset) -> Option<CountPlot> {
    if !ds.has_column("cognitive_overload") {
        return None;
    }
    let mut counts: Vec<_> = ds
        .value_counts("cognitive_overload")
        .into_iter()
        .filter(|(v, _)| !v.is_null())
        .collect();
    counts.sort_by(|(a, _), (b, _)| a.cmp(b));
    let bars = counts
        .into_iter()
        .map(|(v, c)| (v.to_string(), c))
        .collect();

    Some(CountPlot {
        title: "Counts: Cognitive Overload (0 = No, 1 = Yes)".to_string(),
        x_label: "cognitive_overload".to_string(),
        y_label: "Count".to_string(),
        bars,
    })
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub title: String,
    pub columns: Vec<String>,
    /// values[i][j] = Pearson r of columns i and j over pairwise-complete
    /// observations; NaN where a side is constant.
    pub values: Vec<Vec<f64>>,
}

/// Pairwise correlations of the numeric columns. `None` when fewer than two
/// numeric columns exist (caller prints the skip notice).
pub fn correlation_heatmap(ds: &Dataset) -> Option<CorrelationMatrix> {
    let columns = ds.numeric_columns();
    if columns.len() < 2 {
        return None;
    }

    let values = columns
        .iter()
        .map(|a| {
            columns
                .iter()
                .map(|b| pairwise_pearson(ds, a, b))
                .collect()
        })
        .collect();

    Some(CorrelationMatrix {
        title: "Correlation Heatmap (numeric columns)".to_string(),
        columns,
        values,
    })
}

/// Pearson r over the rows where both columns are non-null.
fn pairwise_pearson(ds: &Dataset, a: &str, b: &str) -> f64 {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (ca, cb) in ds.column(a).zip(ds.column(b)) {
        if let (Some(x), Some(y)) = (ca.as_f64(), cb.as_f64()) {
            xs.push(x);
            ys.push(y);
        }
    }
    stats::pearson(&xs, &ys)
}
