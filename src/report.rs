//! Text overview of the loaded dataset: shape, columns, dtypes, a row
//! preview, descriptive statistics and the overload value counts. Everything
//! is assembled into a `String` first so the sections are testable without
//! capturing stdout.

use std::fmt::Write;

use crate::data::model::Dataset;
use crate::stats::Describe;

const PREVIEW_ROWS: usize = 5;
const OVERLOAD_COLUMN: &str = "cognitive_overload";

/// Assemble the full overview text, in the fixed section order.
pub fn overview(ds: &Dataset) -> String {
    let mut out = String::new();

    out.push_str("\n=== BASIC SHAPE & COLUMNS ===\n");
    let (rows, cols) = ds.shape();
    let _ = writeln!(out, "Rows, Columns: ({rows}, {cols})");
    let _ = writeln!(out, "Columns: {:?}", ds.column_names);

    out.push_str("\n=== DATA TYPES (dtypes) ===\n");
    out.push_str(&dtypes_section(ds));

    out.push_str("\n=== FIRST 5 ROWS (preview) ===\n");
    out.push_str(&head_section(ds, PREVIEW_ROWS));

    out.push_str("\n=== DESCRIPTIVE STATISTICS (numeric only) ===\n");
    out.push_str(&describe_section(ds));

    // Only when the binary target column exists.
    if ds.has_column(OVERLOAD_COLUMN) {
        let _ = writeln!(out, "\n=== {OVERLOAD_COLUMN} VALUE COUNTS ===");
        out.push_str(&value_counts_section(ds, OVERLOAD_COLUMN));
    }

    out
}

/// Print the overview to stdout.
pub fn print_overview(ds: &Dataset) {
    print!("{}", overview(ds));
}

fn dtypes_section(ds: &Dataset) -> String {
    let width = ds
        .column_names
        .iter()
        .map(|c| c.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for col in &ds.column_names {
        let _ = writeln!(out, "{col:<width$}    {}", ds.dtype(col));
    }
    out
}

fn head_section(ds: &Dataset, n: usize) -> String {
    if ds.column_names.is_empty() {
        return String::from("(no columns)\n");
    }

    let shown = n.min(ds.len());
    // One text column per dataset column, sized to its widest cell.
    let mut widths: Vec<usize> = ds.column_names.iter().map(|c| c.len()).collect();
    let mut cells: Vec<Vec<String>> = Vec::with_capacity(shown);
    for row_idx in 0..shown {
        let mut line = Vec::with_capacity(ds.column_names.len());
        for (col_idx, col) in ds.column_names.iter().enumerate() {
            let text = ds.rows[row_idx]
                .get(col.as_str())
                .map(|v| v.to_string())
                .unwrap_or_else(|| "NaN".to_string());
            widths[col_idx] = widths[col_idx].max(text.len());
            line.push(text);
        }
        cells.push(line);
    }

    let mut out = String::new();
    for (col, w) in ds.column_names.iter().zip(widths.iter().copied()) {
        let _ = write!(out, "  {col:>w$}");
    }
    out.push('\n');
    for line in cells {
        for (text, w) in line.iter().zip(widths.iter().copied()) {
            let _ = write!(out, "  {text:>w$}");
        }
        out.push('\n');
    }
    out
}

fn describe_section(ds: &Dataset) -> String {
    let numeric = ds.numeric_columns();
    if numeric.is_empty() {
        return String::from("(no numeric columns)\n");
    }

    let describes: Vec<Describe> = numeric
        .iter()
        .map(|col| Describe::of(&ds.numeric_column(col)))
        .collect();

    let widths: Vec<usize> = numeric.iter().map(|c| c.len().max(12)).collect();

    let mut out = String::new();
    out.push_str("     ");
    for (col, w) in numeric.iter().zip(widths.iter().copied()) {
        let _ = write!(out, "  {col:>w$}");
    }
    out.push('\n');

    for stat_idx in 0..8 {
        let label = describes[0].rows()[stat_idx].0;
        let _ = write!(out, "{label:<5}");
        for (d, w) in describes.iter().zip(widths.iter().copied()) {
            let (_, value) = d.rows()[stat_idx];
            let _ = write!(out, "  {:>w$}", fmt_stat(value));
        }
        out.push('\n');
    }
    out
}

fn fmt_stat(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.6}")
    }
}

fn value_counts_section(ds: &Dataset, column: &str) -> String {
    let counts = ds.value_counts(column);
    let width = counts
        .iter()
        .map(|(v, _)| v.to_string().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (value, count) in counts {
        let _ = writeln!(out, "{:<width$}    {count}", value.to_string());
    }
    out
}
