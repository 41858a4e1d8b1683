use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load the dataset from a CSV file.
///
/// Header row gives the column names; every cell's type is inferred
/// independently (empty → Null, integer, float, true/false, else string).
/// There is no schema: whatever columns the file carries are the columns the
/// rest of the pipeline sees. Any parse failure propagates as a fatal error.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    println!("[INFO] Loading data from: {}", path.display());

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let mut row: BTreeMap<String, CellValue> = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            let Some(col_name) = headers.get(col_idx) else {
                continue;
            };
            row.insert(col_name.clone(), guess_cell_type(value));
        }
        rows.push(row);
    }

    let dataset = Dataset::new(headers, rows);
    log::info!(
        "Loaded {} rows with columns {:?}",
        dataset.len(),
        dataset.column_names
    );
    Ok(dataset)
}

fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        // Cells spelled "NaN"/"nan" are missing values, not numbers, the way
        // pandas reads them.
        return if f.is_nan() {
            CellValue::Null
        } else {
            CellValue::Float(f)
        };
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{content}").unwrap();
        tmp
    }

    #[test]
    fn loads_typed_cells_from_csv() {
        let tmp = write_csv(
            "mental_effort,task_duration_min,cognitive_overload\n\
             7,42.5,1\n\
             3,12.0,0\n",
        );
        let ds = load_csv(tmp.path()).unwrap();

        assert_eq!(ds.shape(), (2, 3));
        assert_eq!(ds.dtype("mental_effort"), "int64");
        assert_eq!(ds.dtype("task_duration_min"), "float64");
        assert_eq!(ds.numeric_column("mental_effort"), vec![7.0, 3.0]);
    }

    #[test]
    fn empty_cells_become_null() {
        let tmp = write_csv("mental_effort,notes\n5,\n,late session\n");
        let ds = load_csv(tmp.path()).unwrap();

        let notes: Vec<_> = ds.column("notes").cloned().collect();
        assert_eq!(
            notes,
            vec![CellValue::Null, CellValue::String("late session".into())]
        );
        // Integer column with a hole promotes to float64.
        assert_eq!(ds.dtype("mental_effort"), "float64");
    }

    #[test]
    fn nan_spelled_cells_are_missing_values() {
        let tmp = write_csv(
            "mental_effort,task_duration_min\n\
             5,NaN\n\
             7,30.0\n\
             nan,45.0\n",
        );
        let ds = load_csv(tmp.path()).unwrap();

        // NaN cells behave exactly like empty ones: excluded from the numeric
        // values and promoting the int column to float64.
        assert_eq!(ds.numeric_column("mental_effort"), vec![5.0, 7.0]);
        assert_eq!(ds.numeric_column("task_duration_min"), vec![30.0, 45.0]);
        assert_eq!(ds.dtype("mental_effort"), "float64");

        let cells: Vec<_> = ds.column("task_duration_min").cloned().collect();
        assert_eq!(cells[0], CellValue::Null);
    }

    #[test]
    fn ragged_row_is_a_fatal_error() {
        let tmp = write_csv("a,b\n1,2\n3\n");
        assert!(load_csv(tmp.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_csv(Path::new("/no/such/file.csv")).is_err());
    }

    #[test]
    fn cell_type_guessing() {
        assert_eq!(guess_cell_type(""), CellValue::Null);
        assert_eq!(guess_cell_type("4"), CellValue::Integer(4));
        assert_eq!(guess_cell_type("4.5"), CellValue::Float(4.5));
        assert_eq!(guess_cell_type("NaN"), CellValue::Null);
        assert_eq!(guess_cell_type("nan"), CellValue::Null);
        assert_eq!(guess_cell_type("true"), CellValue::Bool(true));
        assert_eq!(
            guess_cell_type("focus"),
            CellValue::String("focus".into())
        );
    }
}
