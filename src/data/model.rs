use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common Pandas dtypes.
/// Keyed into `BTreeMap`s downstream so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    String(String),
    Null,
}

// -- Manual Eq/Ord so we can key BTreeMaps with CellValue --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                String(_) => 4,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::String(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Bool(b) => b.hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Null => write!(f, "NaN"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for statistics and plotting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

static NULL_CELL: CellValue = CellValue::Null;

/// The full parsed dataset, read-only after load.
///
/// Schema-optional by construction: nothing downstream requires any particular
/// column, and every column access degrades to `Null` cells when absent.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Column names in CSV header order.
    pub column_names: Vec<String>,
    /// All rows: column_name → value.
    pub rows: Vec<BTreeMap<String, CellValue>>,
}

impl Dataset {
    pub fn new(column_names: Vec<String>, rows: Vec<BTreeMap<String, CellValue>>) -> Self {
        Dataset { column_names, rows }
    }

    /// (rows, columns), pandas `df.shape`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.column_names.len())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_names.iter().any(|c| c == name)
    }

    /// Iterate the cells of one column, top to bottom. Missing cells read as Null.
    pub fn column<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a CellValue> + 'a {
        self.rows
            .iter()
            .map(move |row| row.get(name).unwrap_or(&NULL_CELL))
    }

    /// The non-null numeric values of a column, in row order.
    pub fn numeric_column(&self, name: &str) -> Vec<f64> {
        self.column(name).filter_map(CellValue::as_f64).collect()
    }

    /// Pandas-style inferred dtype label for a column.
    ///
    /// Follows `read_csv` promotion rules: integers with missing values become
    /// float64, bools mixed with anything (nulls included) become object, and
    /// an all-null column reads as float64 (a column of NaNs).
    pub fn dtype(&self, name: &str) -> &'static str {
        let mut any_null = false;
        let (mut ints, mut floats, mut bools, mut strings) = (0usize, 0usize, 0usize, 0usize);
        for cell in self.column(name) {
            match cell {
                CellValue::Integer(_) => ints += 1,
                CellValue::Float(_) => floats += 1,
                CellValue::Bool(_) => bools += 1,
                CellValue::String(_) => strings += 1,
                CellValue::Null => any_null = true,
            }
        }
        if strings > 0 {
            "object"
        } else if bools > 0 {
            if ints + floats == 0 && !any_null {
                "bool"
            } else {
                "object"
            }
        } else if floats > 0 {
            "float64"
        } else if ints > 0 {
            if any_null {
                "float64"
            } else {
                "int64"
            }
        } else {
            "float64"
        }
    }

    /// Names of the numeric (int64 / float64) columns, in header order.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.column_names
            .iter()
            .filter(|c| matches!(self.dtype(c), "int64" | "float64"))
            .cloned()
            .collect()
    }

    /// Frequency of each distinct value in a column, nulls counted as their own
    /// bucket. Sorted by descending count, ties by value.
    pub fn value_counts(&self, name: &str) -> Vec<(CellValue, usize)> {
        let mut counts: BTreeMap<CellValue, usize> = BTreeMap::new();
        for cell in self.column(name) {
            *counts.entry(cell.clone()).or_default() += 1;
        }
        let mut out: Vec<(CellValue, usize)> = counts.into_iter().collect();
        out.sort_by(|(va, ca), (vb, cb)| cb.cmp(ca).then_with(|| va.cmp(vb)));
        out
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
