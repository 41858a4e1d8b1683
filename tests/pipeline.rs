use std::fs;
use std::io::Write;

use tempfile::{NamedTempFile, TempDir};

use cognitive_explorer::data::loader::load_csv;
use cognitive_explorer::locate;
use cognitive_explorer::report;
use cognitive_explorer::viz::charts::{self, Chart};
use cognitive_explorer::viz::chart_sequence;

const CSV_NAME: &str = "simulated_cognitive_data.csv";

fn csv_fixture(content: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "{content}").unwrap();
    tmp
}

/// Spec scenario: a CSV with a single `mental_effort` column and ten rows
/// produces a (10, 1) report, exactly one chart spec, and skips the rest
/// without errors.
#[test]
fn effort_only_dataset_runs_the_whole_pipeline() {
    let csv: String = std::iter::once("mental_effort".to_string())
        .chain((1..=10).map(|i| i.to_string()))
        .collect::<Vec<_>>()
        .join("\n");
    let tmp = csv_fixture(&csv);

    let ds = load_csv(tmp.path()).unwrap();
    assert_eq!(ds.shape(), (10, 1));

    let text = report::overview(&ds);
    assert!(text.contains("Rows, Columns: (10, 1)"));
    assert!(text.contains("Columns: [\"mental_effort\"]"));
    assert!(text.contains("=== DESCRIPTIVE STATISTICS (numeric only) ==="));
    assert!(!text.contains("VALUE COUNTS"));

    let effort = charts::effort_histogram(&ds).expect("effort histogram renders");
    assert_eq!(effort.bins.iter().map(|b| b.count).sum::<usize>(), 10);
    assert!(charts::duration_histogram(&ds).is_none());
    assert!(charts::overload_counts(&ds).is_none());
    assert!(charts::correlation_heatmap(&ds).is_none());

    let sequence = chart_sequence(&ds);
    assert_eq!(sequence.len(), 1);
    assert!(matches!(sequence[0], Chart::Histogram(_)));
}

#[test]
fn full_dataset_produces_every_chart() {
    let tmp = csv_fixture(
        "mental_effort,task_duration_min,cognitive_overload\n\
         7,42.5,1\n\
         3,12.0,0\n\
         5,30.0,0\n\
         9,55.5,1\n\
         4,18.0,0\n\
         8,47.0,1\n",
    );

    let ds = load_csv(tmp.path()).unwrap();
    assert_eq!(ds.shape(), (6, 3));

    let text = report::overview(&ds);
    assert!(text.contains("=== cognitive_overload VALUE COUNTS ==="));
    assert!(text.contains("0    3"));
    assert!(text.contains("1    3"));

    assert!(charts::effort_histogram(&ds).is_some());
    assert!(charts::duration_histogram(&ds).is_some());

    let counts = charts::overload_counts(&ds).unwrap();
    assert_eq!(
        counts.bars,
        vec![("0".to_string(), 3), ("1".to_string(), 3)]
    );

    let heatmap = charts::correlation_heatmap(&ds).unwrap();
    assert_eq!(heatmap.columns.len(), 3);
    // Effort and duration move together in this fixture.
    assert!(heatmap.values[0][1] > 0.9);

    // All four charts queue up for the single display window, in order.
    let sequence = chart_sequence(&ds);
    let titles: Vec<&str> = sequence.iter().map(Chart::title).collect();
    assert_eq!(
        titles,
        vec![
            "Distribution of Reported Mental Effort",
            "Task Duration (minutes)",
            "Counts: Cognitive Overload (0 = No, 1 = Yes)",
            "Correlation Heatmap (numeric columns)",
        ]
    );
}

#[test]
fn nan_cells_do_not_poison_statistics() {
    let tmp = csv_fixture(
        "mental_effort,task_duration_min\n\
         2,11.0\n\
         4,NaN\n\
         6,29.0\n\
         8,41.0\n",
    );
    let ds = load_csv(tmp.path()).unwrap();

    let text = report::overview(&ds);
    assert!(text.contains("count"));
    // Three complete duration observations, the NaN row excluded.
    assert_eq!(ds.numeric_column("task_duration_min").len(), 3);

    let heatmap = charts::correlation_heatmap(&ds).unwrap();
    assert!(heatmap.values[0][1].is_finite());
    assert!(heatmap.values[0][1] > 0.9);
}

#[test]
fn locator_feeds_the_loader() {
    let root = TempDir::new().unwrap();
    let base = root.path().join("bin");
    let data_dir = root.path().join("data");
    fs::create_dir_all(&base).unwrap();
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join(CSV_NAME),
        "mental_effort,cognitive_overload\n6,1\n2,0\n",
    )
    .unwrap();

    // `bin/../data` is the second candidate.
    let path = locate::resolve_from(&base, CSV_NAME).expect("locator finds the CSV");
    let ds = load_csv(&path).unwrap();
    assert_eq!(ds.shape(), (2, 2));
    assert!(charts::overload_counts(&ds).is_some());
}

#[test]
fn misspelled_columns_are_simply_absent() {
    // A file whose duration column is misspelled: the duration histogram must
    // be skipped silently, everything else unaffected.
    let tmp = csv_fixture("mental_effort,tas_duration_min\n5,30\n7,40\n");
    let ds = load_csv(tmp.path()).unwrap();

    assert!(charts::effort_histogram(&ds).is_some());
    assert!(charts::duration_histogram(&ds).is_none());
    // Both columns are still numeric, so the heatmap may render.
    assert!(charts::correlation_heatmap(&ds).is_some());
}
