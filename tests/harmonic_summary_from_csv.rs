use std::fs;
use std::path::PathBuf;

use armonico::error::AnalysisError;
use armonico::harmonics::{load_trials, summarize};
use armonico::report::summary_table;

fn unique_path(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!(
        "armonico_harmonics_test_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    p
}

#[test]
fn summary_from_csv_matches_grouped_stats() {
    let path = unique_path("results.csv");
    fs::write(
        &path,
        "harmonic_n,fitness\n1,0.5\n1,0.9\n2,0.7\n",
    )
    .unwrap();

    let records = load_trials(&path).unwrap();
    assert_eq!(records.len(), 3);

    let summary = summarize(&records);
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].harmonic_n, 1);
    assert_eq!(summary[0].count, 2);
    assert!((summary[0].mean_fitness - 0.7).abs() < 1e-12);
    assert!((summary[0].max_fitness - 0.9).abs() < 1e-12);
    assert_eq!(summary[1].harmonic_n, 2);
    assert_eq!(summary[1].count, 1);

    let table = summary_table(&summary);
    assert!(table.contains("0.900000"));
    assert!(table.contains("0.700000"));

    let _ = fs::remove_file(&path);
}

#[test]
fn extra_columns_are_tolerated() {
    // The simulator writes more columns than the summary needs.
    let path = unique_path("wide.csv");
    fs::write(
        &path,
        "sample_id,harmonic_n,alpha,fitness,complexity_level\n0,3,0.0073,0.42,2\n1,3,0.0072,0.58,3\n",
    )
    .unwrap();

    let records = load_trials(&path).unwrap();
    assert_eq!(records.len(), 2);
    let summary = summarize(&records);
    assert_eq!(summary[0].harmonic_n, 3);
    assert_eq!(summary[0].count, 2);
    assert!((summary[0].max_fitness - 0.58).abs() < 1e-12);

    let _ = fs::remove_file(&path);
}

#[test]
fn tied_max_fitness_preserves_file_order() {
    let path = unique_path("ties.csv");
    fs::write(
        &path,
        "harmonic_n,fitness\n9,0.6\n2,0.6\n2,0.1\n9,0.3\n",
    )
    .unwrap();

    let records = load_trials(&path).unwrap();
    let summary = summarize(&records);
    let order: Vec<i64> = summary.iter().map(|s| s.harmonic_n).collect();
    assert_eq!(order, [9, 2]);

    let _ = fs::remove_file(&path);
}

#[test]
fn missing_results_file_is_reported_by_name() {
    let path = unique_path("never_written.csv");
    match load_trials(&path) {
        Err(AnalysisError::MissingFile { path: p }) => assert_eq!(p, path),
        other => panic!("expected MissingFile, got {other:?}"),
    }
}

#[test]
fn non_numeric_fitness_is_a_data_format_error() {
    let path = unique_path("bad_fitness.csv");
    fs::write(&path, "harmonic_n,fitness\n1,viable\n").unwrap();

    match load_trials(&path) {
        Err(AnalysisError::DataFormat { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected DataFormat, got {other:?}"),
    }
    let _ = fs::remove_file(&path);
}

#[test]
fn missing_required_column_is_a_data_format_error() {
    let path = unique_path("no_fitness.csv");
    fs::write(&path, "harmonic_n,score\n1,0.5\n").unwrap();

    match load_trials(&path) {
        Err(AnalysisError::DataFormat { .. }) => {}
        other => panic!("expected DataFormat, got {other:?}"),
    }
    let _ = fs::remove_file(&path);
}
