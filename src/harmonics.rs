//! harmonics.rs — Trial records and the per-harmonic fitness summary.
//!
//! Trials come from `harmonic_results.csv`. The file may carry any number
//! of extra columns; only `harmonic_n` and `fitness` are required. Groups
//! are formed in first-encounter order and then stably sorted by max
//! fitness, so ties keep the order the harmonics appeared in the file.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::AnalysisError;

/// One simulation trial, deserialized by header name.
#[derive(Debug, Clone, Deserialize)]
pub struct TrialRecord {
    pub harmonic_n: i64,
    pub fitness: f64,
}

/// Aggregate statistics for one harmonic group.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicSummary {
    pub harmonic_n: i64,
    pub count: usize,
    pub mean_fitness: f64,
    pub max_fitness: f64,
}

/// Load trial records from a CSV file with at least `harmonic_n` and
/// `fitness` columns.
pub fn load_trials(path: &Path) -> Result<Vec<TrialRecord>, AnalysisError> {
    if !path.exists() {
        return Err(AnalysisError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let mut reader = csv::Reader::from_path(path).map_err(|err| AnalysisError::DataFormat {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let mut records = Vec::new();
    for row in reader.deserialize::<TrialRecord>() {
        let record = row.map_err(|err| AnalysisError::DataFormat {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        records.push(record);
    }
    debug!(n = records.len(), path = %path.display(), "loaded trial records");
    Ok(records)
}

/// Group trials by harmonic and compute count/mean/max of fitness,
/// sorted by max fitness descending. The sort is stable: groups with
/// equal max fitness keep their first-encounter order.
pub fn summarize(records: &[TrialRecord]) -> Vec<HarmonicSummary> {
    let mut order: Vec<i64> = Vec::new();
    let mut acc: HashMap<i64, (usize, f64, f64)> = HashMap::new();
    for record in records {
        let entry = acc.entry(record.harmonic_n).or_insert_with(|| {
            order.push(record.harmonic_n);
            (0, 0.0, f64::NEG_INFINITY)
        });
        entry.0 += 1;
        entry.1 += record.fitness;
        entry.2 = entry.2.max(record.fitness);
    }

    let mut out: Vec<HarmonicSummary> = order
        .into_iter()
        .map(|harmonic_n| {
            let (count, sum, max) = acc[&harmonic_n];
            HarmonicSummary {
                harmonic_n,
                count,
                mean_fitness: sum / count as f64,
                max_fitness: max,
            }
        })
        .collect();

    out.sort_by(|a, b| {
        b.max_fitness
            .partial_cmp(&a.max_fitness)
            .unwrap_or(Ordering::Equal)
    });
    out
}

/// Fitness values per harmonic, ascending by harmonic label. Feeds the
/// box plot, which wants one category per label on the x axis.
pub fn fitness_by_harmonic(records: &[TrialRecord]) -> Vec<(i64, Vec<f64>)> {
    let mut groups: HashMap<i64, Vec<f64>> = HashMap::new();
    for record in records {
        groups
            .entry(record.harmonic_n)
            .or_default()
            .push(record.fitness);
    }
    let mut out: Vec<(i64, Vec<f64>)> = groups.into_iter().collect();
    out.sort_by_key(|(harmonic_n, _)| *harmonic_n);
    out
}
