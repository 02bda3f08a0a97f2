//! genome.rs — Named constant sets and the champion/reference comparison.
//!
//! A constant set is a flat JSON object mapping constant name to value,
//! as written by the evolutionary mode of the simulator. The comparison
//! aligns the two sets on the union of their names; a name present on one
//! side only yields a row with the other side absent instead of a crash.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::AnalysisError;

/// Constant name → value, ordered by name.
pub type ConstantSet = BTreeMap<String, f64>;

/// One aligned row of the champion/reference comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub name: String,
    pub champion: Option<f64>,
    pub reference: Option<f64>,
    /// (champion − reference) / reference × 100. Absent when either side
    /// is missing. A zero reference yields ±inf on purpose; the formatter
    /// prints it as-is rather than masking it.
    pub diff_pct: Option<f64>,
}

/// Load a constant set from a JSON file.
///
/// An absent file is `MissingFile`; a present file whose contents are not
/// a `name → number` object is `DataFormat`.
pub fn load_constant_set(path: &Path) -> Result<ConstantSet, AnalysisError> {
    if !path.exists() {
        return Err(AnalysisError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path)?;
    let set: ConstantSet =
        serde_json::from_str(&text).map_err(|err| AnalysisError::DataFormat {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
    debug!(n = set.len(), path = %path.display(), "loaded constant set");
    Ok(set)
}

/// Align two constant sets on the union of their names, ordered by name.
pub fn compare_sets(champion: &ConstantSet, reference: &ConstantSet) -> Vec<ComparisonRow> {
    let mut names: Vec<&str> = champion
        .keys()
        .chain(reference.keys())
        .map(String::as_str)
        .collect();
    names.sort_unstable();
    names.dedup();

    names
        .into_iter()
        .map(|name| {
            let c = champion.get(name).copied();
            let r = reference.get(name).copied();
            let diff_pct = match (c, r) {
                (Some(c), Some(r)) => Some((c - r) / r * 100.0),
                _ => None,
            };
            ComparisonRow {
                name: name.to_string(),
                champion: c,
                reference: r,
                diff_pct,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(&str, f64)]) -> ConstantSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn diff_pct_matches_definition() {
        let champion = set(&[("alpha_s", 0.118)]);
        let reference = set(&[("alpha_s", 0.117)]);
        let rows = compare_sets(&champion, &reference);
        assert_eq!(rows.len(), 1);
        let expected = (0.118 - 0.117) / 0.117 * 100.0;
        let diff = rows[0].diff_pct.unwrap();
        assert!((diff - expected).abs() < 1e-12);
        assert!((diff - 0.854_700_855).abs() < 1e-6);
    }

    #[test]
    fn union_alignment_keeps_one_sided_names() {
        let champion = set(&[("g", 6.7e-11), ("alpha_s", 0.118)]);
        let reference = set(&[("alpha_s", 0.117), ("mass_electron", 9.1e-31)]);
        let rows = compare_sets(&champion, &reference);

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["alpha_s", "g", "mass_electron"]);

        let g = rows.iter().find(|r| r.name == "g").unwrap();
        assert!(g.champion.is_some());
        assert!(g.reference.is_none());
        assert!(g.diff_pct.is_none());

        let me = rows.iter().find(|r| r.name == "mass_electron").unwrap();
        assert!(me.champion.is_none());
        assert!(me.diff_pct.is_none());
    }

    #[test]
    fn zero_reference_gives_infinite_diff() {
        let champion = set(&[("spatial_curvature", 0.3)]);
        let reference = set(&[("spatial_curvature", 0.0)]);
        let rows = compare_sets(&champion, &reference);
        let diff = rows[0].diff_pct.unwrap();
        assert!(diff.is_infinite());
        assert!(diff > 0.0);
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let path = Path::new("/definitely/not/here/champion_genome.json");
        match load_constant_set(path) {
            Err(AnalysisError::MissingFile { path: p }) => assert_eq!(p, path),
            other => panic!("expected MissingFile, got {other:?}"),
        }
    }

    #[test]
    fn load_rejects_non_numeric_values() {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "armonico_genome_test_{}.json",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::write(&path, r#"{"alpha_s": "fast"}"#).unwrap();

        match load_constant_set(&path) {
            Err(AnalysisError::DataFormat { .. }) => {}
            other => panic!("expected DataFormat, got {other:?}"),
        }
        let _ = fs::remove_file(&path);
    }
}
