//! report.rs — Console formatting for the analysis tables.
//!
//! The comparator prints scientific notation with six fractional digits,
//! the summarizer fixed-point with six decimals. Absent values (a constant
//! present in only one set) render as "n/d", never as a fake number.

use crate::genome::ComparisonRow;
use crate::harmonics::HarmonicSummary;

pub const NOT_AVAILABLE: &str = "n/d";

pub fn sci(v: f64) -> String {
    format!("{v:.6e}")
}

pub fn fixed(v: f64) -> String {
    format!("{v:.6}")
}

fn opt_sci(v: Option<f64>) -> String {
    v.map(sci).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Render the champion/reference comparison as an aligned text table.
pub fn comparison_table(rows: &[ComparisonRow]) -> String {
    const HEADERS: [&str; 3] = ["Champion_Universe", "Our_Universe", "Difference_%"];

    let cells: Vec<(String, [String; 3])> = rows
        .iter()
        .map(|r| {
            (
                r.name.clone(),
                [opt_sci(r.champion), opt_sci(r.reference), opt_sci(r.diff_pct)],
            )
        })
        .collect();

    let name_width = cells.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let mut widths = [0usize; 3];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.len();
    }
    for (_, values) in &cells {
        for (i, value) in values.iter().enumerate() {
            widths[i] = widths[i].max(value.len());
        }
    }

    let mut out = String::new();
    out.push_str(&" ".repeat(name_width));
    for (i, header) in HEADERS.iter().enumerate() {
        out.push_str(&format!("  {header:>width$}", width = widths[i]));
    }
    out.push('\n');
    for (name, values) in &cells {
        out.push_str(&format!("{name:<name_width$}"));
        for (i, value) in values.iter().enumerate() {
            out.push_str(&format!("  {value:>width$}", width = widths[i]));
        }
        out.push('\n');
    }
    out
}

/// Render the per-harmonic summary, already sorted by the caller.
pub fn summary_table(rows: &[HarmonicSummary]) -> String {
    const HEADERS: [&str; 4] = ["harmonic_n", "count", "mean", "max"];

    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|s| {
            [
                s.harmonic_n.to_string(),
                s.count.to_string(),
                fixed(s.mean_fitness),
                fixed(s.max_fitness),
            ]
        })
        .collect();

    let mut widths = [0usize; 4];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.len();
    }
    for values in &cells {
        for (i, value) in values.iter().enumerate() {
            widths[i] = widths[i].max(value.len());
        }
    }

    let mut out = String::new();
    for (i, header) in HEADERS.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{header:>width$}", width = widths[i]));
    }
    out.push('\n');
    for values in &cells {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(&format!("{value:>width$}", width = widths[i]));
        }
        out.push('\n');
    }
    out
}
