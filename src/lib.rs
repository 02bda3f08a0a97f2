//! Reporting utilities for cosmic-genome simulation results.
//!
//! Two run-to-completion tools share this library: `analyze_champion`
//! compares a champion constant set against our universe's values, and
//! `analyze_harmonics` summarizes per-harmonic fitness statistics and
//! renders a box plot. Aggregation is kept pure; file loading and chart
//! rendering live at the binary boundary.

pub mod config;
pub mod error;
pub mod genome;
pub mod harmonics;
pub mod plot;
pub mod report;
