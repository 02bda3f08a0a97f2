//! error.rs — Failure taxonomy for the analysis utilities.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the load steps of both analysis tools.
///
/// `MissingFile` is the only condition the binaries handle explicitly
/// (clean early exit with a user-facing message); everything else
/// propagates to the process boundary.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no se pudo encontrar el archivo {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("formato de datos inválido en {}: {message}", path.display())]
    DataFormat { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
