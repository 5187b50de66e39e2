use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all efftree operations.
#[derive(Debug, Error, Diagnostic)]
pub enum EfftreeError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed manifest (e.g. package.json).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check that the package.json exists and is valid JSON"))]
    Manifest { message: String },

    /// Dependency resolution failed.
    #[error("Dependency resolution failed: {message}")]
    Resolution { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type EfftreeResult<T> = miette::Result<T>;
