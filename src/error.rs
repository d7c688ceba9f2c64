//! Error types for loading, configuration, and invariant checks.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnealError {
    /// Job data could not be read from the underlying source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A job record was missing or malformed. Optimization never starts
    /// over partially loaded data.
    #[error("invalid job data at line {line}: {reason}")]
    Input { line: usize, reason: String },

    /// A configuration value that would make the search ill-defined,
    /// detected before any worker is spawned.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A solution's bookkeeping no longer matches its assignment. This
    /// indicates a bug in the move or cost update, not a data problem;
    /// it is fatal and never retried.
    #[error("invariant violation: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, AnnealError>;
