//! Error types for dirprune.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PruneError>;

#[derive(Debug, Error)]
pub enum PruneError {
    /// Invalid invocation, reported before any scanning happens.
    #[error("{0}")]
    Usage(String),

    #[error("failed to scan {}: {source}", path.display())]
    Scan { path: PathBuf, source: io::Error },

    #[error("failed to measure {name}: {source}")]
    Measure { name: String, source: io::Error },

    #[error("failed to remove {name}: {source}")]
    Remove { name: String, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}
