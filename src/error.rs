//! Error types for fixture curation
//!
//! One taxonomy for every layer of the crate: position problems bubble up from
//! the rules crate, document problems from the JSON codec, and session problems
//! from file handling. None of these are retried; a human resolves each one.

use std::path::PathBuf;

use chess_rules::RulesError;
use thiserror::Error;

/// Errors that can occur while building, editing or persisting fixtures
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Position notation could not be parsed, or a move could not be played
    #[error(transparent)]
    InvalidPosition(#[from] RulesError),

    /// Fixture index outside the group
    #[error("Fixture index {index} out of range for group of {len}")]
    Index { index: isize, len: usize },

    /// Result index outside a fixture's results
    #[error("Result index {index} out of range for fixture with {len} results")]
    ResultIndex { index: usize, len: usize },

    /// Persisted document does not have the expected shape
    #[error("Malformed fixture document: {0}")]
    Format(#[from] serde_json::Error),

    /// Reading or writing a fixture file failed
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Save requested but the session has no file yet
    #[error("No file chosen for this fixture group")]
    NoFile,

    /// Group has unsaved changes and the caller chose not to discard them
    #[error("Fixture group has unsaved changes")]
    Unsaved,

    /// Starting position already present and the duplicate policy rejects it
    #[error("Position already in group as fixture {index}: {fen}")]
    Duplicate { fen: String, index: usize },
}

impl FixtureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixtureError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for fixture operations
pub type FixtureResult<T> = Result<T, FixtureError>;
