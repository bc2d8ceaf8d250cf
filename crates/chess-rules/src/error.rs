//! Error types for the rules crate
//!
//! Covers the two ways the collaborators can refuse work: a position string that
//! does not describe a legal board, and a move that does not belong to the board
//! it is played on.

use thiserror::Error;

/// Errors that can occur while parsing positions or playing moves
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Malformed or illegal position notation
    #[error("Invalid position '{fen}': {reason}")]
    InvalidPosition { fen: String, reason: String },

    /// Move is not legal on the board it was played on
    #[error("Illegal move {notation} in position '{fen}'")]
    IllegalMove { notation: String, fen: String },
}

impl RulesError {
    pub(crate) fn invalid(fen: &str, reason: impl ToString) -> Self {
        RulesError::InvalidPosition {
            fen: fen.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for rules operations
pub type RulesResult<T> = Result<T, RulesError>;
