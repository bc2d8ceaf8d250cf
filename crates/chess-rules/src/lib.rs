//! Chess rules collaborators for fixture derivation
//!
//! Wraps `shakmaty` behind the [`MoveOracle`] trait: FEN parsing and
//! serialization, color transposition, and legal-move enumeration.
//!
//! ```rust,ignore
//! use chess_rules::{MoveOracle, StandardChess};
//!
//! let oracle = StandardChess::new();
//! let board = oracle.parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")?;
//! assert_eq!(oracle.legal_moves(&board).len(), 20);
//! ```

pub mod error;
pub mod oracle;
pub mod transpose;

pub use error::{RulesError, RulesResult};
pub use oracle::{MoveOracle, StandardChess};
pub use transpose::transpose_fen;
