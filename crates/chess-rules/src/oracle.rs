//! Legal-move oracle
//!
//! The [`MoveOracle`] trait is the seam between fixture derivation and chess
//! rules. It bundles the position codec (parse, serialize, transpose) with move
//! enumeration, so a fixture builder only ever talks to one collaborator.
//!
//! # Playing moves
//!
//! [`MoveOracle::play`] returns a successor board and leaves its input alone.
//! Enumerating successors therefore needs no apply/rollback bookkeeping: every
//! move is played on its own copy of the starting board.
//!
//! # Implementations
//!
//! - [`StandardChess`]: orthodox chess backed by `shakmaty`

use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Move, Position};
use tracing::trace;

use crate::error::{RulesError, RulesResult};
use crate::transpose::transpose_fen;

/// Position codec and move enumeration for one game's rules
///
/// Implementations must be deterministic: the same board always yields the same
/// moves in the same order, and the same move always yields the same successor.
pub trait MoveOracle {
    /// Full board state, including side to move and counters
    type Board: Clone;
    /// One legal move on a particular board
    type Move;

    /// Parse position notation into a board
    fn parse(&self, fen: &str) -> RulesResult<Self::Board>;

    /// Serialize a board back to position notation
    fn serialize(&self, board: &Self::Board) -> String;

    /// Color-mirrored equivalent of a board
    fn transpose(&self, board: &Self::Board) -> RulesResult<Self::Board>;

    /// Legal moves in enumeration order
    fn legal_moves(&self, board: &Self::Board) -> Vec<Self::Move>;

    /// Human-readable notation of a move played on `board`
    fn notation(&self, board: &Self::Board, mv: &Self::Move) -> String;

    /// Successor of `board` after `mv`
    fn play(&self, board: &Self::Board, mv: &Self::Move) -> RulesResult<Self::Board>;
}

/// Orthodox chess rules
///
/// Moves are named in SAN without check suffixes (`e4`, `Nf3`, `O-O`, `exd6`).
/// Serialized positions always carry the en-passant target after a double pawn
/// push, matching the FEN most move generators emit.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

impl StandardChess {
    pub fn new() -> Self {
        StandardChess
    }
}

impl MoveOracle for StandardChess {
    type Board = Chess;
    type Move = Move;

    fn parse(&self, fen: &str) -> RulesResult<Chess> {
        let setup: Fen = fen
            .trim()
            .parse()
            .map_err(|e| RulesError::invalid(fen, e))?;

        setup
            .into_position(CastlingMode::Standard)
            .map_err(|e| RulesError::invalid(fen, e))
    }

    fn serialize(&self, board: &Chess) -> String {
        Fen::from_position(board.clone(), EnPassantMode::Always).to_string()
    }

    fn transpose(&self, board: &Chess) -> RulesResult<Chess> {
        let mirrored = transpose_fen(&self.serialize(board))?;
        trace!("[RULES] Transposed board to {}", mirrored);
        self.parse(&mirrored)
    }

    fn legal_moves(&self, board: &Chess) -> Vec<Move> {
        board.legal_moves().into_iter().collect()
    }

    fn notation(&self, board: &Chess, mv: &Move) -> String {
        San::from_move(board, mv).to_string()
    }

    fn play(&self, board: &Chess, mv: &Move) -> RulesResult<Chess> {
        board
            .clone()
            .play(mv)
            .map_err(|_| RulesError::IllegalMove {
                notation: mv.to_string(),
                fen: self.serialize(board),
            })
    }
}
