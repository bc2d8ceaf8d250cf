//! Fixture derivation
//!
//! Turns a starting position into a complete [`Fixture`] by asking the oracle
//! for every legal move and recording the position each one leads to.
//!
//! # Algorithm
//!
//! 1. Parse the starting notation (fails with an invalid-position error)
//! 2. Enumerate legal moves in oracle order
//! 3. For each move, play it on a fresh copy of the starting board and
//!    serialize the successor
//! 4. Assemble the fixture, keeping the caller's starting notation verbatim
//!
//! The starting board is never mutated, so there is nothing to restore between
//! moves. With a deterministic oracle, building the same position twice yields
//! identical results.

use chess_rules::{MoveOracle, StandardChess};
use tracing::debug;

use crate::error::FixtureResult;
use crate::fixture::{Fixture, FixturePosition};

/// Builds fixtures with a particular rules oracle
#[derive(Debug, Clone, Default)]
pub struct FixtureBuilder<O = StandardChess> {
    oracle: O,
}

impl FixtureBuilder<StandardChess> {
    /// Builder for orthodox chess
    pub fn standard() -> Self {
        FixtureBuilder::new(StandardChess::new())
    }
}

impl<O: MoveOracle> FixtureBuilder<O> {
    pub fn new(oracle: O) -> Self {
        FixtureBuilder { oracle }
    }

    /// Derive a fixture from a starting position
    ///
    /// # Arguments
    ///
    /// * `fen` - Starting position, stored exactly as given
    /// * `description` - Fixture-level description
    /// * `start_description` - Description of the starting position
    ///
    /// # Errors
    ///
    /// Returns [`crate::FixtureError::InvalidPosition`] if `fen` does not parse
    /// or the oracle refuses one of its own moves.
    pub fn build(
        &self,
        fen: &str,
        description: Option<String>,
        start_description: Option<String>,
    ) -> FixtureResult<Fixture> {
        let board = self.oracle.parse(fen)?;
        let moves = self.oracle.legal_moves(&board);

        let mut results = Vec::with_capacity(moves.len());
        for mv in &moves {
            let notation = self.oracle.notation(&board, mv);
            let successor = self.oracle.play(&board, mv)?;
            results.push(FixturePosition::result(
                notation,
                self.oracle.serialize(&successor),
            ));
        }

        debug!("[BUILDER] {} results for {}", results.len(), fen);

        Ok(Fixture::new(
            description,
            FixturePosition::start(fen, start_description),
            results,
        ))
    }

    /// Notation of the color-mirrored equivalent of `fen`
    pub fn transposed_fen(&self, fen: &str) -> FixtureResult<String> {
        let board = self.oracle.parse(fen)?;
        let mirrored = self.oracle.transpose(&board)?;
        Ok(self.oracle.serialize(&mirrored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixtureError;

    const INITIAL: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_build_initial_position() {
        let builder = FixtureBuilder::standard();
        let fixture = builder
            .build(INITIAL, Some("opening".into()), Some("initial".into()))
            .unwrap();

        assert_eq!(fixture.start_fen(), INITIAL);
        assert_eq!(fixture.description(), Some("opening"));
        assert_eq!(fixture.start().description(), Some("initial"));
        assert_eq!(fixture.start().mv(), None);
        assert_eq!(fixture.results().len(), 20);
        assert!(fixture
            .results()
            .iter()
            .all(|r| r.mv().is_some() && r.description().is_none()));
    }

    #[test]
    fn test_build_keeps_start_notation_verbatim() {
        //! Counters and spacing are not normalised on the start position
        let builder = FixtureBuilder::standard();
        let fen = "4k3/8/8/8/8/8/8/4K3 w - - 12 40";
        let fixture = builder.build(fen, None, None).unwrap();
        assert_eq!(fixture.start_fen(), fen);
    }

    #[test]
    fn test_build_is_idempotent() {
        let builder = FixtureBuilder::standard();
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let first = builder.build(fen, None, None).unwrap();
        let second = builder.build(fen, None, None).unwrap();
        assert_eq!(first.results(), second.results());
        assert_eq!(first.results().len(), 48);
    }

    #[test]
    fn test_build_rejects_malformed_position() {
        let builder = FixtureBuilder::standard();
        let err = builder.build("rnbqkbnr/pppppppp w", None, None).unwrap_err();
        assert!(matches!(err, FixtureError::InvalidPosition(_)));
    }

    #[test]
    fn test_build_mated_position_has_no_results() {
        // Fool's mate
        let builder = FixtureBuilder::standard();
        let fen = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
        let fixture = builder.build(fen, None, None).unwrap();
        assert!(fixture.results().is_empty());
    }

    #[test]
    fn test_transposed_fen_of_initial_position() {
        let builder = FixtureBuilder::standard();
        assert_eq!(
            builder.transposed_fen(INITIAL).unwrap(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1"
        );
    }
}
