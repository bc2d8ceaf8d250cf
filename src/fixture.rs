//! Fixture value types
//!
//! A [`Fixture`] pairs one starting position with every position reachable from
//! it by a single legal move. Each position entry is a [`FixturePosition`].
//!
//! Both types are plain values: fields are fixed at construction and only read
//! afterwards. Field names on the wire are part of the persisted format (see
//! [`crate::persistence`]).

use serde::{Deserialize, Serialize};

/// One position inside a fixture
///
/// The starting position has no `move`; every resulting position names the move
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixturePosition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(rename = "move", default, skip_serializing_if = "Option::is_none")]
    mv: Option<String>,

    fen: String,
}

impl FixturePosition {
    /// Starting position of a fixture
    pub fn start(fen: impl Into<String>, description: Option<String>) -> Self {
        FixturePosition {
            description,
            mv: None,
            fen: fen.into(),
        }
    }

    /// Position reached by playing `mv`
    pub fn result(mv: impl Into<String>, fen: impl Into<String>) -> Self {
        FixturePosition {
            description: None,
            mv: Some(mv.into()),
            fen: fen.into(),
        }
    }

    /// Result position carrying a hand-written annotation
    pub fn annotated_result(
        mv: impl Into<String>,
        fen: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        FixturePosition {
            description: Some(description.into()),
            mv: Some(mv.into()),
            fen: fen.into(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Move notation, `None` for a starting position
    pub fn mv(&self) -> Option<&str> {
        self.mv.as_deref()
    }

    pub fn fen(&self) -> &str {
        &self.fen
    }
}

/// One test case: a start position and its one-move successors
///
/// `results` keeps the oracle's enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    start: FixturePosition,

    #[serde(default)]
    results: Vec<FixturePosition>,
}

impl Fixture {
    pub fn new(
        description: Option<String>,
        start: FixturePosition,
        results: Vec<FixturePosition>,
    ) -> Self {
        Fixture {
            description,
            start,
            results,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn start(&self) -> &FixturePosition {
        &self.start
    }

    /// Shorthand for `start().fen()`
    pub fn start_fen(&self) -> &str {
        self.start.fen()
    }

    pub fn results(&self) -> &[FixturePosition] {
        &self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_has_no_move() {
        let start =
            FixturePosition::start("8/8/8/8/8/8/8/K6k w - - 0 1", Some("bare kings".into()));
        assert_eq!(start.mv(), None);
        assert_eq!(start.description(), Some("bare kings"));
    }

    #[test]
    fn test_result_position_has_move_and_no_description() {
        let result = FixturePosition::result("Kb1", "8/8/8/8/8/8/8/1K5k b - - 1 1");
        assert_eq!(result.mv(), Some("Kb1"));
        assert_eq!(result.description(), None);
    }

    #[test]
    fn test_absent_fields_are_omitted_on_the_wire() {
        let fixture = Fixture::new(
            None,
            FixturePosition::start("8/8/8/8/8/8/8/K6k w - - 0 1", None),
            vec![FixturePosition::result("Kb1", "8/8/8/8/8/8/8/1K5k b - - 1 1")],
        );
        let json = serde_json::to_value(&fixture).unwrap();

        assert!(json.get("description").is_none());
        assert!(json["start"].get("move").is_none());
        assert!(json["start"].get("description").is_none());
        assert_eq!(json["results"][0]["move"], "Kb1");
    }
}
