//! Integration tests for fixture derivation with real chess rules
//!
//! Exercises the builder, the group's bulk operations and the JSON codec
//! together, using `StandardChess` as the oracle.

use fen_fixtures::{persistence, FixtureBuilder, FixtureError, FixtureGroup};

const INITIAL: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const INITIAL_TRANSPOSED: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn group_with(fens: &[&str]) -> FixtureGroup {
    let builder = FixtureBuilder::standard();
    let mut group = FixtureGroup::new(Some("integration".into()));
    for fen in fens {
        group.add(builder.build(fen, None, None).unwrap());
    }
    group
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_result_count_matches_legal_moves() {
    //! One result per legal move, start notation kept verbatim
    let builder = FixtureBuilder::standard();
    for (fen, expected) in [(INITIAL, 20), (KIWIPETE, 48)] {
        let fixture = builder.build(fen, None, None).unwrap();
        assert_eq!(fixture.start_fen(), fen);
        assert_eq!(fixture.results().len(), expected, "for {}", fen);
    }
}

#[test]
fn test_results_name_their_moves() {
    let builder = FixtureBuilder::standard();
    let fixture = builder.build(INITIAL, None, None).unwrap();

    let e4 = fixture
        .results()
        .iter()
        .find(|r| r.mv() == Some("e4"))
        .expect("e4 should be generated");
    assert_eq!(
        e4.fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
    assert!(fixture.results().iter().any(|r| r.mv() == Some("Nf3")));
}

#[test]
fn test_castling_appears_in_results() {
    let builder = FixtureBuilder::standard();
    let fixture = builder.build(KIWIPETE, None, None).unwrap();
    let moves: Vec<&str> = fixture.results().iter().filter_map(|r| r.mv()).collect();
    assert!(moves.contains(&"O-O"));
    assert!(moves.contains(&"O-O-O"));
}

// ============================================================================
// Transpositions
// ============================================================================

#[test]
fn test_initial_position_transposition_membership() {
    //! The mirrored initial position differs only in side to move
    let mut group = group_with(&[INITIAL]);
    assert!(!group.contains(INITIAL_TRANSPOSED));

    let added = group
        .add_missing_transpositions(&FixtureBuilder::standard())
        .unwrap();

    assert_eq!(added, 1);
    assert!(group.contains(INITIAL_TRANSPOSED));
    assert_eq!(group.fixtures()[1].start_fen(), INITIAL_TRANSPOSED);
    assert_eq!(
        group.fixtures()[1].description(),
        Some(format!("Transpose of {}", INITIAL).as_str())
    );
    assert_eq!(group.fixtures()[1].results().len(), 20);
}

#[test]
fn test_repeated_transposition_adds_nothing_new() {
    let builder = FixtureBuilder::standard();
    let mut group = group_with(&[INITIAL, KIWIPETE]);

    assert_eq!(group.add_missing_transpositions(&builder).unwrap(), 2);
    assert_eq!(group.add_missing_transpositions(&builder).unwrap(), 0);
    assert_eq!(group.add_missing_transpositions(&builder).unwrap(), 0);
    assert_eq!(group.len(), 4);
}

#[test]
fn test_transposed_description_swaps_colors() {
    let builder = FixtureBuilder::standard();
    let mut group = FixtureGroup::new(None);
    group.add(
        builder
            .build(KIWIPETE, None, Some("White can castle both ways".into()))
            .unwrap(),
    );

    group.add_missing_transpositions(&builder).unwrap();

    assert_eq!(
        group.fixtures()[1].start().description(),
        Some("Black can castle both ways")
    );
}

#[test]
fn test_invalid_start_aborts_bulk_operations() {
    let builder = FixtureBuilder::standard();
    let json = format!(
        r#"{{"testCases": [
            {{"start": {{"fen": "{}"}}, "results": []}},
            {{"start": {{"fen": "8/8/8/8/8/8/8/8 w - - 0 1"}}, "results": []}}
        ]}}"#,
        INITIAL
    );
    let mut group = persistence::from_str(&json).unwrap();
    let before = group.clone();

    assert!(matches!(
        group.regenerate_all(&builder),
        Err(FixtureError::InvalidPosition(_))
    ));
    assert!(matches!(
        group.add_missing_transpositions(&builder),
        Err(FixtureError::InvalidPosition(_))
    ));
    assert_eq!(group, before);
}

// ============================================================================
// Regeneration and persistence
// ============================================================================

#[test]
fn test_regenerate_fills_hand_written_fixture() {
    let json = format!(
        r#"{{"description": "hand written", "testCases": [
            {{"description": "opening", "start": {{"description": "White to move", "fen": "{}"}},
              "results": [{{"description": "best by test", "move": "e4", "fen": "x"}}]}}
        ]}}"#,
        INITIAL
    );
    let mut group = persistence::from_str(&json).unwrap();

    let count = group.regenerate_all(&FixtureBuilder::standard()).unwrap();

    assert_eq!(count, 1);
    let fixture = &group.fixtures()[0];
    assert_eq!(fixture.description(), Some("opening"));
    assert_eq!(fixture.start().description(), Some("White to move"));
    assert_eq!(fixture.results().len(), 20);
    assert!(fixture.results().iter().all(|r| r.description().is_none()));
    assert!(group.is_modified());
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("suite.json");

    let mut group = group_with(&[INITIAL, KIWIPETE]);
    group
        .add_missing_transpositions(&FixtureBuilder::standard())
        .unwrap();
    assert!(group.is_modified());

    persistence::save(&mut group, &path).unwrap();
    assert!(!group.is_modified());

    let loaded = persistence::load(&path).unwrap();
    assert_eq!(loaded, group);
    assert!(!loaded.is_modified());
}

#[test]
fn test_loading_missing_or_malformed_files_fails() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        persistence::load(&missing),
        Err(FixtureError::Io { .. })
    ));

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, r#"{"testCases": [{"start": {}}]}"#).unwrap();
    assert!(matches!(
        persistence::load(&broken),
        Err(FixtureError::Format(_))
    ));
}
