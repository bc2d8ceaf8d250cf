//! Move-generator fixture curation
//!
//! Builds and maintains JSON suites of chess test fixtures. Each fixture pairs a
//! starting position (FEN) with every position one legal move away, so a move
//! generator under test can be checked against the full expected set.
//!
//! # Modules
//!
//! - [`builder`]: derive a fixture from a starting position
//! - [`group`]: ordered fixture store with transposition and regeneration
//! - [`text`]: color-word swapping for transposed descriptions
//! - [`persistence`]: JSON load/save
//! - [`session`]: current file and save-prompt protocol for front ends
//! - [`config`]: fixture directory and duplicate policy
//!
//! Chess rules come from the `chess-rules` workspace crate.

pub mod builder;
pub mod config;
pub mod error;
pub mod fixture;
pub mod group;
pub mod persistence;
pub mod session;
pub mod text;

pub use builder::FixtureBuilder;
pub use config::{DuplicatePolicy, EditorConfig};
pub use error::{FixtureError, FixtureResult};
pub use fixture::{Fixture, FixturePosition};
pub use group::FixtureGroup;
pub use session::{Session, UnsavedChoice};
pub use text::swap_color_words;
