//! Fixture group store
//!
//! A [`FixtureGroup`] is the unit of persistence: an optional description and an
//! ordered list of fixtures. It also tracks whether it has changed since it was
//! last loaded or saved.
//!
//! # Duplicates
//!
//! Starting positions are compared as exact strings. [`FixtureGroup::add`]
//! appends unconditionally; callers that care about duplicates check
//! [`FixtureGroup::position_of`] first (see [`crate::session::Session::add_position`]).
//!
//! # Bulk operations
//!
//! - [`FixtureGroup::add_missing_transpositions`] derives the color-mirrored
//!   fixture for every start position that lacks one
//! - [`FixtureGroup::regenerate_all`] rebuilds every fixture from its start
//!   position
//!
//! Both build the complete replacement list before touching the group, so a
//! failure part way through leaves the group as it was.
//!
//! # Modified flag
//!
//! Every mutating method sets `modified`. Only [`FixtureGroup::mark_saved`]
//! clears it, and a freshly loaded group starts clean.

use chess_rules::MoveOracle;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::builder::FixtureBuilder;
use crate::error::{FixtureError, FixtureResult};
use crate::fixture::{Fixture, FixturePosition};
use crate::text::swap_color_words;

/// Ordered collection of fixtures with a dirty flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(rename = "testCases", default)]
    test_cases: Vec<Fixture>,

    #[serde(skip)]
    modified: bool,
}

impl FixtureGroup {
    /// Empty, unmodified group
    pub fn new(description: Option<String>) -> Self {
        FixtureGroup {
            description,
            test_cases: Vec::new(),
            modified: false,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Replace the group description, marking the group modified if it changed
    pub fn set_description(&mut self, description: Option<String>) {
        if self.description != description {
            self.description = description;
            self.modified = true;
        }
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.test_cases
    }

    pub fn fixture(&self, index: usize) -> Option<&Fixture> {
        self.test_cases.get(index)
    }

    /// Expected resulting positions of the fixture at `index`
    pub fn results_at(&self, index: usize) -> Option<&[FixturePosition]> {
        self.fixture(index).map(Fixture::results)
    }

    /// One resulting position of one fixture
    pub fn result_at(&self, fixture: usize, result: usize) -> FixtureResult<&FixturePosition> {
        let len = self.len();
        let fixture = self.fixture(fixture).ok_or(FixtureError::Index {
            index: fixture as isize,
            len,
        })?;

        fixture
            .results()
            .get(result)
            .ok_or(FixtureError::ResultIndex {
                index: result,
                len: fixture.results().len(),
            })
    }

    pub fn len(&self) -> usize {
        self.test_cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.test_cases.is_empty()
    }

    /// Whether any fixture starts from exactly this notation
    pub fn contains(&self, fen: &str) -> bool {
        self.test_cases.iter().any(|f| f.start_fen() == fen)
    }

    /// Index of the first fixture starting from exactly this notation
    pub fn position_of(&self, fen: &str) -> Option<usize> {
        self.test_cases.iter().position(|f| f.start_fen() == fen)
    }

    /// Append a fixture
    pub fn add(&mut self, fixture: Fixture) {
        debug!("[GROUP] Adding fixture for {}", fixture.start_fen());
        self.test_cases.push(fixture);
        self.modified = true;
    }

    /// Remove and return the fixture at `index`
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Index`] unless `0 <= index < len()`. Negative
    /// indices (such as a "nothing selected" marker) are rejected the same way.
    pub fn remove_at(&mut self, index: isize) -> FixtureResult<Fixture> {
        let len = self.len();
        let Some(slot) = usize::try_from(index).ok().filter(|&i| i < len) else {
            return Err(FixtureError::Index { index, len });
        };

        let removed = self.test_cases.remove(slot);
        debug!("[GROUP] Removed fixture {} ({})", slot, removed.start_fen());
        self.modified = true;
        Ok(removed)
    }

    /// Add the color-mirrored fixture for every start position lacking one
    ///
    /// Each new fixture is placed directly after the fixture it was derived
    /// from. Its description names the source position, and its start
    /// description is the source's with color words swapped.
    ///
    /// A transposition is skipped when its notation is already a start position
    /// in the group, including one derived earlier in the same pass.
    ///
    /// # Returns
    ///
    /// Number of fixtures added.
    pub fn add_missing_transpositions<O: MoveOracle>(
        &mut self,
        builder: &FixtureBuilder<O>,
    ) -> FixtureResult<usize> {
        let mut next = Vec::with_capacity(self.test_cases.len() * 2);
        let mut added = 0;

        for fixture in &self.test_cases {
            let source = fixture.start_fen();
            let transposed = builder.transposed_fen(source)?;
            let derived = if self.contains(&transposed)
                || next.iter().any(|f: &Fixture| f.start_fen() == transposed)
            {
                None
            } else {
                Some(builder.build(
                    &transposed,
                    Some(format!("Transpose of {}", source)),
                    swap_color_words(fixture.start().description()),
                )?)
            };

            next.push(fixture.clone());
            if let Some(derived) = derived {
                next.push(derived);
                added += 1;
            }
        }

        self.test_cases = next;
        self.modified = true;
        info!("[GROUP] Added {} transposed fixtures", added);
        Ok(added)
    }

    /// Rebuild every fixture from its start position
    ///
    /// Fixture and start descriptions carry over. Descriptions attached to
    /// individual results do not: the rebuilt results are unannotated.
    ///
    /// # Returns
    ///
    /// Number of fixtures rebuilt, always the group size.
    pub fn regenerate_all<O: MoveOracle>(
        &mut self,
        builder: &FixtureBuilder<O>,
    ) -> FixtureResult<usize> {
        let rebuilt = self
            .test_cases
            .iter()
            .map(|fixture| {
                builder.build(
                    fixture.start_fen(),
                    fixture.description().map(str::to_string),
                    fixture.start().description().map(str::to_string),
                )
            })
            .collect::<FixtureResult<Vec<_>>>()?;

        let count = rebuilt.len();
        self.test_cases = rebuilt;
        self.modified = true;
        info!("[GROUP] Regenerated {} fixtures", count);
        Ok(count)
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clear the modified flag after a successful save
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }
}
