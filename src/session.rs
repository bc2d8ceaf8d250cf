//! Editing session
//!
//! A [`Session`] is what an editor front end holds on to: the current
//! [`FixtureGroup`], the file it came from (if any), and the rules used to build
//! fixtures. It owns the save-prompt protocol: a modified group is only replaced
//! once the caller has decided to save it, discard it, or cancel.
//!
//! The session never asks questions itself. Front ends collect the answer
//! (dialog, command-line flag) and pass it in as an [`UnsavedChoice`].

use std::path::{Path, PathBuf};

use chess_rules::{MoveOracle, StandardChess};
use tracing::{info, warn};

use crate::builder::FixtureBuilder;
use crate::config::{with_extension, DuplicatePolicy, EditorConfig};
use crate::error::{FixtureError, FixtureResult};
use crate::group::FixtureGroup;
use crate::persistence;

/// Caller's answer to "the group is not saved, save it?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsavedChoice {
    Save,
    Discard,
    Cancel,
}

/// One editor session over one fixture group at a time
#[derive(Debug)]
pub struct Session<O = StandardChess> {
    group: FixtureGroup,
    file: Option<PathBuf>,
    builder: FixtureBuilder<O>,
    config: EditorConfig,
}

impl Session<StandardChess> {
    /// Session with an empty group and orthodox chess rules
    pub fn standard(config: EditorConfig) -> Self {
        Session::new(FixtureBuilder::standard(), config)
    }
}

impl<O: MoveOracle> Session<O> {
    pub fn new(builder: FixtureBuilder<O>, config: EditorConfig) -> Self {
        Session {
            group: FixtureGroup::new(None),
            file: None,
            builder,
            config,
        }
    }

    pub fn group(&self) -> &FixtureGroup {
        &self.group
    }

    pub fn group_mut(&mut self) -> &mut FixtureGroup {
        &mut self.group
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.group.is_modified()
    }

    /// Window-title style label: file name, `*` when modified
    pub fn title(&self) -> String {
        let name = self
            .file
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_string());

        if self.is_modified() {
            format!("{}*", name)
        } else {
            name
        }
    }

    /// Apply the save-prompt protocol
    ///
    /// Returns `true` when the current group may be replaced. An unmodified
    /// group always may. Otherwise `Save` saves first (and fails if there is no
    /// file), `Discard` drops the changes, `Cancel` keeps them.
    pub fn okay_to_discard(&mut self, choice: UnsavedChoice) -> FixtureResult<bool> {
        if !self.is_modified() {
            return Ok(true);
        }

        match choice {
            UnsavedChoice::Save => {
                self.save()?;
                Ok(true)
            }
            UnsavedChoice::Discard => {
                warn!("[SESSION] Discarding unsaved changes to {}", self.title());
                Ok(true)
            }
            UnsavedChoice::Cancel => Ok(false),
        }
    }

    /// Replace the group with an empty one
    ///
    /// Fails with [`FixtureError::Unsaved`] if the protocol says no.
    pub fn new_group(&mut self, choice: UnsavedChoice) -> FixtureResult<()> {
        if !self.okay_to_discard(choice)? {
            return Err(FixtureError::Unsaved);
        }
        self.group = FixtureGroup::new(None);
        self.file = None;
        Ok(())
    }

    /// Replace the group with the document at `path`
    ///
    /// `path` is used as given; see [`EditorConfig::resolve`] for
    /// user-supplied names. On a load failure the current group is kept.
    pub fn open(&mut self, path: &Path, choice: UnsavedChoice) -> FixtureResult<()> {
        if !self.okay_to_discard(choice)? {
            return Err(FixtureError::Unsaved);
        }
        self.group = persistence::load(path)?;
        self.file = Some(path.to_path_buf());
        info!("[SESSION] Opened {}", self.title());
        Ok(())
    }

    /// Save to the current file
    pub fn save(&mut self) -> FixtureResult<()> {
        let path = self.file.clone().ok_or(FixtureError::NoFile)?;
        persistence::save(&mut self.group, &path)
    }

    /// Save to `path` (with `.json` appended if missing) and make it current
    pub fn save_as(&mut self, path: &Path) -> FixtureResult<PathBuf> {
        let path = with_extension(path);
        persistence::save(&mut self.group, &path)?;
        self.file = Some(path.clone());
        Ok(path)
    }

    /// Build a fixture for `fen` and append it
    ///
    /// The notation is trimmed first. If it is already a start position, the
    /// configured [`DuplicatePolicy`] decides.
    ///
    /// # Returns
    ///
    /// Index of the new fixture.
    pub fn add_position(
        &mut self,
        fen: &str,
        description: Option<String>,
        start_description: Option<String>,
    ) -> FixtureResult<usize> {
        let fen = fen.trim();
        if let Some(index) = self.group.position_of(fen) {
            match self.config.duplicate_policy {
                DuplicatePolicy::Reject => {
                    return Err(FixtureError::Duplicate {
                        fen: fen.to_string(),
                        index,
                    })
                }
                DuplicatePolicy::Append => {
                    warn!(
                        "[SESSION] {} already present as fixture {}, appending regenerated copy",
                        fen, index
                    );
                }
            }
        }

        let fixture = self.builder.build(fen, description, start_description)?;
        self.group.add(fixture);
        Ok(self.group.len() - 1)
    }

    /// Add one fixture's resulting position as a new fixture
    pub fn add_result_as_fixture(&mut self, fixture: usize, result: usize) -> FixtureResult<usize> {
        let fen = self.group.result_at(fixture, result)?.fen().to_string();
        self.add_position(&fen, None, None)
    }

    pub fn remove_at(&mut self, index: isize) -> FixtureResult<()> {
        self.group.remove_at(index).map(|_| ())
    }

    pub fn add_missing_transpositions(&mut self) -> FixtureResult<usize> {
        self.group.add_missing_transpositions(&self.builder)
    }

    pub fn regenerate_all(&mut self) -> FixtureResult<usize> {
        self.group.regenerate_all(&self.builder)
    }
}
