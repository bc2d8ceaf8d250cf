//! Editor configuration
//!
//! Where fixture files live and what to do when a starting position is added
//! twice. Built from command-line flags in `main.rs`; library users construct it
//! directly.

use std::path::{Path, PathBuf};

/// Fixture documents use this extension
pub const FIXTURE_EXTENSION: &str = "json";

/// What to do when an added start position is already in the group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Refuse with [`crate::FixtureError::Duplicate`]
    #[default]
    Reject,
    /// Append a freshly generated fixture anyway
    Append,
}

/// Settings shared by every session operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Relative fixture paths are resolved against this directory
    pub fixture_dir: PathBuf,
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            fixture_dir: PathBuf::from("."),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl EditorConfig {
    pub fn new(fixture_dir: impl Into<PathBuf>) -> Self {
        EditorConfig {
            fixture_dir: fixture_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Resolve a user-supplied fixture path
    ///
    /// Relative paths are joined onto `fixture_dir`, then [`with_extension`] is
    /// applied.
    pub fn resolve(&self, file: &Path) -> PathBuf {
        let path = if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.fixture_dir.join(file)
        };
        with_extension(&path)
    }
}

/// Append `.json` unless the file name already ends with it
pub fn with_extension(path: &Path) -> PathBuf {
    let has_extension = path
        .extension()
        .is_some_and(|ext| ext == FIXTURE_EXTENSION);

    if has_extension {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".");
        name.push(FIXTURE_EXTENSION);
        PathBuf::from(name)
    }
}
