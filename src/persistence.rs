//! JSON persistence for fixture groups
//!
//! Reads and writes [`FixtureGroup`] documents. The modified flag is never
//! written; a loaded group always starts unmodified.
//!
//! # Document Format
//!
//! ```json
//! {
//!   "description": "Pawn captures",
//!   "testCases": [
//!     {
//!       "description": "Transpose of 4k3/8/8/8/8/8/8/4K3 w - - 0 1",
//!       "start": { "description": "White to move", "fen": "..." },
//!       "results": [ { "move": "Kd1", "fen": "..." } ]
//!     }
//!   ]
//! }
//! ```
//!
//! Absent optional fields are omitted rather than written as `null`. On load,
//! `null` and absent are equivalent and unknown fields are ignored.
//!
//! # Failure Modes
//!
//! Loading is all or nothing: a document that does not match the shape yields
//! [`FixtureError::Format`] and no group. A path that cannot be read or written
//! yields [`FixtureError::Io`]. A failed save may leave the destination
//! truncated.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{FixtureError, FixtureResult};
use crate::group::FixtureGroup;

/// Write `group` to `path` and clear its modified flag
pub fn save(group: &mut FixtureGroup, path: &Path) -> FixtureResult<()> {
    let json = to_string(group)?;
    fs::write(path, json).map_err(|e| FixtureError::io(path, e))?;

    group.mark_saved();
    info!("[PERSIST] Saved {} fixtures to {:?}", group.len(), path);
    Ok(())
}

/// Read a group from `path`
pub fn load(path: &Path) -> FixtureResult<FixtureGroup> {
    let contents = fs::read_to_string(path).map_err(|e| FixtureError::io(path, e))?;
    let group = from_str(&contents)?;
    info!("[PERSIST] Loaded {} fixtures from {:?}", group.len(), path);
    Ok(group)
}

/// Serialize a group to a JSON string
pub fn to_string(group: &FixtureGroup) -> FixtureResult<String> {
    Ok(serde_json::to_string_pretty(group)?)
}

/// Deserialize a group from a JSON string
pub fn from_str(json: &str) -> FixtureResult<FixtureGroup> {
    Ok(serde_json::from_str(json)?)
}
