// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{GraphFile, RawGraphFile};
use crate::errors::Result;

/// Read a graph file and deserialize it, without semantic validation.
///
/// Use [`load_and_validate`] for the checked version.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawGraphFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawGraphFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), nodes = raw.node.len(), "graph file parsed");

    Ok(raw)
}

/// Load a graph file and validate it.
///
/// Checks for:
/// - empty node or dependency names,
/// - undeclared dependencies when `[config].undeclared = "reject"`.
///
/// Cycles are not rejected here; sorting reports them with the offending
/// path.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<GraphFile> {
    let raw = load_from_path(&path)?;
    GraphFile::try_from(raw)
}

/// `Depsort.toml` in the current working directory.
pub fn default_graph_path() -> PathBuf {
    PathBuf::from("Depsort.toml")
}
