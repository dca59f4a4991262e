// src/config/validate.rs

use std::collections::HashSet;

use tracing::warn;

use crate::config::model::{GraphFile, RawGraphFile};
use crate::errors::{DepsortError, Result};
use crate::types::UndeclaredPolicy;

impl TryFrom<RawGraphFile> for GraphFile {
    type Error = DepsortError;

    fn try_from(raw: RawGraphFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_graph(&raw)?;
        Ok(GraphFile::new_unchecked(raw.config, raw.node))
    }
}

fn validate_raw_graph(raw: &RawGraphFile) -> Result<()> {
    validate_names(raw)?;
    validate_references(raw)?;
    warn_duplicate_dependencies(raw);
    Ok(())
}

fn validate_names(raw: &RawGraphFile) -> Result<()> {
    for (name, node) in raw.node.iter() {
        if name.trim().is_empty() {
            return Err(DepsortError::ConfigError(
                "node names must not be empty".to_string(),
            ));
        }
        if node.after.iter().any(|dep| dep.trim().is_empty()) {
            return Err(DepsortError::ConfigError(format!(
                "node '{name}' has an empty entry in `after`"
            )));
        }
    }
    Ok(())
}

fn validate_references(raw: &RawGraphFile) -> Result<()> {
    if raw.config.undeclared != UndeclaredPolicy::Reject {
        return Ok(());
    }

    for (name, node) in raw.node.iter() {
        if let Some(dep) = node.after.iter().find(|dep| !raw.node.contains_key(*dep)) {
            return Err(DepsortError::UnknownNode {
                node: name.clone(),
                dependency: dep.clone(),
            });
        }
    }
    Ok(())
}

fn warn_duplicate_dependencies(raw: &RawGraphFile) {
    for (name, node) in raw.node.iter() {
        let mut seen = HashSet::new();
        for dep in node.after.iter() {
            if !seen.insert(dep.as_str()) {
                warn!(node = %name, dependency = %dep, "duplicate entry in `after`");
            }
        }
    }
}
