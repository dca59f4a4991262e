// src/config/model.rs

use indexmap::IndexMap;
use serde::Deserialize;

use crate::dag::DependencyGraph;
use crate::types::UndeclaredPolicy;

/// Graph file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// undeclared = "include"
///
/// [node.A]
/// after = ["B", "C"]
///
/// [node.D]
/// ```
///
/// `[node.<name>]` sections keep the order they appear in the file; that
/// order decides how ties between independent nodes are broken.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGraphFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default)]
    pub node: IndexMap<String, NodeConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSection {
    /// `"include"` (default) or `"reject"`.
    #[serde(default)]
    pub undeclared: UndeclaredPolicy,
}

/// `[node.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeConfig {
    /// Nodes this one depends on; they are ordered before it.
    #[serde(default)]
    pub after: Vec<String>,
}

/// A graph file that passed validation.
///
/// Only constructed through `TryFrom<RawGraphFile>`.
#[derive(Debug, Clone)]
pub struct GraphFile {
    pub config: ConfigSection,
    pub node: IndexMap<String, NodeConfig>,
}

impl GraphFile {
    pub(crate) fn new_unchecked(config: ConfigSection, node: IndexMap<String, NodeConfig>) -> Self {
        Self { config, node }
    }

    /// Build the dependency graph described by this file.
    pub fn to_graph(&self) -> DependencyGraph<String> {
        self.node
            .iter()
            .map(|(name, node)| (name.clone(), node.after.clone()))
            .collect()
    }
}
