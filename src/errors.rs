// src/errors.rs

//! Crate-wide error type and result alias.

use std::fmt::Display;

use thiserror::Error;

use crate::dag::CycleError;

#[derive(Error, Debug)]
pub enum DepsortError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("node '{node}' depends on undeclared node '{dependency}'")]
    UnknownNode { node: String, dependency: String },

    #[error("Cycle detected at node '{node}': {}", .path.join(" -> "))]
    CycleDetected { node: String, path: Vec<String> },

    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl<N: Display> From<CycleError<N>> for DepsortError {
    fn from(err: CycleError<N>) -> Self {
        DepsortError::CycleDetected {
            node: err.node().to_string(),
            path: err.path().iter().map(|n| n.to_string()).collect(),
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, DepsortError>;
