// src/config/mod.rs

//! Graph files for depsort.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a graph file from disk (`loader.rs`).
//! - Validate node names and dependency references (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_graph_path, load_and_validate, load_from_path};
pub use model::{ConfigSection, GraphFile, NodeConfig, RawGraphFile};
