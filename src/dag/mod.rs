// src/dag/mod.rs

//! Dependency graphs and their ordering.
//!
//! - [`graph`] holds the insertion-ordered dependency graph.
//! - [`sort`] computes a dependency-first ordering and detects cycles.
//! - [`export`] converts graphs into `petgraph` structures and DOT.

pub mod export;
pub mod graph;
pub mod sort;

pub use export::{to_dot, to_graphmap};
pub use graph::DependencyGraph;
pub use sort::{CycleError, dependents_first, is_dependency_order, topological_sort};
