// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod types;

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::cli::{CliArgs, OutputFormat};
use crate::config::loader::load_and_validate;
use crate::dag::{DependencyGraph, dependents_first, is_dependency_order, to_dot, topological_sort};
use crate::errors::DepsortError;

/// High-level entry point used by `main.rs`.
///
/// Writes results to stdout; see [`execute`] for the details.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&args, &mut out)
}

/// Load the graph selected by `args` and write the requested output to `out`.
///
/// - `--format dot` renders the graph only.
/// - `--check` verifies the given order and fails with
///   [`DepsortError::InvalidOrder`] if it does not hold. With
///   `--dependents-first` the order is read in that direction.
/// - Otherwise the graph and its dependency order are printed.
pub fn execute<W: Write>(args: &CliArgs, out: &mut W) -> Result<()> {
    let graph = if args.demo {
        demo_graph()
    } else {
        load_and_validate(&args.graph)?.to_graph()
    };

    let undeclared = graph.undeclared_nodes();
    if !undeclared.is_empty() {
        debug!(?undeclared, "nodes referenced only as dependencies");
    }

    if args.format == OutputFormat::Dot {
        write!(out, "{}", to_dot(&graph))?;
        return Ok(());
    }

    if let Some(ref raw_order) = args.check {
        let order = parse_order(raw_order);
        let mut dependencies_first = order.clone();
        if args.dependents_first {
            dependencies_first.reverse();
        }
        if !is_dependency_order(&graph, &dependencies_first) {
            warn!(?order, "order violates graph dependencies");
            return Err(DepsortError::InvalidOrder(format!(
                "[{}] is not a dependency order of {}",
                order.join(", "),
                graph
            ))
            .into());
        }
        writeln!(out, "valid")?;
        return Ok(());
    }

    info!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        "sorting dependency graph"
    );

    let order = if args.dependents_first {
        dependents_first(&graph)
    } else {
        topological_sort(&graph)
    }
    .map_err(DepsortError::from)?;

    writeln!(out, "dependency graph: {graph}")?;
    writeln!(out, "topological order: [{}]", order.join(", "))?;
    Ok(())
}

/// The example graph: A depends on B and C, both of which depend on D.
pub fn demo_graph() -> DependencyGraph<String> {
    let mut graph = DependencyGraph::new();
    graph.add_dependencies("A".to_string(), ["B".to_string(), "C".to_string()]);
    graph.add_dependencies("B".to_string(), ["D".to_string()]);
    graph.add_dependencies("C".to_string(), ["D".to_string()]);
    graph.add_node("D".to_string());
    graph
}

fn parse_order(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_order_trims_and_skips_blanks() {
        assert_eq!(parse_order(" D, B,,A "), vec!["D", "B", "A"]);
        assert!(parse_order("").is_empty());
    }

    #[test]
    fn demo_graph_matches_example() {
        assert_eq!(
            demo_graph().to_string(),
            "{A: [B, C], B: [D], C: [D], D: []}"
        );
    }
}
