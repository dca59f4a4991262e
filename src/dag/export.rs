// src/dag/export.rs

//! Conversions from [`DependencyGraph`] into `petgraph` structures.

use std::fmt::Debug;
use std::hash::Hash;

use petgraph::dot::{Config, Dot};
use petgraph::graphmap::DiGraphMap;

use crate::dag::DependencyGraph;

/// Build a `petgraph` graph map borrowing the nodes of `graph`.
///
/// Edge direction follows the dependency lists: `A -> B` means A depends on
/// B. Undeclared dependencies become plain nodes. Duplicate entries in a
/// dependency list collapse into a single edge.
pub fn to_graphmap<N>(graph: &DependencyGraph<N>) -> DiGraphMap<&N, ()>
where
    N: Hash + Eq + Ord,
{
    let mut map: DiGraphMap<&N, ()> = DiGraphMap::new();

    for (node, deps) in graph.iter() {
        map.add_node(node);
        for dep in deps {
            map.add_edge(node, dep, ());
        }
    }

    map
}

/// Render `graph` in Graphviz DOT format.
pub fn to_dot<N>(graph: &DependencyGraph<N>) -> String
where
    N: Hash + Eq + Ord + Debug,
{
    let map = to_graphmap(graph);
    format!("{:?}", Dot::with_config(&map, &[Config::EdgeNoLabel]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphmap_mirrors_dependency_lists() {
        let graph = DependencyGraph::from([("A", vec!["B", "C", "B"]), ("B", vec!["ghost"])]);
        let map = to_graphmap(&graph);

        assert_eq!(map.node_count(), 4);
        assert_eq!(map.edge_count(), 3);
        assert!(map.contains_edge(&"A", &"B"));
        assert!(map.contains_edge(&"B", &"ghost"));
        assert!(!map.contains_edge(&"B", &"A"));
    }

    #[test]
    fn dot_output_lists_every_edge() {
        let graph = DependencyGraph::from([("A", vec!["B", "C"]), ("B", vec![]), ("C", vec![])]);
        let dot = to_dot(&graph);

        assert!(dot.starts_with("digraph"));
        assert_eq!(dot.matches(" -> ").count(), 2);
        assert!(dot.contains("A"));
    }
}
