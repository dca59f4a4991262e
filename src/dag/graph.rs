// src/dag/graph.rs

use std::fmt;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

/// Dependency graph keyed by node, preserving the order nodes were declared.
///
/// An entry `A -> [B, C]` means "A depends on B and C": B and C have to be
/// ordered before A. Nodes that only ever show up as a dependency (never as a
/// key) are treated as having no dependencies of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph<N: Hash + Eq> {
    nodes: IndexMap<N, Vec<N>>,
}

impl<N: Hash + Eq> DependencyGraph<N> {
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }

    /// Declare a node without adding any dependencies.
    ///
    /// Declaring an existing node is a no-op; it keeps its original position.
    pub fn add_node(&mut self, node: N) {
        self.nodes.entry(node).or_default();
    }

    /// Append to the dependency list of `node`, declaring it if needed.
    pub fn add_dependencies<I>(&mut self, node: N, deps: I)
    where
        I: IntoIterator<Item = N>,
    {
        self.nodes.entry(node).or_default().extend(deps);
    }

    /// Declared nodes, in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.keys()
    }

    /// Immediate dependencies of a node. Empty for undeclared nodes.
    pub fn successors_of(&self, node: &N) -> &[N] {
        self.nodes
            .get(node)
            .map(|deps| deps.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    /// Number of declared nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of edges, counting duplicates in a dependency list.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }

    /// Nodes referenced as a dependency but never declared as a key.
    ///
    /// Returned once each, in the order they are first referenced.
    pub fn undeclared_nodes(&self) -> Vec<&N> {
        let mut seen: IndexSet<&N> = IndexSet::new();
        for deps in self.nodes.values() {
            for dep in deps {
                if !self.nodes.contains_key(dep) {
                    seen.insert(dep);
                }
            }
        }
        seen.into_iter().collect()
    }

    /// Iterate `(node, dependencies)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &[N])> {
        self.nodes.iter().map(|(n, deps)| (n, deps.as_slice()))
    }
}

impl<N: Hash + Eq> Default for DependencyGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Hash + Eq> FromIterator<(N, Vec<N>)> for DependencyGraph<N> {
    fn from_iter<T: IntoIterator<Item = (N, Vec<N>)>>(iter: T) -> Self {
        let mut graph = Self::new();
        for (node, deps) in iter {
            graph.add_dependencies(node, deps);
        }
        graph
    }
}

impl<N: Hash + Eq, const K: usize> From<[(N, Vec<N>); K]> for DependencyGraph<N> {
    fn from(entries: [(N, Vec<N>); K]) -> Self {
        entries.into_iter().collect()
    }
}

/// Renders as `{A: [B, C], B: [D], D: []}`.
impl<N: Hash + Eq + fmt::Display> fmt::Display for DependencyGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (node, deps)) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{node}: [")?;
            for (j, dep) in deps.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{dep}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}
