// src/dag/sort.rs

//! Depth-first dependency ordering.
//!
//! The traversal keeps an explicit frame stack instead of recursing, so the
//! depth of a dependency chain is limited by heap memory only. Every node
//! carries one of three marks while a sort is in progress:
//!
//! - absent from the mark map: not visited yet,
//! - [`Mark::OnStack`]: entered, some of its dependencies still pending,
//! - [`Mark::Finished`]: the node and all of its dependencies are ordered.
//!
//! Reaching an `OnStack` node again means the graph has a cycle.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace, warn};

use crate::dag::DependencyGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    OnStack,
    Finished,
}

/// A dependency cycle found while sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleError<N> {
    node: N,
    path: Vec<N>,
}

impl<N> CycleError<N> {
    /// The node that was reached a second time while still in progress.
    pub fn node(&self) -> &N {
        &self.node
    }

    /// The cycle, starting and ending at [`CycleError::node`].
    ///
    /// For `A -> B -> A` this is `[A, B, A]`; a self-loop gives `[A, A]`.
    pub fn path(&self) -> &[N] {
        &self.path
    }

    pub fn into_parts(self) -> (N, Vec<N>) {
        (self.node, self.path)
    }
}

impl<N: fmt::Display> fmt::Display for CycleError<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cycle detected at node '{}': ", self.node)?;
        for (i, n) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

impl<N: fmt::Display + fmt::Debug> std::error::Error for CycleError<N> {}

/// One level of the simulated recursion.
struct Frame<'g, N> {
    node: &'g N,
    next: usize,
}

/// Order the nodes of `graph` so that every node comes after all of the
/// nodes it depends on.
///
/// Declared nodes are scanned in declaration order and each unvisited one
/// starts a depth-first walk; dependencies are followed in list order. The
/// result is the post-order of that walk, so for every edge `u -> v` the
/// node `v` is placed before `u`. Nodes reachable only as dependencies are
/// included. Ties between independent nodes follow the scan order, which
/// makes the result deterministic for a given graph.
///
/// # Errors
///
/// Returns a [`CycleError`] naming the first node found on a cycle.
pub fn topological_sort<N>(graph: &DependencyGraph<N>) -> Result<Vec<N>, CycleError<N>>
where
    N: Clone + Eq + Hash,
{
    let mut marks: HashMap<&N, Mark> = HashMap::with_capacity(graph.len());
    let mut order: Vec<N> = Vec::with_capacity(graph.len());
    let mut stack: Vec<Frame<'_, N>> = Vec::new();

    for root in graph.nodes() {
        if marks.contains_key(root) {
            continue;
        }
        marks.insert(root, Mark::OnStack);
        stack.push(Frame { node: root, next: 0 });

        while let Some(frame) = stack.last_mut() {
            let deps = graph.successors_of(frame.node);

            let Some(dep) = deps.get(frame.next) else {
                let done = frame.node;
                stack.pop();
                marks.insert(done, Mark::Finished);
                order.push(done.clone());
                continue;
            };
            frame.next += 1;

            match marks.get(dep).copied() {
                None => {
                    marks.insert(dep, Mark::OnStack);
                    stack.push(Frame { node: dep, next: 0 });
                }
                Some(Mark::OnStack) => {
                    let err = cycle_through(&stack, dep);
                    warn!(
                        cycle_len = err.path.len() - 1,
                        "dependency cycle detected; aborting sort"
                    );
                    return Err(err);
                }
                Some(Mark::Finished) => {
                    trace!("dependency already ordered; skipping");
                }
            }
        }
    }

    debug!(
        declared = graph.len(),
        ordered = order.len(),
        "dependency sort complete"
    );
    Ok(order)
}

/// Same ordering as [`topological_sort`], reversed: every node comes before
/// the nodes it depends on.
///
/// # Errors
///
/// Returns a [`CycleError`] if the graph has a cycle.
pub fn dependents_first<N>(graph: &DependencyGraph<N>) -> Result<Vec<N>, CycleError<N>>
where
    N: Clone + Eq + Hash,
{
    let mut order = topological_sort(graph)?;
    order.reverse();
    Ok(order)
}

/// Check that `order` is a valid dependency order for `graph`.
///
/// Holds when `order` lists every node of the graph exactly once (declared
/// nodes and nodes referenced only as dependencies, nothing else) and for
/// each edge `u -> v` the node `v` comes before `u`.
pub fn is_dependency_order<N>(graph: &DependencyGraph<N>, order: &[N]) -> bool
where
    N: Eq + Hash,
{
    let mut position: HashMap<&N, usize> = HashMap::with_capacity(order.len());
    for (i, node) in order.iter().enumerate() {
        if position.insert(node, i).is_some() {
            return false;
        }
    }

    let expected = graph.len() + graph.undeclared_nodes().len();
    if position.len() != expected {
        return false;
    }

    graph.iter().all(|(node, deps)| {
        let Some(&at) = position.get(node) else {
            return false;
        };
        deps.iter()
            .all(|dep| position.get(dep).is_some_and(|&dep_at| dep_at < at))
    })
}

fn cycle_through<N: Clone + Eq>(stack: &[Frame<'_, N>], node: &N) -> CycleError<N> {
    let start = stack
        .iter()
        .position(|frame| frame.node == node)
        .unwrap_or(0);
    let mut path: Vec<N> = stack[start..]
        .iter()
        .map(|frame| frame.node.clone())
        .collect();
    path.push(node.clone());

    CycleError {
        node: node.clone(),
        path,
    }
}
