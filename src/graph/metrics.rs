// src/graph/metrics.rs
//! Orderings and aggregate measures over graphs and BFS trees.

use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::hash::Hash;

use crate::error::GraphError;

use super::adjacency::Graph;

/// All vertices sorted by in-degree, most connected first. Ties fall back
/// to ascending vertex order so the ranking is reproducible.
#[must_use]
pub fn vertices_by_in_degree<V, E>(g: &Graph<V, E>) -> Vec<V>
where
    V: Ord + Hash + Eq + Clone,
{
    let mut ranked: Vec<V> = g.vertices().cloned().collect();
    ranked.sort_unstable();
    ranked.sort_by_key(|v| Reverse(g.in_degree(v).unwrap_or(0)));
    ranked
}

/// Vertices of `g` that never made it into `tree`, i.e. the complement of
/// the reachable set for whatever center the tree was built from.
#[must_use]
pub fn missing_vertices<V, E>(g: &Graph<V, E>, tree: &Graph<V, E>) -> BTreeSet<V>
where
    V: Ord + Hash + Eq + Clone,
{
    g.vertices()
        .filter(|&v| !tree.has_vertex(v))
        .cloned()
        .collect()
}

/// Mean depth of a BFS tree: the sum of every vertex's hop count from
/// `root`, divided by the tree's arc count.
///
/// The divisor is the arc count, not the vertex count; downstream output
/// depends on that exact normalization. A one-vertex tree has no arcs, so
/// its average is NaN.
///
/// # Errors
/// `VertexNotFound` if `root` is not in the tree.
#[allow(clippy::cast_precision_loss)]
pub fn average_separation<V, E>(tree: &Graph<V, E>, root: &V) -> Result<f64, GraphError>
where
    V: Ord + Hash + Eq + Clone,
{
    if !tree.has_vertex(root) {
        return Err(GraphError::VertexNotFound);
    }

    let mut sum = 0usize;
    let mut stack = vec![(root.clone(), 0usize)];

    // Children of a tree vertex are its in-neighbors, since arcs point
    // child to parent. An explicit stack keeps deep trees off the call
    // stack.
    while let Some((v, depth)) = stack.pop() {
        sum += depth;
        for child in tree.in_neighbors(&v)? {
            stack.push((child.clone(), depth + 1));
        }
    }

    Ok(sum as f64 / tree.num_edges() as f64)
}
