// src/graph/traversal.rs
//! Breadth-first shortest-path trees and path reconstruction.
//!
//! A BFS tree is itself a [`Graph`]: every discovered vertex carries one arc
//! to the vertex that discovered it, labeled with a copy of the discovery
//! edge's label. The root is the only vertex with out-degree zero.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::error::GraphError;

use super::adjacency::Graph;

/// Builds the shortest-path tree rooted at `source`.
///
/// Arcs in the result point child → parent. Callers are expected to check
/// `has_vertex` first; a source absent from `g` yields a degenerate tree
/// holding only the isolated source.
#[must_use]
pub fn bfs<V, E>(g: &Graph<V, E>, source: &V) -> Graph<V, E>
where
    V: Ord + Hash + Eq + Clone,
    E: Clone,
{
    let mut tree = Graph::new();
    tree.insert_vertex(source.clone());

    let mut visited: HashSet<V> = HashSet::from([source.clone()]);
    let mut frontier: VecDeque<V> = VecDeque::from([source.clone()]);

    while let Some(u) = frontier.pop_front() {
        let Ok(neighbors) = g.out_neighbors(&u) else {
            continue;
        };
        for v in neighbors {
            if visited.contains(v) {
                continue;
            }
            visited.insert(v.clone());
            frontier.push_back(v.clone());
            let Ok(label) = g.label(&u, v) else {
                continue;
            };
            tree.insert_directed(v.clone(), u.clone(), label.clone());
        }
    }

    tree
}

/// Walks from `v` up the parent arcs of a BFS tree and returns the visited
/// vertices, `v` first and the root last. `path.len() - 1` is the hop
/// distance to the root.
///
/// The walk takes the smallest out-neighbor at each step, which on a
/// well-formed tree is the unique parent, and gives up after `num_vertices`
/// hops so malformed input cannot loop it.
///
/// # Errors
/// `VertexNotFound` if `v` is not in the tree.
pub fn path_to_root<V, E>(tree: &Graph<V, E>, v: &V) -> Result<Vec<V>, GraphError>
where
    V: Ord + Hash + Eq + Clone,
{
    if !tree.has_vertex(v) {
        return Err(GraphError::VertexNotFound);
    }

    let mut path = vec![v.clone()];
    let mut current = v.clone();
    for _ in 0..tree.num_vertices() {
        let Some(parent) = tree.out_neighbors(&current)?.next() else {
            break;
        };
        path.push(parent.clone());
        current = parent.clone();
    }

    Ok(path)
}
