// src/graph/mod.rs
//! Edge-labeled graphs and the algorithms the game runs over them.
//!
//! [`Graph`] is the container; everything else is a free function taking
//! graph references, so the same code serves both the full co-appearance
//! graph and the BFS trees derived from it.

pub mod adjacency;
pub mod metrics;
pub mod traversal;
pub mod walk;

pub use adjacency::Graph;
pub use metrics::{average_separation, missing_vertices, vertices_by_in_degree};
pub use traversal::{bfs, path_to_root};
pub use walk::random_walk;
