// src/universe/mod.rs
//! The game's domain layer: parsed datasets, the co-star graph, and the
//! session state built on top of them.
//!
//! [`Universe`] owns the full graph, the current center, and the center's
//! BFS tree. The tree is rebuilt whole on every center change; commands
//! between changes all read the same tree.

pub mod builder;
pub mod loader;

pub use builder::build_costar_graph;
pub use loader::{load_dataset, Dataset};

use std::collections::BTreeSet;

use crate::error::GraphError;
use crate::graph;
use crate::graph::Graph;

/// The co-appearance network: actor names joined by the movies they share.
pub type CostarGraph = Graph<String, BTreeSet<String>>;

/// One hop of a center path: `from` appeared in `movies` with `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub from: String,
    pub movies: BTreeSet<String>,
    pub to: String,
}

/// The loaded graph plus the current center and its shortest-path tree.
#[derive(Debug, Clone)]
pub struct Universe {
    graph: CostarGraph,
    center: String,
    tree: CostarGraph,
}

impl Universe {
    /// # Errors
    /// `VertexNotFound` if the starting center is not in the graph.
    pub fn new(graph: CostarGraph, center: impl Into<String>) -> Result<Self, GraphError> {
        let center = center.into();
        if !graph.has_vertex(&center) {
            return Err(GraphError::VertexNotFound);
        }
        let tree = graph::bfs(&graph, &center);
        Ok(Self { graph, center, tree })
    }

    #[must_use]
    pub fn center(&self) -> &str {
        &self.center
    }

    #[must_use]
    pub fn graph(&self) -> &CostarGraph {
        &self.graph
    }

    #[must_use]
    pub fn tree(&self) -> &CostarGraph {
        &self.tree
    }

    #[must_use]
    pub fn contains(&self, actor: &str) -> bool {
        self.graph.has_vertex(&actor.to_string())
    }

    /// Moves the center and rebuilds the shortest-path tree from scratch.
    ///
    /// # Errors
    /// `VertexNotFound` if `name` is not in the graph; the current center
    /// and tree are left untouched.
    pub fn set_center(&mut self, name: impl Into<String>) -> Result<(), GraphError> {
        let name = name.into();
        if !self.graph.has_vertex(&name) {
            return Err(GraphError::VertexNotFound);
        }
        self.tree = graph::bfs(&self.graph, &name);
        self.center = name;
        Ok(())
    }

    /// Hop distance from `actor` to the center, or `None` when the actor
    /// is outside the center's component (or the universe entirely).
    #[must_use]
    pub fn separation(&self, actor: &str) -> Option<usize> {
        let path = graph::path_to_root(&self.tree, &actor.to_string()).ok()?;
        Some(path.len() - 1)
    }

    /// The chain of appearances from `actor` back to the center, one step
    /// per hop. `None` when the actor is missing from the current tree;
    /// callers separate "not in the universe" from "unreachable" by asking
    /// [`Universe::contains`] first.
    #[must_use]
    pub fn path_steps(&self, actor: &str) -> Option<Vec<PathStep>> {
        let path = graph::path_to_root(&self.tree, &actor.to_string()).ok()?;
        let steps = path
            .windows(2)
            .map(|hop| PathStep {
                from: hop[0].clone(),
                movies: self.tree.label(&hop[0], &hop[1]).cloned().unwrap_or_default(),
                to: hop[1].clone(),
            })
            .collect();
        Some(steps)
    }

    /// Actors outside the current center's connected component.
    #[must_use]
    pub fn unreachable(&self) -> BTreeSet<String> {
        graph::missing_vertices(&self.graph, &self.tree)
    }

    /// Mean hop distance over the center's component, arc-count divisor.
    /// NaN when the center is isolated.
    #[must_use]
    pub fn average_separation(&self) -> f64 {
        graph::average_separation(&self.tree, &self.center).unwrap_or(f64::NAN)
    }

    /// Every reachable actor with its in-degree inside the current tree,
    /// least connected first, names breaking ties.
    #[must_use]
    pub fn tree_degrees_ascending(&self) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self
            .tree
            .vertices()
            .map(|v| (v.clone(), self.tree.in_degree(v).unwrap_or(0)))
            .collect();
        ranked.sort_unstable_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }

    /// Every actor reachable from the current center, scored by the mean
    /// separation they would have as the center, best first. Runs one BFS
    /// per candidate.
    #[must_use]
    pub fn rank_centers(&self) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self
            .tree
            .vertices()
            .map(|v| {
                let tree = graph::bfs(&self.graph, v);
                let avg = graph::average_separation(&tree, v).unwrap_or(f64::NAN);
                (v.clone(), avg)
            })
            .collect();
        ranked.sort_unstable_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn film_dataset() -> Dataset {
        let casts: &[(&str, &[&str])] = &[
            ("A Movie", &["Kevin Bacon", "Alice", "Bob"]),
            ("B Movie", &["Charlie", "Dartmouth"]),
            ("C Movie", &["Bob", "Charlie"]),
            ("D Movie", &["Alice", "Charlie"]),
            ("E Movie", &["Kevin Bacon", "Alice"]),
            ("F Movie", &["Nobody", "Nobody's Friend"]),
        ];
        Dataset {
            actors: [
                "Kevin Bacon",
                "Alice",
                "Bob",
                "Charlie",
                "Dartmouth",
                "Nobody",
                "Nobody's Friend",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            casts: casts
                .iter()
                .map(|(movie, cast)| {
                    let cast = cast.iter().map(ToString::to_string).collect();
                    ((*movie).to_string(), cast)
                })
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn film_universe() -> Universe {
        Universe::new(build_costar_graph(&film_dataset()), "Kevin Bacon").unwrap()
    }

    #[test]
    fn test_new_rejects_an_absent_center() {
        let g = build_costar_graph(&film_dataset());
        assert!(Universe::new(g, "Ghost").is_err());
    }

    #[test]
    fn test_separation_counts_hops_to_the_center() {
        let u = film_universe();

        assert_eq!(u.separation("Kevin Bacon"), Some(0));
        assert_eq!(u.separation("Alice"), Some(1));
        assert_eq!(u.separation("Dartmouth"), Some(3));
        assert_eq!(u.separation("Nobody"), None);
        assert_eq!(u.separation("Ghost"), None);
    }

    #[test]
    fn test_path_steps_chain_hops_to_the_center() {
        let u = film_universe();

        let steps = u.path_steps("Dartmouth").unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].from, "Dartmouth");
        assert_eq!(steps[0].to, "Charlie");
        assert_eq!(steps[0].movies, BTreeSet::from(["B Movie".to_string()]));
        assert_eq!(steps[1].to, "Alice");
        assert_eq!(steps[2].to, "Kevin Bacon");
        assert_eq!(
            steps[2].movies,
            BTreeSet::from(["A Movie".to_string(), "E Movie".to_string()])
        );
    }

    #[test]
    fn test_set_center_rebuilds_the_tree() {
        let mut u = film_universe();

        u.set_center("Charlie").unwrap();
        assert_eq!(u.center(), "Charlie");
        assert_eq!(u.separation("Kevin Bacon"), Some(2));
        assert!((u.average_separation() - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_center_rejects_unknown_names_and_keeps_state() {
        let mut u = film_universe();

        assert_eq!(u.set_center("Ghost"), Err(GraphError::VertexNotFound));
        assert_eq!(u.center(), "Kevin Bacon");
        assert_eq!(u.separation("Dartmouth"), Some(3));
    }

    #[test]
    fn test_unreachable_lists_the_other_component() {
        let u = film_universe();

        assert_eq!(
            u.unreachable(),
            BTreeSet::from(["Nobody".to_string(), "Nobody's Friend".to_string()])
        );
    }

    #[test]
    fn test_average_separation_matches_the_arc_divisor() {
        let u = film_universe();
        assert!((u.average_separation() - 1.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_isolated_center_average_is_nan() {
        let data = Dataset {
            actors: vec!["Hermit".to_string()],
            casts: BTreeMap::new(),
        };
        let u = Universe::new(build_costar_graph(&data), "Hermit").unwrap();

        assert!(u.average_separation().is_nan());
    }

    #[test]
    fn test_tree_degrees_rank_ascending_with_name_ties() {
        let u = film_universe();

        assert_eq!(
            u.tree_degrees_ascending(),
            vec![
                ("Bob".to_string(), 0),
                ("Dartmouth".to_string(), 0),
                ("Alice".to_string(), 1),
                ("Charlie".to_string(), 1),
                ("Kevin Bacon".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_rank_centers_orders_by_average_then_name() {
        let u = film_universe();

        assert_eq!(
            u.rank_centers(),
            vec![
                ("Alice".to_string(), 1.25),
                ("Bob".to_string(), 1.25),
                ("Charlie".to_string(), 1.25),
                ("Kevin Bacon".to_string(), 1.75),
                ("Dartmouth".to_string(), 2.0),
            ]
        );
    }
}
