// src/graph/walk.rs
//! Bounded random walks.

use std::hash::Hash;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::error::GraphError;

use super::adjacency::Graph;

/// Takes up to `steps` hops from `start`, choosing uniformly among the
/// current vertex's out-neighbors, and returns the visited sequence with
/// `start` first. Stops early at a vertex with no outgoing arcs.
///
/// # Errors
/// `VertexNotFound` if `start` is not in the graph.
pub fn random_walk<V, E, R>(
    g: &Graph<V, E>,
    start: &V,
    steps: usize,
    rng: &mut R,
) -> Result<Vec<V>, GraphError>
where
    V: Ord + Hash + Eq + Clone,
    R: Rng + ?Sized,
{
    if !g.has_vertex(start) {
        return Err(GraphError::VertexNotFound);
    }

    let mut walk = vec![start.clone()];
    let mut current = start.clone();
    for _ in 0..steps {
        let Some(next) = g.out_neighbors(&current)?.choose(rng) else {
            break;
        };
        walk.push(next.clone());
        current = next.clone();
    }

    Ok(walk)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::super::fixtures::seven_vertex;
    use super::*;

    #[test]
    fn test_zero_step_walk_is_just_the_start() {
        let g = seven_vertex();
        let mut rng = StdRng::seed_from_u64(7);

        let walk = random_walk(&g, &"Charlie", 0, &mut rng).unwrap();
        assert_eq!(walk, vec!["Charlie"]);
    }

    #[test]
    fn test_walk_stops_at_a_sink() {
        let mut g = Graph::new();
        g.insert_directed("a", "b", ());
        let mut rng = StdRng::seed_from_u64(7);

        // One hop lands on b, which has no outgoing arcs.
        let walk = random_walk(&g, &"a", 10, &mut rng).unwrap();
        assert_eq!(walk, vec!["a", "b"]);
    }

    #[test]
    fn test_walk_from_a_sink_returns_immediately() {
        let mut g = Graph::new();
        g.insert_directed("a", "b", ());
        let mut rng = StdRng::seed_from_u64(7);

        // b has out-degree zero, so no hops are taken no matter the budget.
        let walk = random_walk(&g, &"b", 10, &mut rng).unwrap();
        assert_eq!(walk, vec!["b"]);
    }

    #[test]
    fn test_walk_from_absent_vertex_fails() {
        let g = seven_vertex();
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(
            random_walk(&g, &"Ghost", 3, &mut rng),
            Err(crate::error::GraphError::VertexNotFound)
        );
    }

    #[test]
    fn test_walk_follows_edges_and_respects_the_bound() {
        let g = seven_vertex();
        let mut rng = StdRng::seed_from_u64(42);

        let walk = random_walk(&g, &"Kevin Bacon", 5, &mut rng).unwrap();
        assert!(walk.len() <= 6);
        for pair in walk.windows(2) {
            assert!(g.has_edge(&pair[0], &pair[1]));
        }
    }
}
