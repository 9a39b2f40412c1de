// src/universe/builder.rs
//! Builds the co-appearance graph from a parsed dataset.

use std::collections::BTreeSet;

use crate::graph::Graph;

use super::loader::Dataset;

/// Turns (movie → cast) groupings into the undirected co-star graph.
///
/// Every actor becomes a vertex, credited or not. For each movie, every
/// unordered pair of distinct cast members gets the movie merged into the
/// label shared by both arc directions. Duplicate names within one cast
/// collapse to a single co-star, so no self-loops are produced.
#[must_use]
pub fn build_costar_graph(dataset: &Dataset) -> Graph<String, BTreeSet<String>> {
    let mut g: Graph<String, BTreeSet<String>> = Graph::new();

    for actor in &dataset.actors {
        g.insert_vertex(actor.clone());
    }

    for (movie, cast) in &dataset.casts {
        let unique: Vec<&String> = cast.iter().collect::<BTreeSet<_>>().into_iter().collect();
        for i in 0..unique.len() {
            for j in i + 1..unique.len() {
                let (a, b) = (unique[i], unique[j]);
                if let Ok(movies) = g.label_mut(a, b) {
                    movies.insert(movie.clone());
                } else {
                    g.insert_undirected(a.clone(), b.clone(), BTreeSet::from([movie.clone()]));
                }
            }
        }
    }

    g
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn dataset(actors: &[&str], casts: &[(&str, &[&str])]) -> Dataset {
        Dataset {
            actors: actors.iter().map(ToString::to_string).collect(),
            casts: casts
                .iter()
                .map(|(movie, cast)| {
                    let cast = cast.iter().map(ToString::to_string).collect();
                    ((*movie).to_string(), cast)
                })
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_costar_edge_carries_the_movie() {
        let data = dataset(
            &["Kevin Bacon", "Alice"],
            &[("A Movie", &["Kevin Bacon", "Alice"])],
        );
        let g = build_costar_graph(&data);

        let expected = BTreeSet::from(["A Movie".to_string()]);
        assert_eq!(g.label(&"Alice".into(), &"Kevin Bacon".into()), Ok(&expected));
        assert_eq!(g.label(&"Kevin Bacon".into(), &"Alice".into()), Ok(&expected));
    }

    #[test]
    fn test_labels_merge_across_movies() {
        let data = dataset(
            &["Kevin Bacon", "Alice"],
            &[
                ("A Movie", &["Kevin Bacon", "Alice"]),
                ("E Movie", &["Alice", "Kevin Bacon"]),
            ],
        );
        let g = build_costar_graph(&data);

        let expected = BTreeSet::from(["A Movie".to_string(), "E Movie".to_string()]);
        assert_eq!(g.label(&"Alice".into(), &"Kevin Bacon".into()), Ok(&expected));
        assert_eq!(g.label(&"Kevin Bacon".into(), &"Alice".into()), Ok(&expected));
        // One undirected edge, two arcs.
        assert_eq!(g.num_edges(), 2);
    }

    #[test]
    fn test_isolated_actor_keeps_a_vertex() {
        let data = dataset(&["Hermit", "Kevin Bacon"], &[]);
        let g = build_costar_graph(&data);

        assert!(g.has_vertex(&"Hermit".into()));
        assert_eq!(g.out_degree(&"Hermit".into()), Ok(0));
    }

    #[test]
    fn test_duplicate_cast_entries_collapse() {
        let data = dataset(
            &["Alice", "Bob"],
            &[("A Movie", &["Alice", "Alice", "Bob"])],
        );
        let g = build_costar_graph(&data);

        assert!(!g.has_edge(&"Alice".into(), &"Alice".into()));
        assert!(g.has_edge(&"Alice".into(), &"Bob".into()));
        assert_eq!(g.num_edges(), 2);
    }

    #[test]
    fn test_empty_dataset_builds_an_empty_graph() {
        let g = build_costar_graph(&Dataset::default());

        assert_eq!(g.num_vertices(), 0);
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn test_full_cast_is_pairwise_connected() {
        let data = dataset(
            &["Kevin Bacon", "Alice", "Bob"],
            &[("A Movie", &["Kevin Bacon", "Alice", "Bob"])],
        );
        let g = build_costar_graph(&data);

        // Three unordered pairs, each one undirected edge.
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 6);
        assert!(g.has_edge(&"Alice".into(), &"Bob".into()));
    }
}
