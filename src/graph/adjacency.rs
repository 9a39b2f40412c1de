// src/graph/adjacency.rs
//! The generic edge-labeled graph container.
//!
//! Vertices are opaque `Ord + Hash` values; labels live in an internal arena
//! and arcs store arena slots. An undirected insertion points both directed
//! arcs at the *same* slot, which is what lets the co-star builder merge a
//! movie into one label and have the update visible from either direction.
//!
//! Adjacency is kept in `BTreeMap`s so neighbor enumeration is always in
//! ascending vertex order. Traversal results and tie-breaks downstream are
//! deterministic because of this.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::error::GraphError;

/// A directed, edge-labeled graph. Undirected edges are a pair of directed
/// arcs sharing one label record.
#[derive(Debug, Clone, Default)]
pub struct Graph<V, E> {
    out: HashMap<V, BTreeMap<V, usize>>,
    inc: HashMap<V, BTreeMap<V, usize>>,
    labels: Vec<E>,
    arcs: usize,
}

impl<V, E> Graph<V, E>
where
    V: Ord + Hash + Eq + Clone,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            out: HashMap::new(),
            inc: HashMap::new(),
            labels: Vec::new(),
            arcs: 0,
        }
    }

    /// Adds a vertex. Inserting an existing vertex is a no-op.
    pub fn insert_vertex(&mut self, v: V) {
        if !self.out.contains_key(&v) {
            self.out.insert(v.clone(), BTreeMap::new());
            self.inc.insert(v, BTreeMap::new());
        }
    }

    /// Adds the directed arc u → v, inserting missing vertices first.
    /// Re-inserting an existing arc overwrites its label; if that arc was
    /// half of an undirected pair, the leg is split onto its own label so
    /// the reverse direction keeps the old one.
    pub fn insert_directed(&mut self, u: V, v: V, label: E) {
        self.insert_vertex(u.clone());
        self.insert_vertex(v.clone());

        let slot = match self.slot(&u, &v) {
            Some(id) if !self.shares_reverse(&u, &v, id) => {
                self.labels[id] = label;
                id
            }
            Some(_) => self.push_label(label),
            None => {
                self.arcs += 1;
                self.push_label(label)
            }
        };

        self.out.entry(u.clone()).or_default().insert(v.clone(), slot);
        self.inc.entry(v).or_default().insert(u, slot);
    }

    /// Adds an undirected edge as two directed arcs referencing one shared
    /// label record.
    /// Re-inserting over an existing undirected pair overwrites the shared
    /// label in place. A self edge degenerates to a single arc.
    pub fn insert_undirected(&mut self, u: V, v: V, label: E) {
        if u == v {
            self.insert_directed(u, v, label);
            return;
        }

        self.insert_vertex(u.clone());
        self.insert_vertex(v.clone());

        if let (Some(fwd), Some(rev)) = (self.slot(&u, &v), self.slot(&v, &u)) {
            if fwd == rev {
                self.labels[fwd] = label;
                return;
            }
        }

        if self.slot(&u, &v).is_none() {
            self.arcs += 1;
        }
        if self.slot(&v, &u).is_none() {
            self.arcs += 1;
        }

        let id = self.push_label(label);
        self.out.entry(u.clone()).or_default().insert(v.clone(), id);
        self.inc.entry(v.clone()).or_default().insert(u.clone(), id);
        self.out.entry(v.clone()).or_default().insert(u.clone(), id);
        self.inc.entry(u).or_default().insert(v, id);
    }

    #[must_use]
    pub fn has_vertex(&self, v: &V) -> bool {
        self.out.contains_key(v)
    }

    #[must_use]
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.slot(u, v).is_some()
    }

    /// Returns the label on the arc u → v.
    ///
    /// # Errors
    /// `EdgeNotFound` if the arc is absent.
    pub fn label(&self, u: &V, v: &V) -> Result<&E, GraphError> {
        let id = self.slot(u, v).ok_or(GraphError::EdgeNotFound)?;
        Ok(&self.labels[id])
    }

    /// Returns the label on u → v for in-place mutation. For an undirected
    /// pair this is the shared record, so an update covers both directions.
    ///
    /// # Errors
    /// `EdgeNotFound` if the arc is absent.
    pub fn label_mut(&mut self, u: &V, v: &V) -> Result<&mut E, GraphError> {
        let id = self.slot(u, v).ok_or(GraphError::EdgeNotFound)?;
        Ok(&mut self.labels[id])
    }

    /// Vertices reachable from `v` by one outgoing arc, ascending.
    ///
    /// # Errors
    /// `VertexNotFound` if `v` is absent.
    pub fn out_neighbors<'a>(
        &'a self,
        v: &V,
    ) -> Result<impl Iterator<Item = &'a V>, GraphError> {
        Ok(self.out.get(v).ok_or(GraphError::VertexNotFound)?.keys())
    }

    /// Vertices with an arc into `v`, ascending.
    ///
    /// # Errors
    /// `VertexNotFound` if `v` is absent.
    pub fn in_neighbors<'a>(
        &'a self,
        v: &V,
    ) -> Result<impl Iterator<Item = &'a V>, GraphError> {
        Ok(self.inc.get(v).ok_or(GraphError::VertexNotFound)?.keys())
    }

    /// Number of outgoing arcs.
    ///
    /// # Errors
    /// `VertexNotFound` if `v` is absent.
    pub fn out_degree(&self, v: &V) -> Result<usize, GraphError> {
        Ok(self.out.get(v).ok_or(GraphError::VertexNotFound)?.len())
    }

    /// Number of incoming arcs.
    ///
    /// # Errors
    /// `VertexNotFound` if `v` is absent.
    pub fn in_degree(&self, v: &V) -> Result<usize, GraphError> {
        Ok(self.inc.get(v).ok_or(GraphError::VertexNotFound)?.len())
    }

    /// All vertices. Order is unspecified but stable while the graph is not
    /// mutated; callers that need a reproducible order sort the result.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.out.keys()
    }

    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.out.len()
    }

    /// Total directed-arc count (an undirected edge counts twice).
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.arcs
    }

    fn slot(&self, u: &V, v: &V) -> Option<usize> {
        self.out.get(u)?.get(v).copied()
    }

    // True when the arc's label slot is shared with the reverse arc, i.e.
    // the pair was inserted undirected. Self arcs own their slot alone.
    fn shares_reverse(&self, u: &V, v: &V, id: usize) -> bool {
        u != v && self.slot(v, u) == Some(id)
    }

    fn push_label(&mut self, label: E) -> usize {
        self.labels.push(label);
        self.labels.len() - 1
    }
}
