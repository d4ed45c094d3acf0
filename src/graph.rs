//! Course conflict graph.
//!
//! An undirected simple graph over course ids. Nodes keep their
//! insertion order, which the coloring pass uses as its tie-breaker.
//!
//! # Ingestion Policy
//! Edges to unknown nodes and self-loops are ignored rather than
//! rejected. Bulk conflict loading never aborts on a mistyped id;
//! callers that want to know what was dropped check the return value
//! of [`ConflictGraph::add_edge`] or run [`crate::validation`] first.

use std::collections::{BTreeSet, HashMap};

/// Undirected conflict graph keyed by course id.
///
/// Internally nodes are dense indices in insertion order; adjacency is
/// one ordered index set per node, so `(a, b)` and `(b, a)` are the
/// same edge and neighbor iteration is deterministic.
#[derive(Debug, Clone, Default)]
pub struct ConflictGraph {
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<BTreeSet<usize>>,
    edge_count: usize,
}

impl ConflictGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node. No-op if it already exists.
    ///
    /// Returns `true` if the node was newly inserted.
    pub fn add_node(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id.clone(), self.nodes.len());
        self.nodes.push(id);
        self.adjacency.push(BTreeSet::new());
        true
    }

    /// Inserts the undirected edge `a - b`.
    ///
    /// Ignored when either endpoint is unknown or when `a == b`.
    /// Returns `true` only if a new edge was stored.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        let (Some(&ia), Some(&ib)) = (self.index.get(a), self.index.get(b)) else {
            return false;
        };
        if ia == ib {
            return false;
        }
        let inserted = self.adjacency[ia].insert(ib);
        if inserted {
            self.adjacency[ib].insert(ia);
            self.edge_count += 1;
        }
        inserted
    }

    /// Whether the node exists.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of edges incident to `id` (0 if isolated or absent).
    pub fn degree(&self, id: &str) -> usize {
        self.index
            .get(id)
            .map_or(0, |&i| self.adjacency[i].len())
    }

    /// Adjacent course ids (empty if isolated or absent).
    ///
    /// The iterator borrows the graph and can be recreated at will.
    pub fn neighbors<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.index
            .get(id)
            .map(move |&i| &self.adjacency[i])
            .into_iter()
            .flatten()
            .map(move |&j| self.nodes[j].as_str())
    }

    /// Symmetric adjacency test.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => self.adjacency[ia].contains(&ib),
            _ => false,
        }
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// Position of `id` in insertion order.
    pub fn insertion_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Every edge exactly once, as `(earlier, later)` by insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.adjacency.iter().enumerate().flat_map(move |(i, adj)| {
            adj.range(i + 1..)
                .map(move |&j| (self.nodes[i].as_str(), self.nodes[j].as_str()))
        })
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes all nodes and edges.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.adjacency.clear();
        self.edge_count = 0;
    }
}
