//! Greedy slot assignment over a conflict graph.
//!
//! # Algorithm
//!
//! Every course receives the smallest slot index not used by any of its
//! *already-colored* neighbors.
//!
//! - **Full pass** ([`SlotAssigner::color_all`]): clears the color map and
//!   visits all nodes in the order chosen by an [`OrderingRule`].
//! - **Incremental** ([`SlotAssigner::color_incremental`]): colors one new
//!   node against the frozen colors of the existing ones. Existing
//!   entries are never revisited.
//!
//! Each node avoids the colors of neighbors colored before it, and every
//! neighbor colored after it avoids its color in turn, so adjacent nodes
//! always differ regardless of visiting order.
//!
//! Incremental insertion may use more distinct slots than a fresh full
//! pass would. Frozen colors cannot be reshuffled to make room.
//!
//! # Complexity
//! Full pass: O(V log V + E). Incremental: O(deg(v)).
//!
//! # Reference
//! Kubale (2004), "Graph Colorings", Ch. 1: Sequential coloring

use log::debug;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::graph::ConflictGraph;
use crate::ordering::OrderingRule;

/// Course id → slot index map with the greedy assignment rules.
#[derive(Debug, Clone, Default)]
pub struct SlotAssigner {
    colors: HashMap<String, usize>,
}

impl SlotAssigner {
    /// Creates an assigner with no colored courses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recolors every node of `graph` from scratch.
    ///
    /// Discards any previous assignment, then visits nodes in the order
    /// given by `rule`.
    pub fn color_all(&mut self, graph: &ConflictGraph, rule: &dyn OrderingRule) {
        self.colors.clear();
        for id in rule.order(graph) {
            let slot = self.first_free_slot(graph, id);
            debug!(
                "{}: {} (degree {}) -> slot {}",
                rule.name(),
                id,
                graph.degree(id),
                slot
            );
            self.colors.insert(id.to_string(), slot);
        }
    }

    /// Colors a single node that is already present in `graph`.
    ///
    /// Returns the existing slot unchanged if `id` was colored before.
    /// Otherwise picks the first slot free among its colored neighbors
    /// and records it permanently.
    pub fn color_incremental(&mut self, graph: &ConflictGraph, id: &str) -> usize {
        if let Some(&slot) = self.colors.get(id) {
            return slot;
        }
        let slot = self.first_free_slot(graph, id);
        debug!("incremental: {} -> slot {}", id, slot);
        self.colors.insert(id.to_string(), slot);
        slot
    }

    /// Smallest slot index not used by any colored neighbor of `id`.
    ///
    /// Pure query: nothing is recorded. Uncolored neighbors are ignored.
    pub fn first_free_slot(&self, graph: &ConflictGraph, id: &str) -> usize {
        self.first_free_slot_among(graph.neighbors(id))
    }

    /// Smallest slot index not used by any colored course in `ids`.
    ///
    /// Lets a caller preview the slot of a course before inserting it.
    pub fn first_free_slot_among<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> usize {
        let taken: HashSet<usize> = ids
            .into_iter()
            .filter_map(|n| self.colors.get(n).copied())
            .collect();
        (0..).find(|slot| !taken.contains(slot)).unwrap_or(0)
    }

    /// Slot assigned to `id`, if colored.
    #[inline]
    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.colors.get(id).copied()
    }

    /// Whether `id` has a slot.
    #[inline]
    pub fn is_colored(&self, id: &str) -> bool {
        self.colors.contains_key(id)
    }

    /// Number of colored courses.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no course is colored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Raw course id → slot map.
    pub fn colors(&self) -> &HashMap<String, usize> {
        &self.colors
    }

    /// Number of distinct slot indices in use.
    pub fn distinct_slots(&self) -> usize {
        self.colors.values().collect::<HashSet<_>>().len()
    }

    /// Highest slot index in use.
    pub fn max_slot(&self) -> Option<usize> {
        self.colors.values().copied().max()
    }

    /// Groups course ids by slot index.
    ///
    /// Ids within a slot follow graph insertion order.
    pub fn group_by_slot(&self, graph: &ConflictGraph) -> BTreeMap<usize, Vec<String>> {
        let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for id in graph.nodes() {
            if let Some(&slot) = self.colors.get(id) {
                groups.entry(slot).or_default().push(id.to_string());
            }
        }
        groups
    }

    /// Edges whose endpoints share a slot. Empty for any valid coloring.
    pub fn conflicting_edges<'g>(&self, graph: &'g ConflictGraph) -> Vec<(&'g str, &'g str)> {
        graph
            .edges()
            .filter(|(a, b)| match (self.colors.get(*a), self.colors.get(*b)) {
                (Some(ca), Some(cb)) => ca == cb,
                _ => false,
            })
            .collect()
    }

    /// Drops every assignment.
    pub fn clear(&mut self) {
        self.colors.clear();
    }
}
