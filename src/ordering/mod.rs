//! Node ordering rules for the full coloring pass.
//!
//! Greedy coloring is order-sensitive: the same graph colored in a
//! different node order may use a different number of slots. An
//! [`OrderingRule`] decides that order. None of the rules guarantees a
//! minimum slot count.
//!
//! # Score Convention
//! **Lower score = colored earlier.** Ties keep graph insertion order,
//! which makes every rule here deterministic.
//!
//! # Usage
//!
//! ```
//! use u_timetable::graph::ConflictGraph;
//! use u_timetable::ordering::{rules, OrderingRule};
//!
//! let mut graph = ConflictGraph::new();
//! for id in ["A", "B", "C"] {
//!     graph.add_node(id);
//! }
//! graph.add_edge("A", "B");
//! graph.add_edge("B", "C");
//!
//! let order = rules::LargestDegreeFirst.order(&graph);
//! assert_eq!(order, vec!["B", "A", "C"]);
//! ```
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a graph"
//! - Matula & Beck (1983), "Smallest-last ordering and clustering"

pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::graph::ConflictGraph;

/// Score returned by an ordering rule. Lower scores are colored first.
pub type RuleScore = f64;

/// A rule that ranks conflict-graph nodes for greedy coloring.
pub trait OrderingRule: Send + Sync + Debug {
    /// Rule name (e.g., "LDF").
    fn name(&self) -> &'static str;

    /// Scores a single node. Lower = colored earlier.
    fn evaluate(&self, graph: &ConflictGraph, id: &str) -> RuleScore;

    /// Returns all node ids in coloring order.
    ///
    /// The default implementation sorts by [`evaluate`](Self::evaluate)
    /// with a stable sort over insertion order, so equal scores keep
    /// the order in which courses were added.
    fn order<'g>(&self, graph: &'g ConflictGraph) -> Vec<&'g str> {
        let mut scored: Vec<(RuleScore, &'g str)> = graph
            .nodes()
            .map(|id| (self.evaluate(graph, id), id))
            .collect();
        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().map(|(_, id)| id).collect()
    }

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Serializable selector for the built-in ordering rules.
///
/// Used in [`SchedulerConfig`](crate::scheduler::SchedulerConfig) so the
/// policy can come from a configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Descending degree, ties by insertion order.
    #[default]
    LargestDegreeFirst,
    /// Plain insertion order.
    InsertionOrder,
    /// Seeded shuffle.
    Random {
        /// Shuffle seed; the same seed always yields the same order.
        seed: u64,
    },
}

impl OrderingPolicy {
    /// Builds the rule this policy names.
    pub fn rule(&self) -> Box<dyn OrderingRule> {
        match *self {
            Self::LargestDegreeFirst => Box::new(rules::LargestDegreeFirst),
            Self::InsertionOrder => Box::new(rules::InsertionOrder),
            Self::Random { seed } => Box::new(rules::RandomOrder::new(seed)),
        }
    }
}
