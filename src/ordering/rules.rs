//! Built-in ordering rules.
//!
//! - **LDF**: largest degree first (Welsh-Powell)
//! - **INSERTION**: order in which courses were added
//! - **RANDOM**: seeded shuffle, for comparing against the heuristics

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{OrderingRule, RuleScore};
use crate::graph::ConflictGraph;

/// Largest Degree First.
///
/// Colors the most-conflicted courses first, while many slots are
/// still free. Tends to use fewer slots than insertion order on
/// clustered conflict graphs.
///
/// # Reference
/// Welsh & Powell (1967)
#[derive(Debug, Clone, Copy)]
pub struct LargestDegreeFirst;

impl OrderingRule for LargestDegreeFirst {
    fn name(&self) -> &'static str {
        "LDF"
    }

    fn evaluate(&self, graph: &ConflictGraph, id: &str) -> RuleScore {
        -(graph.degree(id) as f64)
    }

    fn description(&self) -> &'static str {
        "Largest Degree First"
    }
}

/// Insertion order.
#[derive(Debug, Clone, Copy)]
pub struct InsertionOrder;

impl OrderingRule for InsertionOrder {
    fn name(&self) -> &'static str {
        "INSERTION"
    }

    fn evaluate(&self, graph: &ConflictGraph, id: &str) -> RuleScore {
        graph.insertion_index(id).map_or(f64::MAX, |i| i as f64)
    }

    fn description(&self) -> &'static str {
        "Insertion Order"
    }
}

/// Random sequential order from a fixed seed.
#[derive(Debug, Clone, Copy)]
pub struct RandomOrder {
    seed: u64,
}

impl RandomOrder {
    /// Creates a random ordering with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl OrderingRule for RandomOrder {
    fn name(&self) -> &'static str {
        "RANDOM"
    }

    /// Constant score; the order comes from [`order`](OrderingRule::order).
    fn evaluate(&self, _graph: &ConflictGraph, _id: &str) -> RuleScore {
        0.0
    }

    fn order<'g>(&self, graph: &'g ConflictGraph) -> Vec<&'g str> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut ids: Vec<&'g str> = graph.nodes().collect();
        ids.shuffle(&mut rng);
        ids
    }

    fn description(&self) -> &'static str {
        "Random Sequential"
    }
}
