//! Timetable quality report.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Slots Used | Distinct slot indices holding at least one course |
//! | Highest Slot | Largest assigned slot index |
//! | Utilization | Slots used / calendar capacity |
//! | Conflicting Slots | Slots holding two courses joined by an edge |
//! | Overflow | Courses whose slot has no calendar label |

use super::Scheduler;

/// Summary of a scheduler's current timetable.
#[derive(Debug, Clone, PartialEq)]
pub struct TimetableReport {
    /// Number of scheduled courses.
    pub total_courses: usize,
    /// Number of conflict edges.
    pub total_conflicts: usize,
    /// Distinct slots in use.
    pub slots_used: usize,
    /// Highest slot index in use. `None` when empty.
    pub max_slot: Option<usize>,
    /// Labelled slots available in the calendar.
    pub calendar_capacity: usize,
    /// Fraction of calendar slots in use (0.0..1.0).
    pub utilization: f64,
    /// Slots containing a conflicting pair. Empty for a valid coloring.
    pub conflicting_slots: Vec<usize>,
    /// Courses placed beyond the calendar capacity, in insertion order.
    pub overflow_courses: Vec<String>,
}

impl TimetableReport {
    /// Computes the report from a scheduler's state.
    pub fn calculate(scheduler: &Scheduler) -> Self {
        let usage = scheduler.slot_usage_summary();
        let calendar = scheduler.calendar();
        let capacity = calendar.capacity();

        let conflicting_slots: Vec<usize> = usage
            .keys()
            .copied()
            .filter(|&slot| scheduler.has_conflict_within_slot(slot))
            .collect();

        let overflow_courses: Vec<String> = usage
            .range(capacity..)
            .flat_map(|(_, ids)| ids.iter().cloned())
            .collect();

        let labelled_in_use = usage.keys().filter(|&&slot| calendar.contains(slot)).count();
        let utilization = if capacity == 0 {
            0.0
        } else {
            labelled_in_use as f64 / capacity as f64
        };

        Self {
            total_courses: scheduler.course_count(),
            total_conflicts: scheduler.graph().edge_count(),
            slots_used: usage.len(),
            max_slot: usage.keys().next_back().copied(),
            calendar_capacity: capacity,
            utilization,
            conflicting_slots,
            overflow_courses,
        }
    }

    /// Whether every course fits the calendar and no slot holds a conflict.
    pub fn is_valid(&self) -> bool {
        self.conflicting_slots.is_empty() && self.overflow_courses.is_empty()
    }
}
