//! Timetable (solution) model.
//!
//! Read-only, serializable views of a scheduler's state. Rendering and
//! reporting layers consume these without touching the coloring
//! internals.

use serde::{Deserialize, Serialize};

use super::{Course, SlotCalendar, SlotLabel};

/// A course-to-slot assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// Assigned course id.
    pub course_id: String,
    /// Slot index from the coloring.
    pub slot: usize,
    /// Decoded day/time. `None` if the slot is beyond calendar capacity.
    pub label: Option<SlotLabel>,
}

/// One cell of the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Position and labels of this cell.
    pub label: SlotLabel,
    /// Courses placed in this cell, in insertion order.
    pub course_ids: Vec<String>,
}

impl GridCell {
    /// Whether no course occupies this cell.
    #[inline]
    pub fn is_free(&self) -> bool {
        self.course_ids.is_empty()
    }
}

/// Complete exported state: courses, conflicts, and assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableSnapshot {
    /// Courses in insertion order.
    pub courses: Vec<Course>,
    /// Conflict edges, each listed once.
    pub edges: Vec<(String, String)>,
    /// One assignment per course, in insertion order.
    pub assignments: Vec<SlotAssignment>,
    /// Calendar used to decode the slots.
    pub calendar: Option<SlotCalendar>,
}

impl TimetableSnapshot {
    /// Finds the assignment for a course.
    pub fn assignment_for(&self, course_id: &str) -> Option<&SlotAssignment> {
        self.assignments.iter().find(|a| a.course_id == course_id)
    }

    /// Course ids placed in `slot`.
    pub fn courses_in_slot(&self, slot: usize) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|a| a.slot == slot)
            .map(|a| a.course_id.as_str())
            .collect()
    }

    /// Assignments whose slot has no calendar label.
    pub fn unlabelled(&self) -> Vec<&SlotAssignment> {
        self.assignments.iter().filter(|a| a.label.is_none()).collect()
    }
}
