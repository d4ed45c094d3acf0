//! Error types for timetable operations.
//!
//! Only user-facing entry errors surface as `Err`. Problems found while
//! ingesting bulk input (unknown conflict targets, repeated ids) are
//! dropped and reported as [`ValidationIssue`](crate::validation::ValidationIssue)
//! values instead, so a single typo never aborts initialization.

use thiserror::Error;

/// Result type for timetable operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors returned by the scheduler and calendar.
///
/// Every variant is recoverable at the call site. An operation that
/// returns one of these leaves the scheduler state unchanged.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A course with the same normalized id is already scheduled.
    #[error("course '{id}' already exists")]
    DuplicateCourse {
        /// Normalized id that collided.
        id: String,
    },

    /// The course id is empty after trimming.
    #[error("invalid course id: {raw:?}")]
    InvalidCourseId {
        /// Id as supplied by the caller.
        raw: String,
    },

    /// A slot index has no day/time label in the calendar.
    #[error("slot {slot} exceeds calendar capacity of {capacity} slots")]
    CapacityExceeded {
        /// Slot index that was requested or would have been assigned.
        slot: usize,
        /// Number of labelled slots in the calendar.
        capacity: usize,
    },

    /// Calendar has no days or no time slots.
    #[error("invalid calendar: {0}")]
    InvalidCalendar(String),

    /// Configuration could not be parsed or serialized.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
