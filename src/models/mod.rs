//! Timetabling domain models.
//!
//! Plain serde data types shared by the scheduler and by the layers
//! that render or persist its output.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | Exams | Meetings |
//! |-------------|-----------|-------|----------|
//! | Course | Lecture session | Exam paper | Meeting |
//! | Conflict | Shared students/instructor | Shared candidates | Shared attendee |
//! | Slot | Teaching block | Exam sitting | Calendar slot |

mod calendar;
mod course;
mod timetable;

pub use calendar::{SlotCalendar, SlotLabel};
pub use course::Course;
pub use timetable::{GridCell, SlotAssignment, TimetableSnapshot};
