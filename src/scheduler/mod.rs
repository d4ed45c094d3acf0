//! Timetable scheduler facade and quality report.
//!
//! `Scheduler` owns the conflict graph and the slot assignment. It
//! colors an initial course set once, then places further courses one
//! at a time without moving anything already placed.
//!
//! # Report
//!
//! `TimetableReport` summarizes a scheduler's state: slots used,
//! capacity overflow, and any same-slot conflicts (which a correct
//! coloring never produces).
//!
//! # References
//!
//! - de Werra (1985), "An introduction to timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

mod report;
mod timetable;

pub use report::TimetableReport;
pub use timetable::{Placement, Scheduler, SchedulerConfig};
