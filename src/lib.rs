//! Conflict-free course timetabling for the U-Engine ecosystem.
//!
//! Places course sessions into time slots so that no two conflicting
//! courses share a slot, using greedy graph coloring over a conflict
//! graph. An initial course set is colored in one pass; later courses
//! are inserted one at a time without moving anything already placed.
//!
//! # Modules
//!
//! - **`graph`**: `ConflictGraph`, an undirected adjacency-set graph over course ids
//! - **`ordering`**: Node ordering rules for the initial pass (largest degree first, ...)
//! - **`coloring`**: `SlotAssigner`, full and incremental greedy coloring
//! - **`models`**: Domain types — `Course`, `SlotCalendar`, `SlotLabel`, `TimetableSnapshot`
//! - **`scheduler`**: `Scheduler` facade and `TimetableReport`
//! - **`validation`**: Input integrity checks (duplicate ids, unknown conflict targets)
//!
//! # Architecture
//!
//! Rendering, interactive input and persistence are left to callers.
//! They drive the `Scheduler` API and consume its snapshots as plain
//! serde data.
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a graph"
//! - de Werra (1985), "An introduction to timetabling"
//! - Kubale (2004), "Graph Colorings"

pub mod coloring;
pub mod error;
pub mod graph;
pub mod models;
pub mod ordering;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};
