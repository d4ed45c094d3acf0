//! Slot calendar: day and time-of-day labels.
//!
//! Slot indices are the canonical output of the coloring. The calendar
//! is a pure view that decodes an index with fixed-radix arithmetic:
//!
//! ```text
//! day  = index / slots_per_day
//! time = index % slots_per_day
//! ```
//!
//! # Capacity
//! Only `days.len() * time_slots.len()` indices have a label. Decoding
//! anything beyond that returns [`ScheduleError::CapacityExceeded`]
//! instead of wrapping or panicking.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

const DEFAULT_DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
const DEFAULT_TIME_SLOTS: [&str; 4] = ["9:00-10:30", "10:45-12:15", "13:00-14:30", "14:45-16:15"];

/// Decoded position of a slot index in the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotLabel {
    /// Slot index this label decodes.
    pub slot: usize,
    /// Zero-based day position.
    pub day_index: usize,
    /// Zero-based time-of-day position.
    pub time_index: usize,
    /// Day label (e.g., "Monday").
    pub day: String,
    /// Time interval label (e.g., "9:00-10:30").
    pub time_slot: String,
}

impl std::fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.day, self.time_slot)
    }
}

/// Ordered day and time-of-day labels.
///
/// Deserializes from `{"days": [...], "time_slots": [...]}`. Both lists
/// must be non-empty; use [`SlotCalendar::from_json_str`] or
/// [`SlotCalendar::new`] to get that check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCalendar {
    /// Day labels, in week order.
    pub days: Vec<String>,
    /// Time-of-day labels, in daily order.
    pub time_slots: Vec<String>,
}

impl SlotCalendar {
    /// Creates a calendar from explicit labels.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidCalendar`] if either list is empty.
    pub fn new<D, T>(days: D, time_slots: T) -> Result<Self>
    where
        D: IntoIterator,
        D::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        let calendar = Self {
            days: days.into_iter().map(Into::into).collect(),
            time_slots: time_slots.into_iter().map(Into::into).collect(),
        };
        calendar.validate()?;
        Ok(calendar)
    }

    /// Parses and validates a calendar from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let calendar: Self = serde_json::from_str(json)?;
        calendar.validate()?;
        Ok(calendar)
    }

    /// Checks that both label lists are non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.days.is_empty() {
            return Err(ScheduleError::InvalidCalendar("no days defined".into()));
        }
        if self.time_slots.is_empty() {
            return Err(ScheduleError::InvalidCalendar(
                "no time slots defined".into(),
            ));
        }
        Ok(())
    }

    /// Time slots per day (the radix of the slot index).
    #[inline]
    pub fn slots_per_day(&self) -> usize {
        self.time_slots.len()
    }

    /// Number of labelled slot indices.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.days.len() * self.time_slots.len()
    }

    /// Whether `slot` has a label.
    #[inline]
    pub fn contains(&self, slot: usize) -> bool {
        slot < self.capacity()
    }

    /// Slot index for a (day, time) position.
    pub fn slot_index(&self, day_index: usize, time_index: usize) -> usize {
        day_index * self.slots_per_day() + time_index
    }

    /// Decodes a slot index into its day and time labels.
    ///
    /// # Errors
    /// [`ScheduleError::CapacityExceeded`] if `slot >= capacity()`.
    pub fn label(&self, slot: usize) -> Result<SlotLabel> {
        if !self.contains(slot) {
            return Err(ScheduleError::CapacityExceeded {
                slot,
                capacity: self.capacity(),
            });
        }
        let day_index = slot / self.slots_per_day();
        let time_index = slot % self.slots_per_day();
        Ok(SlotLabel {
            slot,
            day_index,
            time_index,
            day: self.days[day_index].clone(),
            time_slot: self.time_slots[time_index].clone(),
        })
    }
}

impl Default for SlotCalendar {
    /// Five weekdays, four teaching blocks per day.
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS.iter().map(|s| s.to_string()).collect(),
            time_slots: DEFAULT_TIME_SLOTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
