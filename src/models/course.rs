//! Course model.
//!
//! A course is one node of the conflict graph. Its id is the identity
//! used everywhere else; the name is display metadata only.

use serde::{Deserialize, Serialize};

/// A course session to be placed in a time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique, normalized course code (e.g., "CS101").
    pub id: String,
    /// Human-readable title.
    pub name: String,
}

impl Course {
    /// Creates a course, normalizing the id.
    pub fn new(id: impl AsRef<str>, name: impl Into<String>) -> Self {
        Self {
            id: Self::normalize_id(id.as_ref()),
            name: name.into(),
        }
    }

    /// Canonical form of a course id: trimmed and uppercased.
    ///
    /// All lookups go through this, so `" cs101 "` and `"CS101"` name
    /// the same course.
    pub fn normalize_id(raw: &str) -> String {
        raw.trim().to_uppercase()
    }
}
