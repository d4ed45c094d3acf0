//! Input validation for timetabling problems.
//!
//! Checks the structural integrity of a course list and its conflict
//! pairs before the graph is built. Detects:
//! - Empty course ids
//! - Duplicate course ids
//! - Conflicts naming an unknown course
//! - Courses declared in conflict with themselves
//!
//! None of these is fatal to the scheduler: it drops the offending
//! entries and reports them with the same [`ValidationIssue`] values.
//! Callers that prefer a strict gate can run [`validate_input`] first.

use std::collections::HashSet;

use crate::models::Course;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationIssue>>;

/// A dropped or suspicious input entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// Issue category.
    pub kind: ValidationIssueKind,
    /// Course id the issue is about.
    pub course_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssueKind {
    /// Course id is empty after normalization.
    EmptyId,
    /// Two courses share the same normalized id. The first one wins.
    DuplicateId,
    /// A conflict references a course that doesn't exist.
    UnknownConflictTarget,
    /// A course is declared in conflict with itself.
    SelfConflict,
}

impl ValidationIssue {
    pub(crate) fn new(
        kind: ValidationIssueKind,
        course_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            course_id: course_id.into(),
            message: message.into(),
        }
    }

    pub(crate) fn unknown_target(owner: &str, target: &str) -> Self {
        Self::new(
            ValidationIssueKind::UnknownConflictTarget,
            target,
            format!("Conflict '{owner}' - '{target}' references unknown course '{target}'"),
        )
    }

    pub(crate) fn self_conflict(id: &str) -> Self {
        Self::new(
            ValidationIssueKind::SelfConflict,
            id,
            format!("Course '{id}' is declared in conflict with itself"),
        )
    }
}

/// Validates a course list and its conflict pairs.
///
/// Ids are compared after [`Course::normalize_id`].
///
/// Checks:
/// 1. No empty course ids
/// 2. No duplicate course ids
/// 3. Both ends of every conflict name a known course
/// 4. No course conflicts with itself
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(issues)` with every detected issue.
pub fn validate_input<A, B>(courses: &[Course], conflicts: &[(A, B)]) -> ValidationResult
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let issues = collect_issues(courses, conflicts);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Same checks as [`validate_input`], returning the issue list directly.
pub(crate) fn collect_issues<A, B>(courses: &[Course], conflicts: &[(A, B)]) -> Vec<ValidationIssue>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut issues = Vec::new();
    let mut ids = HashSet::new();

    for course in courses {
        let id = Course::normalize_id(&course.id);
        if id.is_empty() {
            issues.push(ValidationIssue::new(
                ValidationIssueKind::EmptyId,
                id,
                format!("Course '{}' has an empty id", course.name),
            ));
            continue;
        }
        if !ids.insert(id.clone()) {
            issues.push(ValidationIssue::new(
                ValidationIssueKind::DuplicateId,
                id.clone(),
                format!("Duplicate course ID: {id}"),
            ));
        }
    }

    for (a, b) in conflicts {
        let a = Course::normalize_id(a.as_ref());
        let b = Course::normalize_id(b.as_ref());
        // A self-pair has one direction, not two.
        let directions = if a == b { 1 } else { 2 };
        for (owner, target) in [(&a, &b), (&b, &a)].into_iter().take(directions) {
            if !ids.contains(target.as_str()) {
                issues.push(ValidationIssue::unknown_target(owner, target));
            }
        }
        if a == b && ids.contains(a.as_str()) {
            issues.push(ValidationIssue::self_conflict(&a));
        }
    }

    issues
}
