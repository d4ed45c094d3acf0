//! Course timetable scheduler.
//!
//! # Algorithm
//!
//! 1. `initialize`: build the conflict graph from the full course list,
//!    then run one greedy coloring pass in the configured order
//!    (largest degree first by default).
//! 2. `add_course`: insert one node with its valid conflicts and give
//!    it the smallest slot unused by its neighbors. Existing slots are
//!    frozen; the ordering policy is not consulted again.
//!
//! Slot indices map to day/time labels through the [`SlotCalendar`].
//!
//! # Example
//!
//! ```
//! use u_timetable::models::Course;
//! use u_timetable::scheduler::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.initialize(
//!     vec![Course::new("A", "Alpha"), Course::new("B", "Beta"), Course::new("C", "Gamma")],
//!     vec![("A", "B"), ("B", "C")],
//! );
//! assert_eq!(scheduler.slot_of("B"), Some(0));
//!
//! let placement = scheduler.add_course("d", "Delta", &["A"]).unwrap();
//! assert_eq!(placement.course_id, "D");
//! assert_ne!(scheduler.slot_of("D"), scheduler.slot_of("A"));
//! ```

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::coloring::SlotAssigner;
use crate::error::{Result, ScheduleError};
use crate::graph::ConflictGraph;
use crate::models::{
    Course, GridCell, SlotAssignment, SlotCalendar, SlotLabel, TimetableSnapshot,
};
use crate::ordering::OrderingPolicy;
use crate::validation::{self, ValidationIssue};

/// Scheduler configuration.
///
/// Deserializes from JSON such as
/// `{"calendar": {"days": [...], "time_slots": [...]}, "ordering": "largest_degree_first"}`.
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Day and time-of-day labels.
    pub calendar: SlotCalendar,
    /// Node order for the initial coloring pass.
    pub ordering: OrderingPolicy,
}

impl SchedulerConfig {
    /// Creates the default configuration (5 days × 4 slots, largest degree first).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the calendar.
    pub fn with_calendar(mut self, calendar: SlotCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets the ordering policy.
    pub fn with_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }

    /// Parses and validates a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.calendar.validate()?;
        Ok(config)
    }
}

/// Outcome of placing one course with [`Scheduler::add_course`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Normalized id of the placed course.
    pub course_id: String,
    /// Assigned slot index.
    pub slot: usize,
    /// Day/time decoded from `slot`.
    pub label: SlotLabel,
    /// Other courses sharing the slot, in insertion order.
    pub co_occupants: Vec<String>,
    /// Declared conflict ids that named no known course and were ignored.
    pub dropped_conflicts: Vec<String>,
}

impl Placement {
    /// Assigned day label.
    pub fn day(&self) -> &str {
        &self.label.day
    }

    /// Assigned time-of-day label.
    pub fn time_slot(&self) -> &str {
        &self.label.time_slot
    }
}

/// Conflict-free course timetable with incremental insertion.
///
/// Owns the conflict graph and the course → slot map exclusively; all
/// mutation goes through [`initialize`](Self::initialize) and
/// [`add_course`](Self::add_course). A fresh scheduler behaves as if
/// initialized with no courses.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
    graph: ConflictGraph,
    assigner: SlotAssigner,
    // Parallel to graph insertion order.
    courses: Vec<Course>,
}

impl Scheduler {
    /// Creates an empty scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scheduler with the given configuration.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidCalendar`] if the calendar has no days or
    /// no time slots.
    pub fn with_config(config: SchedulerConfig) -> Result<Self> {
        config.calendar.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Replaces all state with `courses` and `conflicts`, then colors.
    ///
    /// Ids are normalized. Entries with an empty or repeated id are
    /// skipped (first occurrence wins), and conflicts naming unknown
    /// courses or a course with itself are dropped. Everything skipped
    /// is returned as a [`ValidationIssue`]; the call itself never fails.
    ///
    /// Slots beyond the calendar capacity are kept and show up in
    /// [`TimetableReport`](super::TimetableReport).
    pub fn initialize<C, P, A, B>(&mut self, courses: C, conflicts: P) -> Vec<ValidationIssue>
    where
        C: IntoIterator<Item = Course>,
        P: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let courses: Vec<Course> = courses.into_iter().collect();
        let conflicts: Vec<(A, B)> = conflicts.into_iter().collect();
        let issues = validation::collect_issues(&courses, &conflicts);

        self.graph.clear();
        self.assigner.clear();
        self.courses.clear();

        for course in courses {
            let id = Course::normalize_id(&course.id);
            if id.is_empty() || !self.graph.add_node(id.clone()) {
                continue;
            }
            self.courses.push(Course {
                id,
                name: course.name,
            });
        }

        for (a, b) in &conflicts {
            let a = Course::normalize_id(a.as_ref());
            let b = Course::normalize_id(b.as_ref());
            self.graph.add_edge(&a, &b);
        }

        let rule = self.config.ordering.rule();
        self.assigner.color_all(&self.graph, &*rule);

        for issue in &issues {
            warn!("initialize: {}", issue.message);
        }
        info!(
            "initialized {} courses, {} conflicts, {} slots ({} order, {} issues)",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.assigner.distinct_slots(),
            rule.name(),
            issues.len()
        );

        issues
    }

    /// Places a new course without moving any existing one.
    ///
    /// The id and conflict ids are normalized (trimmed, uppercased).
    /// Conflicts naming unknown courses are ignored and listed in
    /// [`Placement::dropped_conflicts`].
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidCourseId`] if the id is empty.
    /// - [`ScheduleError::DuplicateCourse`] if the id already exists.
    /// - [`ScheduleError::CapacityExceeded`] if the only conflict-free
    ///   slot lies beyond the calendar.
    ///
    /// On error nothing is modified.
    pub fn add_course<S: AsRef<str>>(
        &mut self,
        id: &str,
        name: impl Into<String>,
        conflict_ids: &[S],
    ) -> Result<Placement> {
        let course_id = Course::normalize_id(id);
        if course_id.is_empty() {
            return Err(ScheduleError::InvalidCourseId { raw: id.to_string() });
        }
        if self.graph.contains(&course_id) {
            warn!("add_course: {} already exists", course_id);
            return Err(ScheduleError::DuplicateCourse { id: course_id });
        }

        let mut known: Vec<String> = Vec::new();
        let mut dropped: Vec<String> = Vec::new();
        let mut seen = HashSet::new();
        for raw in conflict_ids {
            let target = Course::normalize_id(raw.as_ref());
            if target.is_empty() || !seen.insert(target.clone()) {
                continue;
            }
            if self.graph.contains(&target) {
                known.push(target);
            } else {
                dropped.push(target);
            }
        }

        let slot = self
            .assigner
            .first_free_slot_among(known.iter().map(String::as_str));
        let label = self.config.calendar.label(slot)?;

        self.graph.add_node(course_id.clone());
        for target in &known {
            self.graph.add_edge(&course_id, target);
        }
        self.courses.push(Course {
            id: course_id.clone(),
            name: name.into(),
        });
        let assigned = self.assigner.color_incremental(&self.graph, &course_id);
        debug_assert_eq!(assigned, slot);

        let co_occupants: Vec<String> = self
            .courses_in_slot(slot)
            .into_iter()
            .filter(|c| *c != course_id)
            .map(str::to_string)
            .collect();

        if !dropped.is_empty() {
            warn!(
                "add_course: {} ignored unknown conflicts: {}",
                course_id,
                dropped.join(", ")
            );
        }
        info!("scheduled {} at {} (slot {})", course_id, label, slot);

        Ok(Placement {
            course_id,
            slot,
            label,
            co_occupants,
            dropped_conflicts: dropped,
        })
    }

    /// Course ids grouped by slot index.
    pub fn slot_usage_summary(&self) -> BTreeMap<usize, Vec<String>> {
        self.assigner.group_by_slot(&self.graph)
    }

    /// Whether two courses sharing `slot` are in conflict.
    ///
    /// Always `false` while the coloring invariant holds.
    pub fn has_conflict_within_slot(&self, slot: usize) -> bool {
        let here = self.courses_in_slot(slot);
        here.iter().enumerate().any(|(i, a)| {
            here[i + 1..]
                .iter()
                .any(|b| self.graph.has_edge(a, b))
        })
    }

    /// Course ids placed in `slot`, in insertion order.
    pub fn courses_in_slot(&self, slot: usize) -> Vec<&str> {
        self.graph
            .nodes()
            .filter(|id| self.assigner.slot_of(id) == Some(slot))
            .collect()
    }

    /// Slot index of a course. Accepts un-normalized ids.
    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.assigner.slot_of(&Course::normalize_id(id))
    }

    /// Day/time label for a slot index.
    pub fn slot_label(&self, slot: usize) -> Result<SlotLabel> {
        self.config.calendar.label(slot)
    }

    /// Day/time label of a course's slot. Accepts un-normalized ids.
    ///
    /// `None` if the course is unknown; `Some(Err(CapacityExceeded))` if
    /// its slot lies beyond the calendar.
    pub fn course_label(&self, id: &str) -> Option<Result<SlotLabel>> {
        self.slot_of(id).map(|slot| self.config.calendar.label(slot))
    }

    /// Looks up a course. Accepts un-normalized ids.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.graph
            .insertion_index(&Course::normalize_id(id))
            .map(|i| &self.courses[i])
    }

    /// Whether a course exists. Accepts un-normalized ids.
    pub fn contains(&self, id: &str) -> bool {
        self.graph.contains(&Course::normalize_id(id))
    }

    /// All courses in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of scheduled courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Whether no course is scheduled.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Number of distinct slots in use.
    pub fn slots_used(&self) -> usize {
        self.assigner.distinct_slots()
    }

    /// Read access to the conflict graph.
    pub fn graph(&self) -> &ConflictGraph {
        &self.graph
    }

    /// Read access to the slot assignment.
    pub fn assigner(&self) -> &SlotAssigner {
        &self.assigner
    }

    /// Active calendar.
    pub fn calendar(&self) -> &SlotCalendar {
        &self.config.calendar
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Every calendar cell in slot order (day-major), with its courses.
    ///
    /// Courses in slots beyond the calendar are not included; see
    /// [`TimetableReport::overflow_courses`](super::TimetableReport).
    pub fn timetable_grid(&self) -> Vec<GridCell> {
        let mut usage = self.slot_usage_summary();
        (0..self.config.calendar.capacity())
            .filter_map(|slot| self.config.calendar.label(slot).ok())
            .map(|label| GridCell {
                course_ids: usage.remove(&label.slot).unwrap_or_default(),
                label,
            })
            .collect()
    }

    /// Structured export of courses, conflicts, and assignments.
    pub fn snapshot(&self) -> TimetableSnapshot {
        let assignments = self
            .courses
            .iter()
            .filter_map(|c| {
                self.assigner.slot_of(&c.id).map(|slot| SlotAssignment {
                    course_id: c.id.clone(),
                    slot,
                    label: self.config.calendar.label(slot).ok(),
                })
            })
            .collect();
        let edges = self
            .graph
            .edges()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();
        debug!("snapshot: {} courses", self.courses.len());

        TimetableSnapshot {
            courses: self.courses.clone(),
            edges,
            assignments,
            calendar: Some(self.config.calendar.clone()),
        }
    }

    /// [`snapshot`](Self::snapshot) serialized as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationIssueKind;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn path_scheduler() -> Scheduler {
        let mut s = Scheduler::new();
        let issues = s.initialize(
            vec![
                Course::new("A", "Alpha"),
                Course::new("B", "Beta"),
                Course::new("C", "Gamma"),
            ],
            vec![("A", "B"), ("B", "C")],
        );
        assert!(issues.is_empty());
        s
    }

    fn university_scheduler() -> Scheduler {
        let courses = vec![
            Course::new("CS101", "Programming"),
            Course::new("CS102", "Data Structures"),
            Course::new("MATH101", "Calculus I"),
            Course::new("PHY101", "Physics I"),
            Course::new("CS201", "Algorithms"),
            Course::new("MATH102", "Calculus II"),
            Course::new("CHEM101", "Chemistry I"),
            Course::new("BIO101", "Biology I"),
            Course::new("CS301", "Database Systems"),
            Course::new("PHY102", "Physics II"),
        ];
        let conflicts = vec![
            ("CS101", "CS102"),
            ("CS101", "CS201"),
            ("CS102", "CS201"),
            ("CS201", "CS301"),
            ("MATH101", "MATH102"),
            ("PHY101", "CHEM101"),
            ("CHEM101", "BIO101"),
        ];
        let mut s = Scheduler::new();
        s.initialize(courses, conflicts);
        s
    }

    fn assert_proper(s: &Scheduler) {
        for (a, b) in s.graph().edges() {
            assert_ne!(s.slot_of(a), s.slot_of(b), "{a} and {b} share a slot");
        }
    }

    #[test]
    fn test_path_scenario() {
        let s = path_scheduler();
        assert_eq!(s.slot_of("B"), Some(0));
        assert_eq!(s.slot_of("A"), Some(1));
        assert_eq!(s.slot_of("C"), Some(1));
        assert_proper(&s);
    }

    #[test]
    fn test_add_course_after_path() {
        let mut s = path_scheduler();
        let p = s.add_course("D", "Delta", &["A"]).unwrap();

        assert_eq!(p.slot, 0);
        assert_eq!(p.day(), "Monday");
        assert_eq!(p.time_slot(), "9:00-10:30");
        assert_eq!(p.co_occupants, vec!["B".to_string()]);
        assert!(p.dropped_conflicts.is_empty());
        assert_eq!(s.slot_of("B"), Some(0));
        assert_eq!(s.slot_of("C"), Some(1));
        assert!(s.graph().has_edge("D", "A"));
        assert_proper(&s);
    }

    #[test]
    fn test_university_initial_coloring() {
        let s = university_scheduler();
        assert_proper(&s);
        // CS101, CS102, CS201 form a triangle.
        assert_eq!(s.slots_used(), 3);
        assert_eq!(s.slot_of("CS201"), Some(0));
        for slot in s.slot_usage_summary().keys() {
            assert!(!s.has_conflict_within_slot(*slot));
        }
    }

    #[test]
    fn test_duplicate_rejected_without_change() {
        let mut s = path_scheduler();
        let before = s.assigner().colors().clone();
        let edges_before = s.graph().edge_count();

        let err = s.add_course("  b ", "Beta again", &["C"]).unwrap_err();
        assert!(matches!(err, ScheduleError::DuplicateCourse { ref id } if id == "B"));
        assert_eq!(s.assigner().colors(), &before);
        assert_eq!(s.graph().edge_count(), edges_before);
        assert_eq!(s.course_count(), 3);
        assert_eq!(s.course("B").map(|c| c.name.as_str()), Some("Beta"));
    }

    #[test]
    fn test_dangling_conflict_tolerated() {
        let mut s = path_scheduler();
        let p = s.add_course("X", "Name", &["NONEXISTENT"]).unwrap();
        assert_eq!(p.dropped_conflicts, vec!["NONEXISTENT".to_string()]);
        assert!(!s.graph().has_edge("X", "NONEXISTENT"));
        assert!(!s.contains("NONEXISTENT"));
        assert!(s.contains("x"));
    }

    #[test]
    fn test_conflict_ids_normalized_and_deduplicated() {
        let mut s = path_scheduler();
        let p = s.add_course("d", "Delta", &[" a ", "A", "b", "", "e"]).unwrap();
        assert_eq!(s.graph().degree("D"), 2);
        assert_eq!(p.dropped_conflicts, vec!["E".to_string()]);
        assert_eq!(p.slot, 2);
    }

    #[test]
    fn test_self_conflict_on_add_dropped() {
        let mut s = path_scheduler();
        let p = s.add_course("D", "Delta", &["D"]).unwrap();
        assert_eq!(p.dropped_conflicts, vec!["D".to_string()]);
        assert_eq!(s.graph().degree("D"), 0);
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut s = path_scheduler();
        let none: [&str; 0] = [];
        let err = s.add_course("   ", "Blank", &none).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidCourseId { .. }));
        assert_eq!(s.course_count(), 3);
    }

    #[test]
    fn test_capacity_exceeded_leaves_state() {
        let cal = SlotCalendar::new(["Mon"], ["AM", "PM"]).unwrap();
        let mut s = Scheduler::with_config(SchedulerConfig::new().with_calendar(cal)).unwrap();
        s.initialize(
            vec![Course::new("A", "Alpha"), Course::new("B", "Beta")],
            vec![("A", "B")],
        );

        let err = s.add_course("C", "Gamma", &["A", "B"]).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::CapacityExceeded {
                slot: 2,
                capacity: 2
            }
        ));
        assert!(!s.contains("C"));
        assert_eq!(s.graph().edge_count(), 1);

        // A course conflicting with only one of them still fits.
        let p = s.add_course("C", "Gamma", &["A"]).unwrap();
        assert_eq!(p.label.time_slot, "PM");
    }

    #[test]
    fn test_initialize_reports_and_drops_bad_input() {
        let mut s = Scheduler::new();
        let issues = s.initialize(
            vec![
                Course::new("A", "Alpha"),
                Course::new("a", "Alpha again"),
                Course::new("B", "Beta"),
            ],
            vec![("A", "B"), ("A", "GHOST"), ("B", "B")],
        );

        assert_eq!(s.course_count(), 2);
        assert_eq!(s.course("A").map(|c| c.name.as_str()), Some("Alpha"));
        assert_eq!(s.graph().edge_count(), 1);
        let kinds: Vec<_> = issues.iter().map(|i| i.kind.clone()).collect();
        assert!(kinds.contains(&ValidationIssueKind::DuplicateId));
        assert!(kinds.contains(&ValidationIssueKind::UnknownConflictTarget));
        assert!(kinds.contains(&ValidationIssueKind::SelfConflict));
    }

    #[test]
    fn test_reinitialize_clears_state() {
        let mut s = path_scheduler();
        s.add_course("D", "Delta", &["A"]).unwrap();
        let no_conflicts: Vec<(&str, &str)> = Vec::new();
        s.initialize(vec![Course::new("Z", "Zeta")], no_conflicts);

        assert_eq!(s.course_count(), 1);
        assert!(!s.contains("A"));
        assert_eq!(s.slot_of("Z"), Some(0));
        assert_eq!(s.graph().edge_count(), 0);
    }

    #[test]
    fn test_initialize_deterministic() {
        let a = university_scheduler();
        let b = university_scheduler();
        assert_eq!(a.assigner().colors(), b.assigner().colors());
    }

    #[test]
    fn test_ordering_policy_used() {
        // Insertion order on the path colors A first.
        let config = SchedulerConfig::new().with_ordering(OrderingPolicy::InsertionOrder);
        let mut s = Scheduler::with_config(config).unwrap();
        s.initialize(
            vec![
                Course::new("A", "Alpha"),
                Course::new("B", "Beta"),
                Course::new("C", "Gamma"),
            ],
            vec![("A", "B"), ("B", "C")],
        );
        assert_eq!(s.slot_of("A"), Some(0));
        assert_eq!(s.slot_of("B"), Some(1));
        assert_eq!(s.slot_of("C"), Some(0));
    }

    #[test]
    fn test_slot_usage_and_grid() {
        let s = path_scheduler();
        let usage = s.slot_usage_summary();
        assert_eq!(usage[&0], vec!["B".to_string()]);
        assert_eq!(usage[&1], vec!["A".to_string(), "C".to_string()]);

        let grid = s.timetable_grid();
        assert_eq!(grid.len(), 20);
        assert_eq!(grid[1].label.time_slot, "10:45-12:15");
        assert_eq!(grid[1].course_ids, vec!["A".to_string(), "C".to_string()]);
        assert!(grid[2].is_free());
    }

    #[test]
    fn test_course_label() {
        let s = path_scheduler();
        let label = s.course_label("a").unwrap().unwrap();
        assert_eq!(label.slot, 1);
        assert_eq!(label.to_string(), "Monday 10:45-12:15");
        assert!(s.course_label("MISSING").is_none());

        // Triangle on a two-slot calendar: C lands in slot 2.
        let cal = SlotCalendar::new(["Mon"], ["AM", "PM"]).unwrap();
        let mut small = Scheduler::with_config(SchedulerConfig::new().with_calendar(cal)).unwrap();
        small.initialize(
            vec![
                Course::new("A", "Alpha"),
                Course::new("B", "Beta"),
                Course::new("C", "Gamma"),
            ],
            vec![("A", "B"), ("B", "C"), ("A", "C")],
        );
        assert_eq!(small.course_label("A").unwrap().unwrap().time_slot, "AM");
        assert!(matches!(
            small.course_label("C"),
            Some(Err(ScheduleError::CapacityExceeded {
                slot: 2,
                capacity: 2
            }))
        ));
    }

    #[test]
    fn test_has_conflict_within_slot_empty_slot() {
        let s = path_scheduler();
        assert!(!s.has_conflict_within_slot(7));
        assert!(s.courses_in_slot(7).is_empty());
    }

    #[test]
    fn test_snapshot_and_json() {
        let s = path_scheduler();
        let snap = s.snapshot();
        assert_eq!(snap.courses.len(), 3);
        assert_eq!(snap.edges.len(), 2);
        assert_eq!(snap.assignment_for("B").map(|a| a.slot), Some(0));
        assert!(snap.unlabelled().is_empty());

        let json = s.to_json().unwrap();
        let back: TimetableSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn test_config_from_json() {
        let config = SchedulerConfig::from_json_str(
            r#"{"calendar":{"days":["Mon"],"time_slots":["AM","PM"]},"ordering":"insertion_order"}"#,
        )
        .unwrap();
        assert_eq!(config.calendar.capacity(), 2);
        assert_eq!(config.ordering, OrderingPolicy::InsertionOrder);

        let defaults = SchedulerConfig::from_json_str("{}").unwrap();
        assert_eq!(defaults, SchedulerConfig::default());

        let bad = SchedulerConfig::from_json_str(r#"{"calendar":{"days":[],"time_slots":["AM"]}}"#);
        assert!(matches!(bad, Err(ScheduleError::InvalidCalendar(_))));
    }

    #[test]
    fn test_with_config_rejects_empty_calendar() {
        let config = SchedulerConfig {
            calendar: SlotCalendar {
                days: Vec::new(),
                time_slots: vec!["AM".into()],
            },
            ordering: OrderingPolicy::default(),
        };
        assert!(Scheduler::with_config(config).is_err());
    }

    fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, Vec<Vec<usize>>)> {
        (1usize..12).prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n), 0..30),
                prop::collection::vec(prop::collection::vec(0..n + 6, 0..5), 0..6),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_coloring_proper_and_prior_slots_frozen(
            (n, edges, additions) in graph_strategy()
        ) {
            let courses: Vec<Course> = (0..n).map(|i| Course::new(format!("C{i}"), "")).collect();
            let conflicts: Vec<(String, String)> = edges
                .iter()
                .map(|(a, b)| (format!("C{a}"), format!("C{b}")))
                .collect();

            let config = SchedulerConfig::new()
                .with_calendar(SlotCalendar::new(["D"], (0..64).map(|i| format!("T{i}"))).unwrap());
            let mut s = Scheduler::with_config(config).unwrap();
            s.initialize(courses, conflicts);
            for (a, b) in s.graph().edges() {
                prop_assert_ne!(s.slot_of(a), s.slot_of(b));
            }

            for (k, targets) in additions.iter().enumerate() {
                let before: HashMap<String, usize> = s.assigner().colors().clone();
                let ids: Vec<String> = targets.iter().map(|t| format!("C{t}")).collect();
                let p = s.add_course(&format!("N{k}"), "", &ids).unwrap();

                for (id, slot) in &before {
                    prop_assert_eq!(s.slot_of(id), Some(*slot));
                }
                for (a, b) in s.graph().edges() {
                    prop_assert_ne!(s.slot_of(a), s.slot_of(b));
                }
                prop_assert!(!s.has_conflict_within_slot(p.slot));
                for dropped in &p.dropped_conflicts {
                    prop_assert!(!s.graph().has_edge(&p.course_id, dropped));
                }
            }
        }

        #[test]
        fn prop_initialize_is_deterministic(
            (n, edges, _additions) in graph_strategy()
        ) {
            let build = || {
                let courses: Vec<Course> = (0..n).map(|i| Course::new(format!("C{i}"), "")).collect();
                let conflicts: Vec<(String, String)> = edges
                    .iter()
                    .map(|(a, b)| (format!("C{a}"), format!("C{b}")))
                    .collect();
                let mut s = Scheduler::new();
                s.initialize(courses, conflicts);
                s.assigner().colors().clone()
            };
            prop_assert_eq!(build(), build());
        }
    }
}
