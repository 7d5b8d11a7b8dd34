//! Constraint evaluation.
//!
//! Given a candidate placement and the current partial schedule, decides
//! whether any hard constraint rejects it and, if not, what soft penalty
//! it carries. Hard checks run cheapest-first and short-circuit; soft
//! checks only run once every hard check has passed.
//!
//! The evaluator never mutates anything — committing an accepted
//! placement is the solver's job.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    ConstraintMode, ConstraintSet, ConstraintTarget, Faculty, Room, Schedule, Session,
    SlotCatalog, TimeSlot,
};
use crate::workload::WorkloadTracker;

/// A hard constraint a candidate placement ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum HardViolation {
    /// Room type does not match the session kind.
    #[error("room type mismatch")]
    RoomTypeMismatch,
    /// Room seats fewer students than the session brings.
    #[error("room capacity exceeded")]
    RoomCapacityExceeded,
    /// Room already taken in one of the span's slots.
    #[error("room double-booking")]
    RoomDoubleBooking,
    /// Faculty already teaching in one of the span's slots.
    #[error("faculty double-booking")]
    FacultyDoubleBooking,
    /// Faculty marked unavailable in one of the span's slots.
    #[error("faculty unavailable in slot")]
    FacultyUnavailable,
    /// Placement would push the faculty past the weekly hour ceiling.
    #[error("faculty workload limit exceeded")]
    WorkloadLimitExceeded,
    /// Same section would be taught back-to-back.
    #[error("section scheduled back-to-back")]
    BackToBackSection,
}

/// Outcome of evaluating one candidate placement.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalResult {
    /// All hard checks passed; `penalty` is the weighted sum of violated
    /// soft constraints.
    Accepted { penalty: f64 },
    /// A hard check failed.
    Rejected(HardViolation),
}

/// A candidate `(session, room, slot span, faculty)` tuple under
/// evaluation. The span is the contiguous slot run the placement would
/// occupy, resolved by the caller against the catalog.
#[derive(Debug, Clone, Copy)]
pub struct CandidatePlacement<'a> {
    pub session: &'a Session,
    pub room: &'a Room,
    pub span: &'a [&'a TimeSlot],
    pub faculty: &'a Faculty,
}

/// Stateless evaluator over one run's constraint configuration.
pub struct Evaluator<'a> {
    constraints: &'a ConstraintSet,
    catalog: &'a SlotCatalog,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator for the run.
    pub fn new(constraints: &'a ConstraintSet, catalog: &'a SlotCatalog) -> Self {
        Self {
            constraints,
            catalog,
        }
    }

    /// The run's resolved constraint configuration.
    pub fn constraint_set(&self) -> &'a ConstraintSet {
        self.constraints
    }

    /// Evaluates a candidate against the partial schedule.
    ///
    /// Hard checks run in cost order: room type and capacity (field
    /// comparisons), then occupancy (index lookups), then availability
    /// and workload sums, then adjacency. The first failure rejects.
    pub fn evaluate(
        &self,
        candidate: &CandidatePlacement<'_>,
        schedule: &Schedule,
        workload: &WorkloadTracker,
    ) -> EvalResult {
        if let Some(violation) = self.hard_violation(candidate, schedule, workload) {
            return EvalResult::Rejected(violation);
        }
        EvalResult::Accepted {
            penalty: self.soft_penalty(candidate, schedule, workload),
        }
    }

    fn hard_violation(
        &self,
        candidate: &CandidatePlacement<'_>,
        schedule: &Schedule,
        workload: &WorkloadTracker,
    ) -> Option<HardViolation> {
        let session = candidate.session;
        let room = candidate.room;

        if room.room_type != session.required_room_type() {
            return Some(HardViolation::RoomTypeMismatch);
        }
        if self.mode(ConstraintTarget::RoomCapacity).is_hard()
            && room.capacity < session.student_count
        {
            return Some(HardViolation::RoomCapacityExceeded);
        }
        for slot in candidate.span {
            if !schedule.is_room_free(&room.id, &slot.id) {
                return Some(HardViolation::RoomDoubleBooking);
            }
        }
        for slot in candidate.span {
            if !schedule.is_faculty_free(&candidate.faculty.id, &slot.id) {
                return Some(HardViolation::FacultyDoubleBooking);
            }
        }
        if self.mode(ConstraintTarget::FacultyPreference).is_hard()
            && self.span_unavailable(candidate)
        {
            return Some(HardViolation::FacultyUnavailable);
        }
        if self.mode(ConstraintTarget::WorkloadLimit).is_hard() && self.overloads(candidate, workload)
        {
            return Some(HardViolation::WorkloadLimitExceeded);
        }
        if self.mode(ConstraintTarget::Adjacency).is_hard()
            && self.section_adjacent(candidate, schedule)
        {
            return Some(HardViolation::BackToBackSection);
        }
        None
    }

    fn soft_penalty(
        &self,
        candidate: &CandidatePlacement<'_>,
        schedule: &Schedule,
        workload: &WorkloadTracker,
    ) -> f64 {
        let mut penalty = 0.0;
        if let ConstraintMode::Soft(weight) = self.mode(ConstraintTarget::RoomCapacity) {
            if candidate.room.capacity < candidate.session.student_count {
                penalty += weight;
            }
        }
        if let ConstraintMode::Soft(weight) = self.mode(ConstraintTarget::FacultyPreference) {
            if self.span_unavailable(candidate) {
                penalty += weight;
            }
        }
        if let ConstraintMode::Soft(weight) = self.mode(ConstraintTarget::WorkloadLimit) {
            if self.overloads(candidate, workload) {
                penalty += weight;
            }
        }
        if let ConstraintMode::Soft(weight) = self.mode(ConstraintTarget::Adjacency) {
            if self.section_adjacent(candidate, schedule) {
                penalty += weight;
            }
        }
        penalty
    }

    fn mode(&self, target: ConstraintTarget) -> ConstraintMode {
        self.constraints.mode(target)
    }

    /// Whether the faculty marked any slot of the span unavailable.
    fn span_unavailable(&self, candidate: &CandidatePlacement<'_>) -> bool {
        candidate
            .span
            .iter()
            .any(|slot| !candidate.faculty.is_available(&slot.id))
    }

    /// Whether the placement pushes the faculty past the weekly ceiling.
    fn overloads(&self, candidate: &CandidatePlacement<'_>, workload: &WorkloadTracker) -> bool {
        let committed = workload.current_load(&candidate.faculty.id);
        committed + candidate.session.duration_slots > candidate.faculty.max_weekly_hours
    }

    /// Whether the owning section already holds a slot bordering the span.
    ///
    /// Only the span's outer edges count; interior adjacency is the span
    /// itself.
    fn section_adjacent(&self, candidate: &CandidatePlacement<'_>, schedule: &Schedule) -> bool {
        let section_id = &candidate.session.section_id;
        let span_ids: Vec<&str> = candidate.span.iter().map(|s| s.id.as_str()).collect();

        let mut borders: Vec<&str> = Vec::new();
        if let Some(first) = candidate.span.first() {
            borders.extend(self.catalog.adjacent_ids(first));
        }
        if let Some(last) = candidate.span.last() {
            borders.extend(self.catalog.adjacent_ids(last));
        }
        borders
            .iter()
            .filter(|id| !span_ids.contains(*id))
            .any(|id| schedule.section_session_in_slot(section_id, id).is_some())
    }
}
