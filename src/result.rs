//! Scheduling run results.
//!
//! A run always produces a result object: the committed schedule, the
//! sessions that could not be placed (with the constraint that blocked
//! them), the accumulated soft score, and search effort counters. A
//! non-empty unplaced list is a valid partial result, not an error — the
//! caller decides whether to accept it, relax constraints, or retry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::evaluator::HardViolation;
use crate::models::Schedule;

/// Why a session could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum UnplacedReason {
    /// The last hard constraint that blocked every remaining candidate.
    /// Best-effort diagnostic, not a proof of infeasibility.
    #[error("blocked by hard constraint: {0}")]
    Blocked(HardViolation),
    /// No room in the pool matches the session's type and capacity.
    #[error("no compatible room")]
    NoCompatibleRoom,
    /// No faculty member is qualified (or the pinned one is missing).
    #[error("no qualified faculty")]
    NoQualifiedFaculty,
    /// No contiguous slot span of the session's duration exists.
    #[error("no feasible slot span")]
    NoFeasibleSlot,
    /// The search budget ran out before this session was reached.
    #[error("search budget exhausted")]
    BudgetExhausted,
}

/// A session the run could not place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnplacedSession {
    /// Session left without an assignment.
    pub session_id: String,
    /// Best-effort blocking diagnostic.
    pub reason: UnplacedReason,
}

/// Outcome of one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// Committed assignments with conflict-free occupancy.
    pub schedule: Schedule,
    /// Sessions that could not be placed, sorted by session ID.
    pub unplaced: Vec<UnplacedSession>,
    /// Weighted sum of soft-constraint violations across the schedule.
    pub soft_score: f64,
    /// Backtracks spent during search.
    pub backtracks_used: u32,
    /// Whether the run stopped because a budget expired.
    pub budget_exhausted: bool,
}

impl SchedulingResult {
    /// Whether every input session was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Sessions accounted for: placed plus unplaced.
    pub fn session_count(&self) -> usize {
        self.schedule.assignment_count() + self.unplaced.len()
    }

    /// Fraction of sessions placed (1.0 for an empty run).
    pub fn placement_rate(&self) -> f64 {
        let total = self.session_count();
        if total == 0 {
            return 1.0;
        }
        self.schedule.assignment_count() as f64 / total as f64
    }

    /// Committed hours per faculty member, from the schedule itself.
    pub fn faculty_load_map(&self) -> HashMap<String, u32> {
        let mut loads: HashMap<String, u32> = HashMap::new();
        for assignment in &self.schedule.assignments {
            *loads.entry(assignment.faculty_id.clone()).or_insert(0) +=
                assignment.duration_slots();
        }
        loads
    }

    /// Occupied slot count per room.
    pub fn room_usage(&self) -> HashMap<String, usize> {
        let mut usage: HashMap<String, usize> = HashMap::new();
        for assignment in &self.schedule.assignments {
            *usage.entry(assignment.room_id.clone()).or_insert(0) +=
                assignment.occupied_slot_ids.len();
        }
        usage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;

    fn result_with(assignments: Vec<Assignment>, unplaced: Vec<UnplacedSession>) -> SchedulingResult {
        let mut schedule = Schedule::new();
        for a in assignments {
            schedule.commit(a).unwrap();
        }
        let soft_score = schedule.soft_score();
        SchedulingResult {
            schedule,
            unplaced,
            soft_score,
            backtracks_used: 0,
            budget_exhausted: false,
        }
    }

    fn assignment(session: &str, room: &str, faculty: &str, slots: &[&str]) -> Assignment {
        Assignment {
            session_id: session.into(),
            section_id: "SEC-A".into(),
            room_id: room.into(),
            faculty_id: faculty.into(),
            start_slot_id: slots[0].into(),
            occupied_slot_ids: slots.iter().map(|s| s.to_string()).collect(),
            penalty: 0.0,
        }
    }

    #[test]
    fn test_completeness_flags() {
        let complete = result_with(vec![assignment("S1", "R1", "F1", &["MON-1"])], vec![]);
        assert!(complete.is_complete());
        assert!((complete.placement_rate() - 1.0).abs() < 1e-10);

        let partial = result_with(
            vec![assignment("S1", "R1", "F1", &["MON-1"])],
            vec![UnplacedSession {
                session_id: "S2".into(),
                reason: UnplacedReason::NoCompatibleRoom,
            }],
        );
        assert!(!partial.is_complete());
        assert_eq!(partial.session_count(), 2);
        assert!((partial.placement_rate() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_faculty_load_map() {
        let result = result_with(
            vec![
                assignment("S1", "R1", "F1", &["MON-1"]),
                assignment("S2", "R1", "F1", &["MON-2", "MON-3"]),
                assignment("S3", "R2", "F2", &["MON-1"]),
            ],
            vec![],
        );
        let loads = result.faculty_load_map();
        assert_eq!(loads["F1"], 3);
        assert_eq!(loads["F2"], 1);
    }

    #[test]
    fn test_room_usage() {
        let result = result_with(
            vec![
                assignment("S1", "R1", "F1", &["MON-1"]),
                assignment("S2", "R1", "F2", &["MON-2", "MON-3"]),
            ],
            vec![],
        );
        assert_eq!(result.room_usage()["R1"], 3);
    }

    #[test]
    fn test_empty_run_rate() {
        let result = result_with(vec![], vec![]);
        assert!((result.placement_rate() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_reason_messages() {
        assert_eq!(
            UnplacedReason::Blocked(HardViolation::RoomDoubleBooking).to_string(),
            "blocked by hard constraint: room double-booking"
        );
        assert_eq!(
            UnplacedReason::BudgetExhausted.to_string(),
            "search budget exhausted"
        );
    }
}
