//! Schedule (solution) model.
//!
//! A schedule is the ordered sequence of committed assignments plus the
//! occupancy indexes that make conflict lookups O(1). `commit` and
//! `uncommit` are the only mutators; both verify the indexes stay
//! consistent and report corruption as an invariant violation instead of
//! letting a wrong schedule escape.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::InvariantViolation;

/// A committed placement of one session.
///
/// The owning section id is denormalized for adjacency queries, and the
/// full occupied-slot list is materialized so multi-slot lab blocks index
/// every cell they cover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Placed session.
    pub session_id: String,
    /// Owning section (denormalized from the session).
    pub section_id: String,
    /// Assigned room.
    pub room_id: String,
    /// Assigned faculty member.
    pub faculty_id: String,
    /// First slot of the placement.
    pub start_slot_id: String,
    /// Every slot the placement covers, in index order.
    pub occupied_slot_ids: Vec<String>,
    /// Soft-constraint penalty this placement carries.
    pub penalty: f64,
}

impl Assignment {
    /// Duration in slot-units.
    #[inline]
    pub fn duration_slots(&self) -> u32 {
        self.occupied_slot_ids.len() as u32
    }
}

/// The partial or complete timetable for one run.
///
/// Occupancy indexes are keyed `(resource id, slot id) → session id` for
/// rooms, faculty, and sections. Only the assignment list is serialized;
/// deserialization replays it through `commit`, so the indexes come back
/// consistent and a conflicting serialized schedule fails to load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "ScheduleRecord")]
pub struct Schedule {
    /// Assignments in commit order.
    pub assignments: Vec<Assignment>,
    #[serde(skip)]
    room_index: HashMap<(String, String), String>,
    #[serde(skip)]
    faculty_index: HashMap<(String, String), String>,
    #[serde(skip)]
    section_index: HashMap<(String, String), String>,
}

/// Serialized form of a schedule: the assignment list alone.
#[derive(Deserialize)]
struct ScheduleRecord {
    assignments: Vec<Assignment>,
}

impl TryFrom<ScheduleRecord> for Schedule {
    type Error = InvariantViolation;

    fn try_from(record: ScheduleRecord) -> Result<Self, Self::Error> {
        let mut schedule = Schedule::new();
        for assignment in record.assignments {
            schedule.commit(assignment)?;
        }
        Ok(schedule)
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether a room is free in a slot.
    pub fn is_room_free(&self, room_id: &str, slot_id: &str) -> bool {
        !self
            .room_index
            .contains_key(&(room_id.to_string(), slot_id.to_string()))
    }

    /// Whether a faculty member is free in a slot.
    pub fn is_faculty_free(&self, faculty_id: &str, slot_id: &str) -> bool {
        !self
            .faculty_index
            .contains_key(&(faculty_id.to_string(), slot_id.to_string()))
    }

    /// Session a section has in a slot, if any.
    pub fn section_session_in_slot(&self, section_id: &str, slot_id: &str) -> Option<&str> {
        self.section_index
            .get(&(section_id.to_string(), slot_id.to_string()))
            .map(String::as_str)
    }

    /// Finds the assignment for a session.
    pub fn assignment_for_session(&self, session_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.session_id == session_id)
    }

    /// All assignments for a section.
    pub fn assignments_for_section(&self, section_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.section_id == section_id)
            .collect()
    }

    /// Sum of soft penalties across committed assignments.
    pub fn soft_score(&self) -> f64 {
        self.assignments.iter().map(|a| a.penalty).sum()
    }

    /// Commits an assignment, indexing every slot it occupies.
    ///
    /// Fails with an invariant violation if any occupancy cell is already
    /// taken — the solver must only commit evaluator-accepted placements,
    /// so a collision here means the index is corrupt.
    pub fn commit(&mut self, assignment: Assignment) -> Result<(), InvariantViolation> {
        for slot_id in &assignment.occupied_slot_ids {
            let room_key = (assignment.room_id.clone(), slot_id.clone());
            if let Some(existing) = self
                .room_index
                .insert(room_key, assignment.session_id.clone())
            {
                return Err(InvariantViolation(format!(
                    "room {} slot {slot_id} already holds session {existing}",
                    assignment.room_id
                )));
            }
            let faculty_key = (assignment.faculty_id.clone(), slot_id.clone());
            if let Some(existing) = self
                .faculty_index
                .insert(faculty_key, assignment.session_id.clone())
            {
                return Err(InvariantViolation(format!(
                    "faculty {} slot {slot_id} already holds session {existing}",
                    assignment.faculty_id
                )));
            }
            let section_key = (assignment.section_id.clone(), slot_id.clone());
            self.section_index
                .insert(section_key, assignment.session_id.clone());
        }
        self.assignments.push(assignment);
        Ok(())
    }

    /// Uncommits the most recent assignment, releasing its occupancy.
    ///
    /// Fails with an invariant violation if the schedule is empty or an
    /// index entry did not point back at the removed session.
    pub fn uncommit(&mut self) -> Result<Assignment, InvariantViolation> {
        let assignment = self
            .assignments
            .pop()
            .ok_or_else(|| InvariantViolation("uncommit on empty schedule".into()))?;

        for slot_id in &assignment.occupied_slot_ids {
            let removed = self
                .room_index
                .remove(&(assignment.room_id.clone(), slot_id.clone()));
            if removed.as_deref() != Some(assignment.session_id.as_str()) {
                return Err(InvariantViolation(format!(
                    "room index for {} slot {slot_id} did not hold session {}",
                    assignment.room_id, assignment.session_id
                )));
            }
            let removed = self
                .faculty_index
                .remove(&(assignment.faculty_id.clone(), slot_id.clone()));
            if removed.as_deref() != Some(assignment.session_id.as_str()) {
                return Err(InvariantViolation(format!(
                    "faculty index for {} slot {slot_id} did not hold session {}",
                    assignment.faculty_id, assignment.session_id
                )));
            }
            self.section_index
                .remove(&(assignment.section_id.clone(), slot_id.clone()));
        }
        Ok(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(session: &str, room: &str, faculty: &str, slots: &[&str]) -> Assignment {
        Assignment {
            session_id: session.into(),
            section_id: format!("{session}-sec"),
            room_id: room.into(),
            faculty_id: faculty.into(),
            start_slot_id: slots[0].into(),
            occupied_slot_ids: slots.iter().map(|s| s.to_string()).collect(),
            penalty: 0.0,
        }
    }

    #[test]
    fn test_commit_indexes_all_slots() {
        let mut schedule = Schedule::new();
        schedule
            .commit(assignment("S1", "R1", "F1", &["MON-1", "MON-2"]))
            .unwrap();

        assert_eq!(schedule.assignment_count(), 1);
        assert!(!schedule.is_room_free("R1", "MON-1"));
        assert!(!schedule.is_room_free("R1", "MON-2"));
        assert!(schedule.is_room_free("R1", "MON-3"));
        assert!(!schedule.is_faculty_free("F1", "MON-2"));
        assert!(schedule.is_faculty_free("F2", "MON-1"));
    }

    #[test]
    fn test_uncommit_releases_occupancy() {
        let mut schedule = Schedule::new();
        schedule
            .commit(assignment("S1", "R1", "F1", &["MON-1"]))
            .unwrap();
        let removed = schedule.uncommit().unwrap();

        assert_eq!(removed.session_id, "S1");
        assert_eq!(schedule.assignment_count(), 0);
        assert!(schedule.is_room_free("R1", "MON-1"));
        assert!(schedule.is_faculty_free("F1", "MON-1"));
    }

    #[test]
    fn test_commit_detects_room_collision() {
        let mut schedule = Schedule::new();
        schedule
            .commit(assignment("S1", "R1", "F1", &["MON-1"]))
            .unwrap();
        let err = schedule
            .commit(assignment("S2", "R1", "F2", &["MON-1"]))
            .unwrap_err();
        assert!(err.to_string().contains("room R1"));
    }

    #[test]
    fn test_uncommit_empty_is_violation() {
        let mut schedule = Schedule::new();
        assert!(schedule.uncommit().is_err());
    }

    #[test]
    fn test_section_slot_lookup() {
        let mut schedule = Schedule::new();
        schedule
            .commit(assignment("S1", "R1", "F1", &["MON-1"]))
            .unwrap();
        assert_eq!(schedule.section_session_in_slot("S1-sec", "MON-1"), Some("S1"));
        assert_eq!(schedule.section_session_in_slot("S1-sec", "MON-2"), None);
    }

    #[test]
    fn test_deserialized_schedule_keeps_conflict_detection() {
        let mut schedule = Schedule::new();
        schedule
            .commit(assignment("S1", "R1", "F1", &["MON-1"]))
            .unwrap();

        let json = serde_json::to_string(&schedule).unwrap();
        let mut restored: Schedule = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.assignment_count(), 1);
        assert!(restored
            .commit(assignment("S2", "R1", "F2", &["MON-1"]))
            .is_err());
        assert!(restored
            .commit(assignment("S3", "R2", "F2", &["MON-1"]))
            .is_ok());
    }

    #[test]
    fn test_conflicting_serialized_schedule_fails_to_load() {
        let mut schedule = Schedule::new();
        schedule
            .commit(assignment("S1", "R1", "F1", &["MON-1"]))
            .unwrap();
        let mut json: serde_json::Value = serde_json::to_value(&schedule).unwrap();
        let duplicate = json["assignments"][0].clone();
        json["assignments"].as_array_mut().unwrap().push(duplicate);

        assert!(serde_json::from_value::<Schedule>(json).is_err());
    }

    #[test]
    fn test_soft_score_sums_penalties() {
        let mut schedule = Schedule::new();
        let mut a = assignment("S1", "R1", "F1", &["MON-1"]);
        a.penalty = 0.5;
        let mut b = assignment("S2", "R2", "F2", &["MON-1"]);
        b.penalty = 1.0;
        schedule.commit(a).unwrap();
        schedule.commit(b).unwrap();
        assert!((schedule.soft_score() - 1.5).abs() < 1e-10);
    }
}
