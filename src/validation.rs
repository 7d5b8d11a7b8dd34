//! Input validation for scheduling runs.
//!
//! Checks structural integrity of the session list and resource pools
//! before search starts. Detects:
//! - Empty or duplicate IDs across every pool
//! - Empty or malformed slot catalogs
//! - Non-positive capacities and zero-duration sessions
//! - Dangling faculty and slot references
//! - Out-of-range soft-constraint weights
//!
//! Malformed input fails fast here, never mid-search.

use std::collections::HashSet;

use crate::models::{Constraint, Faculty, FacultyRequirement, Room, Session, TimeSlot};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description naming the offending entity.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An entity has an empty ID.
    EmptyId,
    /// Two entities share the same ID.
    DuplicateId,
    /// The slot catalog has no assignable slots.
    EmptySlotCatalog,
    /// Two slots share the same ordering index.
    DuplicateSlotIndex,
    /// A slot's end time is not after its start time.
    InvalidTimeRange,
    /// A room has zero capacity.
    InvalidCapacity,
    /// A session has zero duration.
    InvalidDuration,
    /// A session requires a faculty member that doesn't exist.
    UnknownFaculty,
    /// A faculty unavailability entry names a slot that doesn't exist.
    UnknownSlot,
    /// A soft constraint weight is outside 0.0..=1.0.
    InvalidWeight,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a scheduling run.
///
/// Collects every detected issue rather than stopping at the first, so a
/// caller can fix a whole batch of configuration mistakes in one pass.
pub fn validate_input(
    sessions: &[Session],
    rooms: &[Room],
    time_slots: &[TimeSlot],
    faculty: &[Faculty],
    constraints: &[Constraint],
) -> ValidationResult {
    let mut errors = Vec::new();

    // Slot catalog sanity
    if !time_slots.iter().any(|s| !s.is_break) {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySlotCatalog,
            "slot catalog has no assignable slots",
        ));
    }
    let mut slot_ids = HashSet::new();
    let mut slot_indexes = HashSet::new();
    for slot in time_slots {
        if !slot_ids.insert(slot.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate time slot ID: {}", slot.id),
            ));
        }
        if !slot_indexes.insert(slot.index) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlotIndex,
                format!("duplicate ordering index {} on slot '{}'", slot.index, slot.id),
            ));
        }
        if slot.end_minute <= slot.start_minute {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!("slot '{}' ends at or before it starts", slot.id),
            ));
        }
    }

    // Room pool
    let mut room_ids = HashSet::new();
    for room in rooms {
        if !room_ids.insert(room.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate room ID: {}", room.id),
            ));
        }
        if room.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!("room '{}' has zero capacity", room.id),
            ));
        }
    }

    // Faculty pool
    let mut faculty_ids = HashSet::new();
    for member in faculty {
        if !faculty_ids.insert(member.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate faculty ID: {}", member.id),
            ));
        }
        for slot_id in &member.unavailable_slots {
            if !slot_ids.contains(slot_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSlot,
                    format!(
                        "faculty '{}' lists unknown unavailable slot '{slot_id}'",
                        member.id
                    ),
                ));
            }
        }
    }

    // Session list
    let mut session_ids = HashSet::new();
    for session in sessions {
        if session.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("session of section '{}' has an empty ID", session.section_id),
            ));
        }
        if !session_ids.insert(session.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate session ID: {}", session.id),
            ));
        }
        if session.duration_slots == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!("session '{}' has zero duration", session.id),
            ));
        }
        if let FacultyRequirement::Specific(faculty_id) = &session.faculty {
            if !faculty_ids.contains(faculty_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownFaculty,
                    format!(
                        "session '{}' requires unknown faculty '{faculty_id}'",
                        session.id
                    ),
                ));
            }
        }
    }

    // Constraint configuration
    let mut constraint_ids = HashSet::new();
    for constraint in constraints {
        if !constraint_ids.insert(constraint.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate constraint ID: {}", constraint.id),
            ));
        }
        if !constraint.is_hard && !(0.0..=1.0).contains(&constraint.weight) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWeight,
                format!(
                    "constraint '{}' weight {} outside 0.0..=1.0",
                    constraint.id, constraint.weight
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConstraintTarget, DayOfWeek, SessionKind};

    fn sample_slots() -> Vec<TimeSlot> {
        vec![
            TimeSlot::new("MON-1", DayOfWeek::Monday, 540, 600, 0),
            TimeSlot::new("MON-2", DayOfWeek::Monday, 600, 660, 1),
        ]
    }

    fn sample_rooms() -> Vec<Room> {
        vec![Room::classroom("R1").with_capacity(60)]
    }

    fn sample_faculty() -> Vec<Faculty> {
        vec![Faculty::new("F1").with_max_weekly_hours(16).with_qualification("C1")]
    }

    fn sample_sessions() -> Vec<Session> {
        vec![Session::new("S1-T1", "S1", "C1", SessionKind::Theory).with_student_count(40)]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(
            &sample_sessions(),
            &sample_rooms(),
            &sample_slots(),
            &sample_faculty(),
            &[],
        )
        .is_ok());
    }

    #[test]
    fn test_empty_slot_catalog() {
        let errors = validate_input(&sample_sessions(), &sample_rooms(), &[], &sample_faculty(), &[])
            .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptySlotCatalog));
    }

    #[test]
    fn test_break_only_catalog_is_empty() {
        let slots = vec![TimeSlot::new("MON-L", DayOfWeek::Monday, 720, 780, 0).as_break()];
        let errors = validate_input(&sample_sessions(), &sample_rooms(), &slots, &sample_faculty(), &[])
            .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptySlotCatalog));
    }

    #[test]
    fn test_duplicate_room_id() {
        let rooms = vec![
            Room::classroom("R1").with_capacity(60),
            Room::classroom("R1").with_capacity(40),
        ];
        let errors =
            validate_input(&sample_sessions(), &rooms, &sample_slots(), &sample_faculty(), &[])
                .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("room")));
    }

    #[test]
    fn test_zero_capacity_room() {
        let rooms = vec![Room::classroom("R1")];
        let errors =
            validate_input(&sample_sessions(), &rooms, &sample_slots(), &sample_faculty(), &[])
                .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidCapacity));
    }

    #[test]
    fn test_duplicate_slot_index() {
        let slots = vec![
            TimeSlot::new("MON-1", DayOfWeek::Monday, 540, 600, 0),
            TimeSlot::new("MON-2", DayOfWeek::Monday, 600, 660, 0),
        ];
        let errors =
            validate_input(&sample_sessions(), &sample_rooms(), &slots, &sample_faculty(), &[])
                .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateSlotIndex));
    }

    #[test]
    fn test_inverted_time_range() {
        let slots = vec![TimeSlot::new("MON-1", DayOfWeek::Monday, 600, 540, 0)];
        let errors =
            validate_input(&sample_sessions(), &sample_rooms(), &slots, &sample_faculty(), &[])
                .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTimeRange));
    }

    #[test]
    fn test_unknown_specific_faculty() {
        let sessions =
            vec![Session::new("S1-T1", "S1", "C1", SessionKind::Theory).with_faculty("GHOST")];
        let errors =
            validate_input(&sessions, &sample_rooms(), &sample_slots(), &sample_faculty(), &[])
                .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownFaculty));
    }

    #[test]
    fn test_unknown_unavailable_slot() {
        let faculty = vec![Faculty::new("F1").with_unavailable_slot("GHOST")];
        let errors =
            validate_input(&sample_sessions(), &sample_rooms(), &sample_slots(), &faculty, &[])
                .unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::UnknownSlot));
    }

    #[test]
    fn test_empty_session_id() {
        let sessions = vec![Session::new("", "S1", "C1", SessionKind::Theory)];
        let errors =
            validate_input(&sessions, &sample_rooms(), &sample_slots(), &sample_faculty(), &[])
                .unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_zero_duration_session() {
        let sessions =
            vec![Session::new("S1-T1", "S1", "C1", SessionKind::Theory).with_duration(0)];
        let errors =
            validate_input(&sessions, &sample_rooms(), &sample_slots(), &sample_faculty(), &[])
                .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidDuration));
    }

    #[test]
    fn test_soft_weight_out_of_range() {
        let constraints = vec![Constraint::soft("K1", ConstraintTarget::Adjacency, 1.5)];
        let errors = validate_input(
            &sample_sessions(),
            &sample_rooms(),
            &sample_slots(),
            &sample_faculty(),
            &constraints,
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidWeight));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let rooms = vec![Room::classroom("R1"), Room::classroom("R1")];
        let errors =
            validate_input(&sample_sessions(), &rooms, &[], &sample_faculty(), &[]).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
