//! Session model.
//!
//! A session is the atomic schedulable unit: one weekly meeting of a
//! section, occupying `duration_slots` contiguous grid cells. Sessions are
//! derived from sections when a run starts (see
//! [`Section::expand_sessions`]) and are consumed by the solver; each one
//! ends up either assigned exactly once or reported unplaced.
//!
//! [`Section::expand_sessions`]: super::Section::expand_sessions

use serde::{Deserialize, Serialize};

use super::RoomType;

/// Kind of meeting a session represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    /// Lecture in a classroom.
    Theory,
    /// Practical in a laboratory, usually a multi-slot block.
    Lab,
    /// Problem-solving hour, scheduled like theory.
    Tutorial,
}

impl SessionKind {
    /// Room type this kind of session must be placed in.
    pub fn required_room_type(&self) -> RoomType {
        match self {
            SessionKind::Lab => RoomType::Laboratory,
            SessionKind::Theory | SessionKind::Tutorial => RoomType::Classroom,
        }
    }
}

/// Who may teach a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacultyRequirement {
    /// Pinned to one faculty member.
    Specific(String),
    /// Any faculty member qualified for the session's course.
    AnyQualified,
}

/// A schedulable unit of teaching.
///
/// The section's student count is denormalized onto the session so the
/// evaluator can run capacity checks without a section lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: String,
    /// Owning section.
    pub section_id: String,
    /// Course being taught (drives faculty qualification checks).
    pub course_id: String,
    /// Meeting kind.
    pub kind: SessionKind,
    /// Length in contiguous slot-units (1 for theory, >1 for lab blocks).
    pub duration_slots: u32,
    /// Teaching requirement.
    pub faculty: FacultyRequirement,
    /// Students attending (capacity the room must seat).
    pub student_count: u32,
}

impl Session {
    /// Creates a new one-slot session taught by any qualified faculty.
    pub fn new(
        id: impl Into<String>,
        section_id: impl Into<String>,
        course_id: impl Into<String>,
        kind: SessionKind,
    ) -> Self {
        Self {
            id: id.into(),
            section_id: section_id.into(),
            course_id: course_id.into(),
            kind,
            duration_slots: 1,
            faculty: FacultyRequirement::AnyQualified,
            student_count: 0,
        }
    }

    /// Sets the duration in slot-units.
    pub fn with_duration(mut self, slots: u32) -> Self {
        self.duration_slots = slots;
        self
    }

    /// Pins the session to a specific faculty member.
    pub fn with_faculty(mut self, faculty_id: impl Into<String>) -> Self {
        self.faculty = FacultyRequirement::Specific(faculty_id.into());
        self
    }

    /// Sets the attending student count.
    pub fn with_student_count(mut self, count: u32) -> Self {
        self.student_count = count;
        self
    }

    /// Room type this session must be placed in.
    pub fn required_room_type(&self) -> RoomType {
        self.kind.required_room_type()
    }
}
