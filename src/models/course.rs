//! Course model.
//!
//! A course defines the weekly teaching load (theory, lab, tutorial hours)
//! that sections of it must receive. Courses are immutable reference data
//! for a scheduling run; the engine never mutates them.

use serde::{Deserialize, Serialize};

/// A course offered by a department.
///
/// Weekly hour fields drive session expansion: each theory and tutorial
/// hour becomes a one-slot session, and a positive lab-hour count becomes
/// one contiguous lab block (see [`Section::expand_sessions`]).
///
/// [`Section::expand_sessions`]: super::Section::expand_sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Short code (e.g., "CS301").
    pub code: String,
    /// Full course name.
    pub name: String,
    /// Owning department.
    pub department: String,
    /// Weekly theory hours.
    pub theory_hours: u32,
    /// Weekly lab hours (scheduled as one contiguous block).
    pub lab_hours: u32,
    /// Weekly tutorial hours (scheduled like theory).
    pub tutorial_hours: u32,
    /// Academic credits.
    pub credits: u32,
    /// Core vs. elective flag.
    pub is_elective: bool,
    /// Minimum seats any room hosting this course must have,
    /// independent of section size.
    pub min_room_capacity: Option<u32>,
}

impl Course {
    /// Creates a new course with the given ID and code.
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: String::new(),
            department: String::new(),
            theory_hours: 0,
            lab_hours: 0,
            tutorial_hours: 0,
            credits: 0,
            is_elective: false,
            min_room_capacity: None,
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the owning department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets weekly theory hours.
    pub fn with_theory_hours(mut self, hours: u32) -> Self {
        self.theory_hours = hours;
        self
    }

    /// Sets weekly lab hours.
    pub fn with_lab_hours(mut self, hours: u32) -> Self {
        self.lab_hours = hours;
        self
    }

    /// Sets weekly tutorial hours.
    pub fn with_tutorial_hours(mut self, hours: u32) -> Self {
        self.tutorial_hours = hours;
        self
    }

    /// Sets academic credits.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Marks the course as an elective.
    pub fn elective(mut self) -> Self {
        self.is_elective = true;
        self
    }

    /// Sets the minimum room capacity override.
    pub fn with_min_room_capacity(mut self, capacity: u32) -> Self {
        self.min_room_capacity = Some(capacity);
        self
    }

    /// Total weekly contact hours across all session kinds.
    pub fn weekly_hours(&self) -> u32 {
        self.theory_hours + self.lab_hours + self.tutorial_hours
    }

    /// Whether this course needs laboratory facilities.
    pub fn requires_lab(&self) -> bool {
        self.lab_hours > 0
    }
}
