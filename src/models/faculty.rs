//! Faculty model.
//!
//! Faculty records carry the qualification set, the weekly hour ceiling,
//! and the unavailability preferences the evaluator consults. Committed
//! hours for a run live in the [`WorkloadTracker`], not on the model, so
//! faculty records stay read-only during search.
//!
//! [`WorkloadTracker`]: crate::workload::WorkloadTracker

use serde::{Deserialize, Serialize};

/// A faculty member available to the scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Home department.
    pub department: String,
    /// Maximum teaching hours per week.
    pub max_weekly_hours: u32,
    /// Course ids this member is qualified to teach.
    pub qualified_courses: Vec<String>,
    /// Slot ids this member prefers not to teach in.
    pub unavailable_slots: Vec<String>,
}

impl Faculty {
    /// Creates a new faculty member.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            department: String::new(),
            max_weekly_hours: 0,
            qualified_courses: Vec::new(),
            unavailable_slots: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the home department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the weekly hour ceiling.
    pub fn with_max_weekly_hours(mut self, hours: u32) -> Self {
        self.max_weekly_hours = hours;
        self
    }

    /// Adds a course qualification.
    pub fn with_qualification(mut self, course_id: impl Into<String>) -> Self {
        self.qualified_courses.push(course_id.into());
        self
    }

    /// Marks a slot as unavailable (preference).
    pub fn with_unavailable_slot(mut self, slot_id: impl Into<String>) -> Self {
        self.unavailable_slots.push(slot_id.into());
        self
    }

    /// Whether this member is qualified to teach a course.
    pub fn is_qualified(&self, course_id: &str) -> bool {
        self.qualified_courses.iter().any(|c| c == course_id)
    }

    /// Whether this member is available in a slot.
    pub fn is_available(&self, slot_id: &str) -> bool {
        !self.unavailable_slots.iter().any(|s| s == slot_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faculty_builder() {
        let faculty = Faculty::new("F1")
            .with_name("Dr. Rao")
            .with_department("CSE")
            .with_max_weekly_hours(16)
            .with_qualification("C1")
            .with_qualification("C2")
            .with_unavailable_slot("MON-1");

        assert_eq!(faculty.id, "F1");
        assert_eq!(faculty.max_weekly_hours, 16);
        assert!(faculty.is_qualified("C1"));
        assert!(!faculty.is_qualified("C9"));
        assert!(!faculty.is_available("MON-1"));
        assert!(faculty.is_available("MON-2"));
    }
}
