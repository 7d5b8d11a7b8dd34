//! Section model.
//!
//! A section is a cohort of students taking a course together. Sections own
//! their sessions: the weekly session list is derived from the course's
//! hour requirements when a run starts and does not outlive the section.

use serde::{Deserialize, Serialize};

use super::{Course, Session, SessionKind};

/// A class section of a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Unique section identifier.
    pub id: String,
    /// Course this section takes.
    pub course_id: String,
    /// Owning department.
    pub department: String,
    /// Semester label (e.g., "2026-ODD").
    pub semester: String,
    /// Academic year of study (1-4).
    pub year: u32,
    /// Enrolled students.
    pub student_count: u32,
}

impl Section {
    /// Creates a new section.
    pub fn new(id: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            course_id: course_id.into(),
            department: String::new(),
            semester: String::new(),
            year: 1,
            student_count: 0,
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the semester label.
    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = semester.into();
        self
    }

    /// Sets the year of study.
    pub fn with_year(mut self, year: u32) -> Self {
        self.year = year;
        self
    }

    /// Sets the enrolled student count.
    pub fn with_student_count(mut self, count: u32) -> Self {
        self.student_count = count;
        self
    }

    /// Derives the weekly session list from the course's hour requirements.
    ///
    /// Each theory hour becomes a one-slot `Theory` session, each tutorial
    /// hour a one-slot `Tutorial` session, and a positive lab-hour count
    /// becomes a single contiguous `Lab` block. Session ids are derived
    /// deterministically from the section id (`<id>-T1`, `<id>-U1`,
    /// `<id>-L1`).
    ///
    /// The session's capacity requirement is the section size, raised to
    /// the course's `min_room_capacity` floor when one is set.
    pub fn expand_sessions(&self, course: &Course) -> Vec<Session> {
        let required_seats = self
            .student_count
            .max(course.min_room_capacity.unwrap_or(0));

        let mut sessions = Vec::new();
        for n in 1..=course.theory_hours {
            sessions.push(
                Session::new(
                    format!("{}-T{n}", self.id),
                    &self.id,
                    &self.course_id,
                    SessionKind::Theory,
                )
                .with_student_count(required_seats),
            );
        }
        for n in 1..=course.tutorial_hours {
            sessions.push(
                Session::new(
                    format!("{}-U{n}", self.id),
                    &self.id,
                    &self.course_id,
                    SessionKind::Tutorial,
                )
                .with_student_count(required_seats),
            );
        }
        if course.lab_hours > 0 {
            sessions.push(
                Session::new(
                    format!("{}-L1", self.id),
                    &self.id,
                    &self.course_id,
                    SessionKind::Lab,
                )
                .with_duration(course.lab_hours)
                .with_student_count(required_seats),
            );
        }
        sessions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_builder() {
        let section = Section::new("SEC-A", "C1")
            .with_department("CSE")
            .with_semester("2026-ODD")
            .with_year(3)
            .with_student_count(55);

        assert_eq!(section.id, "SEC-A");
        assert_eq!(section.year, 3);
        assert_eq!(section.student_count, 55);
    }

    #[test]
    fn test_expand_sessions_full_course() {
        let course = Course::new("C1", "CS301")
            .with_theory_hours(3)
            .with_lab_hours(2)
            .with_tutorial_hours(1);
        let section = Section::new("SEC-A", "C1").with_student_count(55);

        let sessions = section.expand_sessions(&course);
        assert_eq!(sessions.len(), 5); // 3 theory + 1 tutorial + 1 lab block

        let theory: Vec<_> = sessions
            .iter()
            .filter(|s| s.kind == SessionKind::Theory)
            .collect();
        assert_eq!(theory.len(), 3);
        assert!(theory.iter().all(|s| s.duration_slots == 1));

        let lab = sessions.iter().find(|s| s.kind == SessionKind::Lab).unwrap();
        assert_eq!(lab.id, "SEC-A-L1");
        assert_eq!(lab.duration_slots, 2);

        assert!(sessions.iter().all(|s| s.student_count == 55));
        assert!(sessions.iter().all(|s| s.section_id == "SEC-A"));
    }

    #[test]
    fn test_expand_sessions_capacity_floor() {
        let course = Course::new("C1", "CS301")
            .with_theory_hours(1)
            .with_min_room_capacity(60);
        let section = Section::new("SEC-B", "C1").with_student_count(40);

        let sessions = section.expand_sessions(&course);
        assert_eq!(sessions[0].student_count, 60);
    }

    #[test]
    fn test_expand_sessions_no_lab() {
        let course = Course::new("C2", "HU101").with_theory_hours(2);
        let section = Section::new("SEC-C", "C2").with_student_count(70);

        let sessions = section.expand_sessions(&course);
        assert_eq!(sessions.len(), 2);
        assert!(sessions.iter().all(|s| s.kind == SessionKind::Theory));
    }
}
