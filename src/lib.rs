//! Timetable generation engine for academic departments.
//!
//! Takes teaching sessions, rooms, time slots, faculty, and a constraint
//! configuration, and produces a weekly timetable via backtracking search.
//! Hard constraints are never violated in the output; soft constraints
//! accumulate a weighted penalty score. Sessions the search cannot place
//! are reported with the constraint that blocked them — a partial
//! timetable is a result, not an error.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Session`, `Section`, `Course`, `Room`,
//!   `Faculty`, `TimeSlot`, `Constraint`, `Schedule`, `Assignment`
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   references, malformed slots and weights)
//! - **`evaluator`**: Hard/soft constraint evaluation for one candidate
//! - **`solver`**: Candidate sweep and chronological backtracking search
//! - **`workload`**: Faculty weekly-hour accounting
//! - **`result`**: Run outcome with unplaced-session diagnostics
//!
//! # Example
//!
//! ```
//! use timeweaver_engine::models::{Course, DayOfWeek, Faculty, Room, Section, TimeSlot};
//! use timeweaver_engine::solver::{ScheduleRequest, TimetableSolver};
//!
//! let course = Course::new("C1", "CS101")
//!     .with_name("Intro to Programming")
//!     .with_theory_hours(2);
//! let section = Section::new("SEC-A", "C1").with_student_count(45);
//! let sessions = section.expand_sessions(&course);
//!
//! let rooms = vec![Room::classroom("R-301").with_capacity(60)];
//! let slots = vec![
//!     TimeSlot::new("MON-1", DayOfWeek::Monday, 540, 600, 0),
//!     TimeSlot::new("MON-2", DayOfWeek::Monday, 600, 660, 1),
//! ];
//! let faculty = vec![
//!     Faculty::new("F1").with_max_weekly_hours(16).with_qualification("C1"),
//! ];
//!
//! let request = ScheduleRequest::new(sessions, rooms, slots, faculty);
//! let result = TimetableSolver::new().run(&request).unwrap();
//! assert!(result.is_complete());
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke et al. (1997), "Automated University Timetabling: The State of the Art"

pub mod error;
pub mod evaluator;
pub mod models;
pub mod result;
pub mod solver;
pub mod validation;
pub mod workload;

pub use error::EngineError;
pub use result::SchedulingResult;
