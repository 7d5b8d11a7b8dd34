//! Timetable domain models.
//!
//! Provides the core data types for representing a timetable generation
//! problem and its solution. Records are supplied by external collaborators
//! (academic setup, faculty, room inventory, constraint configuration) and
//! consumed by the engine as plain in-memory data.
//!
//! # Domain Mapping
//!
//! | timeweaver-engine | Generic scheduling |
//! |-------------------|--------------------|
//! | Session | Schedulable unit / operation |
//! | Room, Faculty | Disjunctive resources |
//! | TimeSlot | Discrete time grid cell |
//! | Schedule | Solution with conflict index |

mod constraint;
mod course;
mod faculty;
mod room;
mod schedule;
mod section;
mod session;
mod time_slot;

pub use constraint::{Constraint, ConstraintMode, ConstraintSet, ConstraintTarget};
pub use course::Course;
pub use faculty::Faculty;
pub use room::{Room, RoomType};
pub use schedule::{Assignment, Schedule};
pub use section::Section;
pub use session::{FacultyRequirement, Session, SessionKind};
pub use time_slot::{DayOfWeek, SlotCatalog, TimeSlot};
