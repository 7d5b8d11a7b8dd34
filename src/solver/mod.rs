//! Timetable slot search.
//!
//! The solver places sessions one at a time, most-constrained-first,
//! sweeping the full candidate space for each and committing the
//! lowest-penalty feasible placement. Dead ends trigger chronological
//! backtracking bounded by a configurable budget.
//!
//! ## References
//!
//! - Schaerf, A. (1999). "A Survey of Automated Timetabling."
//!   Artificial Intelligence Review 13(2), 87-127.
//! - Haralick, R., Elliott, G. (1980). "Increasing Tree Search
//!   Efficiency for Constraint Satisfaction Problems." Artificial
//!   Intelligence 14(3), 263-313.

mod backtracking;
mod candidates;

pub use backtracking::{ScheduleRequest, SearchBudget, TimetableSolver};
