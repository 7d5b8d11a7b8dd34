//! Engine error taxonomy.
//!
//! Only two failures surface as `Err`: malformed input caught before the
//! run starts, and internal invariant violations that indicate an engine
//! bug. Scheduling difficulty (unplaced sessions, exhausted budgets) is
//! data in the result, not an error.

use thiserror::Error;

use crate::validation::ValidationError;

/// A broken internal invariant: tracker underflow, conflict-index
/// corruption. Indicates an engine bug; the run aborts rather than
/// returning a silently wrong schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("internal invariant violated: {0}")]
pub struct InvariantViolation(pub String);

/// Fatal engine errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input failed pre-run validation; the run never started.
    #[error("input validation failed: {0:?}")]
    Validation(Vec<ValidationError>),

    /// An internal invariant broke mid-run.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}
