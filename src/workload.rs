//! Per-faculty workload accounting.
//!
//! A running accumulator of committed teaching hours, owned by the solver
//! and fresh for every run. `reserve`/`release` are the only mutators,
//! called on commit and backtrack; the evaluator only reads. Releasing
//! more than was reserved is a programming error and surfaces as an
//! invariant violation, never as a user-facing scheduling failure.

use std::collections::HashMap;

use crate::error::InvariantViolation;

/// Committed teaching hours per faculty member for the current run.
#[derive(Debug, Clone, Default)]
pub struct WorkloadTracker {
    committed: HashMap<String, u32>,
    total: u64,
}

impl WorkloadTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `hours` committed for a faculty member.
    pub fn reserve(&mut self, faculty_id: &str, hours: u32) {
        *self.committed.entry(faculty_id.to_string()).or_insert(0) += hours;
        self.total += u64::from(hours);
    }

    /// Releases `hours` previously reserved for a faculty member.
    pub fn release(&mut self, faculty_id: &str, hours: u32) -> Result<(), InvariantViolation> {
        let load = self.committed.get_mut(faculty_id).ok_or_else(|| {
            InvariantViolation(format!("release for untracked faculty {faculty_id}"))
        })?;
        if *load < hours {
            return Err(InvariantViolation(format!(
                "workload underflow for faculty {faculty_id}: releasing {hours}h of {load}h"
            )));
        }
        *load -= hours;
        self.total -= u64::from(hours);
        if *load == 0 {
            self.committed.remove(faculty_id);
        }
        Ok(())
    }

    /// Hours currently committed for a faculty member.
    pub fn current_load(&self, faculty_id: &str) -> u32 {
        self.committed.get(faculty_id).copied().unwrap_or(0)
    }

    /// Hours committed across all faculty.
    pub fn total_reserved(&self) -> u64 {
        self.total
    }
}
