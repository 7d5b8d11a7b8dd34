//! Scheduling constraints.
//!
//! Constraints are configuration: loaded once per run, never mutated by
//! the solver. Each record targets one rule family and declares whether it
//! is hard (a violation invalidates the placement) or soft (a violation
//! adds its weight to the penalty score).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rule family a constraint record governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintTarget {
    /// Two sessions in the same room and slot.
    RoomDoubleBooking,
    /// One faculty member in two places at once.
    FacultyDoubleBooking,
    /// Room seats fewer students than the session brings.
    RoomCapacity,
    /// Faculty weekly hour ceiling.
    WorkloadLimit,
    /// Same section taught in back-to-back slots.
    Adjacency,
    /// Faculty scheduled in a slot they marked unavailable.
    FacultyPreference,
}

/// A constraint record supplied by the configuration provider.
///
/// Mirrors the institutional constraint table: a named rule with a
/// hard/soft flag, a soft weight in `0.0..=1.0`, and an active toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraint {
    /// Unique constraint identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Rule family this record governs.
    pub target: ConstraintTarget,
    /// Hard constraints reject placements; soft ones penalize them.
    pub is_hard: bool,
    /// Penalty weight for soft constraints (ignored when hard).
    pub weight: f64,
    /// Inactive records are skipped entirely.
    pub active: bool,
}

impl Constraint {
    /// Creates a hard constraint.
    pub fn hard(id: impl Into<String>, target: ConstraintTarget) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            target,
            is_hard: true,
            weight: 1.0,
            active: true,
        }
    }

    /// Creates a soft constraint with the given penalty weight.
    pub fn soft(id: impl Into<String>, target: ConstraintTarget, weight: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            target,
            is_hard: false,
            weight,
            active: true,
        }
    }

    /// Sets the human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Deactivates the record.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Effective enforcement mode for one rule family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstraintMode {
    /// Violations reject the placement.
    Hard,
    /// Violations add the weight to the penalty score.
    Soft(f64),
    /// Rule is not checked.
    Off,
}

impl ConstraintMode {
    /// Whether this mode rejects violating placements.
    pub fn is_hard(&self) -> bool {
        matches!(self, ConstraintMode::Hard)
    }
}

/// Resolved per-target enforcement modes for one run.
///
/// Built once from the run's constraint records. Targets without a record
/// fall back to safe defaults: double-booking, capacity, and workload are
/// hard; adjacency and preference are soft with weight 1.0. An inactive
/// record switches off only soft-default targets; a hard-default target
/// reverts to hard.
///
/// The two double-booking targets cannot be softened or disabled — the
/// schedule's conflict index refuses conflicting entries regardless of
/// configuration, so the set clamps them to hard.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    overrides: HashMap<ConstraintTarget, ConstraintMode>,
}

impl ConstraintSet {
    /// Builds the set from the run's constraint records.
    ///
    /// When several active records target the same family, the last one in
    /// input order wins.
    pub fn from_constraints(constraints: &[Constraint]) -> Self {
        let mut overrides = HashMap::new();
        for c in constraints {
            let mode = if !c.active {
                // Deactivating a record never removes a hard-default check.
                match Self::default_mode(c.target) {
                    ConstraintMode::Hard => ConstraintMode::Hard,
                    _ => ConstraintMode::Off,
                }
            } else if c.is_hard {
                ConstraintMode::Hard
            } else {
                ConstraintMode::Soft(c.weight)
            };
            overrides.insert(c.target, mode);
        }
        Self { overrides }
    }

    /// Effective mode for a rule family.
    pub fn mode(&self, target: ConstraintTarget) -> ConstraintMode {
        match target {
            // Structural invariants of the conflict index.
            ConstraintTarget::RoomDoubleBooking | ConstraintTarget::FacultyDoubleBooking => {
                ConstraintMode::Hard
            }
            _ => self
                .overrides
                .get(&target)
                .copied()
                .unwrap_or_else(|| Self::default_mode(target)),
        }
    }

    fn default_mode(target: ConstraintTarget) -> ConstraintMode {
        match target {
            ConstraintTarget::RoomDoubleBooking
            | ConstraintTarget::FacultyDoubleBooking
            | ConstraintTarget::RoomCapacity
            | ConstraintTarget::WorkloadLimit => ConstraintMode::Hard,
            ConstraintTarget::Adjacency | ConstraintTarget::FacultyPreference => {
                ConstraintMode::Soft(1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_modes() {
        let set = ConstraintSet::default();
        assert_eq!(set.mode(ConstraintTarget::RoomCapacity), ConstraintMode::Hard);
        assert_eq!(set.mode(ConstraintTarget::WorkloadLimit), ConstraintMode::Hard);
        assert_eq!(
            set.mode(ConstraintTarget::FacultyPreference),
            ConstraintMode::Soft(1.0)
        );
        assert_eq!(set.mode(ConstraintTarget::Adjacency), ConstraintMode::Soft(1.0));
    }

    #[test]
    fn test_soft_workload_override() {
        let set = ConstraintSet::from_constraints(&[Constraint::soft(
            "K1",
            ConstraintTarget::WorkloadLimit,
            0.5,
        )]);
        assert_eq!(set.mode(ConstraintTarget::WorkloadLimit), ConstraintMode::Soft(0.5));
    }

    #[test]
    fn test_inactive_record_disables_target() {
        let set = ConstraintSet::from_constraints(&[Constraint::soft(
            "K1",
            ConstraintTarget::Adjacency,
            0.3,
        )
        .inactive()]);
        assert_eq!(set.mode(ConstraintTarget::Adjacency), ConstraintMode::Off);
    }

    #[test]
    fn test_inactive_record_keeps_hard_default() {
        let set = ConstraintSet::from_constraints(&[
            Constraint::hard("K1", ConstraintTarget::RoomCapacity).inactive(),
            Constraint::soft("K2", ConstraintTarget::WorkloadLimit, 0.4).inactive(),
        ]);
        assert_eq!(set.mode(ConstraintTarget::RoomCapacity), ConstraintMode::Hard);
        assert_eq!(set.mode(ConstraintTarget::WorkloadLimit), ConstraintMode::Hard);
    }

    #[test]
    fn test_double_booking_cannot_be_softened() {
        let set = ConstraintSet::from_constraints(&[
            Constraint::soft("K1", ConstraintTarget::RoomDoubleBooking, 0.1),
            Constraint::hard("K2", ConstraintTarget::FacultyDoubleBooking).inactive(),
        ]);
        assert!(set.mode(ConstraintTarget::RoomDoubleBooking).is_hard());
        assert!(set.mode(ConstraintTarget::FacultyDoubleBooking).is_hard());
    }

    #[test]
    fn test_last_record_wins() {
        let set = ConstraintSet::from_constraints(&[
            Constraint::hard("K1", ConstraintTarget::RoomCapacity),
            Constraint::soft("K2", ConstraintTarget::RoomCapacity, 0.8),
        ]);
        assert_eq!(set.mode(ConstraintTarget::RoomCapacity), ConstraintMode::Soft(0.8));
    }
}
