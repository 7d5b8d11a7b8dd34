//! Candidate generation and session ordering.
//!
//! For each session the solver enumerates the cross product of compatible
//! rooms, feasible slot spans, and eligible faculty, pruned by a cheap
//! room pre-filter before the full evaluator runs. Scoring the cross
//! product is embarrassingly parallel; results are reduced by a
//! deterministic sort so parallelism never changes the outcome.

use itertools::iproduct;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::evaluator::{CandidatePlacement, EvalResult, Evaluator, HardViolation};
use crate::models::{
    ConstraintSet, ConstraintTarget, Faculty, FacultyRequirement, Room, Schedule, Session,
    SlotCatalog, TimeSlot,
};
use crate::result::UnplacedReason;
use crate::workload::WorkloadTracker;

/// An evaluator-accepted placement, ready to commit.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub room_id: String,
    pub slot_id: String,
    pub slot_index: u32,
    pub faculty_id: String,
    pub penalty: f64,
}

/// Outcome of one session's candidate sweep.
#[derive(Debug)]
pub(crate) enum SweepOutcome {
    /// Accepted candidates in tie-break order (best first).
    Candidates(Vec<Candidate>),
    /// Nothing was accepted; carries the best-effort blocking reason.
    Blocked(UnplacedReason),
}

/// Rooms passing the type and capacity pre-filter, in id order.
///
/// Also reports the last pre-filter rejection so an empty result can name
/// what blocked the pool (capacity beats nothing; the last room checked
/// wins, matching the deterministic id order).
pub(crate) fn compatible_rooms<'a>(
    session: &Session,
    rooms: &[&'a Room],
    constraints: &ConstraintSet,
) -> (Vec<&'a Room>, Option<HardViolation>) {
    let capacity_is_hard = constraints
        .mode(ConstraintTarget::RoomCapacity)
        .is_hard();
    let mut compatible = Vec::new();
    let mut last_rejection = None;

    for room in rooms {
        if room.room_type != session.required_room_type() {
            last_rejection = Some(HardViolation::RoomTypeMismatch);
            continue;
        }
        if capacity_is_hard && room.capacity < session.student_count {
            last_rejection = Some(HardViolation::RoomCapacityExceeded);
            continue;
        }
        compatible.push(*room);
    }
    (compatible, last_rejection)
}

/// Faculty eligible to teach the session, in id order.
pub(crate) fn eligible_faculty<'a>(session: &Session, faculty: &[&'a Faculty]) -> Vec<&'a Faculty> {
    match &session.faculty {
        FacultyRequirement::Specific(id) => faculty
            .iter()
            .filter(|f| f.id == *id)
            .copied()
            .collect(),
        FacultyRequirement::AnyQualified => faculty
            .iter()
            .filter(|f| f.is_qualified(&session.course_id))
            .copied()
            .collect(),
    }
}

/// Contiguous slot spans of the session's duration, in start-index order.
pub(crate) fn feasible_spans<'a>(
    session: &Session,
    catalog: &'a SlotCatalog,
) -> Vec<Vec<&'a TimeSlot>> {
    catalog
        .slots()
        .iter()
        .filter(|slot| !slot.is_break)
        .filter_map(|slot| catalog.span(slot, session.duration_slots))
        .collect()
}

/// Enumerates and scores every candidate placement for a session.
///
/// The full cross product is evaluated in parallel, then accepted
/// candidates are sorted by `(penalty, room id, slot index, faculty id)`
/// so equal-penalty ties resolve identically on every run.
pub(crate) fn sweep(
    session: &Session,
    rooms: &[&Room],
    faculty: &[&Faculty],
    catalog: &SlotCatalog,
    evaluator: &Evaluator<'_>,
    schedule: &Schedule,
    workload: &WorkloadTracker,
) -> SweepOutcome {
    let (rooms, room_rejection) = compatible_rooms(session, rooms, evaluator.constraint_set());
    if rooms.is_empty() {
        return SweepOutcome::Blocked(match room_rejection {
            Some(violation) => UnplacedReason::Blocked(violation),
            None => UnplacedReason::NoCompatibleRoom,
        });
    }
    let faculty = eligible_faculty(session, faculty);
    if faculty.is_empty() {
        return SweepOutcome::Blocked(UnplacedReason::NoQualifiedFaculty);
    }
    let spans = feasible_spans(session, catalog);
    if spans.is_empty() {
        return SweepOutcome::Blocked(UnplacedReason::NoFeasibleSlot);
    }

    let tuples: Vec<(&Room, &Vec<&TimeSlot>, &Faculty)> =
        iproduct!(rooms.iter(), spans.iter(), faculty.iter())
            .map(|(r, s, f)| (*r, s, *f))
            .collect();

    let evaluations: Vec<EvalResult> = tuples
        .par_iter()
        .map(|(room, span, member)| {
            evaluator.evaluate(
                &CandidatePlacement {
                    session,
                    room,
                    span,
                    faculty: member,
                },
                schedule,
                workload,
            )
        })
        .collect();

    let mut accepted = Vec::new();
    let mut last_rejection = None;
    for ((room, span, member), evaluation) in tuples.iter().zip(evaluations) {
        match evaluation {
            EvalResult::Accepted { penalty } => accepted.push(Candidate {
                room_id: room.id.clone(),
                slot_id: span[0].id.clone(),
                slot_index: span[0].index,
                faculty_id: member.id.clone(),
                penalty,
            }),
            EvalResult::Rejected(violation) => last_rejection = Some(violation),
        }
    }

    if accepted.is_empty() {
        let violation = last_rejection.unwrap_or(HardViolation::RoomTypeMismatch);
        return SweepOutcome::Blocked(UnplacedReason::Blocked(violation));
    }

    accepted.sort_by(|a, b| {
        a.penalty
            .total_cmp(&b.penalty)
            .then_with(|| a.room_id.cmp(&b.room_id))
            .then_with(|| a.slot_index.cmp(&b.slot_index))
            .then_with(|| a.faculty_id.cmp(&b.faculty_id))
    });
    SweepOutcome::Candidates(accepted)
}

/// Orders sessions most-constrained-first.
///
/// Ascending by pre-filter candidate count (compatible rooms × eligible
/// faculty), then descending by student count, then ascending by session
/// id. A seed perturbs only the final tie level: the pool is shuffled
/// reproducibly before the stable sort instead of being ordered by id.
pub(crate) fn order_sessions<'a>(
    sessions: &'a [Session],
    rooms: &[&Room],
    faculty: &[&Faculty],
    constraints: &ConstraintSet,
    seed: Option<u64>,
) -> Vec<&'a Session> {
    let mut ordered: Vec<&Session> = sessions.iter().collect();
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            ordered.shuffle(&mut rng);
        }
        None => ordered.sort_by(|a, b| a.id.cmp(&b.id)),
    }

    let count_for = |session: &Session| -> usize {
        let (compatible, _) = compatible_rooms(session, rooms, constraints);
        compatible.len() * eligible_faculty(session, faculty).len()
    };
    let counts: std::collections::HashMap<&str, usize> = ordered
        .iter()
        .map(|s| (s.id.as_str(), count_for(s)))
        .collect();

    ordered.sort_by(|a, b| {
        counts[a.id.as_str()]
            .cmp(&counts[b.id.as_str()])
            .then_with(|| b.student_count.cmp(&a.student_count))
    });
    ordered
}
