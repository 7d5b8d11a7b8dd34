//! Backtracking slot search.
//!
//! # Algorithm
//!
//! 1. Validate input; reject malformed runs before search.
//! 2. Order sessions most-constrained-first.
//! 3. For each session, sweep the candidate cross product, commit the
//!    lowest-penalty accepted placement, and push a frame remembering the
//!    alternatives.
//! 4. On a dead end, backtrack chronologically: undo the most recent
//!    commit and advance that frame to its next candidate. A session whose
//!    subtree exhausts is reported unplaced and the search resumes
//!    forward without it.
//!
//! A backtrack-count and optional wall-clock budget bound the worst case;
//! the engine is a bounded heuristic solver, not an exact one. Budgets
//! are checked at commit/backtrack boundaries (cooperative cancellation).

use log::{debug, info, trace, warn};
use std::collections::{BTreeMap, HashSet};
use std::time::{Duration, Instant};

use super::candidates::{order_sessions, sweep, Candidate, SweepOutcome};
use crate::error::{EngineError, InvariantViolation};
use crate::evaluator::Evaluator;
use crate::models::{
    Assignment, Constraint, ConstraintSet, Faculty, Room, Schedule, Session, SlotCatalog, TimeSlot,
};
use crate::result::{SchedulingResult, UnplacedReason, UnplacedSession};
use crate::validation::validate_input;
use crate::workload::WorkloadTracker;

/// Bounds on search effort.
///
/// When either bound is hit the run stops exploring and returns the best
/// partial result found so far, flagged incomplete.
#[derive(Debug, Clone, Copy)]
pub struct SearchBudget {
    /// Maximum backtracks before the run stops repairing dead ends.
    pub max_backtracks: u32,
    /// Optional wall-clock ceiling for the run.
    pub max_duration: Option<Duration>,
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            max_backtracks: 10_000,
            max_duration: None,
        }
    }
}

impl SearchBudget {
    /// Sets the backtrack ceiling.
    pub fn with_max_backtracks(mut self, max: u32) -> Self {
        self.max_backtracks = max;
        self
    }

    /// Sets the wall-clock ceiling.
    pub fn with_max_duration(mut self, duration: Duration) -> Self {
        self.max_duration = Some(duration);
        self
    }

    fn time_expired(&self, started: Instant) -> bool {
        self.max_duration
            .is_some_and(|limit| started.elapsed() >= limit)
    }
}

/// Input container for one scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Sessions to place.
    pub sessions: Vec<Session>,
    /// Room pool.
    pub rooms: Vec<Room>,
    /// Slot catalog.
    pub time_slots: Vec<TimeSlot>,
    /// Faculty pool.
    pub faculty: Vec<Faculty>,
    /// Constraint configuration.
    pub constraints: Vec<Constraint>,
}

impl ScheduleRequest {
    /// Creates a request with default constraint configuration.
    pub fn new(
        sessions: Vec<Session>,
        rooms: Vec<Room>,
        time_slots: Vec<TimeSlot>,
        faculty: Vec<Faculty>,
    ) -> Self {
        Self {
            sessions,
            rooms,
            time_slots,
            faculty,
            constraints: Vec::new(),
        }
    }

    /// Sets the constraint configuration.
    pub fn with_constraints(mut self, constraints: Vec<Constraint>) -> Self {
        self.constraints = constraints;
        self
    }
}

/// The backtracking timetable solver.
///
/// Holds no run state — every `run` call owns a fresh schedule and
/// workload tracker, so independent runs may execute in parallel.
///
/// # Example
///
/// ```
/// use timeweaver_engine::models::{DayOfWeek, Faculty, Room, Session, SessionKind, TimeSlot};
/// use timeweaver_engine::solver::{ScheduleRequest, TimetableSolver};
///
/// let sessions = vec![
///     Session::new("SEC-A-T1", "SEC-A", "C1", SessionKind::Theory).with_student_count(40),
/// ];
/// let rooms = vec![Room::classroom("R1").with_capacity(60)];
/// let slots = vec![TimeSlot::new("MON-1", DayOfWeek::Monday, 540, 600, 0)];
/// let faculty = vec![
///     Faculty::new("F1").with_max_weekly_hours(16).with_qualification("C1"),
/// ];
///
/// let request = ScheduleRequest::new(sessions, rooms, slots, faculty);
/// let result = TimetableSolver::new().run(&request).unwrap();
/// assert!(result.is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableSolver {
    budget: SearchBudget,
    seed: Option<u64>,
}

/// One committed decision: the session's sorted candidate list and the
/// cursor of the alternative currently on the schedule.
struct Frame<'a> {
    pos: usize,
    session: &'a Session,
    candidates: Vec<Candidate>,
    cursor: usize,
}

impl TimetableSolver {
    /// Creates a solver with the default budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search budget.
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Seeds the optional ordering-tie shuffle. Runs with the same seed
    /// and input are identical; without a seed, ties order by session id.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Runs the search over fully materialized in-memory input.
    ///
    /// Fails only on malformed input or a broken engine invariant;
    /// scheduling difficulty is reported inside the result.
    pub fn run(&self, request: &ScheduleRequest) -> Result<SchedulingResult, EngineError> {
        validate_input(
            &request.sessions,
            &request.rooms,
            &request.time_slots,
            &request.faculty,
            &request.constraints,
        )
        .map_err(EngineError::Validation)?;

        let catalog = SlotCatalog::new(&request.time_slots);
        let constraints = ConstraintSet::from_constraints(&request.constraints);
        let evaluator = Evaluator::new(&constraints, &catalog);

        let mut rooms: Vec<&Room> = request.rooms.iter().collect();
        rooms.sort_by(|a, b| a.id.cmp(&b.id));
        let mut faculty: Vec<&Faculty> = request.faculty.iter().collect();
        faculty.sort_by(|a, b| a.id.cmp(&b.id));

        let order = order_sessions(&request.sessions, &rooms, &faculty, &constraints, self.seed);
        info!(
            "scheduling run: {} sessions, {} rooms, {} slots, {} faculty",
            order.len(),
            rooms.len(),
            catalog.len(),
            faculty.len()
        );

        let started = Instant::now();
        let mut schedule = Schedule::new();
        let mut workload = WorkloadTracker::new();
        let mut stack: Vec<Frame<'_>> = Vec::new();
        let mut unplaced: BTreeMap<usize, UnplacedReason> = BTreeMap::new();
        let mut backtracks: u32 = 0;
        let mut budget_exhausted = false;

        loop {
            let mut pos = stack.last().map_or(0, |frame| frame.pos + 1);
            while unplaced.contains_key(&pos) {
                pos += 1;
            }
            if pos >= order.len() {
                break;
            }
            if self.budget.time_expired(started) {
                warn!("wall-clock budget expired with {} sessions pending", order.len() - pos);
                mark_remaining(&stack, &mut unplaced, order.len());
                budget_exhausted = true;
                break;
            }

            let session = order[pos];
            let candidates = match sweep(
                session, &rooms, &faculty, &catalog, &evaluator, &schedule, &workload,
            ) {
                SweepOutcome::Candidates(candidates) => candidates,
                SweepOutcome::Blocked(reason) => {
                    debug!("dead end at session '{}': {reason}", session.id);
                    let repaired = self.backtrack(
                        &mut stack,
                        &mut schedule,
                        &mut workload,
                        &catalog,
                        &mut backtracks,
                        started,
                    )?;
                    if !repaired {
                        if backtracks >= self.budget.max_backtracks
                            || self.budget.time_expired(started)
                        {
                            budget_exhausted = true;
                        }
                        unplaced.insert(pos, reason);
                        trace!("session '{}' recorded unplaced: {reason}", session.id);
                    }
                    continue;
                }
            };

            let chosen = &candidates[0];
            commit(chosen, session, &catalog, &mut schedule, &mut workload)?;
            trace!(
                "committed session '{}' to room {} slot {} faculty {}",
                session.id,
                chosen.room_id,
                chosen.slot_id,
                chosen.faculty_id
            );
            stack.push(Frame {
                pos,
                session,
                candidates,
                cursor: 0,
            });
        }

        let mut unplaced: Vec<UnplacedSession> = unplaced
            .into_iter()
            .map(|(pos, reason)| UnplacedSession {
                session_id: order[pos].id.clone(),
                reason,
            })
            .collect();
        unplaced.sort_by(|a, b| a.session_id.cmp(&b.session_id));

        if budget_exhausted {
            warn!(
                "run incomplete: {} unplaced after {backtracks} backtracks",
                unplaced.len()
            );
        } else {
            info!(
                "run finished: {} placed, {} unplaced, {backtracks} backtracks, soft score {:.2}",
                schedule.assignment_count(),
                unplaced.len(),
                schedule.soft_score()
            );
        }

        let soft_score = schedule.soft_score();
        Ok(SchedulingResult {
            schedule,
            unplaced,
            soft_score,
            backtracks_used: backtracks,
            budget_exhausted,
        })
    }

    /// Undoes recent commits until some frame advances to a fresh
    /// alternative. Returns `false` when the stack exhausts or a budget
    /// expires, leaving the schedule rewound to the deepest surviving
    /// frame.
    fn backtrack(
        &self,
        stack: &mut Vec<Frame<'_>>,
        schedule: &mut Schedule,
        workload: &mut WorkloadTracker,
        catalog: &SlotCatalog,
        backtracks: &mut u32,
        started: Instant,
    ) -> Result<bool, EngineError> {
        loop {
            if stack.is_empty()
                || *backtracks >= self.budget.max_backtracks
                || self.budget.time_expired(started)
            {
                return Ok(false);
            }
            *backtracks += 1;

            let mut frame = stack.pop().ok_or_else(|| {
                InvariantViolation("backtrack popped an empty stack".to_string())
            })?;
            uncommit(schedule, workload)?;
            frame.cursor += 1;

            if frame.cursor < frame.candidates.len() {
                let next = &frame.candidates[frame.cursor];
                commit(next, frame.session, catalog, schedule, workload)?;
                trace!(
                    "backtracked session '{}' to room {} slot {}",
                    frame.session.id,
                    next.room_id,
                    next.slot_id
                );
                stack.push(frame);
                return Ok(true);
            }
            // Frame exhausted; its session is retried on the forward pass.
        }
    }
}

fn commit(
    candidate: &Candidate,
    session: &Session,
    catalog: &SlotCatalog,
    schedule: &mut Schedule,
    workload: &mut WorkloadTracker,
) -> Result<(), EngineError> {
    let start = catalog.get(&candidate.slot_id).ok_or_else(|| {
        InvariantViolation(format!("candidate slot '{}' left the catalog", candidate.slot_id))
    })?;
    let span = catalog.span(start, session.duration_slots).ok_or_else(|| {
        InvariantViolation(format!(
            "candidate span at '{}' no longer resolves",
            candidate.slot_id
        ))
    })?;

    schedule.commit(Assignment {
        session_id: session.id.clone(),
        section_id: session.section_id.clone(),
        room_id: candidate.room_id.clone(),
        faculty_id: candidate.faculty_id.clone(),
        start_slot_id: candidate.slot_id.clone(),
        occupied_slot_ids: span.iter().map(|slot| slot.id.clone()).collect(),
        penalty: candidate.penalty,
    })?;
    workload.reserve(&candidate.faculty_id, session.duration_slots);
    Ok(())
}

fn uncommit(schedule: &mut Schedule, workload: &mut WorkloadTracker) -> Result<(), EngineError> {
    let assignment = schedule.uncommit()?;
    workload.release(&assignment.faculty_id, assignment.duration_slots())?;
    Ok(())
}

fn mark_remaining(
    stack: &[Frame<'_>],
    unplaced: &mut BTreeMap<usize, UnplacedReason>,
    total: usize,
) {
    let committed: HashSet<usize> = stack.iter().map(|frame| frame.pos).collect();
    for pos in 0..total {
        if !committed.contains(&pos) {
            unplaced
                .entry(pos)
                .or_insert(UnplacedReason::BudgetExhausted);
        }
    }
}
