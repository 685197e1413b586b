//! First-class session invariants, checked after transitions in debug builds.
//!
//! Each invariant is an independent, testable property of a [`GameSession`].
//! The composed set documents what the state holder guarantees; violation of
//! any member means a transition has a bug.

use super::session::GameSession;
use super::types::{Board, Player, Square};

// ─── Invariant machinery ────────────────────────────────────────────────────

/// A property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks whether the property holds.
    fn holds(state: &S) -> bool;

    /// Human-readable description, used in violation reports.
    fn description() -> &'static str;
}

/// A violated invariant, carried by description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated property.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checkable together as one set.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// ─── Session invariants ─────────────────────────────────────────────────────

/// Every grid in history has balanced marks.
///
/// X moves first, so each grid shows either equal X and O counts or exactly
/// one extra X.
pub struct MarkBalanceInvariant;

impl Invariant<GameSession> for MarkBalanceInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().iter().all(|board| {
            let x = board.count(Player::X);
            let o = board.count(Player::O);
            x == o || x == o + 1
        })
    }

    fn description() -> &'static str {
        "every grid has an X count equal to the O count or one greater"
    }
}

/// History grows one mark at a time from an empty start.
pub struct SingleStepInvariant;

impl Invariant<GameSession> for SingleStepInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();
        let Some(first) = history.first() else {
            return false;
        };
        if *first != Board::new() {
            return false;
        }
        history.windows(2).all(|pair| single_step(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "history starts empty and each entry adds exactly one mark to its predecessor"
    }
}

/// The current-move pointer stays inside history.
pub struct CursorInBoundsInvariant;

impl Invariant<GameSession> for CursorInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        *session.current_move() < session.history().len()
    }

    fn description() -> &'static str {
        "the current move indexes an existing history entry"
    }
}

/// All session invariants as one composable set.
pub type SessionInvariants = (
    MarkBalanceInvariant,
    SingleStepInvariant,
    CursorInBoundsInvariant,
);

/// True when `next` differs from `prev` in exactly one square, and that
/// square went from empty to occupied.
fn single_step(prev: &Board, next: &Board) -> bool {
    let mut changes = prev
        .squares()
        .iter()
        .zip(next.squares().iter())
        .filter(|(before, after)| before != after);
    matches!(
        changes.next(),
        Some((Square::Empty, Square::Occupied(_)))
    ) && changes.next().is_none()
}

/// Panics on any violated session invariant. Debug builds only; release
/// builds skip the walk entirely.
pub(crate) fn assert_invariants(session: &GameSession) {
    if cfg!(debug_assertions)
        && let Err(violations) = SessionInvariants::check_all(session)
    {
        let details: Vec<&str> = violations
            .iter()
            .map(|violation| violation.description.as_str())
            .collect();
        panic!("session invariant violated: {}", details.join("; "));
    }
}
