//! First-class invariants for match-driven play.
//!
//! Invariants are logical properties that must hold between moves when a
//! [`Match`](crate::Match) drives the core. They are checked in debug builds
//! and can be tested independently.

use super::game_core::GameCore;
use super::types::Player;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so invariants compose into a single check.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
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

/// Invariant: X moves first, so X has the same number of marks as O or one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameCore> for MarkBalanceInvariant {
    fn holds(core: &GameCore) -> bool {
        let x = core.board().count(Player::X);
        let o = core.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// Invariant: the player to move matches the marks on the board.
///
/// Equal counts mean X is up; otherwise O is.
pub struct TurnOrderInvariant;

impl Invariant<GameCore> for TurnOrderInvariant {
    fn holds(core: &GameCore) -> bool {
        let expected = if core.board().count(Player::X) == core.board().count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        core.current_player() == expected
    }

    fn description() -> &'static str {
        "Player to move agrees with the marks on the board"
    }
}

/// All match invariants as a composable set.
pub type MatchInvariants = (MarkBalanceInvariant, TurnOrderInvariant);
