//! Tic-tac-toe game core - board model, status evaluation and match flow.
//!
//! The crate is split in two layers:
//!
//! - **[`GameCore`]**: nine cells plus the advisory turn. Exposes
//!   `is_cell_empty`, `place_mark`, `evaluate_status`, `reset` and
//!   `advance_turn`, and never touches rendering.
//! - **[`Match`]**: the match-level state machine. Alternates turns, treats
//!   `Win` and `Draw` as absorbing until reset, and drives a presentation
//!   layer through the [`MatchView`] trait.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameStatus, Match, Player};
//!
//! let mut game = Match::new();
//! for index in [0, 1, 4, 2] {
//!     assert_eq!(game.play(index)?, GameStatus::Ongoing);
//! }
//! assert_eq!(game.play(8)?, GameStatus::Win(Player::X));
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod game_core;
mod game_match;
mod invariants;
mod position;
mod status;
mod types;

pub mod rules;

// Crate-level exports - core model
pub use error::GameError;
pub use game_core::GameCore;
pub use position::Position;
pub use status::{Announcement, GameStatus};
pub use types::{Board, Cell, Player};

// Crate-level exports - match flow
pub use game_match::{Match, MatchView};

// Crate-level exports - invariants
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant, MatchInvariants,
    TurnOrderInvariant,
};
