//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the core and the invariant checks share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_PATTERNS, check_winner, winning_line};

use super::status::GameStatus;
use super::types::Board;
use tracing::instrument;

/// Evaluates the status of a board.
///
/// A win is checked first, in [`WIN_PATTERNS`] order; a full board with no
/// win is a draw; anything else is still ongoing.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Win(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::Ongoing
    }
}
