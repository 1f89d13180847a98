//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, Position};
use tracing::instrument;

/// The eight winning lines, in scan order.
///
/// Rows top to bottom, columns left to right, then the two diagonals.
/// The first matching line decides the winner.
pub const WIN_PATTERNS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and who completed it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    WIN_PATTERNS.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Cell::Mark(player)
                if board.get(b) == Cell::Mark(player) && board.get(c) == Cell::Mark(player) =>
            {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
