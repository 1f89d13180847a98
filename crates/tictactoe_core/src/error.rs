//! Errors raised when a move is rejected.

use super::position::Position;
use super::status::GameStatus;

/// Error that can occur when addressing or marking a cell.
///
/// Every variant is recoverable: the operation that produced it left the
/// board untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The index does not address a cell (valid range is 0-8).
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    IndexOutOfRange(String),

    /// The cell at the position already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    IllegalMove(Position),

    /// The match already reached a terminal status and must be reset.
    #[display("Match is already over ({})", _0)]
    MatchOver(GameStatus),
}

impl std::error::Error for GameError {}
