//! Match status and the end-of-match announcement derived from it.

use super::types::Player;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Current status of the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, derive_more::Display,
)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("ongoing")]
    Ongoing,
    /// Game ended in a win.
    #[display("player {} won", _0)]
    Win(Player),
    /// Game ended in a draw.
    #[display("draw")]
    Draw,
}

impl GameStatus {
    /// Returns true for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Win(player) => Some(*player),
            GameStatus::Ongoing | GameStatus::Draw => None,
        }
    }

    /// Notification to show when the match ends; `None` while ongoing.
    pub fn announcement(&self) -> Option<Announcement> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::Win(player) => Some(Announcement {
                title: "Congratulations!".to_string(),
                message: format!("Player {} wins!", player),
            }),
            GameStatus::Draw => Some(Announcement {
                title: "It's a Draw!".to_string(),
                message: "The game ended in a draw!".to_string(),
            }),
        }
    }
}

/// End-of-match notification text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Announcement {
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
}
