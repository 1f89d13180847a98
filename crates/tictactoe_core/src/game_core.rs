//! The board-level game core.
//!
//! [`GameCore`] owns the nine cells and the advisory turn state. It knows
//! nothing about rendering or input; a presentation layer drives it through
//! [`GameCore::is_cell_empty`], [`GameCore::place_mark`],
//! [`GameCore::evaluate_status`] and [`GameCore::reset`].

use super::error::GameError;
use super::position::Position;
use super::rules;
use super::status::GameStatus;
use super::types::{Board, Cell, Player};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::{debug, instrument, warn};

/// Board state plus the player whose turn it is.
///
/// Index arguments accept any integer type or a [`Position`]; anything
/// outside 0-8 is rejected with [`GameError::IndexOutOfRange`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameCore {
    cells: Board,
    current_player: Player,
}

impl GameCore {
    /// Creates a core with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: Board::new(),
            current_player: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.cells
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the cell at the given index.
    #[instrument(skip(self))]
    pub fn cell<I>(&self, index: I) -> Result<Cell, GameError>
    where
        I: TryInto<usize> + Copy + Debug,
    {
        let pos = Position::resolve(index)?;
        Ok(self.cells.get(pos))
    }

    /// Whether the cell at the given index is empty.
    #[instrument(skip(self))]
    pub fn is_cell_empty<I>(&self, index: I) -> Result<bool, GameError>
    where
        I: TryInto<usize> + Copy + Debug,
    {
        let pos = Position::resolve(index)?;
        Ok(self.cells.is_empty(pos))
    }

    /// Positions that can still be marked.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::valid_moves(&self.cells)
    }

    /// Places `player`'s mark on an empty cell.
    ///
    /// The player is taken as given; turn order is the caller's business.
    ///
    /// # Errors
    ///
    /// [`GameError::IndexOutOfRange`] for an index outside 0-8 and
    /// [`GameError::IllegalMove`] for an occupied cell. The board is left
    /// unchanged in both cases.
    #[instrument(skip(self))]
    pub fn place_mark<I>(&mut self, index: I, player: Player) -> Result<(), GameError>
    where
        I: TryInto<usize> + Copy + Debug,
    {
        let pos = Position::resolve(index).inspect_err(|e| warn!(error = %e, "Rejected mark"))?;

        if !self.cells.is_empty(pos) {
            warn!(position = %pos, "Rejected mark on occupied cell");
            return Err(GameError::IllegalMove(pos));
        }

        self.cells.set(pos, Cell::Mark(player));
        debug!(position = %pos, %player, "Placed mark");
        Ok(())
    }

    /// Evaluates the board: first completed line wins, then draw, else ongoing.
    #[instrument(skip(self))]
    pub fn evaluate_status(&self) -> GameStatus {
        rules::evaluate(&self.cells)
    }

    /// The line that decided a win, for highlighting.
    pub fn winning_line(&self) -> Option<(Player, [Position; 3])> {
        rules::winning_line(&self.cells)
    }

    /// Empties all nine cells. The current player is left alone.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells.clear();
        debug!("Board cleared");
    }

    /// Hands the turn to X again.
    #[instrument(skip(self))]
    pub fn reset_turn(&mut self) {
        self.current_player = Player::X;
    }

    /// Flips the active player and returns the new one.
    #[instrument(skip(self), fields(from = %self.current_player))]
    pub fn advance_turn(&mut self) -> Player {
        self.current_player = self.current_player.opponent();
        self.current_player
    }
}

impl Default for GameCore {
    fn default() -> Self {
        Self::new()
    }
}
