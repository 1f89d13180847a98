//! Match-level state machine and the presentation seam.
//!
//! A [`Match`] owns one [`GameCore`] and decides when turns advance and when
//! the match is over. Presentation layers implement [`MatchView`] and feed
//! taps through [`Match::handle_cell_tap`].

use super::error::GameError;
use super::game_core::GameCore;
use super::invariants::{InvariantSet, MatchInvariants};
use super::position::Position;
use super::status::{Announcement, GameStatus};
use super::types::Player;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::{debug, info, instrument, warn};

/// What a presentation layer must do for a match.
pub trait MatchView {
    /// Draws `player`'s mark in the given cell.
    fn draw_mark(&mut self, position: Position, player: Player);

    /// Shows the end-of-match notification.
    fn announce(&mut self, announcement: &Announcement);

    /// Removes every mark from the rendered board.
    fn clear_board(&mut self);
}

/// One match: a board from empty to a terminal status.
///
/// `Win` and `Draw` are absorbing; only [`Match::reset`] leaves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Match {
    core: GameCore,
    status: GameStatus,
}

impl Match {
    /// Starts a match on an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            core: GameCore::new(),
            status: GameStatus::Ongoing,
        }
    }

    /// Returns the underlying core.
    pub fn core(&self) -> &GameCore {
        &self.core
    }

    /// Returns the match status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.core.current_player()
    }

    /// End-of-match notification, once the match is over.
    pub fn announcement(&self) -> Option<Announcement> {
        self.status.announcement()
    }

    /// Plays the current player's mark at `index`.
    ///
    /// On success the new status is returned and, if the match is still
    /// ongoing, the turn has passed to the opponent.
    ///
    /// # Errors
    ///
    /// [`GameError::MatchOver`] once the match has ended, otherwise whatever
    /// [`GameCore::place_mark`] rejects. Nothing changes on error.
    #[instrument(skip(self), fields(player = %self.core.current_player()))]
    pub fn play<I>(&mut self, index: I) -> Result<GameStatus, GameError>
    where
        I: TryInto<usize> + Copy + Debug,
    {
        if self.status.is_terminal() {
            warn!(status = %self.status, "Move offered after match ended");
            return Err(GameError::MatchOver(self.status));
        }

        let pos = Position::resolve(index)?;
        if !self.core.is_cell_empty(pos)? {
            warn!(position = %pos, "Cell already taken");
            return Err(GameError::IllegalMove(pos));
        }

        let player = self.core.current_player();
        self.core.place_mark(pos, player)?;
        self.status = self.core.evaluate_status();

        if self.status.is_terminal() {
            info!(status = %self.status, "Match finished");
        } else {
            let next = self.core.advance_turn();
            debug!(%next, "Turn passed");

            if cfg!(debug_assertions)
                && let Err(violations) = MatchInvariants::check_all(&self.core)
            {
                for violation in &violations {
                    warn!(%violation, "Match invariant violated");
                }
            }
        }

        Ok(self.status)
    }

    /// Clears the board, gives X the first move and reopens the match.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.core.reset();
        self.core.reset_turn();
        self.status = GameStatus::Ongoing;
        debug!("Match reset");
    }

    /// Handles a tap on a cell the way a touch front-end does.
    ///
    /// A tap on an empty cell places the mark and draws it. If that ends the
    /// match the view is told the result, then the match resets and the view
    /// is cleared. Taps on occupied cells are ignored and yield `Ok(None)`.
    ///
    /// Returns the status produced by the tap, before any automatic reset.
    ///
    /// # Errors
    ///
    /// [`GameError::IndexOutOfRange`] for an index outside 0-8, and
    /// [`GameError::MatchOver`] if the match was finished through
    /// [`Match::play`] and never reset.
    #[instrument(skip(self, view))]
    pub fn handle_cell_tap<I, V>(
        &mut self,
        index: I,
        view: &mut V,
    ) -> Result<Option<GameStatus>, GameError>
    where
        I: TryInto<usize> + Copy + Debug,
        V: MatchView,
    {
        let pos = Position::resolve(index)?;
        if !self.core.is_cell_empty(pos)? {
            debug!(position = %pos, "Ignoring tap on occupied cell");
            return Ok(None);
        }

        let player = self.core.current_player();
        let status = self.play(pos)?;
        view.draw_mark(pos, player);

        if let Some(announcement) = status.announcement() {
            view.announce(&announcement);
            self.reset();
            view.clear_board();
        }

        Ok(Some(status))
    }

    /// Handles the reset control.
    #[instrument(skip(self, view))]
    pub fn handle_reset<V: MatchView>(&mut self, view: &mut V) {
        self.reset();
        view.clear_board();
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
