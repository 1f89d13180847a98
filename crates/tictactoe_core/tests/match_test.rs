//! Tests for the match-level state machine and the view seam.

mod common;

use tictactoe_core::{
    Announcement, GameError, GameStatus, Match, MatchView, Player, Position,
};

/// Everything a view was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ViewEvent {
    Draw(Position, Player),
    Announce(Announcement),
    Clear,
}

#[derive(Debug, Default)]
struct RecordingView {
    events: Vec<ViewEvent>,
}

impl MatchView for RecordingView {
    fn draw_mark(&mut self, position: Position, player: Player) {
        self.events.push(ViewEvent::Draw(position, player));
    }

    fn announce(&mut self, announcement: &Announcement) {
        self.events.push(ViewEvent::Announce(announcement.clone()));
    }

    fn clear_board(&mut self) {
        self.events.push(ViewEvent::Clear);
    }
}

#[test]
fn test_new_match_starts_with_x() {
    let game = Match::new();
    assert_eq!(game.status(), GameStatus::Ongoing);
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.announcement(), None);
}

#[test]
fn test_diagonal_win_scenario() {
    common::init_tracing();
    let mut game = Match::new();

    for index in [0, 1, 4, 2] {
        assert_eq!(game.play(index).unwrap(), GameStatus::Ongoing);
    }
    assert_eq!(game.play(8).unwrap(), GameStatus::Win(Player::X));
    assert_eq!(
        game.announcement().map(|a| a.message),
        Some("Player X wins!".to_string())
    );
}

#[test]
fn test_draw_scenario() {
    common::init_tracing();
    let mut game = Match::new();
    // X O X / X O O / O X X, played in an order that alternates turns.
    let order = [0, 1, 2, 4, 3, 5, 7, 6, 8];

    for index in &order[..8] {
        assert_eq!(game.play(*index).unwrap(), GameStatus::Ongoing);
    }
    assert_eq!(game.play(order[8]).unwrap(), GameStatus::Draw);

    let cells = game.core().board().cells().map(|c| c.mark());
    use Player::{O, X};
    assert_eq!(
        cells,
        [X, O, X, X, O, O, O, X, X].map(Some)
    );
}

#[test]
fn test_terminal_status_absorbs_moves() {
    let mut game = Match::new();
    for index in [0, 3, 1, 4, 2] {
        game.play(index).unwrap();
    }
    let finished = game.clone();

    let err = game.play(5).unwrap_err();
    assert_eq!(err, GameError::MatchOver(GameStatus::Win(Player::X)));
    assert!(err.to_string().contains("over"));
    assert_eq!(game, finished);
}

#[test]
fn test_reset_returns_to_initial_state() {
    let mut game = Match::new();
    for index in [0, 3, 1, 4, 2] {
        game.play(index).unwrap();
    }

    game.reset();
    assert_eq!(game, Match::new());
    assert_eq!(game.play(4).unwrap(), GameStatus::Ongoing);
}

#[test]
fn test_reset_mid_match_gives_x_the_move() {
    let mut game = Match::new();
    game.play(0).unwrap();
    assert_eq!(game.current_player(), Player::O);

    game.reset();
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_tap_draws_marks_and_alternates() {
    common::init_tracing();
    let mut game = Match::new();
    let mut view = RecordingView::default();

    assert_eq!(
        game.handle_cell_tap(4, &mut view).unwrap(),
        Some(GameStatus::Ongoing)
    );
    assert_eq!(
        game.handle_cell_tap(Position::TopLeft, &mut view).unwrap(),
        Some(GameStatus::Ongoing)
    );

    assert_eq!(
        view.events,
        vec![
            ViewEvent::Draw(Position::Center, Player::X),
            ViewEvent::Draw(Position::TopLeft, Player::O),
        ]
    );
}

#[test]
fn test_tap_on_occupied_cell_is_ignored() {
    let mut game = Match::new();
    let mut view = RecordingView::default();
    game.handle_cell_tap(4, &mut view).unwrap();

    assert_eq!(game.handle_cell_tap(4, &mut view).unwrap(), None);
    assert_eq!(game.current_player(), Player::O);
    assert_eq!(view.events.len(), 1);
}

#[test]
fn test_tap_out_of_range_is_an_error() {
    let mut game = Match::new();
    let mut view = RecordingView::default();

    assert!(matches!(
        game.handle_cell_tap(-1, &mut view),
        Err(GameError::IndexOutOfRange(_))
    ));
    assert!(view.events.is_empty());
}

#[test]
fn test_winning_tap_announces_then_resets() {
    common::init_tracing();
    let mut game = Match::new();
    let mut view = RecordingView::default();

    for index in [6, 0, 7, 1] {
        game.handle_cell_tap(index, &mut view).unwrap();
    }
    let status = game.handle_cell_tap(8, &mut view).unwrap();
    assert_eq!(status, Some(GameStatus::Win(Player::X)));

    let tail = &view.events[view.events.len() - 3..];
    assert_eq!(
        tail,
        [
            ViewEvent::Draw(Position::BottomRight, Player::X),
            ViewEvent::Announce(Announcement {
                title: "Congratulations!".to_string(),
                message: "Player X wins!".to_string(),
            }),
            ViewEvent::Clear,
        ]
    );
    assert_eq!(game, Match::new());
}

#[test]
fn test_drawn_tap_announces_draw() {
    let mut game = Match::new();
    let mut view = RecordingView::default();

    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.handle_cell_tap(index, &mut view).unwrap();
    }

    assert!(view.events.contains(&ViewEvent::Announce(Announcement {
        title: "It's a Draw!".to_string(),
        message: "The game ended in a draw!".to_string(),
    })));
    assert_eq!(view.events.last(), Some(&ViewEvent::Clear));
    assert_eq!(game.status(), GameStatus::Ongoing);
}

#[test]
fn test_reset_control_clears_view() {
    let mut game = Match::new();
    let mut view = RecordingView::default();
    game.handle_cell_tap(0, &mut view).unwrap();

    game.handle_reset(&mut view);
    assert_eq!(view.events.last(), Some(&ViewEvent::Clear));
    assert!(game.core().is_cell_empty(0).unwrap());
    assert_eq!(game.current_player(), Player::X);
}
