//! Shared fixtures for unit tests.

use crate::game_state::chess_types::{CastlingRights, Color, Square};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::{algebraic_to_square, parse_coordinate_move};
use crate::utils::board_diagram::parse_board_diagram;

pub fn sq(text: &str) -> Square {
    algebraic_to_square(text).expect("test square should parse")
}

pub fn diagram(rows: [&str; 8], side_to_move: Color, rights: CastlingRights) -> GameState {
    parse_board_diagram(&rows, side_to_move, rights).expect("test diagram should be valid")
}

/// Plays one coordinate move such as `e2e4` or `a7a8q`; panics if illegal.
pub fn play(game: &mut GameState, lan: &str) {
    let (from, to, promotion) = parse_coordinate_move(lan).expect("test move should parse");
    let mv = game
        .find_legal_move(from, to, promotion)
        .unwrap_or_else(|err| panic!("{lan} should be legal: {err}"));
    game.apply_move(&mv);
}
