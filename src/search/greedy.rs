//! One-ply greedy search.
//!
//! Each candidate is judged by the opponent's best immediate reply: the mover
//! picks the move whose worst case after one reply is highest. Candidates are
//! shuffled first so ties fall to a seed-dependent choice.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::game_state::GameState;
use crate::search::board_scoring::BoardScorer;
use crate::search::minimax::{terminal_score, SearchResult};

/// Picks the move that minimises the opponent's best reply.
///
/// `best_score` in the result is White-relative; `best_move` is `None` only
/// when the root has no legal move.
pub fn greedy_search<S: BoardScorer, R: Rng + ?Sized>(
    game_state: &mut GameState,
    scorer: &S,
    rng: &mut R,
) -> SearchResult {
    let mut result = SearchResult::default();
    result.nodes += 1;

    let mut moves = game_state.legal_moves();
    if moves.is_empty() {
        result.best_score = terminal_score(game_state, 0).unwrap_or_default();
        return result;
    }
    moves.shuffle(rng);

    let sign = game_state.side_to_move().sign();
    let mut best_relative = i32::MIN;

    for mv in moves {
        game_state.apply_move(&mv);
        let worst_case = sign * opponent_best_reply(game_state, scorer, &mut result.nodes);
        game_state.undo_move();

        if worst_case > best_relative {
            best_relative = worst_case;
            result.best_move = Some(mv);
        }
    }

    result.best_score = sign * best_relative;
    result
}

/// White-relative score after the side to move plays its best reply.
fn opponent_best_reply<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    let replies = game_state.legal_moves();
    if let Some(score) = terminal_score(game_state, 1) {
        return score;
    }

    let sign = game_state.side_to_move().sign();
    let mut best_relative = i32::MIN;
    for reply in replies {
        *nodes += 1;
        game_state.apply_move(&reply);
        let _ = game_state.legal_moves();
        let score = terminal_score(game_state, 2).unwrap_or_else(|| scorer.score(game_state));
        game_state.undo_move();
        best_relative = best_relative.max(sign * score);
    }
    sign * best_relative
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::game_state::chess_types::{CastlingRights, Color};
    use crate::search::board_scoring::{PositionalMaterialScorer, MATE_SCORE};
    use crate::test_support::{diagram, sq};

    fn greedy(game: &mut GameState, seed: u64) -> SearchResult {
        let mut rng = StdRng::seed_from_u64(seed);
        greedy_search(game, &PositionalMaterialScorer, &mut rng)
    }

    #[test]
    fn takes_a_hanging_queen() {
        let rows = [
            ".......k", "........", "........", "q.......", "........", "........", "........",
            "R......K",
        ];
        let mut game = diagram(rows, Color::White, CastlingRights::NONE);
        for seed in 0..4 {
            let mv = greedy(&mut game, seed).best_move.expect("a move should be found");
            assert_eq!((mv.from(), mv.to()), (sq("a1"), sq("a5")));
        }
    }

    #[test]
    fn plays_mate_in_one() {
        let rows = [
            "......k.", ".....ppp", "........", "........", "........", "........", "........",
            "R.....K.",
        ];
        let mut game = diagram(rows, Color::White, CastlingRights::NONE);
        let result = greedy(&mut game, 5);
        let mv = result.best_move.expect("a move should be found");
        assert_eq!((mv.from(), mv.to()), (sq("a1"), sq("a8")));
        assert_eq!(result.best_score, MATE_SCORE - 1);
    }

    #[test]
    fn black_queen_removes_the_attacking_rook() {
        let rows = [
            "......k.", "........", "........", "q......R", "........", "........", "........",
            ".......K",
        ];
        let mut game = diagram(rows, Color::Black, CastlingRights::NONE);
        let result = greedy(&mut game, 9);
        let mv = result.best_move.expect("a move should be found");
        assert_eq!((mv.from(), mv.to()), (sq("a5"), sq("h5")));
        assert!(result.best_score < -90);
    }

    #[test]
    fn same_seed_gives_same_choice() {
        let mut game = GameState::new_game();
        let first = greedy(&mut game, 42);
        let second = greedy(&mut game, 42);
        assert_eq!(first, second);
        assert!(first.best_move.is_some());
    }

    #[test]
    fn greedy_leaves_position_unchanged() {
        let mut game = GameState::new_game();
        let before = game.snapshot();
        assert!(greedy(&mut game, 1).best_move.is_some());
        assert_eq!(game.snapshot(), before);
    }
}
