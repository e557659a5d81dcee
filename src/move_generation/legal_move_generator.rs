//! Full legal move generation pipeline.
//!
//! Runs pseudo-legal generation, then for each candidate makes the move, asks
//! whether the side that just moved left its own king attacked, and unmakes
//! it. One make/unmake per candidate; no pin or check-ray precomputation.

use tracing::trace;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::{push_move, MoveList};
use crate::move_generation::move_generator::{
    generate_pseudo_legal_moves, MoveGenResult, MoveGenerator,
};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, game_state: &mut GameState) -> MoveGenResult<MoveList> {
        generate_legal_moves(game_state)
    }
}

/// Legal moves for the side to move, in pseudo-legal generation order.
pub fn generate_legal_moves(game_state: &mut GameState) -> MoveGenResult<MoveList> {
    let mover = game_state.side_to_move;
    let pseudo = generate_pseudo_legal_moves(game_state)?;

    let mut legal = MoveList::new();
    for mv in pseudo {
        make_move(game_state, mv)?;
        let leaves_king_attacked = is_king_in_check(game_state, mover);
        unmake_move(game_state)?;

        if !leaves_king_attacked {
            push_move(&mut legal, mv)?;
        }
    }

    trace!(side = ?mover, count = legal.len(), "legal moves generated");
    Ok(legal)
}

/// Side to move is in check and has no legal reply.
pub fn is_checkmate(game_state: &mut GameState) -> MoveGenResult<bool> {
    Ok(is_king_in_check(game_state, game_state.side_to_move)
        && generate_legal_moves(game_state)?.is_empty())
}

/// Side to move is not in check and has no legal reply.
pub fn is_stalemate(game_state: &mut GameState) -> MoveGenResult<bool> {
    Ok(!is_king_in_check(game_state, game_state.side_to_move)
        && generate_legal_moves(game_state)?.is_empty())
}

/// The legal move matching `mv` (same squares and promotion), if any.
pub fn find_legal_move(game_state: &mut GameState, mv: ChessMove) -> MoveGenResult<Option<ChessMove>> {
    Ok(generate_legal_moves(game_state)?
        .into_iter()
        .find(|legal| *legal == mv))
}

#[cfg(test)]
mod tests {
    use rand::prelude::IndexedRandom;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::chess_errors::ChessErrors;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::move_generation::legal_move_shared::MAX_MOVES;

    // Parses fine but offers more queen moves than a move list holds.
    const QUEEN_FLOOD_FEN: &str = "Q2QQQQQ/Q1Q5/Q6Q/Q4Q2/1Q5Q/1Q4Q1/4Q3/QQQQ1QBQ w -";

    fn game(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("FEN should parse")
    }

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let mut g = GameState::new_game();
        let before = g.clone();
        let moves = generate_legal_moves(&mut g).expect("generation should succeed");
        assert_eq!(moves.len(), 20);
        assert_eq!(g, before);
    }

    #[test]
    fn lone_kings_in_corners_have_three_moves() {
        let mut g = game("8/8/8/8/8/8/8/K6k w - -");
        let moves = generate_legal_moves(&mut g).expect("generation should succeed");
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn pinned_knight_cannot_move() {
        let mut g = game("4r1k1/8/8/8/8/8/4N3/4K3 w - -");
        let moves = generate_legal_moves(&mut g).expect("generation should succeed");
        assert!(moves.iter().all(|mv| mv.from != 12));
        // King: d1, d2, f1, f2 (e2 is occupied by its own knight).
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn king_cannot_step_next_to_enemy_king() {
        let mut g = game("8/8/8/8/8/2k5/8/K7 w - -");
        let moves = generate_legal_moves(&mut g).expect("generation should succeed");
        let targets: Vec<Square> = moves.iter().map(|mv| mv.to).collect();
        assert_eq!(targets, vec![1, 8]);
    }

    #[test]
    fn checkmate_and_stalemate_are_distinguished() {
        let mut mate = game("R5k1/5ppp/8/8/8/8/8/6K1 b - -");
        assert!(is_checkmate(&mut mate).expect("query should succeed"));
        assert!(!is_stalemate(&mut mate).expect("query should succeed"));

        let mut stale = game("7k/5Q2/6K1/8/8/8/8/8 b - -");
        assert!(is_stalemate(&mut stale).expect("query should succeed"));
        assert!(!is_checkmate(&mut stale).expect("query should succeed"));
    }

    #[test]
    fn find_legal_move_rejects_illegal_castle() {
        let mut g = game("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq -");
        assert_eq!(
            find_legal_move(&mut g, ChessMove::new(4, 6)).expect("query should succeed"),
            None
        );
        assert_eq!(
            find_legal_move(&mut g, ChessMove::new(0, 3)).expect("query should succeed"),
            Some(ChessMove::new(0, 3))
        );
    }

    #[test]
    fn overfull_move_list_is_an_error_not_a_panic() {
        let mut g = game(QUEEN_FLOOD_FEN);
        let before = g.clone();
        assert_eq!(
            generate_pseudo_legal_moves(&g),
            Err(ChessErrors::MoveListFull(MAX_MOVES))
        );
        assert_eq!(
            generate_legal_moves(&mut g),
            Err(ChessErrors::MoveListFull(MAX_MOVES))
        );
        assert_eq!(
            LegalMoveGenerator.generate_moves(&mut g),
            Err(ChessErrors::MoveListFull(MAX_MOVES))
        );
        assert_eq!(g, before);
    }

    #[test]
    fn every_pseudo_move_that_keeps_king_safe_is_listed_once() {
        let mut g = game("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
        let legal = generate_legal_moves(&mut g).expect("generation should succeed");
        let pseudo = generate_pseudo_legal_moves(&g).expect("generation should fit");

        for mv in pseudo.iter().copied() {
            make_move(&mut g, mv).expect("pseudo move should apply");
            let safe = !is_king_in_check(&g, Color::Light);
            unmake_move(&mut g).expect("unmake should succeed");
            let listed = legal.iter().filter(|m| **m == mv).count();
            assert_eq!(listed, usize::from(safe), "move {mv:?}");
        }
        assert_eq!(legal.len(), 48);
    }

    #[test]
    fn random_playouts_are_sound_reversible_and_rights_monotone() {
        let mut rng = StdRng::seed_from_u64(0x5EED);

        for _ in 0..40 {
            let mut g = GameState::new_game();
            let root = g.clone();
            let mut snapshots = Vec::new();

            for _ in 0..60 {
                let moves = generate_legal_moves(&mut g).expect("generation should succeed");
                let Some(&mv) = moves.choose(&mut rng) else {
                    break;
                };

                let mover = g.side_to_move;
                let rights_before = g.castling_rights;
                let before = g.clone();

                make_move(&mut g, mv).expect("legal move should apply");
                assert!(!is_king_in_check(&g, mover), "{mv:?} left king attacked");
                assert_eq!(g.castling_rights & !rights_before, 0, "rights regained");

                unmake_move(&mut g).expect("unmake should succeed");
                assert_eq!(g, before);

                make_move(&mut g, mv).expect("legal move should apply");
                snapshots.push(before);
            }

            while let Some(expected) = snapshots.pop() {
                unmake_move(&mut g).expect("unmake should succeed");
                assert_eq!(g, expected);
            }
            assert_eq!(g, root);
        }
    }
}
