use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{is_enemy_on, push_move, MoveList};
use crate::move_generation::move_generator::MoveGenResult;
use crate::moves::pawn_moves::{
    pawn_capture_targets, pawn_promotion_rank, pawn_push_delta, pawn_start_rank, PROMOTION_KINDS,
};

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    out: &mut MoveList,
) -> MoveGenResult<()> {
    let side = game_state.side_to_move;
    let dr = pawn_push_delta(side);

    if let Some(one_step) = offset_square(from, 0, dr) {
        if game_state.piece_on(one_step).is_none() {
            push_pawn_move(side, from, one_step, out)?;

            if rank_of(from) == pawn_start_rank(side) {
                if let Some(two_step) = offset_square(from, 0, 2 * dr) {
                    if game_state.piece_on(two_step).is_none() {
                        push_move(out, ChessMove::new(from, two_step))?;
                    }
                }
            }
        }
    }

    for to in pawn_capture_targets(side, from) {
        if is_enemy_on(game_state, side, to) {
            push_pawn_move(side, from, to, out)?;
        }
    }
    Ok(())
}

/// A pawn landing on the far rank always expands into the four promotions.
fn push_pawn_move(side: Color, from: Square, to: Square, out: &mut MoveList) -> MoveGenResult<()> {
    if rank_of(to) == pawn_promotion_rank(side) {
        for promo in PROMOTION_KINDS {
            push_move(out, ChessMove::with_promotion(from, to, promo))?;
        }
        Ok(())
    } else {
        push_move(out, ChessMove::new(from, to))
    }
}
