use crate::game_state::chess_rules::{CastlingLane, CASTLING_LANES};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{push_move, push_step_moves, MoveList};
use crate::move_generation::move_generator::MoveGenResult;
use crate::moves::king_moves::king_targets;

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut MoveList) -> MoveGenResult<()> {
    let side = game_state.side_to_move;
    push_step_moves(game_state, side, from, king_targets(from), out)?;
    generate_castling_moves(game_state, from, out)
}

fn generate_castling_moves(
    game_state: &GameState,
    king_from: Square,
    out: &mut MoveList,
) -> MoveGenResult<()> {
    let side = game_state.side_to_move;
    let enemy = side.opposite();

    let mut lanes = CASTLING_LANES
        .iter()
        .filter(|lane| lane.color == side && lane.king_from == king_from)
        .filter(|lane| game_state.has_castling_right(lane.right))
        .filter(|lane| lane_is_clear(game_state, lane))
        .peekable();

    // Cannot castle out of check.
    if lanes.peek().is_none() || is_square_attacked(game_state, king_from, enemy) {
        return Ok(());
    }

    for lane in lanes {
        if !is_square_attacked(game_state, lane.king_transit, enemy)
            && !is_square_attacked(game_state, lane.king_to, enemy)
        {
            push_move(out, ChessMove::new(lane.king_from, lane.king_to))?;
        }
    }
    Ok(())
}

fn lane_is_clear(game_state: &GameState, lane: &CastlingLane) -> bool {
    let rook_home = matches!(
        game_state.piece_on(lane.rook_from),
        Some(piece) if piece.is(lane.color, PieceKind::Rook)
    );
    rook_home && lane.between.iter().all(|&sq| game_state.piece_on(sq).is_none())
}
