use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_step_moves, MoveList};
use crate::move_generation::move_generator::MoveGenResult;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(game_state: &GameState, from: Square, out: &mut MoveList) -> MoveGenResult<()> {
    push_step_moves(
        game_state,
        game_state.side_to_move,
        from,
        knight_targets(from),
        out,
    )
}
