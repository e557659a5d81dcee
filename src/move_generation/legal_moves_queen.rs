use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_slider_moves, MoveList};
use crate::move_generation::move_generator::MoveGenResult;
use crate::moves::sliding_moves::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(game_state: &GameState, from: Square, out: &mut MoveList) -> MoveGenResult<()> {
    push_slider_moves(
        game_state,
        game_state.side_to_move,
        from,
        &QUEEN_DIRECTIONS,
        out,
    )
}
