//! Helpers shared by the per-piece pseudo-legal generators.

use arrayvec::ArrayVec;

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::MoveGenResult;
use crate::moves::sliding_moves::ray;

/// Capacity of a [`MoveList`]; comfortably above the 218-move maximum of any
/// reachable chess position.
pub const MAX_MOVES: usize = 256;

/// Bounded, ordered move container. Order is generation order.
pub type MoveList = ArrayVec<ChessMove, MAX_MOVES>;

/// Append `mv`, reporting a full list as an error instead of panicking.
#[inline]
pub fn push_move(out: &mut MoveList, mv: ChessMove) -> MoveGenResult<()> {
    out.try_push(mv)
        .map_err(|_| ChessErrors::MoveListFull(MAX_MOVES))
}

/// True when `square` holds a piece of `color`'s opponent.
#[inline]
pub fn is_enemy_on(game_state: &GameState, color: Color, square: Square) -> bool {
    matches!(game_state.piece_on(square), Some(piece) if piece.color != color)
}

/// True when a piece of `color` may land on `square` (empty or enemy).
#[inline]
pub fn can_land_on(game_state: &GameState, color: Color, square: Square) -> bool {
    match game_state.piece_on(square) {
        None => true,
        Some(piece) => piece.color != color,
    }
}

/// Emit a step move to every target `color` may land on.
pub fn push_step_moves(
    game_state: &GameState,
    color: Color,
    from: Square,
    targets: impl Iterator<Item = Square>,
    out: &mut MoveList,
) -> MoveGenResult<()> {
    for to in targets {
        if can_land_on(game_state, color, to) {
            push_move(out, ChessMove::new(from, to))?;
        }
    }
    Ok(())
}

/// Walk each direction from `from`, emitting quiet moves until the first
/// occupied cell, which is emitted only if it holds an enemy.
pub fn push_slider_moves(
    game_state: &GameState,
    color: Color,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut MoveList,
) -> MoveGenResult<()> {
    for &direction in directions {
        for to in ray(from, direction) {
            match game_state.piece_on(to) {
                None => push_move(out, ChessMove::new(from, to))?,
                Some(piece) => {
                    if piece.color != color {
                        push_move(out, ChessMove::new(from, to))?;
                    }
                    break;
                }
            }
        }
    }
    Ok(())
}
