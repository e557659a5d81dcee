//! Attack detection and check queries.
//!
//! `is_square_attacked` re-derives attacks outward from the target square for
//! each piece pattern. It never calls into move generation, so castling safety
//! tests and check tests can use it while generation is in progress.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attacker_origins;
use crate::moves::sliding_moves::{ray, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

/// Linear scan for the king of `color`. `None` marks a degenerate position.
#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state
        .board
        .iter()
        .position(|cell| matches!(cell, Some(piece) if piece.is(color, PieceKind::King)))
        .map(|idx| idx as Square)
}

/// True when the king of `color` is attacked; false when it has no king.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Square, kind: PieceKind| {
        matches!(game_state.piece_on(sq), Some(piece) if piece.is(attacker_color, kind))
    };

    if pawn_attacker_origins(attacker_color, square).any(|sq| holds(sq, PieceKind::Pawn)) {
        return true;
    }

    if knight_targets(square).any(|sq| holds(sq, PieceKind::Knight)) {
        return true;
    }

    if king_targets(square).any(|sq| holds(sq, PieceKind::King)) {
        return true;
    }

    if first_hit_matches(game_state, square, &BISHOP_DIRECTIONS, attacker_color, PieceKind::Bishop) {
        return true;
    }

    first_hit_matches(game_state, square, &ROOK_DIRECTIONS, attacker_color, PieceKind::Rook)
}

/// Whether the first occupant along any of `directions` is an `attacker_color`
/// slider of `kind` or a queen. Any other first occupant blocks the ray.
fn first_hit_matches(
    game_state: &GameState,
    square: Square,
    directions: &[(i8, i8)],
    attacker_color: Color,
    kind: PieceKind,
) -> bool {
    directions.iter().any(|&direction| {
        ray(square, direction)
            .find_map(|sq| game_state.piece_on(sq))
            .is_some_and(|piece| {
                piece.color == attacker_color
                    && (piece.kind == kind || piece.kind == PieceKind::Queen)
            })
    })
}
