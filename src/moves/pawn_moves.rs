//! Pawn geometry: push direction, home and promotion ranks, capture offsets.

use crate::game_state::chess_types::{offset_square, Color, PieceKind, Square};

/// Promotion choices in generation order.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[inline]
pub const fn pawn_push_delta(color: Color) -> i8 {
    match color {
        Color::Light => 1,
        Color::Dark => -1,
    }
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

#[inline]
pub const fn pawn_promotion_rank(color: Color) -> u8 {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}

/// Diagonal squares a pawn of `color` on `square` captures onto.
#[inline]
pub fn pawn_capture_targets(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let dr = pawn_push_delta(color);
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |df| offset_square(square, df, dr))
}

/// Squares from which a pawn of `color` would capture onto `target`, i.e. the
/// two diagonals "behind" `target` from that side's point of view.
#[inline]
pub fn pawn_attacker_origins(color: Color, target: Square) -> impl Iterator<Item = Square> {
    let dr = -pawn_push_delta(color);
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |df| offset_square(target, df, dr))
}
