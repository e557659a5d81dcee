//! Knight jump geometry.
//!
//! The eight fixed L-shaped offsets, filtered to board bounds. Shared by
//! pseudo-legal generation and attack detection (the pattern is symmetric, so
//! the squares a knight reaches are the squares a knight attacks from).

use crate::game_state::chess_types::{offset_square, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(move |&(df, dr)| offset_square(square, df, dr))
}
