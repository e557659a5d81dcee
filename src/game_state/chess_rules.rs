//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals: the standard starting
//! position FEN and the fixed squares involved in each of the four castles.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Fixed geometry of one castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    pub color: Color,
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook that must be empty.
    pub between: &'static [Square],
    /// Square the king crosses on its way to `king_to`.
    pub king_transit: Square,
}

pub const CASTLING_LANES: [CastlingLane; 4] = [
    CastlingLane {
        color: Color::Light,
        right: CASTLE_LIGHT_KINGSIDE,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        rook_to: 5,
        between: &[5, 6],
        king_transit: 5,
    },
    CastlingLane {
        color: Color::Light,
        right: CASTLE_LIGHT_QUEENSIDE,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        rook_to: 3,
        between: &[1, 2, 3],
        king_transit: 3,
    },
    CastlingLane {
        color: Color::Dark,
        right: CASTLE_DARK_KINGSIDE,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        rook_to: 61,
        between: &[61, 62],
        king_transit: 61,
    },
    CastlingLane {
        color: Color::Dark,
        right: CASTLE_DARK_QUEENSIDE,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        rook_to: 59,
        between: &[57, 58, 59],
        king_transit: 59,
    },
];

/// Both castling bits belonging to `color`.
#[inline]
pub const fn castling_rights_of(color: Color) -> CastlingRights {
    match color {
        Color::Light => CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE,
        Color::Dark => CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE,
    }
}

/// The castle a king of `color` performs by moving `king_from -> king_to`.
pub fn castling_lane_for_king_move(
    color: Color,
    king_from: Square,
    king_to: Square,
) -> Option<&'static CastlingLane> {
    CASTLING_LANES
        .iter()
        .find(|lane| lane.color == color && lane.king_from == king_from && lane.king_to == king_to)
}

/// The castling right tied to a rook standing on its original corner.
pub fn castling_right_for_rook_square(square: Square) -> Option<CastlingRights> {
    CASTLING_LANES
        .iter()
        .find(|lane| lane.rook_from == square)
        .map(|lane| lane.right)
}
