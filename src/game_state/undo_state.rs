use crate::game_state::chess_types::*;

/// Single undo record for `make_move` / `unmake_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,
    pub moved_piece: Piece,
    pub captured_piece: Occupant,
    /// `(rook_from, rook_to)` when make relocated a castling rook.
    pub rook_relocation: Option<(Square, Square)>,

    pub prev_side_to_move: Color,
    pub prev_castling_rights: CastlingRights,
}

impl UndoState {
    #[inline]
    pub fn was_promotion(&self) -> bool {
        self.mv.promotion.is_some()
    }
}
