//! Pseudo-legal move generation and the generator seam.
//!
//! `generate_pseudo_legal_moves` makes one pass over the 64 cells and emits
//! geometrically valid moves for every piece of the side to move. It never
//! asks whether the mover's own king is left attacked.

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::MoveList;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

pub type MoveGenResult<T> = Result<T, ChessErrors>;

/// Produces the moves available from a position.
///
/// Takes the position mutably so implementations may make/unmake while
/// filtering; the position is restored before returning.
pub trait MoveGenerator {
    fn generate_moves(&self, game_state: &mut GameState) -> MoveGenResult<MoveList>;
}

/// Geometry-only generator; moves may leave the mover's king attacked.
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, game_state: &mut GameState) -> MoveGenResult<MoveList> {
        generate_pseudo_legal_moves(game_state)
    }
}

/// Fails with [`ChessErrors::MoveListFull`] only for hand-built positions
/// with more candidate moves than a [`MoveList`] holds.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> MoveGenResult<MoveList> {
    let mut out = MoveList::new();
    let side = game_state.side_to_move;

    for (idx, cell) in game_state.board.iter().enumerate() {
        let Some(piece) = cell else {
            continue;
        };
        if piece.color != side {
            continue;
        }

        let from = idx as Square;
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, &mut out)?,
            PieceKind::Knight => generate_knight_moves(game_state, from, &mut out)?,
            PieceKind::Bishop => generate_bishop_moves(game_state, from, &mut out)?,
            PieceKind::Rook => generate_rook_moves(game_state, from, &mut out)?,
            PieceKind::Queen => generate_queen_moves(game_state, from, &mut out)?,
            PieceKind::King => generate_king_moves(game_state, from, &mut out)?,
        }
    }

    Ok(out)
}
