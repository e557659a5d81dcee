//! Reversible make/unmake.
//!
//! `make_move` edits the position in place and pushes an [`UndoState`];
//! `unmake_move` pops the newest record and restores the exact prior cells,
//! side to move and castling rights. Calls must nest LIFO.

use tracing::{debug, trace};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{
    castling_lane_for_king_move, castling_right_for_rook_square, castling_rights_of,
};
use crate::game_state::{chess_types::*, game_state::GameState, undo_state::UndoState};

pub fn make_move(game_state: &mut GameState, mv: ChessMove) -> Result<(), ChessErrors> {
    for square in [mv.from, mv.to] {
        if square as usize >= BOARD_SQUARES {
            debug!(?mv, "rejected move with off-board square");
            return Err(ChessErrors::SquareOutOfBounds(square));
        }
    }

    let Some(moved_piece) = game_state.piece_on(mv.from) else {
        debug!(?mv, "rejected move from empty square");
        return Err(ChessErrors::EmptyOriginSquare(mv.from));
    };

    let captured_piece = game_state.piece_on(mv.to);

    // Castling rook move, only when the lane's own rook is home and its
    // landing cell is free.
    let rook_relocation = castling_rook_relocation(game_state, moved_piece, mv);
    if let Some((rook_from, rook_to)) = rook_relocation {
        trace!(rook_from, rook_to, "castling rook relocated");
        game_state.board[rook_to as usize] = game_state.board[rook_from as usize].take();
    }

    let undo = UndoState {
        mv,
        moved_piece,
        captured_piece,
        rook_relocation,
        prev_side_to_move: game_state.side_to_move,
        prev_castling_rights: game_state.castling_rights,
    };

    game_state.board[mv.from as usize] = None;
    game_state.board[mv.to as usize] = Some(match mv.promotion {
        Some(kind) => Piece::new(moved_piece.color, kind),
        None => moved_piece,
    });

    game_state.side_to_move = game_state.side_to_move.opposite();

    update_castling_rights(game_state, moved_piece, mv.from, mv.to);

    game_state.undo_stack.push(undo);
    Ok(())
}

pub fn unmake_move(game_state: &mut GameState) -> Result<(), ChessErrors> {
    let Some(undo) = game_state.undo_stack.pop() else {
        debug!("rejected unmake with empty history");
        return Err(ChessErrors::EmptyHistory);
    };
    let mv = undo.mv;

    game_state.side_to_move = undo.prev_side_to_move;
    game_state.castling_rights = undo.prev_castling_rights;

    if let Some((rook_from, rook_to)) = undo.rook_relocation {
        game_state.board[rook_from as usize] = game_state.board[rook_to as usize].take();
    }

    game_state.board[mv.to as usize] = undo.captured_piece;
    // `moved_piece` is the occupant before the move, so a promoted piece never
    // returns to the origin square; a promotion always restores the pawn.
    // The pawn takes the recorded mover's color, not the restored side to
    // move, so undo stays exact for a move applied out of turn.
    game_state.board[mv.from as usize] = Some(if undo.was_promotion() {
        Piece::new(undo.moved_piece.color, PieceKind::Pawn)
    } else {
        undo.moved_piece
    });

    Ok(())
}

fn castling_rook_relocation(
    game_state: &GameState,
    moved_piece: Piece,
    mv: ChessMove,
) -> Option<(Square, Square)> {
    if moved_piece.kind != PieceKind::King {
        return None;
    }
    let lane = castling_lane_for_king_move(moved_piece.color, mv.from, mv.to)?;
    let rook_home = matches!(
        game_state.piece_on(lane.rook_from),
        Some(piece) if piece.is(moved_piece.color, PieceKind::Rook)
    );
    let landing_free = game_state.piece_on(lane.rook_to).is_none();
    (rook_home && landing_free).then_some((lane.rook_from, lane.rook_to))
}

fn update_castling_rights(game_state: &mut GameState, moved_piece: Piece, from: Square, to: Square) {
    if moved_piece.kind == PieceKind::King {
        game_state.castling_rights &= !castling_rights_of(moved_piece.color);
    }

    if moved_piece.kind == PieceKind::Rook {
        if let Some(right) = castling_right_for_rook_square(from) {
            game_state.castling_rights &= !right;
        }
    }

    // Capturing rook on original squares also removes rights.
    if let Some(right) = castling_right_for_rook_square(to) {
        game_state.castling_rights &= !right;
    }
}
