//! Core mailbox board state representation.
//!
//! `GameState` is the central model for the engine. It stores one occupant per
//! square, the side to move, the castling-rights bitmask and the undo stack
//! used by make/unmake style workflows. Every position is an independent owned
//! value; nothing here is process-wide.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Mutable position with a reversible edit history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // --- Mailbox representation, indexed by `rank * 8 + file` ---
    pub board: [Occupant; BOARD_SQUARES],

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,

    // --- Make/unmake stack ---
    pub undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; BOARD_SQUARES],
            side_to_move: Color::Light,
            castling_rights: 0,
            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board, light to move, no castling rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// The standard starting position with all four castling rights.
    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        for (file, kind) in BACK_RANK.iter().copied().enumerate() {
            let file = file as u8;
            game_state.board[square_at(file, 0) as usize] = Some(Piece::new(Color::Light, kind));
            game_state.board[square_at(file, 1) as usize] =
                Some(Piece::new(Color::Light, PieceKind::Pawn));
            game_state.board[square_at(file, 6) as usize] =
                Some(Piece::new(Color::Dark, PieceKind::Pawn));
            game_state.board[square_at(file, 7) as usize] = Some(Piece::new(Color::Dark, kind));
        }
        game_state.castling_rights = CASTLE_ALL;
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Occupant of `square`; squares off the board read as empty.
    #[inline]
    pub fn piece_on(&self, square: Square) -> Occupant {
        self.board.get(square as usize).copied().flatten()
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        (self.castling_rights & right) != 0
    }

    /// Number of applied moves not yet undone.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }

    #[inline]
    pub fn make_move(&mut self, mv: ChessMove) -> Result<(), ChessErrors> {
        make_move(self, mv)
    }

    #[inline]
    pub fn unmake_move(&mut self) -> Result<(), ChessErrors> {
        unmake_move(self)
    }
}
