//! Errors used throughout the chess core.
//!
//! `ChessErrors` is the single error type returned by notation parsing and by
//! the make/unmake mechanism. Every variant is recoverable: a caller holding a
//! bad position can always start over from a freshly parsed one.

use thiserror::Error;

use crate::game_state::chess_types::Square;

/// Unified error type for the chess core.
///
/// Parsing variants carry the offending token so callers can report it.
/// Make/unmake variants are returned with the position left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// FEN text had malformed structure (missing fields, wrong rank count,
    /// a rank not summing to eight files, too many trailing fields).
    #[error("invalid FEN string: {0}")]
    InvalidFenString(String),

    /// Unrecognized character in the FEN piece placement.
    #[error("invalid FEN token '{0}'")]
    InvalidFenToken(char),

    /// The side-to-move field was neither `w` nor `b`.
    #[error("invalid side-to-move field '{0}'")]
    InvalidSideToMove(String),

    /// The castling field contained a letter outside `KQkq`.
    #[error("invalid castling rights character '{0}'")]
    InvalidCastlingChar(char),

    /// Square or move text that is not valid long algebraic notation.
    #[error("invalid algebraic string '{0}'")]
    InvalidAlgebraicString(String),

    /// Fifth character of a move was not one of `q r b n`.
    #[error("invalid promotion character '{0}'")]
    InvalidPromotionChar(char),

    /// A square index outside `0..=63`.
    #[error("square index {0} is off the board")]
    SquareOutOfBounds(u8),

    /// Tried to move from a square holding no piece.
    #[error("no piece on origin square {0}")]
    EmptyOriginSquare(Square),

    /// Tried to undo with no applied move on record.
    #[error("no move to undo")]
    EmptyHistory,

    /// Generation produced more moves than a move list holds. Only reachable
    /// from hand-built positions, never from a real game.
    #[error("move list is full ({0} moves)")]
    MoveListFull(usize),
}
