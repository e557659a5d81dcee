//! Long algebraic move text (`e2e4`, `e7e8q`).

use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::find_legal_move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: ChessMove) -> Result<String, ChessErrors> {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(mv.from)?);
    out.push_str(&square_to_algebraic(mv.to)?);

    if let Some(promotion) = mv.promotion {
        out.push(promotion_to_char(promotion)?);
    }

    Ok(out)
}

/// Parse four coordinate characters plus an optional lowercase promotion
/// letter. Only the text is checked; legality is not.
pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<ChessMove, ChessErrors> {
    parse_move_text(long_algebraic)
        .inspect_err(|err| debug!(long_algebraic, %err, "rejected move text"))
}

fn parse_move_text(long_algebraic: &str) -> Result<ChessMove, ChessErrors> {
    let invalid = || ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned());

    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;

    match long_algebraic.as_bytes().get(4) {
        None => Ok(ChessMove::new(from, to)),
        Some(&byte) => Ok(ChessMove::with_promotion(
            from,
            to,
            char_to_promotion(char::from(byte))?,
        )),
    }
}

/// Parse move text and resolve it against the legal moves of `game_state`.
pub fn find_legal_move_from_text(
    game_state: &mut GameState,
    long_algebraic: &str,
) -> Result<Option<ChessMove>, ChessErrors> {
    let mv = long_algebraic_to_move(long_algebraic)?;
    find_legal_move(game_state, mv)
}

fn promotion_to_char(piece_kind: PieceKind) -> Result<char, ChessErrors> {
    match piece_kind {
        PieceKind::Knight => Ok('n'),
        PieceKind::Bishop => Ok('b'),
        PieceKind::Rook => Ok('r'),
        PieceKind::Queen => Ok('q'),
        PieceKind::Pawn => Err(ChessErrors::InvalidPromotionChar('p')),
        PieceKind::King => Err(ChessErrors::InvalidPromotionChar('k')),
    }
}

fn char_to_promotion(ch: char) -> Result<PieceKind, ChessErrors> {
    match ch {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(ChessErrors::InvalidPromotionChar(ch)),
    }
}
