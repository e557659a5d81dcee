//! FEN-to-GameState parser.
//!
//! Reads the piece placement, side-to-move and castling fields. En-passant,
//! halfmove and fullmove fields are accepted when present but not stored: the
//! core does not model them.

use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};

/// Fields after castling rights that are tolerated and ignored.
const MAX_IGNORED_FIELDS: usize = 3;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    parse_fields(fen).inspect_err(|err| debug!(fen, %err, "rejected FEN"))
}

fn parse_fields(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing side-to-move".to_owned()))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing castling rights".to_owned()))?;

    if parts.count() > MAX_IGNORED_FIELDS {
        return Err(ChessErrors::InvalidFenString("extra trailing fields".to_owned()));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenString(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenToken(ch));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(ChessErrors::InvalidFenString(format!(
                        "rank {} has more than 8 files",
                        board_rank + 1
                    )));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFenToken(ch))?;

            if file >= 8 {
                return Err(ChessErrors::InvalidFenString(format!(
                    "rank {} has more than 8 files",
                    board_rank + 1
                )));
            }

            game_state.board[square_at(file, board_rank) as usize] = Some(piece);
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFenString(format!(
                "rank {} does not sum to 8 files",
                board_rank + 1
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => return Err(ChessErrors::InvalidCastlingChar(ch)),
        }
    }

    Ok(rights)
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move, Color::Light);
        assert_eq!(game_state.castling_rights, CASTLE_ALL);
        assert_eq!(game_state.piece_on(0), Some(Piece::new(Color::Light, PieceKind::Rook)));
        assert_eq!(game_state.piece_on(60), Some(Piece::new(Color::Dark, PieceKind::King)));
        assert_eq!(game_state.board.iter().filter(|cell| cell.is_some()).count(), 32);
        assert_eq!(game_state.history_len(), 0);
    }

    #[test]
    fn three_field_fen_is_enough() {
        let game_state = parse_fen("8/8/8/8/8/8/8/K6k b -").expect("three fields should parse");
        assert_eq!(game_state.side_to_move, Color::Dark);
        assert_eq!(game_state.castling_rights, 0);
        assert_eq!(game_state.piece_on(7), Some(Piece::new(Color::Dark, PieceKind::King)));
    }

    #[test]
    fn castling_subset_in_any_order() {
        let game_state = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w qK - 0 1").expect("FEN should parse");
        assert_eq!(game_state.castling_rights, CASTLE_LIGHT_KINGSIDE | CASTLE_DARK_QUEENSIDE);
    }

    #[test]
    fn rejects_malformed_fen() {
        let bad_rank = parse_fen("8/8/8/8/8/8/8/K5k w - -");
        assert!(matches!(bad_rank, Err(ChessErrors::InvalidFenString(_))));

        let long_rank = parse_fen("8/8/8/8/8/8/8/K7k w - -");
        assert!(matches!(long_rank, Err(ChessErrors::InvalidFenString(_))));

        let seven_ranks = parse_fen("8/8/8/8/8/8/K6k w - -");
        assert!(matches!(seven_ranks, Err(ChessErrors::InvalidFenString(_))));

        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6x w - -"),
            Err(ChessErrors::InvalidFenToken('x'))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K0k6 w - -"),
            Err(ChessErrors::InvalidFenToken('0'))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6k x - -"),
            Err(ChessErrors::InvalidSideToMove("x".to_owned()))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6k w KX -"),
            Err(ChessErrors::InvalidCastlingChar('X'))
        );
        assert!(parse_fen("8/8/8/8/8/8/8/K6k w").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/K6k w - - 0 1 extra").is_err());
        assert!(parse_fen("").is_err());
    }
}
