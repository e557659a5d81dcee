//! Terminal-oriented ASCII board renderer.
//!
//! Creates a human-readable board view for debugging, tests and diagnostics:
//! ranks 8 down to 1, eight space-separated symbols per line (`.` for empty,
//! uppercase light, lowercase dark), then the side to move.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board and side to move.
///
/// Assumes square indexing where `0 == a1`, `7 == h1`, and `63 == h8`.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        for file in 0..8u8 {
            out.push(render_occupant(game_state.piece_on(square_at(file, rank))));
            if file < 7 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str(match game_state.side_to_move {
        Color::Light => "side: w",
        Color::Dark => "side: b",
    });

    out
}

/// One symbol per occupant; total over all thirteen values.
pub fn render_occupant(occupant: Occupant) -> char {
    let Some(piece) = occupant else {
        return '.';
    };

    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::Light => base.to_ascii_uppercase(),
        Color::Dark => base,
    }
}
