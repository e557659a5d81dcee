use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Number of move sequences of length `depth` from `game_state`.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> MoveGenResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = generator.generate_moves(game_state)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        make_move(game_state, mv)?;
        let child = perft(generator, game_state, depth - 1);
        unmake_move(game_state)?;
        nodes += child?;
    }
    Ok(nodes)
}

/// Legal-move perft from the given position.
#[inline]
pub fn perft_legal(game_state: &mut GameState, depth: u8) -> MoveGenResult<u64> {
    perft(&LegalMoveGenerator, game_state, depth)
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> MoveGenResult<Vec<(ChessMove, u64)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let moves = LegalMoveGenerator.generate_moves(game_state)?;
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        make_move(game_state, mv)?;
        let child = perft_legal(game_state, depth - 1);
        unmake_move(game_state)?;
        out.push((mv, child?));
    }
    Ok(out)
}

/// Perft with leaf classification (captures, castles, promotions, checks,
/// checkmates), counted on the move that reaches each leaf.
pub fn perft_detailed(game_state: &mut GameState, depth: u8) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    let moves = LegalMoveGenerator.generate_moves(game_state)?;
    for mv in moves {
        let is_capture = game_state.piece_on(mv.to).is_some();
        let is_castle = matches!(game_state.piece_on(mv.from), Some(piece) if piece.kind == PieceKind::King)
            && mv.from.abs_diff(mv.to) == 2;

        make_move(game_state, mv)?;
        let result = if depth == 1 {
            leaf_counts(game_state, mv, is_capture, is_castle)
        } else {
            perft_detailed(game_state, depth - 1)
        };
        unmake_move(game_state)?;
        total.merge(result?);
    }

    Ok(total)
}

fn leaf_counts(
    game_state: &mut GameState,
    mv: ChessMove,
    is_capture: bool,
    is_castle: bool,
) -> MoveGenResult<PerftCounts> {
    let gives_check = is_king_in_check(game_state, game_state.side_to_move);
    let is_checkmate =
        gives_check && LegalMoveGenerator.generate_moves(game_state)?.is_empty();

    Ok(PerftCounts {
        nodes: 1,
        captures: u64::from(is_capture),
        castles: u64::from(is_castle),
        promotions: u64::from(mv.promotion.is_some()),
        checks: u64::from(gives_check),
        checkmates: u64::from(is_checkmate),
    })
}
