//! Ray geometry for bishops, rooks and queens.
//!
//! A [`Ray`] walks outward from a square in one direction until the board
//! edge. Callers stop at the first occupied cell themselves, since generation
//! and attack detection treat that cell differently.

use crate::game_state::chess_types::{offset_square, Square};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

/// Squares along one direction, nearest first, excluding the origin.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    current: Square,
    direction: (i8, i8),
}

impl Iterator for Ray {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let next = offset_square(self.current, self.direction.0, self.direction.1)?;
        self.current = next;
        Some(next)
    }
}

#[inline]
pub fn ray(origin: Square, direction: (i8, i8)) -> Ray {
    Ray {
        current: origin,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_ray_from_a1_runs_to_the_edge() {
        let north: Vec<Square> = ray(0, (0, 1)).collect();
        assert_eq!(north, vec![8, 16, 24, 32, 40, 48, 56]);
        assert_eq!(ray(0, (-1, 0)).count(), 0);
    }

    #[test]
    fn bishop_ray_does_not_wrap_files() {
        let squares: Vec<Square> = ray(7, (1, 1)).collect();
        assert!(squares.is_empty());
        let squares: Vec<Square> = ray(7, (-1, 1)).collect();
        assert_eq!(squares, vec![14, 21, 28, 35, 42, 49, 56]);
    }
}
