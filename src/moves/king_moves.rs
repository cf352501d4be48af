//! King movement geometry.
//!
//! A king steps to any neighbouring square. Castling is encoded as the king
//! moving onto its own rook's corner from its starting square; that encoding
//! is recognized here and turned into an explicit `CastleSide`.

use crate::game_state::chess_rules::KING_START_COL;
use crate::game_state::chess_types::{CastleSide, Color, Coords};
use crate::moves::knight_moves::set_if_valid;

pub const KING_TARGETS: [u64; 64] = generate_king_targets();

#[inline]
pub const fn king_targets(from: Coords) -> u64 {
    KING_TARGETS[from.index()]
}

/// Chebyshev distance exactly 1.
#[inline]
pub const fn is_king_step(from: Coords, to: Coords) -> bool {
    king_targets(from) & to.bit() != 0
}

/// Recognize the king-onto-rook castle encoding for `color`.
pub fn castle_side_for(color: Color, from: Coords, to: Coords) -> Option<CastleSide> {
    let back_row = color.back_row();
    if from != Coords::new(back_row, KING_START_COL) || to.row != back_row {
        return None;
    }
    CastleSide::from_rook_col(to.col)
}

const fn generate_king_targets() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut targets = 0u64;

        targets |= set_if_valid(row - 1, col - 1);
        targets |= set_if_valid(row - 1, col);
        targets |= set_if_valid(row - 1, col + 1);
        targets |= set_if_valid(row, col - 1);
        targets |= set_if_valid(row, col + 1);
        targets |= set_if_valid(row + 1, col - 1);
        targets |= set_if_valid(row + 1, col);
        targets |= set_if_valid(row + 1, col + 1);

        table[sq] = targets;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{castle_side_for, is_king_step, KING_TARGETS};
    use crate::game_state::chess_types::{CastleSide, Color, Coords};

    #[test]
    fn king_targets_from_a1_has_three_squares() {
        assert_eq!(KING_TARGETS[Coords::new(0, 0).index()].count_ones(), 3);
        assert!(is_king_step(Coords::new(0, 0), Coords::new(1, 1)));
        assert!(!is_king_step(Coords::new(0, 0), Coords::new(2, 0)));
    }

    #[test]
    fn castle_encoding_is_per_color_back_row() {
        let e1 = Coords::new(0, 4);
        let e8 = Coords::new(7, 4);
        assert_eq!(
            castle_side_for(Color::White, e1, Coords::new(0, 7)),
            Some(CastleSide::Kingside)
        );
        assert_eq!(
            castle_side_for(Color::Black, e8, Coords::new(7, 0)),
            Some(CastleSide::Queenside)
        );
        assert_eq!(castle_side_for(Color::White, e8, Coords::new(7, 7)), None);
        assert_eq!(castle_side_for(Color::Black, e1, Coords::new(0, 0)), None);
        assert_eq!(castle_side_for(Color::White, e1, Coords::new(0, 6)), None);
    }
}
