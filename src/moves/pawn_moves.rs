//! Pawn movement geometry.
//!
//! White pawns move toward higher rows, Black pawns toward lower rows. The
//! capture tables double as the pawn's threat pattern.

use crate::game_state::chess_types::{Color, Coords};

pub const WHITE_PAWN_CAPTURES: [u64; 64] = generate_pawn_captures(1);
pub const BLACK_PAWN_CAPTURES: [u64; 64] = generate_pawn_captures(-1);

#[inline]
pub const fn pawn_captures(color: Color, from: Coords) -> u64 {
    match color {
        Color::White => WHITE_PAWN_CAPTURES[from.index()],
        Color::Black => BLACK_PAWN_CAPTURES[from.index()],
    }
}

/// One row forward and one column to either side.
#[inline]
pub const fn is_pawn_diagonal(color: Color, from: Coords, to: Coords) -> bool {
    pawn_captures(color, from) & to.bit() != 0
}

/// Rows advanced by a straight pawn move, when the move is one (1 or 2).
pub fn pawn_advance_distance(color: Color, from: Coords, to: Coords) -> Option<u8> {
    if from.col != to.col {
        return None;
    }
    let (d_row, _) = from.delta_to(to);
    let ahead = d_row * color.forward();
    if (1..=2).contains(&ahead) {
        Some(ahead as u8)
    } else {
        None
    }
}

const fn generate_pawn_captures(forward: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32 + forward;
        let col = (sq % 8) as i32;
        let mut targets = 0u64;

        if row >= 0 && row < 8 {
            if col > 0 {
                targets |= 1u64 << (row * 8 + col - 1) as usize;
            }
            if col < 7 {
                targets |= 1u64 << (row * 8 + col + 1) as usize;
            }
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}
