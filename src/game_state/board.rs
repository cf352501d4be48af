//! Fixed 8×8 piece grid.
//!
//! `Board` is a plain `Copy` value. Hypothetical positions are built by
//! copying it, so a rejected move can never touch the live game.

use crate::game_state::chess_rules::STARTING_LAYOUT;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Piece; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[Piece::Empty; 8]; 8],
        }
    }

    #[inline]
    pub const fn starting_position() -> Self {
        Self {
            squares: STARTING_LAYOUT,
        }
    }

    /// Piece on a square. Coordinates must already be on the board.
    #[inline]
    pub fn get(&self, at: Coords) -> Piece {
        self.squares[at.row as usize][at.col as usize]
    }

    #[inline]
    pub fn set(&mut self, at: Coords, piece: Piece) {
        self.squares[at.row as usize][at.col as usize] = piece;
    }

    #[inline]
    pub fn is_empty_at(&self, at: Coords) -> bool {
        self.get(at).is_empty()
    }

    /// Read-only row-major view, row 0 first.
    #[inline]
    pub fn rows(&self) -> &[[Piece; 8]; 8] {
        &self.squares
    }

    /// Every occupied square with its piece, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Coords, Piece)> + '_ {
        Coords::all()
            .map(move |at| (at, self.get(at)))
            .filter(|(_, piece)| !piece.is_empty())
    }

    /// Location of the first matching piece in row-major order.
    pub fn find(&self, piece: Piece) -> Option<Coords> {
        self.occupied()
            .find(|(_, candidate)| *candidate == piece)
            .map(|(at, _)| at)
    }
}
