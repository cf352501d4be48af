//! Canonical chess-rule constants.
//!
//! Static literals for the standard starting position and the fixed squares
//! castling is defined against.

use crate::game_state::chess_types::Piece;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Column both kings start on. A castle must originate here.
pub const KING_START_COL: u8 = 4;

/// Standard starting layout, row 0 first (White's back rank).
pub const STARTING_LAYOUT: [[Piece; 8]; 8] = {
    use Piece::*;
    [
        [WhiteRook, WhiteKnight, WhiteBishop, WhiteQueen, WhiteKing, WhiteBishop, WhiteKnight, WhiteRook],
        [WhitePawn; 8],
        [Empty; 8],
        [Empty; 8],
        [Empty; 8],
        [Empty; 8],
        [BlackPawn; 8],
        [BlackRook, BlackKnight, BlackBishop, BlackQueen, BlackKing, BlackBishop, BlackKnight, BlackRook],
    ]
};
