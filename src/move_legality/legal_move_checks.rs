//! Threat and check detection on a single board.
//!
//! `threatens` answers whether the piece on one square could capture on
//! another given current occupancy. It ignores color: callers only ask about
//! enemy pieces. `determine_check` aggregates it over a whole position and is
//! meant for one position at a time, not for search loops.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_legality::legal_move_shared::path_is_clear;
use crate::moves::bishop_moves::is_bishop_shape;
use crate::moves::king_moves::is_king_step;
use crate::moves::knight_moves::is_knight_shape;
use crate::moves::pawn_moves::is_pawn_diagonal;
use crate::moves::queen_moves::is_queen_shape;
use crate::moves::rook_moves::is_rook_shape;

/// Can the piece on `source` capture on `destination`?
///
/// Sliding pieces need every square strictly between to be empty. King,
/// knight and pawn threats are geometry only; a pawn threatens its two
/// forward diagonals, never the squares straight ahead.
pub fn threatens(board: &Board, source: Coords, destination: Coords) -> bool {
    let piece = board.get(source);
    let (Some(color), Some(kind)) = (piece.color(), piece.kind()) else {
        return false;
    };

    match kind {
        PieceKind::King => is_king_step(source, destination),
        PieceKind::Knight => is_knight_shape(source, destination),
        PieceKind::Pawn => is_pawn_diagonal(color, source, destination),
        PieceKind::Queen => {
            is_queen_shape(source, destination) && path_is_clear(board, source, destination)
        }
        PieceKind::Rook => {
            is_rook_shape(source, destination) && path_is_clear(board, source, destination)
        }
        PieceKind::Bishop => {
            is_bishop_shape(source, destination) && path_is_clear(board, source, destination)
        }
    }
}

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Coords> {
    board.find(Piece::new(color, PieceKind::King))
}

/// Per-color check flags for a position.
///
/// Kings are located in one scan; every other occupied square is then tested
/// against the opposing king. Kings themselves are not counted as checkers. A
/// color with no king on the board is never in check.
pub fn check_flags(board: &Board) -> CheckFlags {
    let mut white_king = None;
    let mut black_king = None;
    for (at, piece) in board.occupied() {
        match piece {
            Piece::WhiteKing => white_king = Some(at),
            Piece::BlackKing => black_king = Some(at),
            _ => {}
        }
    }

    let mut flags = CheckFlags::default();
    for (at, piece) in board.occupied() {
        if piece.kind() == Some(PieceKind::King) {
            continue;
        }
        match piece.color() {
            Some(Color::Black) => {
                if let Some(king) = white_king {
                    flags.white |= threatens(board, at, king);
                }
            }
            Some(Color::White) => {
                if let Some(king) = black_king {
                    flags.black |= threatens(board, at, king);
                }
            }
            None => {}
        }
    }

    flags
}

/// Collapsed check state. White is reported first when both kings are attacked.
pub fn determine_check(board: &Board) -> CheckState {
    check_flags(board).state()
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    check_flags(board).is_in_check(color)
}

/// Is `square` threatened by any piece of `attacker_color`, kings included?
pub fn is_square_attacked(board: &Board, square: Coords, attacker_color: Color) -> bool {
    board
        .occupied()
        .any(|(at, piece)| piece.is_color(attacker_color) && threatens(board, at, square))
}
