//! Board mutation for accepted moves.
//!
//! Nothing here checks legality; callers run the legality filter first.

use crate::game_state::board::Board;
use crate::game_state::castle_ability::CastleAbility;
use crate::game_state::chess_rules::KING_START_COL;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, MoveKind};

/// Apply `mv` to `board` in place.
///
/// A castle puts the king on column 2 or 6 and the rook on column 3 or 5 of
/// the same row and clears both original squares. Any other move clears the
/// source and overwrites the destination, which is also how captures work.
pub fn apply_move(board: &mut Board, mv: &Move) {
    match mv.kind() {
        MoveKind::Castle { side, color } => {
            let row = mv.source().row;
            let rook = Piece::new(color, PieceKind::Rook);
            board.set(Coords::new(row, KING_START_COL), Piece::Empty);
            board.set(Coords::new(row, side.rook_col()), Piece::Empty);
            board.set(Coords::new(row, side.king_target_col()), mv.piece());
            board.set(Coords::new(row, side.rook_target_col()), rook);
        }
        MoveKind::Standard | MoveKind::PawnAdvance { .. } | MoveKind::PawnDiagonal => {
            board.set(mv.source(), Piece::Empty);
            board.set(mv.destination(), mv.piece());
        }
    }
}

/// Copy of `board` with `mv` applied; the original is left untouched.
pub fn apply_move_to_copy(board: &Board, mv: &Move) -> Board {
    let mut next = *board;
    apply_move(&mut next, mv);
    next
}

/// True when `mv` is a pawn move ending on its color's far row.
pub fn reaches_last_row(mv: &Move) -> bool {
    mv.piece().kind() == Some(PieceKind::Pawn) && mv.destination().row == mv.color().last_row()
}

/// Replace a pawn that just reached the far row with a queen of its color.
pub fn promote_to_queen(board: &mut Board, mv: &Move) {
    if reaches_last_row(mv) {
        board.set(mv.destination(), Piece::new(mv.color(), PieceKind::Queen));
    }
}

/// Narrow castling rights after `mv`, reading the captured piece from the
/// pre-move `board`.
///
/// A king move forfeits both flanks of its color. A rook leaving its home
/// corner, or being captured on it, forfeits that flank.
pub fn update_castle_ability(rights: &mut CastleAbility, board: &Board, mv: &Move) {
    let color = mv.color();
    match mv.piece().kind() {
        Some(PieceKind::King) => rights.revoke_both(color),
        Some(PieceKind::Rook) => {
            if let Some(side) = home_corner_side(color, mv.source()) {
                rights.revoke(color, side);
            }
        }
        _ => {}
    }

    if mv.is_castle() {
        return;
    }
    let captured = board.get(mv.destination());
    if let (Some(captured_color), Some(PieceKind::Rook)) = (captured.color(), captured.kind()) {
        if let Some(side) = home_corner_side(captured_color, mv.destination()) {
            rights.revoke(captured_color, side);
        }
    }
}

fn home_corner_side(color: Color, at: Coords) -> Option<CastleSide> {
    if at.row != color.back_row() {
        return None;
    }
    CastleSide::from_rook_col(at.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(piece: Piece, from: (i8, i8), to: (i8, i8)) -> Move {
        Move::new(piece, from.0, from.1, to.0, to.1).expect("test move should be well formed")
    }

    #[test]
    fn plain_move_clears_source_and_fills_destination() {
        let mut board = Board::starting_position();
        apply_move(&mut board, &mv(Piece::WhitePawn, (1, 4), (3, 4)));
        assert!(board.is_empty_at(Coords::new(1, 4)));
        assert_eq!(board.get(Coords::new(3, 4)), Piece::WhitePawn);
    }

    #[test]
    fn capture_overwrites_destination() {
        let mut board = Board::empty();
        board.set(Coords::new(3, 3), Piece::WhiteBishop);
        board.set(Coords::new(6, 6), Piece::BlackKnight);
        apply_move(&mut board, &mv(Piece::WhiteBishop, (3, 3), (6, 6)));
        assert_eq!(board.get(Coords::new(6, 6)), Piece::WhiteBishop);
        assert_eq!(board.occupied().count(), 1);
    }

    #[test]
    fn castles_place_king_and_rook() {
        let mut board = Board::empty();
        board.set(Coords::new(0, 4), Piece::WhiteKing);
        board.set(Coords::new(0, 0), Piece::WhiteRook);
        board.set(Coords::new(7, 4), Piece::BlackKing);
        board.set(Coords::new(7, 7), Piece::BlackRook);

        apply_move(&mut board, &mv(Piece::WhiteKing, (0, 4), (0, 0)));
        assert_eq!(board.get(Coords::new(0, 2)), Piece::WhiteKing);
        assert_eq!(board.get(Coords::new(0, 3)), Piece::WhiteRook);
        assert!(board.is_empty_at(Coords::new(0, 0)));
        assert!(board.is_empty_at(Coords::new(0, 4)));

        apply_move(&mut board, &mv(Piece::BlackKing, (7, 4), (7, 7)));
        assert_eq!(board.get(Coords::new(7, 6)), Piece::BlackKing);
        assert_eq!(board.get(Coords::new(7, 5)), Piece::BlackRook);
        assert!(board.is_empty_at(Coords::new(7, 7)));
    }

    #[test]
    fn copy_leaves_original_untouched() {
        let board = Board::starting_position();
        let next = apply_move_to_copy(&board, &mv(Piece::WhiteKnight, (0, 1), (2, 2)));
        assert_eq!(board, Board::starting_position());
        assert_eq!(next.get(Coords::new(2, 2)), Piece::WhiteKnight);
    }

    #[test]
    fn promotion_swaps_pawn_for_queen() {
        let mut board = Board::empty();
        board.set(Coords::new(1, 0), Piece::BlackPawn);
        let push = mv(Piece::BlackPawn, (1, 0), (0, 0));
        assert!(reaches_last_row(&push));
        apply_move(&mut board, &push);
        promote_to_queen(&mut board, &push);
        assert_eq!(board.get(Coords::new(0, 0)), Piece::BlackQueen);
    }

    #[test]
    fn rook_moves_and_captures_narrow_rights() {
        let board = Board::starting_position();
        let mut rights = CastleAbility::all();

        update_castle_ability(&mut rights, &board, &mv(Piece::WhiteRook, (0, 7), (2, 7)));
        assert!(!rights.white_kingside);
        assert!(rights.white_queenside);

        let mut board = Board::empty();
        board.set(Coords::new(3, 3), Piece::WhiteBishop);
        board.set(Coords::new(7, 7), Piece::BlackRook);
        update_castle_ability(&mut rights, &board, &mv(Piece::WhiteBishop, (3, 3), (7, 7)));
        assert!(!rights.black_kingside);
        assert!(rights.black_queenside);
    }

    #[test]
    fn non_home_rook_does_not_touch_rights() {
        let mut board = Board::empty();
        board.set(Coords::new(3, 0), Piece::WhiteRook);
        let mut rights = CastleAbility::all();
        update_castle_ability(&mut rights, &board, &mv(Piece::WhiteRook, (3, 0), (3, 5)));
        assert_eq!(rights, CastleAbility::all());
    }

    #[test]
    fn king_move_forfeits_both_flanks() {
        let board = Board::starting_position();
        let mut rights = CastleAbility::all();
        update_castle_ability(&mut rights, &board, &mv(Piece::BlackKing, (7, 4), (7, 7)));
        assert!(!rights.black_kingside && !rights.black_queenside);
        assert!(rights.white_kingside && rights.white_queenside);
    }
}
