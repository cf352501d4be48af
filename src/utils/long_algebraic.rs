//! Long algebraic move text ("e2e4") to and from `Move`.
//!
//! The moving piece is read from the board, so the resulting move is only
//! as current as the board it was parsed against. Standard castling text
//! (`e1g1`, `e8c8`, ...) is translated to the king-onto-rook encoding; the
//! encoding itself (`e1h1`) is accepted too.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::KING_START_COL;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::utils::algebraic::{algebraic_to_coords, coords_to_algebraic};

pub fn long_algebraic_to_move(long_algebraic: &str, board: &Board) -> ChessResult<Move> {
    if !long_algebraic.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid long algebraic move: {long_algebraic}"
        )));
    }
    match long_algebraic.len() {
        4 => {}
        5 => {
            return Err(ChessErrors::InvalidAlgebraic(format!(
                "promotion is not supported: {long_algebraic}"
            )))
        }
        _ => {
            return Err(ChessErrors::InvalidAlgebraic(format!(
                "invalid long algebraic move: {long_algebraic}"
            )))
        }
    }

    let from = algebraic_to_coords(&long_algebraic[0..2])?;
    let mut to = algebraic_to_coords(&long_algebraic[2..4])?;
    let piece = board.get(from);

    if let (Some(color), Some(PieceKind::King)) = (piece.color(), piece.kind()) {
        let home = Coords::new(color.back_row(), KING_START_COL);
        if from == home && to.row == home.row {
            if to.col == CastleSide::Kingside.king_target_col() {
                to.col = CastleSide::Kingside.rook_col();
            } else if to.col == CastleSide::Queenside.king_target_col() {
                to.col = CastleSide::Queenside.rook_col();
            }
        }
    }

    Move::from_coords(piece, from, to)
}

/// Long algebraic text for `mv`; castles are written as the king's landing square.
pub fn move_to_long_algebraic(mv: &Move) -> String {
    let to = match mv.kind() {
        MoveKind::Castle { .. } => mv.landing_square(),
        _ => mv.destination(),
    };
    format!("{}{}", coords_to_algebraic(mv.source()), coords_to_algebraic(to))
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::chess_errors::{ChessErrors, MalformedMove};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::MoveKind;

    #[test]
    fn reads_piece_from_board() {
        let board = Board::starting_position();
        let mv = long_algebraic_to_move("g8f6", &board).expect("knight move");
        assert_eq!(mv.piece(), Piece::BlackKnight);
        assert_eq!(mv.destination(), Coords::new(5, 5));
        assert_eq!(move_to_long_algebraic(&mv), "g8f6");
    }

    #[test]
    fn castling_text_becomes_king_onto_rook() {
        let board = Board::starting_position();
        let mv = long_algebraic_to_move("e1g1", &board).expect("castle text");
        assert_eq!(mv.destination(), Coords::new(0, 7));
        assert_eq!(
            mv.kind(),
            MoveKind::Castle {
                side: CastleSide::Kingside,
                color: Color::White
            }
        );
        assert_eq!(move_to_long_algebraic(&mv), "e1g1");

        let encoded = long_algebraic_to_move("e8a8", &board).expect("encoded castle");
        assert!(encoded.is_castle());
        assert_eq!(move_to_long_algebraic(&encoded), "e8c8");
    }

    #[test]
    fn rejects_bad_text_and_empty_squares() {
        let board = Board::starting_position();
        assert!(matches!(
            long_algebraic_to_move("e7e8q", &board),
            Err(ChessErrors::InvalidAlgebraic(_))
        ));
        assert!(matches!(
            long_algebraic_to_move("e2", &board),
            Err(ChessErrors::InvalidAlgebraic(_))
        ));
        assert!(matches!(
            long_algebraic_to_move("e4e5", &board),
            Err(ChessErrors::MalformedMove(MalformedMove::EmptyPiece))
        ));
        assert!(matches!(
            long_algebraic_to_move("b1b3", &board),
            Err(ChessErrors::MalformedMove(MalformedMove::ImpossibleGeometry { .. }))
        ));
    }
}
