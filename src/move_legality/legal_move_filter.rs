//! Ordered legality checks for one proposed move.
//!
//! The checks run against a borrowed position and never mutate it. The
//! self-check test runs on a private copy of the board; when every check
//! passes that copy is handed back so the caller can commit it.

use crate::chess_errors::IllegalMove;
use crate::game_state::board::Board;
use crate::game_state::castle_ability::CastleAbility;
use crate::game_state::chess_rules::KING_START_COL;
use crate::game_state::chess_types::*;
use crate::game_state::rules_config::{PromotionPolicy, RulesConfig};
use crate::move_legality::legal_move_apply::{apply_move_to_copy, promote_to_queen, reaches_last_row};
use crate::move_legality::legal_move_checks::{is_king_in_check, is_square_attacked, king_square};
use crate::move_legality::legal_move_shared::{path_is_clear, squares_between};
use crate::moves::move_descriptions::{Move, MoveKind};

/// Position context a move is judged against.
#[derive(Debug, Clone, Copy)]
pub struct LegalityContext<'a> {
    pub board: &'a Board,
    pub castle_ability: &'a CastleAbility,
    pub side_to_move: Color,
    pub config: &'a RulesConfig,
}

/// Run every legality check on `mv` and return the resulting board.
pub fn filter_legal_move(ctx: &LegalityContext<'_>, mv: &Move) -> Result<Board, IllegalMove> {
    let board = ctx.board;

    if board.get(mv.source()) != mv.piece() {
        return Err(IllegalMove::PieceMismatch);
    }
    let color = mv.color();
    if color != ctx.side_to_move {
        return Err(IllegalMove::OutOfTurn);
    }

    match mv.kind() {
        MoveKind::Castle { side, color } => check_castle(ctx, side, color)?,
        kind => {
            if board.get(mv.destination()).is_color(color) {
                return Err(IllegalMove::SelfCapture);
            }
            check_path(board, mv, kind)?;
        }
    }

    if reaches_last_row(mv) && ctx.config.promotion == PromotionPolicy::Reject {
        return Err(IllegalMove::PromotionUnsupported);
    }

    let mut next = apply_move_to_copy(board, mv);
    if ctx.config.promotion == PromotionPolicy::AutoQueen {
        promote_to_queen(&mut next, mv);
    }

    if is_king_in_check(&next, color) {
        return Err(IllegalMove::LeavesKingInCheck);
    }
    if ctx.config.forbid_adjacent_kings && kings_adjacent(&next) {
        return Err(IllegalMove::KingsAdjacent);
    }

    Ok(next)
}

fn check_castle(ctx: &LegalityContext<'_>, side: CastleSide, color: Color) -> Result<(), IllegalMove> {
    if !ctx.castle_ability.can_castle(color, side) {
        return Err(IllegalMove::CastlingRightLost);
    }

    let row = color.back_row();
    let king_from = Coords::new(row, KING_START_COL);
    let rook_at = Coords::new(row, side.rook_col());
    if ctx.board.get(rook_at) != Piece::new(color, PieceKind::Rook) {
        return Err(IllegalMove::CastleRookMissing);
    }
    if !path_is_clear(ctx.board, king_from, rook_at) {
        return Err(IllegalMove::CastlePathBlocked);
    }

    if ctx.config.forbid_castling_through_check {
        let king_to = Coords::new(row, side.king_target_col());
        let enemy = color.opposite();
        let crossed = std::iter::once(king_from)
            .chain(squares_between(king_from, king_to))
            .chain(std::iter::once(king_to));
        for at in crossed {
            if is_square_attacked(ctx.board, at, enemy) {
                return Err(IllegalMove::CastleThroughCheck);
            }
        }
    }

    Ok(())
}

fn check_path(board: &Board, mv: &Move, kind: MoveKind) -> Result<(), IllegalMove> {
    let (from, to) = (mv.source(), mv.destination());
    match kind {
        MoveKind::PawnDiagonal => {
            if !board.get(to).is_color(mv.color().opposite()) {
                return Err(IllegalMove::PawnDiagonalWithoutCapture);
            }
        }
        MoveKind::PawnAdvance { rows } => {
            if !board.is_empty_at(to) || !path_is_clear(board, from, to) {
                return Err(IllegalMove::PawnAdvanceBlocked);
            }
            if rows == 2 && from.row != mv.color().pawn_row() {
                return Err(IllegalMove::PawnDoubleStepNotFromStart);
            }
        }
        MoveKind::Standard => {
            let slides = mv.piece().kind().is_some_and(PieceKind::is_slider);
            if slides && !path_is_clear(board, from, to) {
                return Err(IllegalMove::PathBlocked);
            }
        }
        MoveKind::Castle { .. } => {}
    }
    Ok(())
}

fn kings_adjacent(board: &Board) -> bool {
    match (king_square(board, Color::White), king_square(board, Color::Black)) {
        (Some(white), Some(black)) => white.is_adjacent(black),
        _ => false,
    }
}
