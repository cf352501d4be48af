//! Move values and the geometric move validator.
//!
//! A `Move` is built once from raw coordinates and never mutated. Building it
//! checks only the shape of the move for the piece that makes it: board
//! contents, blocked paths and check are the legality engine's business.
//!
//! Castling keeps its external encoding (the king "captures" its own rook on
//! column 0 or 7) but is tagged as `MoveKind::Castle` on construction so
//! later stages match on intent instead of re-reading column numbers.

use crate::chess_errors::{ChessResult, MalformedMove};
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::is_bishop_shape;
use crate::moves::king_moves::{castle_side_for, is_king_step};
use crate::moves::knight_moves::is_knight_shape;
use crate::moves::pawn_moves::{is_pawn_diagonal, pawn_advance_distance};
use crate::moves::queen_moves::is_queen_shape;
use crate::moves::rook_moves::is_rook_shape;

/// What a move means, decided from its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Any king, queen, rook, bishop or knight move that is not a castle.
    Standard,
    /// Straight pawn move of one or two rows.
    PawnAdvance { rows: u8 },
    /// Diagonal pawn move, valid only as a capture.
    PawnDiagonal,
    /// King and rook double move.
    Castle { side: CastleSide, color: Color },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    piece: Piece,
    color: Color,
    source: Coords,
    destination: Coords,
    kind: MoveKind,
}

impl Move {
    /// Validate raw coordinates for `piece` and build the move.
    ///
    /// Checks, in order: both squares on the board, source differs from
    /// destination, piece is not empty, geometry matches the piece.
    pub fn new(
        piece: Piece,
        src_row: i8,
        src_col: i8,
        dest_row: i8,
        dest_col: i8,
    ) -> ChessResult<Self> {
        let source = Coords::try_new(src_row, src_col).ok_or(MalformedMove::SourceOffBoard {
            row: src_row,
            col: src_col,
        })?;
        let destination =
            Coords::try_new(dest_row, dest_col).ok_or(MalformedMove::DestinationOffBoard {
                row: dest_row,
                col: dest_col,
            })?;
        Self::from_coords(piece, source, destination)
    }

    /// Same as [`Move::new`] for coordinates already known to be on the board.
    pub fn from_coords(piece: Piece, source: Coords, destination: Coords) -> ChessResult<Self> {
        if source == destination {
            return Err(MalformedMove::NullMove.into());
        }
        let (Some(color), Some(kind)) = (piece.color(), piece.kind()) else {
            return Err(MalformedMove::EmptyPiece.into());
        };

        let move_kind = classify(color, kind, source, destination)
            .ok_or(MalformedMove::ImpossibleGeometry { piece })?;

        Ok(Self {
            piece,
            color,
            source,
            destination,
            kind: move_kind,
        })
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn source(&self) -> Coords {
        self.source
    }

    /// Destination as encoded; for a castle this is the rook's corner.
    #[inline]
    pub fn destination(&self) -> Coords {
        self.destination
    }

    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Color of the moving piece.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle { .. })
    }

    #[inline]
    pub fn is_pawn_diagonal(&self) -> bool {
        matches!(self.kind, MoveKind::PawnDiagonal)
    }

    /// Square the moving piece actually ends on.
    pub fn landing_square(&self) -> Coords {
        match self.kind {
            MoveKind::Castle { side, .. } => Coords::new(self.source.row, side.king_target_col()),
            _ => self.destination,
        }
    }
}

fn classify(color: Color, kind: PieceKind, from: Coords, to: Coords) -> Option<MoveKind> {
    match kind {
        PieceKind::King => {
            if let Some(side) = castle_side_for(color, from, to) {
                Some(MoveKind::Castle { side, color })
            } else if is_king_step(from, to) {
                Some(MoveKind::Standard)
            } else {
                None
            }
        }
        PieceKind::Queen => is_queen_shape(from, to).then_some(MoveKind::Standard),
        PieceKind::Rook => is_rook_shape(from, to).then_some(MoveKind::Standard),
        PieceKind::Bishop => is_bishop_shape(from, to).then_some(MoveKind::Standard),
        PieceKind::Knight => is_knight_shape(from, to).then_some(MoveKind::Standard),
        PieceKind::Pawn => {
            if let Some(rows) = pawn_advance_distance(color, from, to) {
                Some(MoveKind::PawnAdvance { rows })
            } else if is_pawn_diagonal(color, from, to) {
                Some(MoveKind::PawnDiagonal)
            } else {
                None
            }
        }
    }
}
