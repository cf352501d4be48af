//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by the move validator, the
//! legality engine, the text parsers and the rendering collaborator. Move
//! failures carry a reason enum so callers can match on the precise cause:
//!
//! - `MalformedMove` comes from the move validator and never depends on a
//!   board. The same input will always be rejected.
//! - `IllegalMove` comes from the game engine and depends on the current
//!   position, turn, castling rights and outcome. A rejected move leaves the
//!   game untouched.
//!
//! Both are recoverable; a caller should simply ask for another move.

use thiserror::Error;

use crate::game_state::chess_types::Piece;

/// Reasons the move validator refuses to build a `Move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedMove {
    #[error("source square is off the board (row {row}, column {col})")]
    SourceOffBoard { row: i8, col: i8 },

    #[error("destination square is off the board (row {row}, column {col})")]
    DestinationOffBoard { row: i8, col: i8 },

    #[error("source and destination are the same square")]
    NullMove,

    #[error("an empty square cannot move")]
    EmptyPiece,

    #[error("{piece:?} cannot move in that pattern")]
    ImpossibleGeometry { piece: Piece },
}

/// Reasons the game engine refuses a well-formed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("the moving piece is not on the source square")]
    PieceMismatch,

    #[error("it is not that side's turn")]
    OutOfTurn,

    #[error("castling on that side is no longer allowed")]
    CastlingRightLost,

    #[error("the castling rook is not on its corner")]
    CastleRookMissing,

    #[error("a piece stands between king and rook")]
    CastlePathBlocked,

    #[error("the king would castle out of or through an attacked square")]
    CastleThroughCheck,

    #[error("a piece cannot capture its own side")]
    SelfCapture,

    #[error("a diagonal pawn move needs an enemy piece to capture")]
    PawnDiagonalWithoutCapture,

    #[error("a pawn cannot advance onto or through an occupied square")]
    PawnAdvanceBlocked,

    #[error("a pawn may only advance two squares from its starting row")]
    PawnDoubleStepNotFromStart,

    #[error("the path to the destination is blocked")]
    PathBlocked,

    #[error("the move would leave the mover's king in check")]
    LeavesKingInCheck,

    #[error("the kings would stand on adjacent squares")]
    KingsAdjacent,

    #[error("pawn promotion is not supported")]
    PromotionUnsupported,

    #[error("the game is already over")]
    GameOver,
}

/// Unified error type for the rules engine.
#[derive(Debug, Error)]
pub enum ChessErrors {
    #[error("malformed move: {0}")]
    MalformedMove(#[from] MalformedMove),

    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    /// A FEN string could not be interpreted.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A coordinate or long algebraic move string could not be interpreted.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// The rendering collaborator failed to write its output.
    #[error("failed to render board: {0}")]
    Render(#[from] std::io::Error),
}

/// Result alias for rules engine operations.
pub type ChessResult<T> = Result<T, ChessErrors>;

#[cfg(test)]
mod tests {
    use super::{ChessErrors, IllegalMove, MalformedMove};

    #[test]
    fn reasons_convert_into_unified_error() {
        let err: ChessErrors = IllegalMove::OutOfTurn.into();
        assert!(matches!(err, ChessErrors::IllegalMove(IllegalMove::OutOfTurn)));
        assert_eq!(err.to_string(), "illegal move: it is not that side's turn");

        let err: ChessErrors = MalformedMove::NullMove.into();
        assert!(matches!(err, ChessErrors::MalformedMove(MalformedMove::NullMove)));
    }
}
