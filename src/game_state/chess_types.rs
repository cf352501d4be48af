//! Core value types shared by the board model, the move validator and the
//! legality engine.
//!
//! Every piece is a closed enumeration value; its color and kind are derived
//! by exhaustive matching so no invalid piece code can type-check.

use std::fmt;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row holding this color's king and rooks at game start.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row this color's pawns start on.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Row on which this color's pawns would promote.
    #[inline]
    pub const fn last_row(self) -> u8 {
        self.opposite().back_row()
    }

    /// Row delta of a single pawn step for this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind, independent of color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Pawn,
    Bishop,
    Knight,
    Rook,
}

impl PieceKind {
    /// Sliding pieces can be blocked by anything standing on their path.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop)
    }
}

/// Contents of one board square: empty, or one of the twelve colored pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    WhiteKing,
    WhiteQueen,
    WhitePawn,
    WhiteBishop,
    WhiteKnight,
    WhiteRook,
    BlackKing,
    BlackQueen,
    BlackPawn,
    BlackBishop,
    BlackKnight,
    BlackRook,
}

impl Piece {
    /// The twelve non-empty pieces, white first.
    pub const ALL: [Piece; 12] = [
        Piece::WhiteKing,
        Piece::WhiteQueen,
        Piece::WhitePawn,
        Piece::WhiteBishop,
        Piece::WhiteKnight,
        Piece::WhiteRook,
        Piece::BlackKing,
        Piece::BlackQueen,
        Piece::BlackPawn,
        Piece::BlackBishop,
        Piece::BlackKnight,
        Piece::BlackRook,
    ];

    /// Build a piece from its color and kind.
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        match (color, kind) {
            (Color::White, PieceKind::King) => Piece::WhiteKing,
            (Color::White, PieceKind::Queen) => Piece::WhiteQueen,
            (Color::White, PieceKind::Pawn) => Piece::WhitePawn,
            (Color::White, PieceKind::Bishop) => Piece::WhiteBishop,
            (Color::White, PieceKind::Knight) => Piece::WhiteKnight,
            (Color::White, PieceKind::Rook) => Piece::WhiteRook,
            (Color::Black, PieceKind::King) => Piece::BlackKing,
            (Color::Black, PieceKind::Queen) => Piece::BlackQueen,
            (Color::Black, PieceKind::Pawn) => Piece::BlackPawn,
            (Color::Black, PieceKind::Bishop) => Piece::BlackBishop,
            (Color::Black, PieceKind::Knight) => Piece::BlackKnight,
            (Color::Black, PieceKind::Rook) => Piece::BlackRook,
        }
    }

    /// Color of the piece, `None` for an empty square.
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::WhiteKing
            | Piece::WhiteQueen
            | Piece::WhitePawn
            | Piece::WhiteBishop
            | Piece::WhiteKnight
            | Piece::WhiteRook => Some(Color::White),
            Piece::BlackKing
            | Piece::BlackQueen
            | Piece::BlackPawn
            | Piece::BlackBishop
            | Piece::BlackKnight
            | Piece::BlackRook => Some(Color::Black),
        }
    }

    /// Kind of the piece, `None` for an empty square.
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Empty => None,
            Piece::WhiteKing | Piece::BlackKing => Some(PieceKind::King),
            Piece::WhiteQueen | Piece::BlackQueen => Some(PieceKind::Queen),
            Piece::WhitePawn | Piece::BlackPawn => Some(PieceKind::Pawn),
            Piece::WhiteBishop | Piece::BlackBishop => Some(PieceKind::Bishop),
            Piece::WhiteKnight | Piece::BlackKnight => Some(PieceKind::Knight),
            Piece::WhiteRook | Piece::BlackRook => Some(PieceKind::Rook),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// True when the piece is non-empty and belongs to `color`.
    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }
}

/// A (row, column) pair, each in `0..=7`. Row 0 is White's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coords {
    pub row: u8,
    pub col: u8,
}

impl Coords {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Checked construction from signed input; `None` when off the board.
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Square index `row * 8 + col`, used by the precomputed target tables.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// One-hot mask of this square.
    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.index()
    }

    /// Signed (row, col) delta from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Coords) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.col as i8 - self.col as i8,
        )
    }

    /// Chebyshev distance 1 or less.
    #[inline]
    pub fn is_adjacent(self, other: Coords) -> bool {
        let (d_row, d_col) = self.delta_to(other);
        d_row.abs() <= 1 && d_col.abs() <= 1
    }

    /// Iterate all 64 squares, row-major from (0, 0).
    pub fn all() -> impl Iterator<Item = Coords> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Coords::new(row, col)))
    }
}

/// Result of scanning a position for attacked kings.
///
/// When both kings are attacked (only possible in a malformed position)
/// `WhiteInCheck` is reported; `CheckFlags` keeps both bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    NoCheck,
    WhiteInCheck,
    BlackInCheck,
}

impl CheckState {
    pub fn is_in_check(self, color: Color) -> bool {
        matches!(
            (self, color),
            (CheckState::WhiteInCheck, Color::White) | (CheckState::BlackInCheck, Color::Black)
        )
    }
}

/// Independent per-color check flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckFlags {
    pub white: bool,
    pub black: bool,
}

impl CheckFlags {
    #[inline]
    pub fn is_in_check(self, color: Color) -> bool {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Collapse to a single state, White first.
    pub fn state(self) -> CheckState {
        if self.white {
            CheckState::WhiteInCheck
        } else if self.black {
            CheckState::BlackInCheck
        } else {
            CheckState::NoCheck
        }
    }
}

/// Flank a castle happens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Column of the rook, which is also the wire destination of the castle.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    #[inline]
    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    pub const fn from_rook_col(col: u8) -> Option<Self> {
        match col {
            7 => Some(CastleSide::Kingside),
            0 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// Terminal state of a game. Checkmate and stalemate are not detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Resigned { winner: Color },
    DrawAgreed,
}

impl GameOutcome {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}
