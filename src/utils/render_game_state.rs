//! Board rendering collaborator interface.
//!
//! A renderer only reads the 8×8 piece grid and writes a finished picture of
//! it to a caller-chosen path, re-rendering the whole board on every call.
//! Layout helpers fix where each square lands in a raster image and which
//! asset a piece uses; `UnicodeRenderer` is the text implementation shipped
//! with the crate.

use std::fs;
use std::path::Path;

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Edge length of one square in a raster board image, in pixels.
pub const SQUARE_PIXELS: u32 = 34;
/// Offset of a piece sprite inside its square, in pixels.
pub const SQUARE_INSET_PIXELS: u32 = 2;

pub trait BoardRenderer {
    fn render(&self, board: &Board, output: &Path) -> ChessResult<()>;
}

/// Top-left pixel `(x, y)` of the sprite for a square. Row 0 is drawn at the top.
pub fn square_pixel_offset(at: Coords) -> (u32, u32) {
    (
        SQUARE_PIXELS * u32::from(at.col) + SQUARE_INSET_PIXELS,
        SQUARE_PIXELS * u32::from(at.row) + SQUARE_INSET_PIXELS,
    )
}

/// Sprite file name for a piece, `None` for an empty square.
pub fn piece_asset_name(piece: Piece) -> Option<&'static str> {
    let name = match piece {
        Piece::Empty => return None,
        Piece::WhiteKing => "king_w.png",
        Piece::WhiteQueen => "queen_w.png",
        Piece::WhitePawn => "pawn_w.png",
        Piece::WhiteBishop => "bishop_w.png",
        Piece::WhiteKnight => "knight_w.png",
        Piece::WhiteRook => "rook_w.png",
        Piece::BlackKing => "king_b.png",
        Piece::BlackQueen => "queen_b.png",
        Piece::BlackPawn => "pawn_b.png",
        Piece::BlackBishop => "bishop_b.png",
        Piece::BlackKnight => "knight_b.png",
        Piece::BlackRook => "rook_b.png",
    };
    Some(name)
}

/// Writes the Unicode board text to the output path.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeRenderer;

impl BoardRenderer for UnicodeRenderer {
    fn render(&self, board: &Board, output: &Path) -> ChessResult<()> {
        let mut text = render_board(board);
        text.push('\n');
        fs::write(output, text)?;
        Ok(())
    }
}

/// Render the board to a Unicode string for terminal output, rank 8 on top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..8u8).rev() {
        out.push(char::from(b'1' + row));
        out.push(' ');

        for col in 0..8u8 {
            match piece_to_unicode(board.get(Coords::new(row, col))) {
                Some(ch) => out.push(ch),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> Option<char> {
    let ch = match piece {
        Piece::Empty => return None,
        Piece::WhitePawn => '♙',
        Piece::WhiteKnight => '♘',
        Piece::WhiteBishop => '♗',
        Piece::WhiteRook => '♖',
        Piece::WhiteQueen => '♕',
        Piece::WhiteKing => '♔',
        Piece::BlackPawn => '♟',
        Piece::BlackKnight => '♞',
        Piece::BlackBishop => '♝',
        Piece::BlackRook => '♜',
        Piece::BlackQueen => '♛',
        Piece::BlackKing => '♚',
    };
    Some(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_board_text_has_both_back_ranks() {
        let text = render_board(&Board::starting_position());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
    }

    #[test]
    fn square_offsets_are_deterministic() {
        assert_eq!(square_pixel_offset(Coords::new(0, 0)), (2, 2));
        assert_eq!(square_pixel_offset(Coords::new(7, 1)), (36, 240));
    }

    #[test]
    fn every_piece_has_an_asset() {
        for piece in Piece::ALL {
            assert!(piece_asset_name(piece).is_some());
        }
        assert_eq!(piece_asset_name(Piece::Empty), None);
    }

    #[test]
    fn unicode_renderer_writes_output_file() {
        let path = std::env::temp_dir().join(format!("chessbot_render_{}.txt", std::process::id()));
        UnicodeRenderer
            .render(&Board::starting_position(), &path)
            .expect("render should write");
        let written = fs::read_to_string(&path).expect("output should exist");
        assert!(written.starts_with("  a b c d e f g h\n8 ♜"));
        fs::remove_file(&path).ok();
    }
}
