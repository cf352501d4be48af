//! Square conversions for algebraic coordinates.
//!
//! File `a`..`h` is column 0..7 and rank `1`..`8` is row 0..7, so White's
//! back rank is rank 1.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Coords;

/// Convert algebraic notation (for example: "e4") to coordinates.
pub fn algebraic_to_coords(square: &str) -> ChessResult<Coords> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid algebraic square: {square}"
        )));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid algebraic file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid algebraic rank: {}",
            rank as char
        )));
    }

    Ok(Coords::new(rank - b'1', file - b'a'))
}

/// Convert on-board coordinates to algebraic notation (for example: "e4").
pub fn coords_to_algebraic(at: Coords) -> String {
    let file_char = char::from(b'a' + at.col);
    let rank_char = char::from(b'1' + at.row);
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_coords, coords_to_algebraic};
    use crate::game_state::chess_types::Coords;

    #[test]
    fn maps_corners_and_center() {
        assert_eq!(algebraic_to_coords("a1").expect("a1"), Coords::new(0, 0));
        assert_eq!(algebraic_to_coords("h8").expect("h8"), Coords::new(7, 7));
        assert_eq!(algebraic_to_coords("E4").expect("E4"), Coords::new(3, 4));
        assert_eq!(coords_to_algebraic(Coords::new(6, 3)), "d7");
    }

    #[test]
    fn rejects_bad_squares() {
        assert!(algebraic_to_coords("i1").is_err());
        assert!(algebraic_to_coords("a9").is_err());
        assert!(algebraic_to_coords("a").is_err());
        assert!(algebraic_to_coords("a10").is_err());
    }
}
