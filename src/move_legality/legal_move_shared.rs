//! Open-interval walking between two aligned squares.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Coords;

/// Squares strictly between `from` and `to`, in the direction of travel.
///
/// Yields nothing unless the squares share a row, a column or a diagonal.
pub fn squares_between(from: Coords, to: Coords) -> impl Iterator<Item = Coords> {
    let (d_row, d_col) = from.delta_to(to);
    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    let steps = if aligned {
        d_row.abs().max(d_col.abs()).saturating_sub(1)
    } else {
        0
    };
    let (step_row, step_col) = (d_row.signum(), d_col.signum());

    (1..=steps).map(move |i| {
        Coords::new(
            (from.row as i8 + step_row * i) as u8,
            (from.col as i8 + step_col * i) as u8,
        )
    })
}

/// True when every square strictly between `from` and `to` is empty.
pub fn path_is_clear(board: &Board, from: Coords, to: Coords) -> bool {
    squares_between(from, to).all(|at| board.is_empty_at(at))
}

#[cfg(test)]
mod tests {
    use super::{path_is_clear, squares_between};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Coords, Piece};

    #[test]
    fn walks_toward_destination() {
        let between: Vec<Coords> = squares_between(Coords::new(0, 7), Coords::new(3, 4)).collect();
        assert_eq!(between, vec![Coords::new(1, 6), Coords::new(2, 5)]);
    }

    #[test]
    fn adjacent_and_unaligned_squares_have_nothing_between() {
        assert_eq!(squares_between(Coords::new(0, 0), Coords::new(1, 1)).count(), 0);
        assert_eq!(squares_between(Coords::new(0, 0), Coords::new(2, 1)).count(), 0);
    }

    #[test]
    fn blocker_on_interval_closes_path() {
        let mut board = Board::empty();
        let a1 = Coords::new(0, 0);
        let a8 = Coords::new(7, 0);
        assert!(path_is_clear(&board, a1, a8));
        board.set(Coords::new(4, 0), Piece::BlackPawn);
        assert!(!path_is_clear(&board, a1, a8));
        assert!(path_is_clear(&board, a1, Coords::new(4, 0)));
    }
}
