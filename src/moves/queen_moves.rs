use crate::game_state::chess_types::Coords;
use crate::moves::bishop_moves::BISHOP_RAYS;
use crate::moves::rook_moves::ROOK_RAYS;

pub const QUEEN_RAYS: [u64; 64] = generate_queen_rays();

/// Straight or diagonal, any distance.
#[inline]
pub const fn is_queen_shape(from: Coords, to: Coords) -> bool {
    QUEEN_RAYS[from.index()] & to.bit() != 0
}

const fn generate_queen_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = BISHOP_RAYS[sq] | ROOK_RAYS[sq];
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{is_queen_shape, QUEEN_RAYS};
    use crate::game_state::chess_types::Coords;

    #[test]
    fn queen_rays_from_d4_have_twenty_seven_squares() {
        let d4 = Coords::new(3, 3);
        assert_eq!(QUEEN_RAYS[d4.index()].count_ones(), 27);
    }

    #[test]
    fn queen_shape_rejects_knight_jump() {
        let d4 = Coords::new(3, 3);
        assert!(is_queen_shape(d4, Coords::new(7, 7)));
        assert!(is_queen_shape(d4, Coords::new(3, 0)));
        assert!(!is_queen_shape(d4, Coords::new(5, 4)));
    }
}
