//! Bishop movement geometry: equal absolute row and column delta.

use crate::game_state::chess_types::Coords;
use crate::moves::rook_moves::trace_ray_const;

pub const BISHOP_RAYS: [u64; 64] = generate_bishop_rays();

#[inline]
pub const fn bishop_rays(from: Coords) -> u64 {
    BISHOP_RAYS[from.index()]
}

#[inline]
pub const fn is_bishop_shape(from: Coords, to: Coords) -> bool {
    bishop_rays(from) & to.bit() != 0
}

const fn generate_bishop_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let sq_i = sq as i32;
        let mut rays = 0u64;

        rays |= trace_ray_const(sq_i, 1, 1);
        rays |= trace_ray_const(sq_i, -1, 1);
        rays |= trace_ray_const(sq_i, 1, -1);
        rays |= trace_ray_const(sq_i, -1, -1);

        table[sq] = rays;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{is_bishop_shape, BISHOP_RAYS};
    use crate::game_state::chess_types::Coords;

    #[test]
    fn bishop_rays_from_d4_have_thirteen_squares() {
        let d4 = Coords::new(3, 3);
        assert_eq!(BISHOP_RAYS[d4.index()].count_ones(), 13);
    }

    #[test]
    fn bishop_shape_stays_on_diagonals() {
        let c1 = Coords::new(0, 2);
        assert!(is_bishop_shape(c1, Coords::new(5, 7)));
        assert!(is_bishop_shape(c1, Coords::new(2, 0)));
        assert!(!is_bishop_shape(c1, Coords::new(1, 2)));
    }
}
