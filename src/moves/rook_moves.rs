//! Rook movement geometry.
//!
//! `ROOK_RAYS` holds, for every square, the squares reachable along a row or
//! column on an empty board. Occupancy along the line is checked separately
//! by walking the open interval, see `move_legality::legal_move_shared`.

use crate::game_state::chess_types::Coords;

pub const ROOK_RAYS: [u64; 64] = generate_rook_rays();

#[inline]
pub const fn rook_rays(from: Coords) -> u64 {
    ROOK_RAYS[from.index()]
}

/// Same row or same column, any distance.
#[inline]
pub const fn is_rook_shape(from: Coords, to: Coords) -> bool {
    rook_rays(from) & to.bit() != 0
}

const fn generate_rook_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let sq_i = sq as i32;
        let mut rays = 0u64;

        rays |= trace_ray_const(sq_i, 0, 1);
        rays |= trace_ray_const(sq_i, 0, -1);
        rays |= trace_ray_const(sq_i, 1, 0);
        rays |= trace_ray_const(sq_i, -1, 0);

        table[sq] = rays;
        sq += 1;
    }

    table
}

pub(crate) const fn trace_ray_const(square: i32, row_step: i32, col_step: i32) -> u64 {
    let mut row = (square / 8) + row_step;
    let mut col = (square % 8) + col_step;
    let mut rays = 0u64;

    while row >= 0 && row < 8 && col >= 0 && col < 8 {
        rays |= 1u64 << (row * 8 + col) as usize;
        row += row_step;
        col += col_step;
    }

    rays
}
