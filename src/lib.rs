//! Crate root module declarations for the chessbot rules engine.
//!
//! Exposes the board and game model, per-piece movement geometry, the
//! legality engine (threats, check, apply-move, legality filter), the
//! crate-wide error type and text/rendering helpers, so the binary, tests and
//! embedding services can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod castle_ability;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod rules_config;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_legality {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod legal_move_shared;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
