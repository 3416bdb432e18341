//! Crate root module declarations for the Parlor Chess rules engine.
//!
//! This file exposes the core subsystems (game state, move generation, and
//! utility helpers) so front ends, tests, and external tooling can import
//! stable module paths. Presentation concerns (rendering pixels, input
//! translation, move selection) live outside this crate and only call in.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod move_description;
}

pub mod move_generation {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod legal_move_generator;
    pub mod pawn_moves;
    pub mod perft;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod utils {
    pub mod algebraic;
    pub mod layout;
    pub mod render_game_state;
}
