//! Pseudo-legal bishop move generation.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::move_generation::sliding_moves::{generate_sliding_moves, BISHOP_DIRECTIONS};
use crate::moves::move_description::ChessMove;

/// Appends every pseudo-legal bishop move from `start` to `out`.
pub fn generate_bishop_moves(
    game: &GameState,
    start: BoardLocation,
    out: &mut Vec<ChessMove>,
) -> Result<(), ChessErrors> {
    generate_sliding_moves(game, start, &BISHOP_DIRECTIONS, out)
}
