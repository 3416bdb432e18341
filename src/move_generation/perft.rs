//! Legal-move tree walker for validating the generator.
//!
//! Counts leaf nodes of the legal move tree to a fixed depth. With no
//! castling, en-passant, or promotion in the rule set, the counts match the
//! standard perft table from the starting position up to depth 4, which is
//! the cheapest exhaustive cross-check the generator has.

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;

/// Counts leaf nodes of the legal move tree rooted at the current position.
pub fn perft(game: &mut GameState, depth: u8) -> Result<usize, ChessErrors> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = generate_legal_moves(game)?;
    if depth == 1 {
        return Ok(moves.len());
    }

    let mut nodes = 0;
    for mv in moves {
        game.apply_move(mv);
        nodes += perft(game, depth - 1)?;
        game.undo_last();
    }
    Ok(nodes)
}
