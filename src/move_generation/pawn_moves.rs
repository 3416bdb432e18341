//! Pseudo-legal pawn move generation.
//!
//! Pawns push one square toward the opposing back rank onto an empty square,
//! may push two from their starting row when both squares are empty, and
//! capture one square diagonally forward onto an enemy piece. There is no
//! en-passant and no promotion: a pawn reaching the last rank stays a pawn,
//! preserved as a known limitation of the source material rather than fixed
//! silently.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{offset_location, piece_at, BoardLocation, PieceTeam};
use crate::game_state::game_state::GameState;
use crate::moves::move_description::ChessMove;

/// Appends every pseudo-legal pawn move from `start` to `out`.
pub fn generate_pawn_moves(
    game: &GameState,
    start: BoardLocation,
    out: &mut Vec<ChessMove>,
) -> Result<(), ChessErrors> {
    let pawn = piece_at(&game.board, start)
        .ok_or(ChessErrors::TryingToMoveNonExistantPiece(start))?;

    // Light pawns walk toward row 0, dark pawns toward row 7.
    let (direction, start_row) = match pawn.team {
        PieceTeam::Light => (-1, 6),
        PieceTeam::Dark => (1, 1),
    };

    if let Ok(one_step) = offset_location(start, direction, 0) {
        if piece_at(&game.board, one_step).is_none() {
            out.push(ChessMove::new(start, one_step, &game.board)?);

            if start.0 == start_row {
                if let Ok(two_step) = offset_location(start, 2 * direction, 0) {
                    if piece_at(&game.board, two_step).is_none() {
                        out.push(ChessMove::new(start, two_step, &game.board)?);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        if let Ok(target) = offset_location(start, direction, d_col) {
            if let Some(victim) = piece_at(&game.board, target) {
                if victim.team != pawn.team {
                    out.push(ChessMove::new(start, target, &game.board)?);
                }
            }
        }
    }

    Ok(())
}
