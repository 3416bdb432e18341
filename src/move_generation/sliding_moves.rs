//! Shared ray walker for the sliding pieces.
//!
//! Bishop, rook, and queen generation all walk outward along a direction
//! table until the board edge, an allied piece (stop short), or an enemy
//! piece (take the capture, then stop).

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{offset_location, piece_at, BoardLocation};
use crate::game_state::game_state::GameState;
use crate::moves::move_description::ChessMove;

/// Orthogonal ray directions as `(d_row, d_col)`.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal ray directions as `(d_row, d_col)`.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Appends every ray move from `start` along `directions` to `out`.
pub fn generate_sliding_moves(
    game: &GameState,
    start: BoardLocation,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) -> Result<(), ChessErrors> {
    let mover = piece_at(&game.board, start)
        .ok_or(ChessErrors::TryingToMoveNonExistantPiece(start))?;

    for &(d_row, d_col) in directions {
        let mut current = start;
        while let Ok(next) = offset_location(current, d_row, d_col) {
            match piece_at(&game.board, next) {
                None => {
                    out.push(ChessMove::new(start, next, &game.board)?);
                    current = next;
                }
                Some(blocker) if blocker.team != mover.team => {
                    out.push(ChessMove::new(start, next, &game.board)?);
                    break;
                }
                Some(_) => break,
            }
        }
    }
    Ok(())
}
