//! Pseudo-legal king move generation.
//!
//! One step in each of the eight directions; there is no castling. Walking
//! into an attacked square is not this module's concern, the legality filter
//! rejects it.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{offset_location, piece_at, BoardLocation};
use crate::game_state::game_state::GameState;
use crate::moves::move_description::ChessMove;

/// The eight adjacent squares as `(d_row, d_col)`.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Appends every pseudo-legal king move from `start` to `out`.
pub fn generate_king_moves(
    game: &GameState,
    start: BoardLocation,
    out: &mut Vec<ChessMove>,
) -> Result<(), ChessErrors> {
    let king = piece_at(&game.board, start)
        .ok_or(ChessErrors::TryingToMoveNonExistantPiece(start))?;

    for (d_row, d_col) in KING_OFFSETS {
        if let Ok(target) = offset_location(start, d_row, d_col) {
            match piece_at(&game.board, target) {
                Some(occupant) if occupant.team == king.team => continue,
                _ => out.push(ChessMove::new(start, target, &game.board)?),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceTeam;
    use crate::utils::layout::parse_layout;

    fn moves_from(game: &GameState, start: BoardLocation) -> Vec<ChessMove> {
        let mut out = Vec::new();
        generate_king_moves(game, start, &mut out).expect("generation should succeed");
        out
    }

    #[test]
    fn boxed_in_king_has_no_moves() {
        let game = GameState::new_game();
        assert!(moves_from(&game, (7, 4)).is_empty());
    }

    #[test]
    fn corner_king_steps_and_captures_one_square_only() -> Result<(), ChessErrors> {
        let game = parse_layout(
            &[
                "bK -- -- -- -- -- -- --",
                "-- bp -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- wK --",
            ],
            PieceTeam::Dark,
        )?;
        let moves = moves_from(&game, (0, 0));
        // a7 and b8 are open; b7 holds an allied pawn.
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.stop == (1, 0)));
        assert!(moves.iter().any(|m| m.stop == (0, 1)));
        Ok(())
    }
}
