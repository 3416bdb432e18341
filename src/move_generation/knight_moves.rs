//! Pseudo-legal knight move generation.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{offset_location, piece_at, BoardLocation};
use crate::game_state::game_state::GameState;
use crate::moves::move_description::ChessMove;

/// The eight fixed knight jumps as `(d_row, d_col)`.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Appends every pseudo-legal knight move from `start` to `out`. The jump
/// lands on any in-bounds square not occupied by an allied piece.
pub fn generate_knight_moves(
    game: &GameState,
    start: BoardLocation,
    out: &mut Vec<ChessMove>,
) -> Result<(), ChessErrors> {
    let knight = piece_at(&game.board, start)
        .ok_or(ChessErrors::TryingToMoveNonExistantPiece(start))?;

    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Ok(target) = offset_location(start, d_row, d_col) {
            match piece_at(&game.board, target) {
                Some(occupant) if occupant.team == knight.team => continue,
                _ => out.push(ChessMove::new(start, target, &game.board)?),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{set_piece, PieceClass, PieceRecord, PieceTeam};

    fn moves_from(game: &GameState, start: BoardLocation) -> Vec<ChessMove> {
        let mut out = Vec::new();
        generate_knight_moves(game, start, &mut out).expect("generation should succeed");
        out
    }

    #[test]
    fn two_jumps_from_the_home_square() {
        let game = GameState::new_game();
        let moves = moves_from(&game, (7, 1));
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.stop == (5, 0)));
        assert!(moves.iter().any(|m| m.stop == (5, 2)));
    }

    #[test]
    fn eight_jumps_from_an_open_center() -> Result<(), ChessErrors> {
        let game = crate::utils::layout::parse_layout(
            &[
                "bK -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- wN -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- wK",
            ],
            PieceTeam::Light,
        )?;
        assert_eq!(moves_from(&game, (4, 3)).len(), 8);
        Ok(())
    }

    #[test]
    fn captures_enemies_but_never_allies() {
        let mut game = GameState::new_game();
        let knight = piece_at(&game.board, (7, 1)).expect("b1 knight");
        set_piece(&mut game.board, (7, 1), None);
        set_piece(&mut game.board, (4, 3), Some(knight));
        set_piece(
            &mut game.board,
            (2, 2),
            Some(PieceRecord {
                class: PieceClass::Pawn,
                team: PieceTeam::Dark,
            }),
        );
        set_piece(
            &mut game.board,
            (2, 4),
            Some(PieceRecord {
                class: PieceClass::Pawn,
                team: PieceTeam::Light,
            }),
        );

        let moves = moves_from(&game, (4, 3));
        let capture = moves
            .iter()
            .find(|m| m.stop == (2, 2))
            .expect("enemy square should be reachable");
        assert_eq!(
            capture.captured_piece.map(|p| p.team),
            Some(PieceTeam::Dark)
        );
        assert!(!moves.iter().any(|m| m.stop == (2, 4)));
    }
}
