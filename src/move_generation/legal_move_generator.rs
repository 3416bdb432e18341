//! Full legal move generation pipeline.
//!
//! Orchestrates the piece-wise pseudo-legal generators, answers the
//! square-attacked and check queries, and filters pseudo-legal candidates
//! down to legal moves with a brute-force make/unmake loop. Terminal
//! detection (checkmate/stalemate) falls out of the filter: no surviving
//! moves plus check is mate, no surviving moves without check is stalemate.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{piece_at, BoardLocation, PieceClass};
use crate::game_state::game_state::GameState;
use crate::move_generation::bishop_moves::generate_bishop_moves;
use crate::move_generation::king_moves::generate_king_moves;
use crate::move_generation::knight_moves::generate_knight_moves;
use crate::move_generation::pawn_moves::generate_pawn_moves;
use crate::move_generation::queen_moves::generate_queen_moves;
use crate::move_generation::rook_moves::generate_rook_moves;
use crate::moves::move_description::ChessMove;

/// Generates every pseudo-legal move for the side to move.
///
/// Scans all 64 squares and dispatches on the occupant's class. The result
/// obeys piece movement rules but may leave the mover's own king in check;
/// `generate_legal_moves` applies that filter.
pub fn generate_all_pseudo_legal_moves(
    game: &GameState,
) -> Result<Vec<ChessMove>, ChessErrors> {
    let mut out = Vec::with_capacity(64);
    for row in 0..8i8 {
        for col in 0..8i8 {
            let start: BoardLocation = (row, col);
            let Some(piece) = piece_at(&game.board, start) else {
                continue;
            };
            if piece.team != game.side_to_move {
                continue;
            }
            match piece.class {
                PieceClass::Pawn => generate_pawn_moves(game, start, &mut out)?,
                PieceClass::Knight => generate_knight_moves(game, start, &mut out)?,
                PieceClass::Bishop => generate_bishop_moves(game, start, &mut out)?,
                PieceClass::Rook => generate_rook_moves(game, start, &mut out)?,
                PieceClass::Queen => generate_queen_moves(game, start, &mut out)?,
                PieceClass::King => generate_king_moves(game, start, &mut out)?,
            }
        }
    }
    Ok(out)
}

/// Reports whether the side *not* to move attacks `target`.
///
/// Implemented as a full pseudo-legal re-generation for the opponent rather
/// than a specialized attack map: flip the side flag, generate, flip back,
/// and look for a move ending on the target square. O(board) per query by
/// design.
pub fn is_square_attacked(
    game: &mut GameState,
    target: BoardLocation,
) -> Result<bool, ChessErrors> {
    game.side_to_move = game.side_to_move.opposite();
    let opponent_moves = generate_all_pseudo_legal_moves(game);
    game.side_to_move = game.side_to_move.opposite();
    Ok(opponent_moves?.iter().any(|mv| mv.stop == target))
}

/// Reports whether the side to move is currently in check.
pub fn is_in_check(game: &mut GameState) -> Result<bool, ChessErrors> {
    let king_location = game.king_location(game.side_to_move);
    is_square_attacked(game, king_location)
}

/// Generates every legal move for the side to move and recomputes the
/// terminal flags.
///
/// Each pseudo-legal candidate is applied, tested for leaving the mover's
/// own king attacked, and undone, in original list order. `apply_move` has
/// already flipped the side to move, so the flag is flipped back to the
/// mover around the check test. O(moves²) overall; the accepted trade-off
/// of the brute-force make/unmake design.
pub fn generate_legal_moves(game: &mut GameState) -> Result<Vec<ChessMove>, ChessErrors> {
    let candidates = generate_all_pseudo_legal_moves(game)?;
    let mut legal = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        game.apply_move(candidate.clone());
        game.side_to_move = game.side_to_move.opposite();
        let exposes_king = is_in_check(game)?;
        game.side_to_move = game.side_to_move.opposite();
        game.undo_last();
        if !exposes_king {
            legal.push(candidate);
        }
    }

    if legal.is_empty() {
        if is_in_check(game)? {
            game.checkmate = true;
            game.stalemate = false;
        } else {
            game.stalemate = true;
            game.checkmate = false;
        }
    } else {
        game.checkmate = false;
        game.stalemate = false;
    }

    Ok(legal)
}
