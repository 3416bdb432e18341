//! Immutable description of a single ply.
//!
//! A `ChessMove` snapshots the moved and captured pieces from the board at
//! construction time, which is what makes the move reversible later: the
//! undo path never has to consult the (by then mutated) board to learn what
//! stood on either square.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{
    location_in_bounds, piece_at, Board, BoardLocation, PieceRecord,
};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_location;

/// One ply: start square, stop square, and what stood on each before the
/// move was made.
#[derive(Clone, Debug)]
pub struct ChessMove {
    pub start: BoardLocation,
    pub stop: BoardLocation,
    pub moved_piece: PieceRecord,
    pub captured_piece: Option<PieceRecord>,
}

impl ChessMove {
    /// Builds a move by snapshotting the board at `start` and `stop`.
    ///
    /// This is the entry point for externally supplied coordinates (for
    /// example pointer input translated to squares), so it fails fast rather
    /// than trusting the caller: out-of-range coordinates are rejected with
    /// `InvalidFileOrRank` and an empty start square with
    /// `TryingToMoveNonExistantPiece`. The generators use the same
    /// constructor with coordinates they have already validated.
    pub fn new(
        start: BoardLocation,
        stop: BoardLocation,
        board: &Board,
    ) -> Result<Self, ChessErrors> {
        if !location_in_bounds(start) {
            return Err(ChessErrors::InvalidFileOrRank(start));
        }
        if !location_in_bounds(stop) {
            return Err(ChessErrors::InvalidFileOrRank(stop));
        }
        let moved_piece =
            piece_at(board, start).ok_or(ChessErrors::TryingToMoveNonExistantPiece(start))?;
        Ok(ChessMove {
            start,
            stop,
            moved_piece,
            captured_piece: piece_at(board, stop),
        })
    }

    /// Attempts to create a `ChessMove` from coordinate notation (e.g.,
    /// "e2e4") against the current board. The result is a candidate only;
    /// callers decide legality by checking membership in the legal move
    /// list.
    pub fn from_algebraic(game: &GameState, x: &str) -> Result<Self, ChessErrors> {
        let x = x.trim();
        if x.len() != 4 || !x.is_ascii() {
            return Err(ChessErrors::InvalidAlgebraicString(x.to_owned()));
        }
        let start = algebraic_to_location(&x[0..2])?;
        let stop = algebraic_to_location(&x[2..4])?;
        ChessMove::new(start, stop, &game.board)
    }

    /// Derived equality key: deterministic in the four coordinates and
    /// nothing else, so a move proposed from raw (start, stop) squares
    /// compares equal to the generated candidate regardless of piece fields.
    #[inline]
    pub fn key(&self) -> i32 {
        self.start.0 as i32 * 1000
            + self.start.1 as i32 * 100
            + self.stop.0 as i32 * 10
            + self.stop.1 as i32
    }

    /// Renders the move in 4-character coordinate form (e.g., "e2e4"). No
    /// disambiguation, check symbols, or capture notation.
    pub fn to_algebraic(&self) -> String {
        fn square_to_str(x: &BoardLocation) -> String {
            let file = char::from(b'a' + x.1 as u8);
            let rank = char::from(b'0' + (8 - x.0) as u8);
            format!("{file}{rank}")
        }
        format!("{}{}", square_to_str(&self.start), square_to_str(&self.stop))
    }
}

/// Two moves are equal iff their coordinate keys match.
impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ChessMove {}
