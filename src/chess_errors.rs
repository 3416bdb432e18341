//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type across the crate. Functions in the
//! engine return `Result<..., ChessErrors>` for expected failure modes
//! (invalid input coordinates, unparseable notation, malformed board
//! layouts); callers match on the variants to present diagnostics or to
//! reject external input before it reaches the mutation methods.

use crate::game_state::chess_types::{BoardLocation, PieceTeam};

/// Unified error type for the chess engine.
///
/// Variants carry contextual payloads (the offending location, character, or
/// token) so callers can log precise diagnostics.
#[derive(Debug)]
pub enum ChessErrors {
    /// Generic failure used in tests as a catch-all.
    FailedTest,

    /// Offsetting `BoardLocation` by the delta `(d_row, d_col)` would leave
    /// the board.
    ///
    /// Payload: (origin_location, d_row, d_col)
    TriedToMoveOutOfBounds((BoardLocation, i8, i8)),

    /// Row or column indices outside `0..=7` were supplied by a caller.
    ///
    /// Payload: the rejected (row, col) pair.
    InvalidFileOrRank(BoardLocation),

    /// Attempted to build a move starting from an empty square.
    ///
    /// Payload: the empty square's location.
    TryingToMoveNonExistantPiece(BoardLocation),

    /// A single character used during algebraic parsing was invalid (a file
    /// outside 'a'..'h' or a rank outside '1'..'8').
    InvalidAlgebraicChar(char),

    /// An algebraic string failed to parse as a coordinate move.
    ///
    /// Payload: the original string.
    InvalidAlgebraicString(String),

    /// A two-character piece code in a board layout was not recognised.
    ///
    /// Payload: the offending token.
    InvalidLayoutToken(String),

    /// A board layout row did not contain exactly eight square tokens.
    ///
    /// Payload: the offending row text.
    InvalidLayoutRow(String),

    /// A board layout did not contain exactly one king for the given team.
    ///
    /// The attack and check queries assume one king per side, so such a
    /// layout is refused at construction time.
    LayoutMissingKing(PieceTeam),
}
