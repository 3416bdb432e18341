//! Core board representation types.
//!
//! The board is a plain 8x8 grid of optional piece records, indexed by
//! `(row, col)` with row 0 as Dark's back rank and row 7 as Light's back
//! rank. Rule knowledge lives in `move_generation`; this module only answers
//! "what is on each square".

use crate::chess_errors::ChessErrors;

/// Represents the team (color) of a chess piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceTeam {
    /// The light (white) side.
    Light,
    /// The dark (black) side.
    Dark,
}

impl PieceTeam {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceTeam::Light => PieceTeam::Dark,
            PieceTeam::Dark => PieceTeam::Light,
        }
    }
}

/// Represents the type (class) of a chess piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceClass {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece on the board: class plus team.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    pub class: PieceClass,
    pub team: PieceTeam,
}

/// Board coordinate as `(row, col)`, each in `0..=7`.
pub type BoardLocation = (i8, i8);

/// The 8x8 grid of square contents.
pub type Board = [[Option<PieceRecord>; 8]; 8];

/// Reports whether a location lies inside the 8x8 grid.
#[inline]
pub fn location_in_bounds(x: BoardLocation) -> bool {
    (0..=7).contains(&x.0) && (0..=7).contains(&x.1)
}

/// Moves a board location by a row and column offset.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_row` - The row offset.
/// * `d_col` - The column offset.
///
/// # Returns
///
/// * `Result<BoardLocation, ChessErrors>` - The new board location if within
///   bounds, otherwise `TriedToMoveOutOfBounds`.
#[inline]
pub fn offset_location(
    x: BoardLocation,
    d_row: i8,
    d_col: i8,
) -> Result<BoardLocation, ChessErrors> {
    let y: BoardLocation = (x.0 + d_row, x.1 + d_col);
    if location_in_bounds(y) {
        Ok(y)
    } else {
        Err(ChessErrors::TriedToMoveOutOfBounds((x, d_row, d_col)))
    }
}

/// Reads the square contents at a location. Caller guarantees bounds.
#[inline]
pub fn piece_at(board: &Board, x: BoardLocation) -> Option<PieceRecord> {
    board[x.0 as usize][x.1 as usize]
}

/// Writes the square contents at a location. Caller guarantees bounds.
#[inline]
pub fn set_piece(board: &mut Board, x: BoardLocation, piece: Option<PieceRecord>) {
    board[x.0 as usize][x.1 as usize] = piece;
}
