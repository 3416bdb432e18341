//! Authoritative game state and its two mutation methods.
//!
//! `GameState` owns the board, the side-to-move flag, cached king locations,
//! the chronological move log used for undo, and the transient terminal
//! flags. `apply_move` and `undo_last` are the only mutations; both keep the
//! king caches in sync with the board, which is what gives the check query
//! its O(1) king lookup.

use crate::game_state::chess_types::{
    set_piece, Board, BoardLocation, PieceClass, PieceTeam,
};
use crate::moves::move_description::ChessMove;
use crate::utils::layout::{parse_layout, STARTING_LAYOUT};

/// Full state of one game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: PieceTeam,
    /// Cached location of the light king; equals the board's king square
    /// after every mutation.
    pub light_king_location: BoardLocation,
    /// Cached location of the dark king; same invariant.
    pub dark_king_location: BoardLocation,
    /// Chronological undo log of applied moves.
    pub move_log: Vec<ChessMove>,
    /// Meaningful only immediately after a legal-move query on the current
    /// position; cleared by any mutation.
    pub checkmate: bool,
    pub stalemate: bool,
}

impl GameState {
    /// Standard starting position, light to move.
    pub fn new_game() -> Self {
        parse_layout(&STARTING_LAYOUT, PieceTeam::Light)
            .expect("starting layout should always parse")
    }

    /// Cached king square for one team.
    #[inline]
    pub fn king_location(&self, team: PieceTeam) -> BoardLocation {
        match team {
            PieceTeam::Light => self.light_king_location,
            PieceTeam::Dark => self.dark_king_location,
        }
    }

    #[inline]
    fn set_king_location(&mut self, team: PieceTeam, x: BoardLocation) {
        match team {
            PieceTeam::Light => self.light_king_location = x,
            PieceTeam::Dark => self.dark_king_location = x,
        }
    }

    /// Applies a move without any legality checking; this operation trusts
    /// its caller to have taken the move from the legal move list.
    ///
    /// Clears the start square, places the snapshotted piece on the stop
    /// square, pushes the move onto the undo log, flips the side to move,
    /// and keeps the king cache current when a king moved.
    pub fn apply_move(&mut self, mv: ChessMove) {
        set_piece(&mut self.board, mv.start, None);
        set_piece(&mut self.board, mv.stop, Some(mv.moved_piece));
        if mv.moved_piece.class == PieceClass::King {
            self.set_king_location(mv.moved_piece.team, mv.stop);
        }
        self.side_to_move = self.side_to_move.opposite();
        self.move_log.push(mv);
    }

    /// Reverses the most recent move; a no-op when the log is empty.
    ///
    /// Restores both squares from the move's snapshots, flips the side to
    /// move back, restores the king cache, and clears both terminal flags
    /// (the position is no longer known to be terminal).
    pub fn undo_last(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        set_piece(&mut self.board, mv.start, Some(mv.moved_piece));
        set_piece(&mut self.board, mv.stop, mv.captured_piece);
        if mv.moved_piece.class == PieceClass::King {
            self.set_king_location(mv.moved_piece.team, mv.start);
        }
        self.side_to_move = self.side_to_move.opposite();
        self.checkmate = false;
        self.stalemate = false;
    }
}
