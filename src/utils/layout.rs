//! Board layout parsing and generation.
//!
//! Positions enter and leave the engine as eight rows of two-character piece
//! codes ("wp", "bR", "--" for empty), row 0 first (Dark's back rank). The
//! parser is how `new_game` builds the start position and how tests set up
//! fixture positions; the generator emits the same form for diagnostics.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{
    piece_at, set_piece, Board, BoardLocation, PieceClass, PieceRecord, PieceTeam,
};
use crate::game_state::game_state::GameState;

/// The standard starting position in layout form.
pub const STARTING_LAYOUT: [&str; 8] = [
    "bR bN bB bQ bK bB bN bR",
    "bp bp bp bp bp bp bp bp",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "wp wp wp wp wp wp wp wp",
    "wR wN wB wQ wK wB wN wR",
];

/// Parses eight layout rows into a fresh `GameState` with an empty move log
/// and cleared terminal flags.
///
/// Each row holds eight whitespace-separated tokens. A token is either "--"
/// or a team character ('w'/'b') followed by a class character
/// ('p', 'N', 'B', 'R', 'Q', 'K'; class characters are accepted in either
/// case). Exactly one king per team is required, since the check queries
/// rely on the king caches this function seeds.
pub fn parse_layout(
    rows: &[&str; 8],
    side_to_move: PieceTeam,
) -> Result<GameState, ChessErrors> {
    let mut board: Board = [[None; 8]; 8];
    let mut light_king: Option<BoardLocation> = None;
    let mut dark_king: Option<BoardLocation> = None;

    for (row, row_text) in rows.iter().enumerate() {
        let tokens: Vec<&str> = row_text.split_whitespace().collect();
        if tokens.len() != 8 {
            return Err(ChessErrors::InvalidLayoutRow((*row_text).to_owned()));
        }
        for (col, token) in tokens.iter().enumerate() {
            let Some(piece) = parse_token(token)? else {
                continue;
            };
            let location: BoardLocation = (row as i8, col as i8);
            if piece.class == PieceClass::King {
                match piece.team {
                    PieceTeam::Light => light_king = Some(location),
                    PieceTeam::Dark => dark_king = Some(location),
                }
            }
            set_piece(&mut board, location, Some(piece));
        }
    }

    let light_king_location =
        light_king.ok_or(ChessErrors::LayoutMissingKing(PieceTeam::Light))?;
    let dark_king_location =
        dark_king.ok_or(ChessErrors::LayoutMissingKing(PieceTeam::Dark))?;

    Ok(GameState {
        board,
        side_to_move,
        light_king_location,
        dark_king_location,
        move_log: Vec::new(),
        checkmate: false,
        stalemate: false,
    })
}

fn parse_token(token: &str) -> Result<Option<PieceRecord>, ChessErrors> {
    if token == "--" {
        return Ok(None);
    }
    let mut chars = token.chars();
    let (Some(team_char), Some(class_char), None) =
        (chars.next(), chars.next(), chars.next())
    else {
        return Err(ChessErrors::InvalidLayoutToken(token.to_owned()));
    };

    let team = match team_char {
        'w' => PieceTeam::Light,
        'b' => PieceTeam::Dark,
        _ => return Err(ChessErrors::InvalidLayoutToken(token.to_owned())),
    };
    let class = match class_char {
        'p' | 'P' => PieceClass::Pawn,
        'n' | 'N' => PieceClass::Knight,
        'b' | 'B' => PieceClass::Bishop,
        'r' | 'R' => PieceClass::Rook,
        'q' | 'Q' => PieceClass::Queen,
        'k' | 'K' => PieceClass::King,
        _ => return Err(ChessErrors::InvalidLayoutToken(token.to_owned())),
    };
    Ok(Some(PieceRecord { class, team }))
}

/// Emits the current board in the same row form the parser accepts.
pub fn generate_layout(game: &GameState) -> [String; 8] {
    std::array::from_fn(|row| {
        let mut out = String::with_capacity(23);
        for col in 0..8 {
            if col > 0 {
                out.push(' ');
            }
            match piece_at(&game.board, (row as i8, col as i8)) {
                Some(piece) => {
                    out.push(match piece.team {
                        PieceTeam::Light => 'w',
                        PieceTeam::Dark => 'b',
                    });
                    out.push(match piece.class {
                        PieceClass::Pawn => 'p',
                        PieceClass::Knight => 'N',
                        PieceClass::Bishop => 'B',
                        PieceClass::Rook => 'R',
                        PieceClass::Queen => 'Q',
                        PieceClass::King => 'K',
                    });
                }
                None => out.push_str("--"),
            }
        }
        out
    })
}
