//! Coordinate conversions for algebraic square names.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! `(row, col)` board locations. Files 'a'..'h' run left to right from the
//! light side; ranks '1'..'8' run bottom to top, so rank `r` maps to row
//! `8 - r`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{location_in_bounds, BoardLocation};

/// Convert an algebraic square name (for example: "e4") to a board location.
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    let col = (file - b'a') as i8;
    let row = 8 - (rank - b'0') as i8;
    Ok((row, col))
}

/// Convert a board location to an algebraic square name (for example: "e4").
pub fn location_to_algebraic(x: BoardLocation) -> Result<String, ChessErrors> {
    if !location_in_bounds(x) {
        return Err(ChessErrors::InvalidFileOrRank(x));
    }

    let file_char = char::from(b'a' + x.1 as u8);
    let rank_char = char::from(b'0' + (8 - x.0) as u8);
    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_location, location_to_algebraic};

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_location("a1").expect("a1 should parse"), (7, 0));
        assert_eq!(algebraic_to_location("h8").expect("h8 should parse"), (0, 7));
        assert_eq!(algebraic_to_location("e2").expect("e2 should parse"), (6, 4));
        assert_eq!(location_to_algebraic((7, 0)).expect("(7,0) should convert"), "a1");
        assert_eq!(location_to_algebraic((0, 7)).expect("(0,7) should convert"), "h8");
        assert_eq!(location_to_algebraic((4, 4)).expect("(4,4) should convert"), "e4");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        assert!(algebraic_to_location("").is_err());
        assert!(algebraic_to_location("e").is_err());
        assert!(algebraic_to_location("i4").is_err());
        assert!(algebraic_to_location("e9").is_err());
        assert!(location_to_algebraic((8, 0)).is_err());
        assert!(location_to_algebraic((0, -1)).is_err());
    }
}
