//! Forsyth–Edwards Notation codec.
//!
//! `serialize(parse(f)) == f` holds for every canonical record: castling
//! letters keep their input order and the en passant square is written back
//! exactly as it was read.

use crate::{
    board::Board,
    constants::{NUM_FILES, NUM_RANKS},
    error::{FenError, Result},
    position::Position,
    types::{CastleRight, CastlingRights, Side, Square, Unit},
};

pub fn parse(fen: &str) -> Result<Position> {
    let fields: Vec<&str> = fen.split_whitespace().collect();

    let [placement, side, castling, en_passant, halfmove, fullmove] = fields[..] else {
        return Err(FenError::FieldCount(fields.len()).into());
    };

    let board = parse_placement(placement)?;

    let side = match side {
        "w" => Side::White,
        "b" => Side::Black,
        _ => return Err(FenError::SideToMove(side.to_string()).into()),
    };

    let castling = parse_castling(castling)?;

    let en_passant = match en_passant {
        "-" => None,
        square => Some(
            square
                .parse::<Square>()
                .map_err(|_| FenError::EnPassant(square.to_string()))?,
        ),
    };

    let halfmove_clock = parse_counter(halfmove)
        .ok_or_else(|| FenError::HalfmoveClock(halfmove.to_string()))?;
    let fullmove_number = parse_counter(fullmove)
        .filter(|&number| number > 0)
        .ok_or_else(|| FenError::FullmoveNumber(fullmove.to_string()))?;

    Ok(Position {
        board,
        side,
        castling,
        en_passant,
        halfmove_clock,
        fullmove_number,
    })
}

pub fn serialize(position: &Position) -> String {
    let mut fen = String::new();

    for rank in (0..NUM_RANKS).rev() {
        let mut empty_count = 0;

        for unit in position.board.rank(rank) {
            match unit {
                None => empty_count += 1,
                Some(unit) => {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(unit.to_fen_char());
                }
            }
        }

        if empty_count > 0 {
            fen.push_str(&empty_count.to_string());
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(position.side.to_fen_char());

    fen.push(' ');
    if position.castling.is_empty() {
        fen.push('-');
    } else {
        fen.extend(position.castling.iter().map(CastleRight::to_fen_char));
    }

    fen.push(' ');
    match position.en_passant {
        Some(square) => fen.push_str(&square.to_string()),
        None => fen.push('-'),
    }

    fen.push_str(&format!(
        " {} {}",
        position.halfmove_clock, position.fullmove_number
    ));

    fen
}

/// Walks rank 8 down to rank 1; `/` moves to the next rank down.
fn parse_placement(placement: &str) -> Result<Board> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != NUM_RANKS {
        return Err(FenError::RankCount(ranks.len()).into());
    }

    let mut board = Board::empty();

    for (index, rank_text) in ranks.iter().enumerate() {
        let rank = (NUM_RANKS - 1 - index) as u8;
        let mut file = 0usize;

        for c in rank_text.chars() {
            if let Some(empty_squares) = c.to_digit(10) {
                if !(1..=NUM_FILES as u32).contains(&empty_squares) {
                    return Err(FenError::PlacementChar(c).into());
                }
                file += empty_squares as usize;
                continue;
            }

            let unit = Unit::from_fen_char(c).ok_or(FenError::PlacementChar(c))?;

            if let Some(square) = Square::from_coords(file as u8, rank) {
                board.add_piece(unit.side, unit.piece, square);
            }
            file += 1;
        }

        // Squares past the h-file are never written; the width check rejects them.
        if file != NUM_FILES {
            return Err(FenError::RankWidth {
                rank: rank + 1,
                files: file,
            }
            .into());
        }
    }

    Ok(board)
}

fn parse_castling(field: &str) -> Result<CastlingRights> {
    let mut rights = CastlingRights::none();

    if field == "-" {
        return Ok(rights);
    }

    for c in field.chars() {
        let right = CastleRight::from_fen_char(c)
            .ok_or_else(|| FenError::Castling(field.to_string()))?;

        if !rights.insert(right) {
            return Err(FenError::Castling(field.to_string()).into());
        }
    }

    Ok(rights)
}

/// Plain base-10 digits that fit a `u32`
fn parse_counter(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    field.parse().ok()
}
