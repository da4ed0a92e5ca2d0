//! Standard Algebraic Notation tokens, parsed without a position.

use std::str::FromStr;

use crate::{
    constants::SAN_SUFFIXES,
    error::{NotationError, Result},
    types::{CastleSide, Piece, Square},
};

/// The shape of a SAN token. Which piece actually moves is decided by
/// [`crate::resolver::resolve`] against a position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum San {
    Castle(CastleSide),
    Normal {
        piece: Piece,
        file: Option<u8>,
        rank: Option<u8>,
        capture: bool,
        to: Square,
        promote: Option<Piece>,
    },
}

/// Drops check/mate marks and annotation glyphs (`!`, `?`, `!!`, `?!`, ...).
pub fn strip_suffixes(token: &str) -> &str {
    token.trim_end_matches(SAN_SUFFIXES)
}

impl San {
    pub fn parse(token: &str) -> Result<San> {
        let unsupported = || NotationError::UnsupportedNotation(token.to_string());
        let body = strip_suffixes(token.trim());

        match body {
            "O-O" | "0-0" => return Ok(San::Castle(CastleSide::Kingside)),
            "O-O-O" | "0-0-0" => return Ok(San::Castle(CastleSide::Queenside)),
            _ => {}
        }

        let (body, promote) = match body.split_once('=') {
            None => (body, None),
            Some((body, letter)) => {
                let mut letters = letter.chars();
                let piece = letters
                    .next()
                    .and_then(Piece::from_char)
                    .filter(|piece| piece.is_promotion_target())
                    .ok_or_else(unsupported)?;
                if letters.next().is_some() {
                    return Err(unsupported());
                }
                (body, Some(piece))
            }
        };

        let chars: Vec<char> = body.chars().collect();

        let (piece, hints_start) = match chars.first() {
            Some('N' | 'B' | 'R' | 'Q' | 'K') => {
                let piece = Piece::from_char(chars[0]).ok_or_else(unsupported)?;
                (piece, 1)
            }
            Some('a'..='h') => (Piece::Pawn, 0),
            _ => return Err(unsupported()),
        };

        if piece != Piece::Pawn && promote.is_some() {
            return Err(unsupported());
        }
        if chars.len() < hints_start + 2 {
            return Err(unsupported());
        }

        let split = chars.len() - 2;
        let to = Square::file_from_char(chars[split])
            .zip(Square::rank_from_char(chars[split + 1]))
            .and_then(|(file, rank)| Square::from_coords(file, rank))
            .ok_or_else(unsupported)?;

        let mut file = None;
        let mut rank = None;
        let mut capture = false;

        for &c in &chars[hints_start..split] {
            if let Some(hint) = Square::file_from_char(c) {
                file = Some(hint);
            } else if let Some(hint) = Square::rank_from_char(c) {
                rank = Some(hint);
            } else if c == 'x' {
                capture = true;
            } else {
                return Err(unsupported());
            }
        }

        Ok(San::Normal {
            piece,
            file,
            rank,
            capture,
            to,
            promote,
        })
    }
}

impl FromStr for San {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self> {
        San::parse(s)
    }
}
