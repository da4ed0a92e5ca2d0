use std::{fmt, str::FromStr};

use crate::{
    error::{NotationError, Result},
    position::Position,
    resolver,
    types::{Piece, Side, Square},
};

/// Coordinate move such as `e2e4` or `a7a8q`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UciMove {
    pub from: Square,
    pub to: Square,
    pub promote: Option<Piece>,
}

/// Standard algebraic token such as `Nf3`, `exd5`, `O-O` or `e8=Q+`.
///
/// Only non-emptiness is checked on construction; the resolver decides whether
/// the token describes a move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SanMove(String);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveNotation {
    Uci(UciMove),
    San(SanMove),
}

/// A move in either notation, tagged with the side that made it
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub side: Side,
    pub notation: MoveNotation,
}

impl UciMove {
    pub const fn new(from: Square, to: Square, promote: Option<Piece>) -> Self {
        Self { from, to, promote }
    }
}

impl FromStr for UciMove {
    type Err = NotationError;

    /// Parse a UCI move string (e.g. "e2e4", "e7e8q")
    fn from_str(move_str: &str) -> Result<Self> {
        let invalid = || NotationError::InvalidMoveFormat(move_str.to_string());
        let chars: Vec<char> = move_str.chars().collect();

        if chars.len() != 4 && chars.len() != 5 {
            return Err(invalid());
        }

        let square = |file: char, rank: char| {
            Square::file_from_char(file)
                .zip(Square::rank_from_char(rank))
                .and_then(|(file, rank)| Square::from_coords(file, rank))
        };

        let from = square(chars[0], chars[1]).ok_or_else(invalid)?;
        let to = square(chars[2], chars[3]).ok_or_else(invalid)?;

        let promote = match chars.get(4) {
            None => None,
            Some(&letter) if letter.is_ascii_lowercase() => {
                let piece = Piece::from_char(letter.to_ascii_uppercase())
                    .filter(|piece| piece.is_promotion_target())
                    .ok_or_else(invalid)?;
                Some(piece)
            }
            Some(_) => return Err(invalid()),
        };

        Ok(Self { from, to, promote })
    }
}

impl fmt::Display for UciMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;

        if let Some(piece) = self.promote {
            write!(f, "{}", piece.to_uci_char())?;
        }

        Ok(())
    }
}

impl SanMove {
    pub fn new(token: &str) -> Result<Self> {
        let token = token.trim();

        if token.is_empty() {
            return Err(NotationError::UnsupportedNotation(token.to_string()));
        }

        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SanMove {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self> {
        SanMove::new(s)
    }
}

impl fmt::Display for SanMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Move {
    pub fn uci(side: Side, move_str: &str) -> Result<Self> {
        Ok(Self {
            side,
            notation: MoveNotation::Uci(move_str.parse()?),
        })
    }

    pub fn san(side: Side, token: &str) -> Result<Self> {
        Ok(Self {
            side,
            notation: MoveNotation::San(SanMove::new(token)?),
        })
    }

    /// The fully specified coordinate move. SAN is resolved against `position`,
    /// which must have this move's side to move.
    pub fn resolve(&self, position: &Position) -> Result<UciMove> {
        if self.side != position.side {
            return Err(NotationError::NoLegalOrigin(self.to_string()));
        }

        match &self.notation {
            MoveNotation::Uci(uci) => Ok(*uci),
            MoveNotation::San(san) => resolver::resolve(position, san.as_str()),
        }
    }

    /// Same side, UCI notation
    pub fn into_resolved(self, position: &Position) -> Result<Move> {
        let uci = self.resolve(position)?;

        Ok(Move {
            side: self.side,
            notation: MoveNotation::Uci(uci),
        })
    }
}

impl fmt::Display for MoveNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveNotation::Uci(uci) => uci.fmt(f),
            MoveNotation::San(san) => san.fmt(f),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.notation.fmt(f)
    }
}
