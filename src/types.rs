#[cfg(feature = "api")]
use serde::{Deserialize, Serialize};

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[rustfmt::skip]
pub enum Square {
  A1 = 0, B1, C1, D1, E1, F1, G1, H1,
  A2, B2, C2, D2, E2, F2, G2, H2,
  A3, B3, C3, D3, E3, F3, G3, H3,
  A4, B4, C4, D4, E4, F4, G4, H4,
  A5, B5, C5, D5, E5, F5, G5, H5,
  A6, B6, C6, D6, E6, F6, G6, H6,
  A7, B7, C7, D7, E7, F7, G7, H7,
  A8, B8, C8, D8, E8, F8, G8, H8,
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn = 0,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
pub enum Side {
    White = 0,
    Black = 1,
}

/// A piece together with the side that owns it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Unit {
    pub side: Side,
    pub piece: Piece,
}

/// Bit values match the FEN letters K, Q, k, q.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CastleRight {
    WhiteKingside = 1,
    WhiteQueenside = 2,
    BlackKingside = 4,
    BlackQueenside = 8,
}

/// Castling rights in the order they were granted.
///
/// FEN allows the letters in any order, and a parsed record must serialize
/// back to the same text, so the order is kept alongside the set. Granted
/// rights are packed at the front; the tail is always `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    order: [Option<CastleRight>; 4],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Unfinished,
}

impl Unit {
    pub const fn new(side: Side, piece: Piece) -> Self {
        Self { side, piece }
    }

    /// FEN letter: uppercase for white, lowercase for black
    pub fn to_fen_char(self) -> char {
        let letter = self.piece.to_char();

        match self.side {
            Side::White => letter,
            Side::Black => letter.to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(c: char) -> Option<Self> {
        let piece = Piece::from_char(c.to_ascii_uppercase())?;
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };

        Some(Self { side, piece })
    }
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    pub fn iter() -> impl Iterator<Item = Side> {
        [Side::White, Side::Black].into_iter()
    }

    /// +1 for white, -1 for black
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// 0-indexed rank the side's pawns start on
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    /// 0-indexed rank the side's pawns promote on
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    /// 0-indexed rank of the side's back row
    pub const fn home_rank(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    pub const fn to_fen_char(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Side::White),
            1 => Ok(Side::Black),
            _ => Err("Side index out of range (must be 0-1)"),
        }
    }
}

impl CastleRight {
    pub const ALL: [CastleRight; 4] = [
        CastleRight::WhiteKingside,
        CastleRight::WhiteQueenside,
        CastleRight::BlackKingside,
        CastleRight::BlackQueenside,
    ];

    pub const fn new(side: Side, castle_side: CastleSide) -> Self {
        match (side, castle_side) {
            (Side::White, CastleSide::Kingside) => CastleRight::WhiteKingside,
            (Side::White, CastleSide::Queenside) => CastleRight::WhiteQueenside,
            (Side::Black, CastleSide::Kingside) => CastleRight::BlackKingside,
            (Side::Black, CastleSide::Queenside) => CastleRight::BlackQueenside,
        }
    }

    pub const fn bit(self) -> u8 {
        self as u8
    }

    pub const fn to_fen_char(self) -> char {
        match self {
            CastleRight::WhiteKingside => 'K',
            CastleRight::WhiteQueenside => 'Q',
            CastleRight::BlackKingside => 'k',
            CastleRight::BlackQueenside => 'q',
        }
    }

    pub const fn from_fen_char(c: char) -> Option<Self> {
        match c {
            'K' => Some(CastleRight::WhiteKingside),
            'Q' => Some(CastleRight::WhiteQueenside),
            'k' => Some(CastleRight::BlackKingside),
            'q' => Some(CastleRight::BlackQueenside),
            _ => None,
        }
    }
}

impl CastlingRights {
    pub const fn none() -> Self {
        Self { order: [None; 4] }
    }

    /// KQkq
    pub const fn all() -> Self {
        Self {
            order: [
                Some(CastleRight::WhiteKingside),
                Some(CastleRight::WhiteQueenside),
                Some(CastleRight::BlackKingside),
                Some(CastleRight::BlackQueenside),
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order[0].is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> impl Iterator<Item = CastleRight> + '_ {
        self.order.iter().map_while(|slot| *slot)
    }

    pub fn contains(&self, right: CastleRight) -> bool {
        self.iter().any(|granted| granted == right)
    }

    /// Appends `right`; returns false if it was already granted.
    pub fn insert(&mut self, right: CastleRight) -> bool {
        if self.contains(right) {
            return false;
        }

        let len = self.len();
        self.order[len] = Some(right);
        true
    }

    /// Keeps only the rights whose bit is set in `mask`, preserving order.
    pub fn retain_mask(&mut self, mask: u8) {
        let mut kept = [None; 4];

        for (slot, right) in kept
            .iter_mut()
            .zip(self.iter().filter(|right| right.bit() & mask != 0))
        {
            *slot = Some(right);
        }

        self.order = kept;
    }

    /// Castle permission bits (K=1, Q=2, k=4, q=8)
    pub fn mask(&self) -> u8 {
        self.iter().fold(0, |bits, right| bits | right.bit())
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::none()
    }
}

impl GameResult {
    pub const fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Unfinished => "*",
        }
    }

    /// Parses a movetext result marker such as `1-0` or `*`.
    pub fn from_marker(text: &str) -> Option<Self> {
        match text {
            "1-0" => Some(GameResult::WhiteWins),
            "0-1" => Some(GameResult::BlackWins),
            "1/2-1/2" => Some(GameResult::Draw),
            "*" => Some(GameResult::Unfinished),
            _ => None,
        }
    }
}
