use std::{fmt, str::FromStr};

use crate::{
    constants::{NUM_FILES, NUM_RANKS},
    types::Square,
};

impl Square {
    #[rustfmt::skip]
    pub const ALL: [Square; 64] = [
        Square::A1, Square::B1, Square::C1, Square::D1, Square::E1, Square::F1, Square::G1, Square::H1,
        Square::A2, Square::B2, Square::C2, Square::D2, Square::E2, Square::F2, Square::G2, Square::H2,
        Square::A3, Square::B3, Square::C3, Square::D3, Square::E3, Square::F3, Square::G3, Square::H3,
        Square::A4, Square::B4, Square::C4, Square::D4, Square::E4, Square::F4, Square::G4, Square::H4,
        Square::A5, Square::B5, Square::C5, Square::D5, Square::E5, Square::F5, Square::G5, Square::H5,
        Square::A6, Square::B6, Square::C6, Square::D6, Square::E6, Square::F6, Square::G6, Square::H6,
        Square::A7, Square::B7, Square::C7, Square::D7, Square::E7, Square::F7, Square::G7, Square::H7,
        Square::A8, Square::B8, Square::C8, Square::D8, Square::E8, Square::F8, Square::G8, Square::H8,
    ];

    pub fn iter() -> impl Iterator<Item = Square> {
        Square::ALL.into_iter()
    }

    /// 0-indexed (0-7)
    pub fn rank(self) -> u8 {
        self as u8 / NUM_FILES as u8
    }
    /// 0-indexed (0-7)
    pub fn file(self) -> u8 {
        (self as u8) % (NUM_FILES as u8)
    }

    /// Both coordinates 0-indexed. `None` off the board.
    pub fn from_coords(file: u8, rank: u8) -> Option<Square> {
        if file as usize >= NUM_FILES || rank as usize >= NUM_RANKS {
            return None;
        }

        Some(Square::ALL[rank as usize * NUM_FILES + file as usize])
    }

    /// The square `file_delta` files and `rank_delta` ranks away, if on the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file() as i8 + file_delta;
        let rank = self.rank() as i8 + rank_delta;

        if !(0..NUM_FILES as i8).contains(&file) || !(0..NUM_RANKS as i8).contains(&rank) {
            return None;
        }

        Square::from_coords(file as u8, rank as u8)
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file()) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank()) as char
    }

    /// Maps `a`-`h` to 0-7.
    pub fn file_from_char(c: char) -> Option<u8> {
        match c {
            'a'..='h' => Some(c as u8 - b'a'),
            _ => None,
        }
    }

    /// Maps `1`-`8` to 0-7.
    pub fn rank_from_char(c: char) -> Option<u8> {
        match c {
            '1'..='8' => Some(c as u8 - b'1'),
            _ => None,
        }
    }
}

impl TryFrom<i32> for Square {
    type Error = &'static str;

    /// Converts from a number representing the square index
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if !(0..=63).contains(&value) {
            return Err("Square index out of range (must be 0-63)");
        }

        Ok(Square::ALL[value as usize])
    }
}

impl TryFrom<u8> for Square {
    type Error = &'static str;

    /// Converts from a number representing the square index
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Square::ALL
            .get(value as usize)
            .copied()
            .ok_or("Square index out of range (must be 0-63)")
    }
}

impl FromStr for Square {
    type Err = &'static str;

    /// Parses coordinates like `e4`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => {
                let file = Square::file_from_char(file).ok_or("File must be a-h")?;
                let rank = Square::rank_from_char(rank).ok_or("Rank must be 1-8")?;
                Square::from_coords(file, rank).ok_or("Square off the board")
            }
            _ => Err("Square must be exactly two characters"),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
