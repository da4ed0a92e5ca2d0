use std::fmt::Write as _;

use crate::{
    constants::{INIT_BOARD, INIT_COLOR, NUM_FILES, NUM_RANKS},
    types::{Piece, Side, Square, Unit},
};

/// 8x8 grid indexed `[rank][file]`, rank 0 being rank "1".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Unit>; NUM_FILES]; NUM_RANKS],
}

impl Board {
    /// Standard starting arrangement
    pub fn new() -> Self {
        let mut board = Self::empty();

        for square in Square::iter() {
            let piece = Piece::try_from(INIT_BOARD[square as usize]);
            let side = Side::try_from(INIT_COLOR[square as usize]);

            if let (Ok(piece), Ok(side)) = (piece, side) {
                board.add_piece(side, piece, square);
            }
        }

        board
    }

    pub const fn empty() -> Self {
        Self {
            squares: [[None; NUM_FILES]; NUM_RANKS],
        }
    }

    pub fn get(&self, square: Square) -> Option<Unit> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Raw rank access, rank 0 being rank "1"
    pub fn rank(&self, rank: usize) -> &[Option<Unit>; NUM_FILES] {
        &self.squares[rank]
    }

    pub fn add_piece(&mut self, side: Side, piece: Piece, square: Square) {
        self.set(square, Some(Unit::new(side, piece)));
    }

    /// Clears the square and returns whatever stood on it
    pub fn remove_piece(&mut self, square: Square) -> Option<Unit> {
        let unit = self.get(square);
        self.set(square, None);
        unit
    }

    /// Moves whatever stands on `from` to `to`, returning the unit that was
    /// captured on `to`
    pub fn update_piece(&mut self, from: Square, to: Square) -> Option<Unit> {
        let moving = self.remove_piece(from);
        let captured = self.get(to);
        self.set(to, moving);
        captured
    }

    /// Squares holding `piece` of `side`, from a1 towards h8
    pub fn squares_of(&self, side: Side, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        let wanted = Unit::new(side, piece);
        Square::iter().filter(move |&square| self.get(square) == Some(wanted))
    }

    /// Text diagram with rank and file labels. Empty squares print as `.`
    pub fn diagram(&self, flip: bool) -> String {
        let mut out = String::new();

        let ranks: Vec<usize> = if flip {
            (0..NUM_RANKS).collect()
        } else {
            (0..NUM_RANKS).rev().collect()
        };
        let files: Vec<usize> = if flip {
            (0..NUM_FILES).rev().collect()
        } else {
            (0..NUM_FILES).collect()
        };

        for &rank in &ranks {
            let _ = write!(out, "{} ", rank + 1);
            for &file in &files {
                let symbol = self.squares[rank][file].map_or('.', Unit::to_fen_char);
                let _ = write!(out, " {symbol}");
            }
            out.push('\n');
        }

        out.push_str("  ");
        for &file in &files {
            let _ = write!(out, " {}", (b'a' + file as u8) as char);
        }
        out.push('\n');

        out
    }

    fn set(&mut self, square: Square, unit: Option<Unit>) {
        self.squares[square.rank() as usize][square.file() as usize] = unit;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_matches_start_arrangement() {
        let board = Board::new();

        assert_eq!(board.get(Square::A1), Some(Unit::new(Side::White, Piece::Rook)));
        assert_eq!(board.get(Square::E1), Some(Unit::new(Side::White, Piece::King)));
        assert_eq!(board.get(Square::D8), Some(Unit::new(Side::Black, Piece::Queen)));
        assert_eq!(board.get(Square::G7), Some(Unit::new(Side::Black, Piece::Pawn)));
        assert!(board.is_empty(Square::E4));
        assert_eq!(board.squares_of(Side::White, Piece::Pawn).count(), 8);
        assert_eq!(
            board.squares_of(Side::Black, Piece::King).collect::<Vec<_>>(),
            vec![Square::E8]
        );
    }

    #[test]
    fn test_update_piece_reports_capture() {
        let mut board = Board::empty();
        board.add_piece(Side::White, Piece::Rook, Square::A1);
        board.add_piece(Side::Black, Piece::Knight, Square::A8);

        let captured = board.update_piece(Square::A1, Square::A8);

        assert_eq!(captured, Some(Unit::new(Side::Black, Piece::Knight)));
        assert!(board.is_empty(Square::A1));
        assert_eq!(board.get(Square::A8), Some(Unit::new(Side::White, Piece::Rook)));
    }

    #[test]
    fn test_diagram_orientation() {
        let board = Board::new();
        let diagram = board.diagram(false);
        let flipped = board.diagram(true);

        assert!(diagram.starts_with("8  r n b q k b n r"));
        assert!(diagram.ends_with("   a b c d e f g h\n"));
        assert!(flipped.starts_with("1  R N B K Q B N R"));
        assert!(flipped.ends_with("   h g f e d c b a\n"));
    }
}
