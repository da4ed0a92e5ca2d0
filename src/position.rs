use std::{fmt, str::FromStr};

use log::trace;

use crate::{
    board::Board,
    constants::CASTLE_MASK,
    error::{NotationError, Result},
    fen,
    moves::UciMove,
    resolver,
    types::{CastlingRights, Piece, Side, Square, Unit},
    zobrist_hash,
};

/// A complete chess position.
///
/// Positions are values: [`Position::apply`] and [`Position::play_san`] return
/// a new position and leave `self` untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub side: Side,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32, // Moves since last pawn move or capture
    pub fullmove_number: u32,
}

impl Position {
    /// Standard starting position
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            side: Side::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        fen::parse(fen)
    }

    pub fn to_fen(&self) -> String {
        fen::serialize(self)
    }

    pub fn piece_at(&self, square: Square) -> Option<Unit> {
        self.board.get(square)
    }

    /// Zobrist key over placement, side, castling and en passant.
    /// Clocks do not contribute.
    pub fn key(&self) -> u64 {
        zobrist_hash::position_key(self)
    }

    /// Resolve a SAN token and play it.
    pub fn play_san(&self, san: &str) -> Result<(UciMove, Position)> {
        let uci = resolver::resolve(self, san)?;
        let next = self.apply(&uci)?;
        Ok((uci, next))
    }

    /// Play a fully specified move and return the resulting position.
    ///
    /// Only the bookkeeping is checked here (a piece of the side to move on
    /// the origin, no own piece on the destination, promotion on the last
    /// rank); movement geometry is the resolver's job.
    pub fn apply(&self, uci: &UciMove) -> Result<Position> {
        let no_origin = || NotationError::NoLegalOrigin(uci.to_string());

        let mover = self.board.get(uci.from).ok_or_else(no_origin)?;
        if mover.side != self.side {
            return Err(no_origin());
        }
        if self.board.get(uci.to).is_some_and(|unit| unit.side == self.side) {
            return Err(no_origin());
        }

        let reaches_last_rank =
            mover.piece == Piece::Pawn && uci.to.rank() == self.side.promotion_rank();
        if reaches_last_rank != uci.promote.is_some() {
            return Err(NotationError::InvalidMoveFormat(uci.to_string()));
        }

        let mut next = self.clone();

        let mut captured = next.board.update_piece(uci.from, uci.to);

        if mover.piece == Piece::Pawn
            && Some(uci.to) == self.en_passant
            && uci.from.file() != uci.to.file()
            && captured.is_none()
        {
            if let Some(victim) = Square::from_coords(uci.to.file(), uci.from.rank()) {
                captured = next.board.remove_piece(victim);
                trace!("en passant {uci} removes {victim}");
            }
        }

        if let Some(promote) = uci.promote {
            next.board.add_piece(self.side, promote, uci.to);
        }

        if let Some((rook_from, rook_to)) = castling_rook_squares(mover, uci) {
            if next.board.get(rook_from) == Some(Unit::new(self.side, Piece::Rook)) {
                next.board.update_piece(rook_from, rook_to);
            }
        }

        next.castling
            .retain_mask(CASTLE_MASK[uci.from as usize] & CASTLE_MASK[uci.to as usize]);

        next.en_passant = None;
        if mover.piece == Piece::Pawn && uci.from.rank().abs_diff(uci.to.rank()) == 2 {
            let skipped = (uci.from.rank() + uci.to.rank()) / 2;
            next.en_passant = Square::from_coords(uci.from.file(), skipped);
        }

        if mover.piece == Piece::Pawn || captured.is_some() {
            next.halfmove_clock = 0;
        } else {
            next.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if self.side == Side::Black {
            next.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        next.side = self.side.opponent();

        Ok(next)
    }
}

/// Rook origin and destination when `uci` is a king's two-square castling move
fn castling_rook_squares(mover: Unit, uci: &UciMove) -> Option<(Square, Square)> {
    let rank = mover.side.home_rank();

    if mover.piece != Piece::King
        || uci.from.file() != 4
        || uci.from.rank() != rank
        || uci.to.rank() != rank
    {
        return None;
    }

    match uci.to.file() {
        6 => Square::from_coords(7, rank).zip(Square::from_coords(5, rank)),
        2 => Square::from_coords(0, rank).zip(Square::from_coords(3, rank)),
        _ => None,
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self> {
        fen::parse(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fen::serialize(self))
    }
}
