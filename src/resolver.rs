//! SAN to UCI resolution.
//!
//! Candidates are found by pseudo-legal geometry only: a move that leaves the
//! mover's own king in check still resolves.

use log::{debug, trace};

use crate::{
    constants::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS},
    error::{NotationError, Result},
    moves::UciMove,
    position::Position,
    san::San,
    types::{CastleRight, CastleSide, Piece, Side, Square, Unit},
};

/// Resolve `san` against `position` into a fully specified move for the side
/// to move.
pub fn resolve(position: &Position, san: &str) -> Result<UciMove> {
    let uci = match San::parse(san)? {
        San::Castle(castle_side) => resolve_castle(position, san, castle_side)?,
        San::Normal {
            piece,
            file,
            rank,
            capture,
            to,
            promote,
        } => {
            let side = position.side;
            let no_origin = || NotationError::NoLegalOrigin(san.to_string());

            if piece == Piece::Pawn && (to.rank() == side.promotion_rank()) != promote.is_some() {
                return Err(NotationError::UnsupportedNotation(san.to_string()));
            }

            let target = position.piece_at(to);
            if target.is_some_and(|unit| unit.side == side) {
                return Err(no_origin());
            }

            let en_passant_capture = piece == Piece::Pawn && position.en_passant == Some(to);
            if capture && target.is_none() && !en_passant_capture {
                return Err(no_origin());
            }

            let candidates: Vec<Square> = position
                .board
                .squares_of(side, piece)
                .filter(|from| file.is_none_or(|file| from.file() == file))
                .filter(|from| rank.is_none_or(|rank| from.rank() == rank))
                .filter(|&from| {
                    let reachable = reaches(position, piece, from, to, capture);
                    trace!("{san}: {piece:?} on {from} reaches {to}: {reachable}");
                    reachable
                })
                .collect();

            match candidates.len() {
                1 => UciMove::new(candidates[0], to, promote),
                0 => return Err(no_origin()),
                _ => {
                    return Err(NotationError::AmbiguousMove {
                        san: san.to_string(),
                        candidates,
                    });
                }
            }
        }
    };

    debug!("resolved {san} to {uci}");
    Ok(uci)
}

fn resolve_castle(position: &Position, san: &str, castle_side: CastleSide) -> Result<UciMove> {
    let side = position.side;
    let rank = side.home_rank();
    let no_origin = || NotationError::NoLegalOrigin(san.to_string());

    if !position.castling.contains(CastleRight::new(side, castle_side)) {
        return Err(no_origin());
    }

    let king_from = Square::from_coords(4, rank).ok_or_else(no_origin)?;
    if position.piece_at(king_from) != Some(Unit::new(side, Piece::King)) {
        return Err(no_origin());
    }

    // Files strictly between the king and the rook
    let (between, king_file) = match castle_side {
        CastleSide::Kingside => (&[5u8, 6][..], 6),
        CastleSide::Queenside => (&[1u8, 2, 3][..], 2),
    };

    let path_clear = between
        .iter()
        .filter_map(|&file| Square::from_coords(file, rank))
        .all(|square| position.board.is_empty(square));
    if !path_clear {
        return Err(no_origin());
    }

    let king_to = Square::from_coords(king_file, rank).ok_or_else(no_origin)?;

    Ok(UciMove::new(king_from, king_to, None))
}

/// Whether `piece` standing on `from` can move to `to` on the current board.
/// Ownership of `to` is checked by the caller. `capture` only matters for
/// pawns, which push straight and capture diagonally.
pub fn reaches(
    position: &Position,
    piece: Piece,
    from: Square,
    to: Square,
    capture: bool,
) -> bool {
    match piece {
        Piece::Knight => steps_to(&KNIGHT_OFFSETS, from, to),
        Piece::King => steps_to(&KING_OFFSETS, from, to),
        Piece::Bishop => slides_to(position, &BISHOP_DIRECTIONS, from, to),
        Piece::Rook => slides_to(position, &ROOK_DIRECTIONS, from, to),
        Piece::Queen => slides_to(position, &QUEEN_DIRECTIONS, from, to),
        Piece::Pawn => pawn_reaches(position, position.side, from, to, capture),
    }
}

fn steps_to(offsets: &[(i8, i8)], from: Square, to: Square) -> bool {
    offsets
        .iter()
        .any(|&(file_delta, rank_delta)| from.offset(file_delta, rank_delta) == Some(to))
}

/// Follows each ray until it leaves the board or hits an occupied square.
fn slides_to(position: &Position, directions: &[(i8, i8)], from: Square, to: Square) -> bool {
    for &(file_delta, rank_delta) in directions {
        let mut current = from;

        while let Some(next) = current.offset(file_delta, rank_delta) {
            if next == to {
                return true;
            }
            if !position.board.is_empty(next) {
                break;
            }
            current = next;
        }
    }

    false
}

fn pawn_reaches(
    position: &Position,
    side: Side,
    from: Square,
    to: Square,
    capture: bool,
) -> bool {
    let forward = side.forward();
    let board = &position.board;

    if !capture {
        if from.file() != to.file() {
            return false;
        }

        let Some(one) = from.offset(0, forward) else {
            return false;
        };
        if !board.is_empty(one) {
            return false;
        }
        if one == to {
            return true;
        }

        return from.rank() == side.pawn_rank()
            && one.offset(0, forward) == Some(to)
            && board.is_empty(to);
    }

    let diagonal = [-1, 1]
        .iter()
        .any(|&file_delta| from.offset(file_delta, forward) == Some(to));
    if !diagonal {
        return false;
    }

    let opponent = side.opponent();
    if board.get(to).is_some_and(|unit| unit.side == opponent) {
        return true;
    }

    // En passant needs the double-pushed pawn beside the origin
    position.en_passant == Some(to)
        && Square::from_coords(to.file(), from.rank())
            .and_then(|beside| board.get(beside))
            == Some(Unit::new(opponent, Piece::Pawn))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    fn uci(text: &str) -> UciMove {
        text.parse().unwrap()
    }

    #[test]
    fn test_pawn_push_and_double_push() {
        let start = Position::new();
        assert_eq!(resolve(&start, "e4"), Ok(uci("e2e4")));
        assert_eq!(resolve(&start, "e3"), Ok(uci("e2e3")));
        assert_eq!(
            resolve(&start, "e5"),
            Err(NotationError::NoLegalOrigin("e5".to_string()))
        );
    }

    #[test]
    fn test_double_push_blocked() {
        let blocked = position("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(matches!(
            resolve(&blocked, "e4"),
            Err(NotationError::NoLegalOrigin(_))
        ));
    }

    #[test]
    fn test_slider_stops_at_first_piece() {
        let start = Position::new();
        assert!(matches!(
            resolve(&start, "Bc4"),
            Err(NotationError::NoLegalOrigin(_))
        ));

        let open = position("4k3/8/8/8/8/8/4P3/2B1K3 w - - 0 1");
        assert_eq!(resolve(&open, "Bh6"), Ok(uci("c1h6")));
    }

    #[test]
    fn test_destination_with_own_piece() {
        let start = Position::new();
        assert_eq!(
            resolve(&start, "Nd2"),
            Err(NotationError::NoLegalOrigin("Nd2".to_string()))
        );
    }

    #[test]
    fn test_capture_flag_needs_a_victim() {
        let start = Position::new();
        assert!(matches!(
            resolve(&start, "Nxf3"),
            Err(NotationError::NoLegalOrigin(_))
        ));
    }

    #[test]
    fn test_rank_hint_disambiguates_rooks() {
        let rooks = position("4k3/R7/8/8/8/8/8/R3K3 w - - 0 1");
        assert!(matches!(
            resolve(&rooks, "Ra4"),
            Err(NotationError::AmbiguousMove { .. })
        ));
        assert_eq!(resolve(&rooks, "R1a4"), Ok(uci("a1a4")));
        assert_eq!(resolve(&rooks, "R7a4"), Ok(uci("a7a4")));
    }

    #[test]
    fn test_promotion_required_on_last_rank() {
        let promoting = position("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
        assert_eq!(resolve(&promoting, "e8=Q"), Ok(uci("e7e8q")));
        assert_eq!(resolve(&promoting, "e8=N+"), Ok(uci("e7e8n")));
        assert_eq!(
            resolve(&promoting, "e8"),
            Err(NotationError::UnsupportedNotation("e8".to_string()))
        );

        let start = Position::new();
        assert_eq!(
            resolve(&start, "e4=Q"),
            Err(NotationError::UnsupportedNotation("e4=Q".to_string()))
        );
    }

    #[test]
    fn test_black_pawns_move_down() {
        let after_e4 = position("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
        assert_eq!(resolve(&after_e4, "c5"), Ok(uci("c7c5")));
        assert_eq!(resolve(&after_e4, "Nf6"), Ok(uci("g8f6")));
    }

    #[test]
    fn test_castling() {
        let ready = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(resolve(&ready, "O-O"), Ok(uci("e1g1")));
        assert_eq!(resolve(&ready, "O-O-O"), Ok(uci("e1c1")));

        let black = position("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        assert_eq!(resolve(&black, "0-0"), Ok(uci("e8g8")));
        assert_eq!(resolve(&black, "0-0-0+"), Ok(uci("e8c8")));
    }

    #[test]
    fn test_castling_unavailable() {
        let no_rights = position("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1");
        assert_eq!(
            resolve(&no_rights, "O-O"),
            Err(NotationError::NoLegalOrigin("O-O".to_string()))
        );

        let blocked = position("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
        assert!(resolve(&blocked, "O-O-O").is_err());
        assert_eq!(resolve(&blocked, "O-O"), Ok(uci("e1g1")));

        let start = Position::new();
        assert!(resolve(&start, "O-O").is_err());
    }
}
