use rand::{RngCore, SeedableRng, rngs::StdRng};
use std::sync::OnceLock;

use crate::{
    constants::{NUM_FILES, NUM_PIECE_TYPES, NUM_SIDES, NUM_SQUARES, ZOBRIST_SEED},
    position::Position,
    types::{Piece, Side, Square},
};

pub struct ZobristKeys {
    pub pieces: [[[u64; NUM_SQUARES]; NUM_PIECE_TYPES]; NUM_SIDES],
    pub black_to_move: u64,
    /// Indexed by the castle permission bits (K=1, Q=2, k=4, q=8)
    pub castling: [u64; 16],
    pub en_passant_file: [u64; NUM_FILES],
}

static ZOBRIST_KEYS: OnceLock<ZobristKeys> = OnceLock::new();

/// Key tables, generated on first use from a fixed seed
pub fn zobrist_keys() -> &'static ZobristKeys {
    ZOBRIST_KEYS.get_or_init(|| {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

        let mut pieces = [[[0u64; NUM_SQUARES]; NUM_PIECE_TYPES]; NUM_SIDES];
        for side in Side::iter() {
            for piece in Piece::iter() {
                for square in Square::iter() {
                    pieces[side as usize][piece as usize][square as usize] = rng.next_u64();
                }
            }
        }

        let black_to_move = rng.next_u64();

        let mut castling = [0u64; 16];
        for key in castling.iter_mut().skip(1) {
            *key = rng.next_u64();
        }

        let mut en_passant_file = [0u64; NUM_FILES];
        for key in en_passant_file.iter_mut() {
            *key = rng.next_u64();
        }

        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant_file,
        }
    })
}

/// Key over placement, side to move, castling rights and en passant file.
/// Castling order in the FEN record does not change the key.
pub fn position_key(position: &Position) -> u64 {
    let keys = zobrist_keys();
    let mut key = 0u64;

    for square in Square::iter() {
        if let Some(unit) = position.board.get(square) {
            key ^= keys.pieces[unit.side as usize][unit.piece as usize][square as usize];
        }
    }

    if position.side == Side::Black {
        key ^= keys.black_to_move;
    }

    key ^= keys.castling[position.castling.mask() as usize];

    if let Some(square) = position.en_passant {
        key ^= keys.en_passant_file[square.file() as usize];
    }

    key
}
