/// NOTE: 1 ply = one move by a single player

pub const NUM_SQUARES: usize = 64;
pub const NUM_PIECE_TYPES: usize = 6;
pub const NUM_SIDES: usize = 2;
pub const NUM_RANKS: usize = 8;
pub const NUM_FILES: usize = 8;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Trailing annotation glyphs tolerated after a SAN move.
pub const SAN_SUFFIXES: [char; 4] = ['+', '#', '!', '?'];

/// Fixed seed so position keys are stable across runs.
pub const ZOBRIST_SEED: u64 = 0x5EED_C4E5_5B0A_2D01;

/// 0 = white, 1 = black, 6 = empty
#[rustfmt::skip]
pub const INIT_COLOR: [u8; NUM_SQUARES] = [
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1
];

/// Piece indices as in `Piece`, 6 = empty
#[rustfmt::skip]
pub const INIT_BOARD: [u8; NUM_SQUARES] = [
    3, 1, 2, 4, 5, 2, 1, 3,
    0, 0, 0, 0, 0, 0, 0, 0,
    6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6,
    0, 0, 0, 0, 0, 0, 0, 0,
    3, 1, 2, 4, 5, 2, 1, 3
];

/// We logical-AND the castle bits with the CASTLE_MASK bits for
/// both of the move's squares.
///
/// If castle is 1 (white can castle kingside), and we play a move
/// where the rook on h1 gets captured, we AND castle with
/// CASTLE_MASK[7] (1&14).
///
/// Castle becomes 0 and white can't castle kingside anymore.
///
/// 0001 white kingside  (14: 1110)
/// 0010 white queenside (13: 1101)
/// 0100 black kingside  (11: 1011)
/// 1000 black queenside (7: 0111)
///
/// 12: 1100
///  3: 0011
/// 15: 1111
#[rustfmt::skip]
pub const CASTLE_MASK: [u8; NUM_SQUARES] = [
    13, 15, 15, 15, 12, 15, 15, 14,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
     7, 15, 15, 15,  3, 15, 15, 11
];

/// (file, rank) deltas
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = KING_OFFSETS;
