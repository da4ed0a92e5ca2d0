pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod fen;
pub mod moves;
pub mod movetext;
pub mod piece;
pub mod position;
pub mod replay;
pub mod resolver;
pub mod san;
pub mod square;
pub mod types;
pub mod zobrist_hash;

pub use error::{FenError, NotationError, Result};
pub use moves::{Move, MoveNotation, SanMove, UciMove};
pub use position::Position;
pub use replay::{GameReplay, Ply, ReplayError, replay};
pub use resolver::resolve;
pub use san::San;
pub use types::{CastleSide, GameResult, Piece, Side, Square, Unit};
