//! Chess rules engine: board state, move legality, execution with exact undo,
//! legal move enumeration, and game-state classification.

mod attacks;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod file;
mod game;
mod game_state;
mod make_move;
mod movegen;
mod piece;
mod piece_kind;
mod position;
mod rank;
mod square;

pub mod perft;

pub use castle_rights::{CastleFlags, CastleSide};
pub use chess_move::{Move, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, GameError, MoveParseError, SquareParseError};
pub use file::File;
pub use game::Game;
pub use game_state::GameState;
pub use make_move::{MoveOutcome, Undo};
pub use movegen::MoveList;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{Position, PrettyBoard};
pub use rank::Rank;
pub use square::Square;
