pub mod config;
pub mod games;
pub mod logger;

pub use games::black_white_tiles::{
    BoardSnapshot, ErrorResponse, GameRules, InitializeRequest, MoveRequest, TileError,
};
