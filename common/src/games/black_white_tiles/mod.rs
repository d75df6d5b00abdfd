//! Black/white tiles: a Lights-Out style puzzle on a grid of lit and unlit tiles.
//!
//! Pressing a tile flips it together with its orthogonal neighbours. The engine keeps no
//! state between calls; callers hand the whole grid back with every move.

mod board;
mod error;
mod flow;
mod generator;
mod protocol;
mod rules;

pub use board::{Board, Move};
pub use error::TileError;
pub use flow::{handle_move, initialize_game};
pub use generator::generate_scramble;
pub use protocol::{BoardSnapshot, ErrorResponse, InitializeRequest, MoveRequest};
pub use rules::GameRules;
