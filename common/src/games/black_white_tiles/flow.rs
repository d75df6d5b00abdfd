use crate::games::SessionRng;

use super::board::Board;
use super::error::TileError;
use super::generator::generate_scramble;
use super::protocol::{BoardSnapshot, InitializeRequest, MoveRequest};
use super::rules::GameRules;

fn required_dimension(value: Option<i64>, field: &'static str) -> Result<i64, TileError> {
    match value {
        None | Some(0) => Err(TileError::MissingParameter(field)),
        Some(value) => Ok(value),
    }
}

fn check_limit(field: &'static str, value: i64, max: u32) -> Result<(), TileError> {
    let max = i64::from(max);
    if value > max {
        return Err(TileError::LimitExceeded { field, value, max });
    }
    Ok(())
}

/// Builds a lit board and scrambles it with `clicks` random presses.
pub fn initialize_game(
    request: &InitializeRequest,
    rules: &GameRules,
    rng: &mut SessionRng,
) -> Result<BoardSnapshot, TileError> {
    let length = required_dimension(request.length, "length")?;
    let width = required_dimension(request.width, "width")?;
    let clicks = request.clicks.unwrap_or(i64::from(rules.default_clicks));

    check_limit("length", length, rules.max_dimension)?;
    check_limit("width", width, rules.max_dimension)?;
    if clicks < 0 {
        return Err(TileError::InvalidCount(clicks));
    }
    check_limit("clicks", clicks, rules.max_clicks)?;

    let mut board = Board::lit(length, width)?;

    for mv in generate_scramble(clicks, board.length(), board.width(), rng)? {
        board.apply(mv)?;
    }

    Ok(board.into_snapshot())
}

/// Applies a single press to a grid the client sent back.
pub fn handle_move(request: MoveRequest) -> Result<BoardSnapshot, TileError> {
    let tiles = request.tiles.ok_or(TileError::MissingParameter("tiles"))?;
    let row = request.row.ok_or(TileError::MissingParameter("row"))?;
    let col = request.col.ok_or(TileError::MissingParameter("col"))?;

    let mut board = Board::from_grid(tiles)?;
    board.apply_move(row, col)?;
    Ok(board.into_snapshot())
}
