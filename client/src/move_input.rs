use common::BoardSnapshot;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Move { row: i64, col: i64 },
    Quit,
}

/// Parses a `row col` line. Moves outside the board are refused here so they never
/// reach the engine.
pub fn parse_command(line: &str, board: &BoardSnapshot) -> Result<Command, String> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err("Expected two numbers: row col".to_string());
    };

    let row: i64 = row
        .parse()
        .map_err(|_| format!("Invalid row '{}'", row))?;
    let col: i64 = col
        .parse()
        .map_err(|_| format!("Invalid col '{}'", col))?;

    let in_range = |value: i64, limit: usize| usize::try_from(value).is_ok_and(|v| v < limit);
    if !in_range(row, board.length) || !in_range(col, board.width) {
        return Err(format!(
            "Invalid move: ({}, {}) is outside the {}x{} board",
            row, col, board.length, board.width
        ));
    }

    Ok(Command::Move { row, col })
}
