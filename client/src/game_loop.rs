use std::io::{self, BufRead, Write};

use common::{BoardSnapshot, MoveRequest};

use crate::board_view::render_board;
use crate::move_input::{parse_command, Command};
use crate::tile_service::TileService;

/// Runs the prompt loop until the player quits or input ends. The board only lives here;
/// every move sends the whole grid to `service`.
pub fn play<R: BufRead, W: Write>(
    mut board: BoardSnapshot,
    service: &TileService,
    input: &mut R,
    output: &mut W,
) -> io::Result<BoardSnapshot> {
    loop {
        write!(output, "{}", render_board(&board))?;
        writeln!(output, "Enter your move (row col), or q to quit:")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(board);
        }

        match parse_command(&line, &board) {
            Ok(Command::Quit) => return Ok(board),
            Ok(Command::Move { row, col }) => {
                match service.apply_move(MoveRequest::new(board.tiles.clone(), row, col)) {
                    Ok(next) => board = next,
                    Err(e) => writeln!(output, "Move failed: {}", e)?,
                }
            }
            Err(message) => writeln!(output, "{}", message)?,
        }
    }
}
