use common::BoardSnapshot;

const LIT: char = '▮';
const UNLIT: char = '▯';

/// Draws the board with column numbers on top and row numbers on the left.
pub fn render_board(board: &BoardSnapshot) -> String {
    let mut out = String::new();

    let mut header = String::from("   ");
    for col in 0..board.width {
        header.push_str(&format!("{:<2}", col));
    }
    out.push_str(header.trim_end());
    out.push('\n');

    for (row_index, row) in board.tiles.iter().enumerate() {
        let mut line = format!("{:>2} ", row_index);
        for &lit in row {
            line.push(if lit { LIT } else { UNLIT });
            line.push(' ');
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_small_board() {
        let board = BoardSnapshot {
            length: 2,
            width: 3,
            tiles: vec![vec![true, false, true], vec![false, false, false]],
        };
        assert_eq!(render_board(&board), "   0 1 2\n 0 ▮ ▯ ▮\n 1 ▯ ▯ ▯\n");
    }

    #[test]
    fn test_render_keeps_two_digit_columns_aligned() {
        let board = BoardSnapshot {
            length: 1,
            width: 11,
            tiles: vec![vec![true; 11]],
        };
        let rendered = render_board(&board);
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("   0 1 2 3 4 5 6 7 8 9 10"));
        assert_eq!(lines.next(), Some(" 0 ▮ ▮ ▮ ▮ ▮ ▮ ▮ ▮ ▮ ▮ ▮"));
    }
}
