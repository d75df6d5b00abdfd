use std::fmt;

use super::error::TileError;
use super::protocol::BoardSnapshot;

/// A tile position that is already known to be non-negative.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rectangular grid of tiles, `true` meaning lit.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    length: usize,
    width: usize,
    tiles: Vec<Vec<bool>>,
}

impl Board {
    /// Builds a `length` x `width` board with every tile lit.
    pub fn lit(length: i64, width: i64) -> Result<Self, TileError> {
        let invalid = || TileError::InvalidDimension { length, width };
        let rows = usize::try_from(length).map_err(|_| invalid())?;
        let cols = usize::try_from(width).map_err(|_| invalid())?;
        if rows == 0 || cols == 0 {
            return Err(invalid());
        }

        Ok(Self {
            length: rows,
            width: cols,
            tiles: vec![vec![true; cols]; rows],
        })
    }

    /// Rebuilds a board from a client-held grid. The first row fixes the width and every
    /// other row has to match it.
    pub fn from_grid(tiles: Vec<Vec<bool>>) -> Result<Self, TileError> {
        let Some(first) = tiles.first() else {
            return Err(TileError::EmptyGrid);
        };

        let length = tiles.len();
        let width = first.len();
        if width == 0 {
            return Err(TileError::InvalidDimension {
                length: length as i64,
                width: 0,
            });
        }

        if let Some((row, tiles_in_row)) = tiles
            .iter()
            .enumerate()
            .find(|(_, tiles_in_row)| tiles_in_row.len() != width)
        {
            return Err(TileError::MalformedGrid {
                row,
                expected: width,
                actual: tiles_in_row.len(),
            });
        }

        Ok(Self {
            length,
            width,
            tiles,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<bool> {
        self.tiles.get(row)?.get(col).copied()
    }

    pub fn tiles(&self) -> &[Vec<bool>] {
        &self.tiles
    }

    pub fn lit_count(&self) -> usize {
        self.tiles.iter().flatten().filter(|&&lit| lit).count()
    }

    /// Presses the tile at `(row, col)`. The board is left untouched when the
    /// coordinates fall outside it.
    pub fn apply_move(&mut self, row: i64, col: i64) -> Result<(), TileError> {
        let out_of_bounds = TileError::OutOfBounds {
            row,
            col,
            length: self.length,
            width: self.width,
        };
        let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) else {
            return Err(out_of_bounds);
        };
        if r >= self.length || c >= self.width {
            return Err(out_of_bounds);
        }

        self.toggle_cross(r, c);
        Ok(())
    }

    pub fn apply(&mut self, mv: Move) -> Result<(), TileError> {
        if mv.row >= self.length || mv.col >= self.width {
            return Err(TileError::OutOfBounds {
                row: i64::try_from(mv.row).unwrap_or(i64::MAX),
                col: i64::try_from(mv.col).unwrap_or(i64::MAX),
                length: self.length,
                width: self.width,
            });
        }

        self.toggle_cross(mv.row, mv.col);
        Ok(())
    }

    // Center, up, down, left, right. Edges have no wraparound.
    fn toggle_cross(&mut self, row: usize, col: usize) {
        self.toggle(row, col);
        if row > 0 {
            self.toggle(row - 1, col);
        }
        if row + 1 < self.length {
            self.toggle(row + 1, col);
        }
        if col > 0 {
            self.toggle(row, col - 1);
        }
        if col + 1 < self.width {
            self.toggle(row, col + 1);
        }
    }

    fn toggle(&mut self, row: usize, col: usize) {
        let tile = &mut self.tiles[row][col];
        *tile = !*tile;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            length: self.length,
            width: self.width,
            tiles: self.tiles.clone(),
        }
    }

    pub fn into_snapshot(self) -> BoardSnapshot {
        BoardSnapshot {
            length: self.length,
            width: self.width,
            tiles: self.tiles,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.tiles {
            for &lit in row {
                write!(f, "{}", if lit { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
