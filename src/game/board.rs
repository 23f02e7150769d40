use std::fmt;

use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Run length that wins the game.
pub const CONNECT: usize = 4;

/// One step along each undirected axis: horizontal, vertical, `\` and `/`.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Columns that still have room, left to right
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(
                isize::try_from(col).unwrap_or(isize::MAX),
            ));
        }

        // Lowest empty row wins; gravity stacks from the bottom
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|&cell| cell != Cell::Empty)
    }

    /// Check if the piece at (row, col) is part of a run of four or more.
    ///
    /// The run is measured for whoever occupies the cell, so the result does
    /// not depend on whose turn it is.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        if row >= ROWS || col >= COLS {
            return false;
        }
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        AXES.iter().any(|&(dr, dc)| {
            let run = 1 + self.run_length(row, col, dr, dc, cell)
                + self.run_length(row, col, -dr, -dc, cell);
            run >= CONNECT
        })
    }

    /// Count matching cells walking from (row, col) by (dr, dc), excluding the start.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.cells[r as usize][c as usize] == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(COLS * 4 - 1);
        for row in &self.cells {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".",
                    Cell::PlayerOne => "1",
                    Cell::PlayerTwo => "2",
                })
                .collect();
            writeln!(f, "{}", line.join(" | "))?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
