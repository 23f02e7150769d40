use super::{Board, Player, COLS};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Mutable game state: one board plus whose turn it is.
///
/// Unlike a full match runner, the engine never switches turns on its own.
/// Callers decide when to call [`GameEngine::switch_player`], which lets the
/// fitness replay drop every piece for the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
}

impl GameEngine {
    /// Empty board, Player One to move
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            current_player: Player::One,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Drop the current player's piece into `col` and return where it landed.
    ///
    /// Negative and too-large columns are rejected with
    /// [`MoveError::InvalidColumn`]; a column with no empty cell yields
    /// [`MoveError::ColumnFull`]. The board is untouched on error.
    pub fn drop_piece(&mut self, col: isize) -> Result<(usize, usize), MoveError> {
        let column = usize::try_from(col)
            .ok()
            .filter(|&c| c < COLS)
            .ok_or(MoveError::InvalidColumn(col))?;
        let row = self
            .board
            .drop_piece(column, self.current_player.to_cell())?;
        Ok((row, column))
    }

    /// Check whether the piece at (row, col) completes a run of four
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        self.board.check_win(row, col)
    }

    /// True once the top row has no empty cell
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.other();
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
