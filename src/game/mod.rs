//! Core Connect Four game logic: board representation, player types, and the
//! mutable game engine used by both fitness replays and exhibition games.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, COLS, CONNECT, ROWS};
pub use engine::{GameEngine, GameOutcome};
pub use player::Player;
