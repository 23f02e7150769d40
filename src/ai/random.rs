use crate::game::{GameEngine, COLS};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_rng(rng: StdRng) -> Self {
        RandomAgent { rng }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, engine: &GameEngine) -> isize {
        let legal = engine.board().legal_columns();
        // Full board: any column, the caller sees ColumnFull
        let col = match legal.choose(&mut self.rng) {
            Some(&col) => col,
            None => self.rng.random_range(0..COLS),
        };
        col as isize
    }

    fn name(&self) -> &str {
        "Random"
    }
}
