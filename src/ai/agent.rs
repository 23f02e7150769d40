use crate::game::GameEngine;

/// A move source for one side of an exhibition game.
pub trait Agent {
    /// Propose a column for the current position.
    ///
    /// The proposal may be illegal (full or off-board); the game loop asks
    /// again until a drop succeeds.
    fn select_column(&mut self, engine: &GameEngine) -> isize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
