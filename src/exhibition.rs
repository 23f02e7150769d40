use log::{debug, info};

use crate::ai::Agent;
use crate::error::{ConfigError, ExhibitionError};
use crate::game::{Board, GameEngine, GameOutcome, Player};

/// Exhibition game configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExhibitionConfig {
    /// Seed for both agents' RNGs; entropy when absent.
    pub seed: Option<u64>,
    /// Consecutive illegal proposals tolerated from one agent in one turn.
    pub max_move_attempts: usize,
}

impl Default for ExhibitionConfig {
    fn default() -> Self {
        ExhibitionConfig {
            seed: None,
            max_move_attempts: 1000,
        }
    }
}

impl ExhibitionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_move_attempts == 0 {
            return Err(ConfigError::Validation(
                "exhibition.max_move_attempts must be > 0".into(),
            ));
        }
        Ok(())
    }
}

/// Final state of an exhibition game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExhibitionResult {
    pub outcome: GameOutcome,
    /// Pieces placed, both players combined.
    pub moves: usize,
    pub board: Board,
}

/// Play one full game, `first` as Player One and `second` as Player Two.
///
/// Each turn the current agent is asked for columns until one drops; an agent
/// that keeps proposing illegal columns for `max_move_attempts` tries in a
/// row ends the game with an error. The game stops at the first winning drop,
/// or as a draw once the board fills.
pub fn play_exhibition(
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    max_move_attempts: usize,
) -> Result<ExhibitionResult, ExhibitionError> {
    let mut engine = GameEngine::new();
    let mut moves = 0;

    info!("Exhibition: {} vs {}", first.name(), second.name());

    while !engine.is_full() {
        let player = engine.current_player();
        let agent: &mut dyn Agent = match player {
            Player::One => &mut *first,
            Player::Two => &mut *second,
        };

        let (row, col) = place_with_retry(&mut engine, agent, max_move_attempts)?;
        moves += 1;

        if engine.check_win(row, col) {
            info!("{player} wins after {moves} moves");
            return Ok(ExhibitionResult {
                outcome: GameOutcome::Winner(player),
                moves,
                board: *engine.board(),
            });
        }
        engine.switch_player();
    }

    info!("Draw after {moves} moves");
    Ok(ExhibitionResult {
        outcome: GameOutcome::Draw,
        moves,
        board: *engine.board(),
    })
}

/// Ask `agent` for columns until one drops, returning the landing cell.
fn place_with_retry(
    engine: &mut GameEngine,
    agent: &mut dyn Agent,
    max_attempts: usize,
) -> Result<(usize, usize), ExhibitionError> {
    for _ in 0..max_attempts {
        let col = agent.select_column(engine);
        match engine.drop_piece(col) {
            Ok(cell) => return Ok(cell),
            Err(err) => debug!("{} proposed a bad move: {err}", agent.name()),
        }
    }

    Err(ExhibitionError::MoveAttemptsExhausted {
        agent: agent.name().to_string(),
        player: engine.current_player(),
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{GenomeAgent, RandomAgent};
    use crate::evolution::Genome;
    use crate::game::{Cell, COLS, ROWS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Replays a fixed list of columns, cycling when it runs out.
    struct ScriptedAgent {
        moves: Vec<isize>,
        next: usize,
        calls: usize,
    }

    impl ScriptedAgent {
        fn new(moves: Vec<isize>) -> Self {
            ScriptedAgent {
                moves,
                next: 0,
                calls: 0,
            }
        }
    }

    impl Agent for ScriptedAgent {
        fn select_column(&mut self, _engine: &GameEngine) -> isize {
            let col = self.moves[self.next % self.moves.len()];
            self.next += 1;
            self.calls += 1;
            col
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn test_first_player_wins_vertically() {
        let mut one = ScriptedAgent::new(vec![0]);
        let mut two = ScriptedAgent::new(vec![1]);

        let result = play_exhibition(&mut one, &mut two, 10).unwrap();
        assert_eq!(result.outcome, GameOutcome::Winner(Player::One));
        assert_eq!(result.moves, 7);
        assert_eq!(result.board.get(2, 0), Cell::PlayerOne);
        assert_eq!(result.board.get(3, 1), Cell::PlayerTwo);
    }

    #[test]
    fn test_second_player_can_win() {
        let mut one = ScriptedAgent::new(vec![0, 1, 0, 6]);
        let mut two = ScriptedAgent::new(vec![3]);

        let result = play_exhibition(&mut one, &mut two, 10).unwrap();
        assert_eq!(result.outcome, GameOutcome::Winner(Player::Two));
        assert_eq!(result.moves, 8);
    }

    #[test]
    fn test_illegal_moves_are_retried() {
        let mut one = ScriptedAgent::new(vec![-1, 7, 0]);
        let mut two = ScriptedAgent::new(vec![1]);

        let result = play_exhibition(&mut one, &mut two, 3).unwrap();
        assert_eq!(result.outcome, GameOutcome::Winner(Player::One));
        // Two rejected proposals before each of the four drops
        assert_eq!(one.calls, 12);
        assert_eq!(result.moves, 7);
    }

    #[test]
    fn test_retry_budget_exhausted() {
        let mut one = ScriptedAgent::new(vec![COLS as isize]);
        let mut two = ScriptedAgent::new(vec![0]);

        let err = play_exhibition(&mut one, &mut two, 5).unwrap_err();
        assert_eq!(
            err,
            ExhibitionError::MoveAttemptsExhausted {
                agent: "Scripted".to_string(),
                player: Player::One,
                attempts: 5,
            }
        );
        assert_eq!(one.calls, 5);
    }

    #[test]
    fn test_full_board_without_win_is_draw() {
        let mut one = ScriptedAgent::new(vec![
            4, 6, 1, 5, 1, 5, 1, 0, 5, 1, 4, 3, 6, 0, 6, 2, 4, 4, 2, 3, 3,
        ]);
        let mut two = ScriptedAgent::new(vec![
            3, 0, 4, 5, 1, 0, 6, 1, 5, 0, 6, 2, 6, 4, 5, 0, 2, 2, 2, 3, 3,
        ]);

        let result = play_exhibition(&mut one, &mut two, 1).unwrap();
        assert_eq!(result.outcome, GameOutcome::Draw);
        assert_eq!(result.moves, ROWS * COLS);
        assert!(result.board.is_full());
    }

    #[test]
    fn test_random_agents_finish() {
        for seed in 0..20 {
            let mut one = RandomAgent::with_rng(StdRng::seed_from_u64(seed));
            let mut two = RandomAgent::with_rng(StdRng::seed_from_u64(seed + 100));
            let result = play_exhibition(&mut one, &mut two, 1).unwrap();
            assert!(result.moves <= ROWS * COLS);
            if result.outcome == GameOutcome::Draw {
                assert!(result.board.is_full());
            }
        }
    }

    #[test]
    fn test_genome_agent_against_random() {
        let genome = Genome::new([0, 1, 2, 3, 4, 5]).unwrap();
        let mut ai = GenomeAgent::with_rng(genome, StdRng::seed_from_u64(4));
        let mut opponent = RandomAgent::with_rng(StdRng::seed_from_u64(5));

        match play_exhibition(&mut ai, &mut opponent, 1000) {
            Ok(result) => assert!(result.moves <= ROWS * COLS),
            Err(ExhibitionError::MoveAttemptsExhausted { player, .. }) => {
                assert_eq!(player, Player::One)
            }
        }
    }

    #[test]
    fn test_config_validation() {
        ExhibitionConfig::default()
            .validate()
            .expect("default config should be valid");
        let config = ExhibitionConfig {
            max_move_attempts: 0,
            ..ExhibitionConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
