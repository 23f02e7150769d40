use log::trace;

use super::genome::Genome;
use crate::game::GameEngine;

/// Score a genome by replaying its genes on a fresh board.
///
/// Every gene is dropped for Player One; the turn is never switched. Genes
/// that name a full column are skipped without penalty. Each drop that lands
/// on a winning run adds one, so a run that keeps growing scores again on
/// every further drop that touches it.
pub fn fitness(genome: &Genome) -> u32 {
    let mut engine = GameEngine::new();
    let mut score = 0;

    for &column in genome.genes() {
        match engine.drop_piece(column as isize) {
            Ok((row, col)) => {
                if engine.check_win(row, col) {
                    score += 1;
                }
            }
            Err(err) => trace!("skipping gene: {err}"),
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genome(genes: [usize; 6]) -> Genome {
        Genome::new(genes).unwrap()
    }

    #[test]
    fn test_single_column_scores_three() {
        assert_eq!(fitness(&genome([0, 0, 0, 0, 0, 0])), 3);
    }

    #[test]
    fn test_spread_out_genome_scores_zero() {
        assert_eq!(fitness(&genome([0, 1, 2, 4, 5, 6])), 0);
    }

    #[test]
    fn test_horizontal_run_scores_each_touching_drop() {
        // 0,1,2,3 completes the run (+1); 4 extends it (+1); the final
        // drop lands on row 4 away from the run
        assert_eq!(fitness(&genome([0, 1, 2, 3, 4, 0])), 2);
    }

    #[test]
    fn test_run_scored_only_once_complete() {
        assert_eq!(fitness(&genome([3, 3, 3, 1, 3, 5])), 1);
    }

    #[test]
    fn test_fitness_is_pure() {
        let g = genome([2, 2, 2, 2, 6, 6]);
        assert_eq!(fitness(&g), fitness(&g));
    }
}
