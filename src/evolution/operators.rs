use log::debug;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use super::genome::{Genome, GENOME_LEN};
use crate::game::COLS;

/// Roulette wheel selection of two parents, drawn with replacement.
///
/// `weights[i]` is the fitness of `population[i]`. When every weight is zero
/// the wheel is undefined, so both parents are drawn uniformly instead; the
/// draw still comes from `rng`, which keeps it reproducible under a seed.
///
/// `population` must be non-empty and the same length as `weights`.
pub fn roulette_pair<R: Rng + ?Sized>(
    population: &[Genome],
    weights: &[u32],
    rng: &mut R,
) -> (Genome, Genome) {
    debug_assert_eq!(population.len(), weights.len());

    match WeightedIndex::new(weights) {
        Ok(wheel) => (
            population[wheel.sample(rng)],
            population[wheel.sample(rng)],
        ),
        Err(err) => {
            debug!("roulette wheel unavailable ({err}), drawing parents uniformly");
            (
                population[rng.random_range(0..population.len())],
                population[rng.random_range(0..population.len())],
            )
        }
    }
}

/// Single-point crossover with the cut drawn uniformly from `1..GENOME_LEN`.
pub fn crossover<R: Rng + ?Sized>(parent_a: &Genome, parent_b: &Genome, rng: &mut R) -> Genome {
    let point = rng.random_range(1..GENOME_LEN);
    crossover_at(parent_a, parent_b, point)
}

/// Child taking genes `[0, point)` from `parent_a` and `[point, len)` from `parent_b`.
///
/// A `point` past the end yields a copy of `parent_a`.
pub fn crossover_at(parent_a: &Genome, parent_b: &Genome, point: usize) -> Genome {
    parent_a.splice(parent_b, point)
}

/// With probability `mutation_rate`, replace one uniformly chosen gene.
///
/// The replacement column is drawn from the other `COLS - 1` columns, so a
/// mutation that fires always changes the genome.
///
/// # Panics
///
/// Panics if `mutation_rate` is outside `[0, 1]`.
pub fn mutate<R: Rng + ?Sized>(genome: Genome, mutation_rate: f64, rng: &mut R) -> Genome {
    if !rng.random_bool(mutation_rate) {
        return genome;
    }

    let index = rng.random_range(0..GENOME_LEN);
    let current = genome.gene(index);
    let mut column = rng.random_range(0..COLS - 1);
    if column >= current {
        column += 1;
    }
    genome.with_gene(index, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn genome(genes: [usize; GENOME_LEN]) -> Genome {
        Genome::new(genes).unwrap()
    }

    #[test]
    fn test_crossover_at_every_cut() {
        let a = genome([0, 0, 0, 0, 0, 0]);
        let b = genome([6, 5, 4, 3, 2, 1]);

        for point in 1..GENOME_LEN {
            let child = crossover_at(&a, &b, point);
            for i in 0..GENOME_LEN {
                let expected = if i < point { a.gene(i) } else { b.gene(i) };
                assert_eq!(child.gene(i), expected, "cut {point}, gene {i}");
            }
        }
    }

    #[test]
    fn test_random_crossover_is_a_valid_splice() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = genome([1, 1, 1, 1, 1, 1]);
        let b = genome([2, 2, 2, 2, 2, 2]);

        for _ in 0..100 {
            let child = crossover(&a, &b, &mut rng);
            let cut = child.genes().iter().position(|&g| g == 2).unwrap();
            assert!((1..GENOME_LEN).contains(&cut));
            assert!(child.genes()[..cut].iter().all(|&g| g == 1));
            assert!(child.genes()[cut..].iter().all(|&g| g == 2));
        }
    }

    #[test]
    fn test_mutation_rate_one_changes_exactly_one_gene() {
        let mut rng = StdRng::seed_from_u64(11);
        let original = genome([3, 3, 3, 3, 3, 3]);

        for _ in 0..200 {
            let mutated = mutate(original, 1.0, &mut rng);
            let changed = original
                .genes()
                .iter()
                .zip(mutated.genes())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(changed, 1);
            assert!(mutated.genes().iter().all(|&g| g < COLS));
        }
    }

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(11);
        let original = genome([0, 1, 2, 3, 4, 5]);
        for _ in 0..200 {
            assert_eq!(mutate(original, 0.0, &mut rng), original);
        }
    }

    #[test]
    fn test_roulette_never_picks_zero_weight() {
        let mut rng = StdRng::seed_from_u64(5);
        let population = [genome([0; GENOME_LEN]), genome([1; GENOME_LEN])];
        let weights = [0, 3];

        for _ in 0..100 {
            let (a, b) = roulette_pair(&population, &weights, &mut rng);
            assert_eq!(a, population[1]);
            assert_eq!(b, population[1]);
        }
    }

    #[test]
    fn test_roulette_zero_weights_fall_back_deterministically() {
        let population = [
            genome([0; GENOME_LEN]),
            genome([1; GENOME_LEN]),
            genome([2; GENOME_LEN]),
        ];
        let weights = [0, 0, 0];

        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| roulette_pair(&population, &weights, &mut rng))
                .collect::<Vec<_>>()
        };

        let first = draw(42);
        assert_eq!(first, draw(42));
        assert!(first
            .iter()
            .all(|(a, b)| population.contains(a) && population.contains(b)));
    }
}
