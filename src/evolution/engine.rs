use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::fitness::fitness;
use super::genome::Genome;
use super::operators::{crossover, mutate, roulette_pair};
use super::population::{GenerationStats, Population};
use crate::error::ConfigError;

/// Which genome the driver takes from the final population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Champion {
    /// Whatever sits at index 0. The population is unsorted, so this is not
    /// necessarily the best genome.
    #[default]
    First,
    /// Highest fitness, earliest on ties.
    Fittest,
}

/// Genetic search configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub mutation_rate: f64,
    pub generations: usize,
    /// Seed for the search RNG; entropy when absent.
    pub seed: Option<u64>,
    pub champion: Champion,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        EvolutionConfig {
            population_size: 50,
            mutation_rate: 0.05,
            generations: 100,
            seed: None,
            champion: Champion::First,
        }
    }
}

impl EvolutionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::Validation(
                "evolution.population_size must be > 0".into(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::Validation(
                "evolution.population_size must be even".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::Validation(
                "evolution.mutation_rate must be in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}

/// Generational genetic search over scripted drop sequences.
///
/// Each generation is bred entirely from the previous one: parents are picked
/// by roulette wheel on fitness, every pair yields two crossover children, and
/// each child may mutate. Nothing survives unchanged by reference.
pub struct EvolutionEngine<R = StdRng> {
    config: EvolutionConfig,
    population: Population,
    rng: R,
}

impl EvolutionEngine<StdRng> {
    /// Engine with an RNG seeded from `config.seed`, or from the OS if unset.
    pub fn new(config: EvolutionConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> EvolutionEngine<R> {
    /// Engine drawing all randomness from `rng`. `config.seed` is ignored.
    pub fn with_rng(config: EvolutionConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let population = Population::random(config.population_size, &mut rng);
        Ok(EvolutionEngine {
            config,
            population,
            rng,
        })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn fitness(&self, genome: &Genome) -> u32 {
        fitness(genome)
    }

    /// Two parents from the current population, weighted by fitness scored now.
    pub fn selection(&mut self) -> (Genome, Genome) {
        let scores = self.population.fitness_scores();
        roulette_pair(self.population.genomes(), &scores, &mut self.rng)
    }

    pub fn crossover(&mut self, parent_a: &Genome, parent_b: &Genome) -> Genome {
        crossover(parent_a, parent_b, &mut self.rng)
    }

    pub fn mutation(&mut self, genome: Genome) -> Genome {
        mutate(genome, self.config.mutation_rate, &mut self.rng)
    }

    /// Run every configured generation and return their statistics.
    pub fn evolve(&mut self) -> Vec<GenerationStats> {
        self.evolve_with(|_| {})
    }

    /// Like [`evolve`](Self::evolve), calling `observer` after each generation.
    pub fn evolve_with<F>(&mut self, mut observer: F) -> Vec<GenerationStats>
    where
        F: FnMut(&GenerationStats),
    {
        info!(
            "Evolving {} genomes for {} generations (mutation rate {})",
            self.config.population_size, self.config.generations, self.config.mutation_rate
        );

        let mut history = Vec::with_capacity(self.config.generations);
        for generation in 1..=self.config.generations {
            self.population = self.next_generation();

            let stats = self.population.stats(generation);
            info!(
                "Generation {}: Best fitness: {} (mean {:.2})",
                stats.generation, stats.best_fitness, stats.mean_fitness
            );
            observer(&stats);
            history.push(stats);
        }
        history
    }

    /// Breed a full replacement population from the current one.
    fn next_generation(&mut self) -> Population {
        // Fitness is a pure function of the genome, so scoring once per
        // generation gives every selection the same weights it would compute
        let scores = self.population.fitness_scores();
        let mut offspring = Vec::with_capacity(self.config.population_size);

        for _ in 0..self.config.population_size / 2 {
            let (parent_a, parent_b) =
                roulette_pair(self.population.genomes(), &scores, &mut self.rng);
            let child_a = self.crossover(&parent_a, &parent_b);
            let child_b = self.crossover(&parent_b, &parent_a);
            offspring.push(self.mutation(child_a));
            offspring.push(self.mutation(child_b));
        }

        Population::from_genomes(offspring)
    }

    /// The genome the driver should play with, per `config.champion`.
    pub fn champion(&self) -> Option<Genome> {
        match self.config.champion {
            Champion::First => self.population.first().copied(),
            Champion::Fittest => self.population.fittest().map(|(genome, _)| *genome),
        }
    }
}
