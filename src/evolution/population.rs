use rand::Rng;

use super::fitness::fitness;
use super::genome::Genome;

/// One generation of genomes.
///
/// A population is never edited in place: breeding builds the next one and
/// the engine swaps it in whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    genomes: Vec<Genome>,
}

/// Fitness summary reported after each generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Generation number, starting at 1.
    pub generation: usize,
    pub best_fitness: u32,
    pub mean_fitness: f64,
}

impl Population {
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        Population {
            genomes: (0..size).map(|_| Genome::random(rng)).collect(),
        }
    }

    pub fn from_genomes(genomes: Vec<Genome>) -> Self {
        Population { genomes }
    }

    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    /// The genome at index 0, regardless of its fitness.
    pub fn first(&self) -> Option<&Genome> {
        self.genomes.first()
    }

    /// Fitness of every genome, in population order.
    pub fn fitness_scores(&self) -> Vec<u32> {
        self.genomes.iter().map(fitness).collect()
    }

    /// Highest-scoring genome and its fitness; ties go to the earliest.
    pub fn fittest(&self) -> Option<(&Genome, u32)> {
        self.genomes
            .iter()
            .map(|genome| (genome, fitness(genome)))
            .rev()
            .max_by_key(|&(_, score)| score)
    }

    pub fn stats(&self, generation: usize) -> GenerationStats {
        let scores = self.fitness_scores();
        let best_fitness = scores.iter().copied().max().unwrap_or(0);
        let mean_fitness = if scores.is_empty() {
            0.0
        } else {
            scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64
        };
        GenerationStats {
            generation,
            best_fitness,
            mean_fitness,
        }
    }
}
