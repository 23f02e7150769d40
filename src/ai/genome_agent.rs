use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;
use crate::evolution::{Genome, GENOME_LEN};
use crate::game::GameEngine;

/// Plays an evolved genome by drawing one of its genes at random each turn.
///
/// Genes are not read in order: every call picks any position uniformly, so
/// the same column can come up repeatedly while others never do.
pub struct GenomeAgent {
    genome: Genome,
    rng: StdRng,
}

impl GenomeAgent {
    pub fn new(genome: Genome) -> Self {
        Self::with_rng(genome, StdRng::from_os_rng())
    }

    pub fn with_rng(genome: Genome, rng: StdRng) -> Self {
        GenomeAgent { genome, rng }
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }
}

impl Agent for GenomeAgent {
    fn select_column(&mut self, _engine: &GameEngine) -> isize {
        let index = self.rng.random_range(0..GENOME_LEN);
        self.genome.gene(index) as isize
    }

    fn name(&self) -> &str {
        "Genome"
    }
}
