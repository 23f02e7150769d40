//! Genetic search over scripted drop sequences: genomes, the replay-based
//! fitness function, selection/crossover/mutation operators, and the
//! generational engine that ties them together.

mod engine;
mod fitness;
mod genome;
mod operators;
mod population;

pub use engine::{Champion, EvolutionConfig, EvolutionEngine};
pub use fitness::fitness;
pub use genome::{Genome, GENOME_LEN};
pub use operators::{crossover, crossover_at, mutate, roulette_pair};
pub use population::{GenerationStats, Population};
