mod agent;
mod genome_agent;
mod random;

pub use agent::Agent;
pub use genome_agent::GenomeAgent;
pub use random::RandomAgent;
