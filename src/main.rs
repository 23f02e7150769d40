use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use genetic_connect_four::ai::{GenomeAgent, RandomAgent};
use genetic_connect_four::config::AppConfig;
use genetic_connect_four::evolution::{Champion, EvolutionEngine};
use genetic_connect_four::exhibition::play_exhibition;
use genetic_connect_four::game::GameOutcome;

/// Evolve a Connect Four move sequence, then play it against a random opponent.
#[derive(Parser)]
#[command(name = "genetic-connect-four", about = "Evolve and play a Connect Four strategy")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of generations
    #[arg(long)]
    generations: Option<usize>,

    /// Override population size (must be even)
    #[arg(long)]
    population_size: Option<usize>,

    /// Override mutation rate
    #[arg(long)]
    mutation_rate: Option<f64>,

    /// Seed both the search and the exhibition game
    #[arg(long)]
    seed: Option<u64>,

    /// Which genome from the final population plays the exhibition
    #[arg(long, value_enum)]
    champion: Option<ChampionArg>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ChampionArg {
    First,
    Fittest,
}

impl From<ChampionArg> for Champion {
    fn from(arg: ChampionArg) -> Self {
        match arg {
            ChampionArg::First => Champion::First,
            ChampionArg::Fittest => Champion::Fittest,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(generations) = cli.generations {
        config.evolution.generations = generations;
    }
    if let Some(size) = cli.population_size {
        config.evolution.population_size = size;
    }
    if let Some(rate) = cli.mutation_rate {
        config.evolution.mutation_rate = rate;
    }
    if let Some(seed) = cli.seed {
        config.evolution.seed = Some(seed);
        config.exhibition.seed = Some(seed.wrapping_add(1));
    }
    if let Some(champion) = cli.champion {
        config.evolution.champion = champion.into();
    }
    config.validate().context("invalid configuration")?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let mut engine = EvolutionEngine::new(config.evolution.clone())?;
    engine.evolve();

    let champion = engine
        .champion()
        .context("final population is empty")?;
    info!(
        "Champion ({:?}): {:?} with fitness {}",
        config.evolution.champion,
        champion.genes(),
        engine.fitness(&champion)
    );

    let (ai_rng, opponent_rng) = match config.exhibition.seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (StdRng::from_os_rng(), StdRng::from_os_rng()),
    };
    let mut ai = GenomeAgent::with_rng(champion, ai_rng);
    let mut opponent = RandomAgent::with_rng(opponent_rng);

    let result = play_exhibition(&mut ai, &mut opponent, config.exhibition.max_move_attempts)
        .context("exhibition game")?;

    print!("{}", result.board);
    match result.outcome {
        GameOutcome::Winner(player) => println!("{player} wins!"),
        GameOutcome::Draw => println!("It's a draw!"),
    }
    Ok(())
}
