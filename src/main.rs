//! Command-line driver: seeds cities, evolves tours, prints the best one.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use u_salesman::city::{CityRegistry, Point};
use u_salesman::ga::{GaConfig, GaRunner};
use u_salesman::random::create_rng;

#[derive(Parser, Debug)]
#[command(name = "u-salesman")]
#[command(about = "Evolve a short closed tour through a set of 2-D cities", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of random cities to generate (ignored when --city is given).
    #[arg(long, default_value_t = 10)]
    cities: usize,

    /// Explicit city as `X,Y`; repeat for each city.
    #[arg(long = "city", value_name = "X,Y", allow_hyphen_values = true)]
    city: Vec<Point>,

    #[arg(long, default_value_t = 50)]
    population_size: usize,

    #[arg(long, default_value_t = 1000)]
    generations: usize,

    /// Breed every slot instead of carrying the fittest tour over.
    #[arg(long)]
    no_elitism: bool,

    #[arg(long, default_value_t = 0.015)]
    mutation_rate: f64,

    #[arg(long, default_value_t = 5)]
    tournament_size: usize,

    /// Seed for city generation and evolution.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GaConfig {
        population_size: cli.population_size,
        max_generations: cli.generations,
        elitism: !cli.no_elitism,
        mutation_rate: cli.mutation_rate,
        tournament_size: cli.tournament_size,
        ..GaConfig::default()
    };
    config.validate().context("invalid run parameters")?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    config.seed = Some(seed);

    let registry = if cli.city.is_empty() {
        CityRegistry::random(cli.cities, &mut create_rng(seed))
    } else {
        CityRegistry::new(cli.city)
    };
    tracing::info!(cities = registry.count(), seed, "city registry ready");

    let result = GaRunner::run(&registry, &config).context("evolution failed")?;

    println!("Finished");
    println!("Final distance: {}", result.best_length);
    println!("Solution:");
    println!("{}", result.best);
    Ok(())
}
