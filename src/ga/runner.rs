//! GA evolutionary loop execution.
//!
//! [`evolve`] produces one generation from the previous one:
//! elitism → tournament selection → order crossover → swap mutation.
//! [`GaRunner`] seeds the first population and applies `evolve` for a
//! fixed number of generations.

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use super::population::Population;
use super::selection::tournament_select;
use super::tour::Tour;
use crate::city::CityRegistry;
use crate::error::GaError;
use crate::random::create_rng;
use rand::Rng;
use tracing::instrument;

/// Summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 0 for the initial population.
    pub generation: usize,

    /// Length of the generation's fittest tour.
    pub best_length: f64,

    /// Mean tour length across the generation.
    pub mean_length: f64,
}

impl GenerationStats {
    fn of(generation: usize, population: &Population<'_>) -> Self {
        Self {
            generation,
            best_length: population.fittest().length(),
            mean_length: population.mean_length(),
        }
    }
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<'a> {
    /// Fittest tour of the final generation.
    pub best: Tour<'a>,

    /// Same as `best.length()`.
    pub best_length: f64,

    /// Length of the fittest tour in the initial population.
    pub initial_best_length: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Per-generation statistics; entry 0 describes the initial population.
    pub history: Vec<GenerationStats>,
}

/// Produces the next generation from `population`.
///
/// 1. With elitism, slot 0 receives an unmutated copy of the fittest tour
/// 2. Every other slot receives the OX child of two tournament winners,
///    both drawn from `population`
/// 3. Once all slots are filled, every non-elite slot is swap-mutated
///
/// The result has the same size as `population`. `config` is expected to
/// have passed [`GaConfig::validate`].
pub fn evolve<'a, R: Rng>(
    population: &Population<'a>,
    config: &GaConfig,
    rng: &mut R,
) -> Population<'a> {
    let size = population.len();
    let mut tours = Vec::with_capacity(size);

    let elite_offset = if config.elitism {
        let elite = population.fittest();
        tracing::trace!(length = elite.length(), "carrying elite over");
        tours.push(elite.clone());
        1
    } else {
        0
    };

    while tours.len() < size {
        let p1 = tournament_select(population, config.tournament_size, rng);
        let p2 = tournament_select(population, config.tournament_size, rng);
        tours.push(order_crossover(population.get(p1), population.get(p2), rng));
    }

    let mut next = Population::from_tours(tours);
    for i in elite_offset..next.len() {
        swap_mutation(next.get_mut(i), config.mutation_rate, rng);
    }
    next
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_salesman::city::{CityRegistry, Point};
/// use u_salesman::ga::{GaConfig, GaRunner};
///
/// let registry = CityRegistry::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ]);
/// let config = GaConfig::default().with_max_generations(20).with_seed(42);
/// let result = GaRunner::run(&registry, &config).unwrap();
/// assert!(result.best.is_permutation());
/// assert!(result.best_length <= result.initial_best_length);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`, or from
    /// entropy when no seed is set.
    pub fn run<'a>(
        registry: &'a CityRegistry,
        config: &GaConfig,
    ) -> Result<GaResult<'a>, GaError> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(registry, config, &mut rng)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// Fails before any evolution if the configuration is invalid or the
    /// registry holds no cities.
    #[instrument(
        level = "info",
        skip_all,
        fields(cities = registry.count(), population_size = config.population_size)
    )]
    pub fn run_with_rng<'a, R: Rng>(
        registry: &'a CityRegistry,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<'a>, GaError> {
        config.validate()?;
        if registry.is_empty() {
            return Err(GaError::EmptyRegistry);
        }

        // 1. Initialize population
        let mut population = Population::random(registry, config.population_size, rng);
        if config.seed_registry_order {
            population.save(0, Tour::in_registry_order(registry));
        }

        let mut history = Vec::with_capacity(config.max_generations.saturating_add(1));
        history.push(GenerationStats::of(0, &population));
        let initial_best_length = history[0].best_length;
        tracing::info!(
            initial_best_length,
            generations = config.max_generations,
            "evolving tours"
        );

        // 2. Evolutionary loop
        for generation in 1..=config.max_generations {
            population = evolve(&population, config, rng);
            let stats = GenerationStats::of(generation, &population);
            tracing::debug!(
                generation,
                best_length = stats.best_length,
                mean_length = stats.mean_length,
                "generation complete"
            );
            history.push(stats);
        }

        let best = population.fittest().clone();
        let best_length = best.length();
        tracing::info!(best_length, initial_best_length, "evolution finished");

        Ok(GaResult {
            best,
            best_length,
            initial_best_length,
            generations: config.max_generations,
            history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
