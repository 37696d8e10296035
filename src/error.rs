//! Error types.
//!
//! Configuration problems are reported up front by [`GaConfig::validate`];
//! once a run has started the only error condition is a half-built tour
//! leaking out of crossover, which is an internal invariant violation.
//!
//! [`GaConfig::validate`]: crate::ga::GaConfig::validate

/// Invalid run parameters, detected before evolution starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    PopulationTooSmall,
    #[error("tournament_size must be at least 1")]
    TournamentTooSmall,
    #[error("tournament_size ({tournament_size}) exceeds population_size ({population_size})")]
    TournamentTooLarge {
        tournament_size: usize,
        population_size: usize,
    },
    #[error("mutation_rate must lie within [0, 1], got {0}")]
    MutationRateOutOfRange(f64),
}

/// Errors raised by the solver.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    /// A length or fitness was requested on a tour with unfilled slots.
    #[error("tour slot {position} is empty; length is undefined for an incomplete tour")]
    InvalidState { position: usize },
    #[error("city registry is empty")]
    EmptyRegistry,
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
