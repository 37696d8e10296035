//! Genetic Algorithm for tours.
//!
//! Candidate solutions are [`Tour`]s over a shared [`CityRegistry`];
//! fitness is the reciprocal of the closed-tour length, so higher is better.
//!
//! # Key Types
//!
//! - [`Tour`]: A candidate tour with a lazily cached length
//! - [`Population`]: Fixed-size collection of tours
//! - [`GaConfig`]: Run parameters (population size, generations, rates)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best tour found plus per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Order crossover (OX) and swap mutation
//! - [`selection`]: Tournament selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Potvin (1996), "Genetic Algorithms for the Traveling Salesman Problem"
//!
//! [`CityRegistry`]: crate::city::CityRegistry

mod config;
pub mod operators;
mod population;
mod runner;
pub mod selection;
mod tour;

pub use config::GaConfig;
pub use population::Population;
pub use runner::{evolve, GaResult, GaRunner, GenerationStats};
pub use tour::Tour;
