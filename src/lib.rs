//! Genetic-algorithm heuristic solver for the Euclidean Traveling Salesman
//! Problem.
//!
//! Given a fixed set of 2-D cities, evolves a population of closed tours
//! toward shorter total length using elitism, tournament selection, order
//! crossover and swap mutation.
//!
//! - [`city`]: Coordinates, city handles and the read-only [`CityRegistry`]
//! - [`ga`]: Tours, populations, operators and the run loop
//! - [`error`]: Configuration and invariant errors
//! - [`random`]: Seedable default generator
//!
//! # Example
//!
//! ```
//! use u_salesman::city::CityRegistry;
//! use u_salesman::ga::{GaConfig, GaRunner};
//! use u_salesman::random::create_rng;
//!
//! let registry = CityRegistry::random(10, &mut create_rng(1));
//! let config = GaConfig::default().with_max_generations(50).with_seed(42);
//! let result = GaRunner::run(&registry, &config)?;
//! println!("best length: {}", result.best_length);
//! # Ok::<(), u_salesman::error::GaError>(())
//! ```
//!
//! [`CityRegistry`]: city::CityRegistry

pub mod city;
pub mod error;
pub mod ga;
pub mod random;
