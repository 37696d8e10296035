//! Parent selection.
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::population::Population;
use super::tour::Tour;
use rand::Rng;

/// Tournament selection: draw `k` slots uniformly **with replacement** and
/// return the index of the fittest one drawn.
///
/// Ties go to the contestant drawn first.
///
/// # Complexity
/// O(k) draws, plus the length of any contestant not yet evaluated.
///
/// # Panics
/// Panics if `k` is zero.
pub fn tournament_select<R: Rng>(population: &Population<'_>, k: usize, rng: &mut R) -> usize {
    assert!(k > 0, "tournament size must be at least 1");
    let n = population.len();
    let contestants: Vec<usize> = (0..k).map(|_| rng.random_range(0..n)).collect();
    let tours: Vec<&Tour<'_>> = contestants.iter().map(|&i| population.get(i)).collect();
    contestants[best_of(&tours)]
}

/// Position of the fittest tour in `sample`.
///
/// Only a strictly greater fitness displaces the current best, matching
/// [`Population::fittest_index`].
///
/// # Panics
/// Panics if `sample` is empty.
pub fn best_of(sample: &[&Tour<'_>]) -> usize {
    assert!(!sample.is_empty(), "cannot select from an empty sample");
    let mut best = 0;
    for (i, tour) in sample.iter().enumerate().skip(1) {
        if tour.fitness() > sample[best].fitness() {
            best = i;
        }
    }
    best
}
