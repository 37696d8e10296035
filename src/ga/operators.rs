//! Permutation operators for tours.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX): Davis (1985), preserves relative order
//!
//! # Mutation
//!
//! - [`swap_mutation`]: per-position swap with probability `rate`
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use super::tour::Tour;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) producing a single child.
///
/// # Algorithm
///
/// 1. Draw two cut points `start`, `end` independently from `0..n`
/// 2. Copy parent1's donor segment into the child at the same positions
///    (see [`order_crossover_at`] for the exact segment bounds)
/// 3. Fill the remaining slots left to right with parent2's cities, in
///    parent2's order, skipping cities the child already holds
///
/// The child always visits every city exactly once.
///
/// # Complexity
/// O(n²) time due to the membership scan, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn order_crossover<'a, R: Rng>(
    parent1: &Tour<'a>,
    parent2: &Tour<'a>,
    rng: &mut R,
) -> Tour<'a> {
    let n = parent1.len();
    assert!(n > 0, "parents must not be empty");
    let start = rng.random_range(0..n);
    let end = rng.random_range(0..n);
    order_crossover_at(parent1, parent2, start, end)
}

/// Order Crossover with fixed cut points.
///
/// Parent1 donates:
/// - `start < end`: positions strictly between `start` and `end`
/// - `start > end`: every position *not* strictly between `end` and
///   `start` (the wrap-around segment, both cut points included)
/// - `start == end`: nothing, the child is a copy of parent2
///
/// # Panics
/// Panics if the parents have different lengths or a cut point is out of
/// range.
pub fn order_crossover_at<'a>(
    parent1: &Tour<'a>,
    parent2: &Tour<'a>,
    start: usize,
    end: usize,
) -> Tour<'a> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start < n && end < n, "cut points must lie within 0..{n}");

    let mut child = Tour::empty(parent1.registry());

    // Step 1: donor segment from parent1
    for i in 0..n {
        let donated = if start < end {
            i > start && i < end
        } else if start > end {
            !(i < start && i > end)
        } else {
            false
        };
        if donated {
            if let Some(city) = parent1.get(i) {
                child.set(i, city);
            }
        }
    }

    // Step 2: remaining slots in parent2 order; slots only ever fill, so
    // the first empty slot never moves backwards
    let mut next_empty = 0;
    for city in parent2.cities() {
        if child.contains(city) {
            continue;
        }
        while child.get(next_empty).is_some() {
            next_empty += 1;
        }
        child.set(next_empty, city);
    }

    debug_assert!(child.is_permutation(), "OX child is not a permutation");
    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation.
///
/// Visits each position once, left to right. With probability `rate` the
/// city there is swapped with one at a uniformly drawn position (possibly
/// the same one). Swaps go through [`Tour::set`], so the cached length is
/// invalidated.
///
/// # Complexity
/// O(n)
pub fn swap_mutation<R: Rng>(tour: &mut Tour<'_>, rate: f64, rng: &mut R) {
    let n = tour.len();
    for i in 0..n {
        if rng.random::<f64>() < rate {
            let j = rng.random_range(0..n);
            if let (Some(a), Some(b)) = (tour.get(i), tour.get(j)) {
                tour.set(j, a);
                tour.set(i, b);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
