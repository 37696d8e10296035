//! Random source construction.
//!
//! Every stochastic operation in the crate takes `&mut R where R: Rng`, so
//! callers can inject any generator. This module only fixes the default one.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the default generator, deterministically seeded.
///
/// Two generators built from the same seed produce the same stream, which
/// is what makes runs reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
