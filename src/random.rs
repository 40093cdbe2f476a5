//! Seedable random streams.
//!
//! Every operator and strategy receives its generator explicitly; there is
//! no process-wide random state. One run consumes exactly one stream.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from the configured seed, falling back to an
/// entropy-derived seed when none is given.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
