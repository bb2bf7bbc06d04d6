//! Random source construction.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The random source used for seeds: a portable, reproducible stream.
pub type SeedRng = ChaCha8Rng;

/// Creates a generator from an optional seed.
///
/// With a seed the stream is reproducible across runs and platforms;
/// without one it is seeded from the operating system.
pub fn seeded_rng(seed: Option<u64>) -> SeedRng {
    match seed {
        Some(seed) => SeedRng::seed_from_u64(seed),
        None => SeedRng::from_os_rng(),
    }
}
