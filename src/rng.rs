//! Construction of the random source handed to the generators.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded generator when `seed` is given, entropy-seeded otherwise.
///
/// Every generator takes `&mut impl Rng`, so a caller can pass any other
/// source as well; this is what the binaries use.
pub fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => {
            log::debug!("using seed {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    }
}
