//! Shared helpers for fee estimate benchmarks.

use {
    fee_estimate::EstimateProperties,
    rand::{rngs::StdRng, Rng, SeedableRng},
};

/// Deterministic batch of `n` plausible simulation records.
///
/// Gas spans a plain transfer up to a heavy contract call, storage includes
/// freed bytes, and every third record carries a caller base fee.
pub fn make_simulation_batch(n: usize, seed: u64) -> Vec<EstimateProperties> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| EstimateProperties {
            milligas_limit: rng.random_range(1_000..1_040_000) as f64,
            storage_limit: rng.random_range(-500i64..5_000) as f64,
            op_size: rng.random_range(100..32_768),
            minimal_fee_per_storage_byte_mutez: 250.0,
            base_fee_mutez: (i % 3 == 0).then(|| rng.random_range(0..2_000) as f64),
        })
        .collect()
}
