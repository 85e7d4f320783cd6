// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Shuffles rows with a seeded RNG and cuts them into two sets:
//   - Training set: the first n_train shuffled rows
//   - Testing set:  the remaining n_test rows
//
// Sizes:
//   n_test  = ceil(test_fraction * total)
//   n_train = total - n_test
//
// With test_fraction = 0.2 and 5 rows this gives 4 / 1.
// Both sides must end up non-empty, otherwise the split fails.
//
// The shuffle is Fisher-Yates via rand::seq::SliceRandom,
// driven by StdRng::seed_from_u64(seed). Same seed, same row
// count and row order → same partition on every run.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use anyhow::{bail, ensure, Result};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Share of rows that goes to the testing set.
pub const TEST_FRACTION: f64 = 0.2;

/// Seed for the row shuffle.
pub const SPLIT_SEED: u64 = 42;

/// Shuffle `samples` with `seed` and split into (train, test).
///
/// # Arguments
/// * `samples`       - All rows (consumed by this function)
/// * `test_fraction` - Proportion for testing, e.g. 0.2 = 20%
/// * `seed`          - RNG seed for the shuffle
///
/// # Errors
/// Fails if `test_fraction` is outside (0, 1) or if either side
/// of the split would be empty.
pub fn split_train_test<T>(
    mut samples:   Vec<T>,
    test_fraction: f64,
    seed:          u64,
) -> Result<(Vec<T>, Vec<T>)> {
    ensure!(
        test_fraction > 0.0 && test_fraction < 1.0,
        "test fraction must be between 0 and 1 (exclusive), got {test_fraction}"
    );

    let total   = samples.len();
    let n_test  = ((total as f64) * test_fraction).ceil() as usize;
    let n_train = total.saturating_sub(n_test);

    if n_train == 0 || n_test == 0 {
        bail!(
            "cannot split {total} rows with test fraction {test_fraction}: \
             train would have {n_train} rows and test {n_test}"
        );
    }

    let mut rng = StdRng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    // After this: samples = [0..n_train], test = [n_train..total]
    let test = samples.split_off(n_train);

    tracing::debug!(
        "Dataset split: {} training, {} testing (seed {})",
        samples.len(),
        test.len(),
        seed,
    );

    Ok((samples, test))
}
