//! Uniform random numbers for the `/random-number` endpoint.

use rand::Rng;

/// Smallest value [`draw`] can return.
pub const MIN: u8 = 1;

/// Largest value [`draw`] can return.
pub const MAX: u8 = 100;

/// Draw a uniformly distributed integer in `[MIN, MAX]`.
pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(MIN..=MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn draw_covers_range_roughly_uniformly() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut counts = [0u32; MAX as usize];
        for _ in 0..100_000 {
            let n = draw(&mut rng);
            assert!((MIN..=MAX).contains(&n), "{n} outside [{MIN}, {MAX}]");
            counts[usize::from(n - MIN)] += 1;
        }
        // Expected 1000 per bucket; sigma is about 31.
        for (i, count) in counts.iter().enumerate() {
            assert!(
                (800..=1200).contains(count),
                "value {} drawn {count} times",
                i + 1
            );
        }
    }

    proptest::proptest! {
        #[test]
        fn proptest_draw_stays_in_range(seed in proptest::prelude::any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..64 {
                let n = draw(&mut rng);
                proptest::prop_assert!((MIN..=MAX).contains(&n));
            }
        }
    }
}
