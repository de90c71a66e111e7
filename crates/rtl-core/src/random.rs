//! Random range and shuffle helpers.
//!
//! There is no hidden, process-wide generator: every function takes the RNG
//! to draw from.  Pass `rand::thread_rng()` for everyday use or a seeded
//! `StdRng` for reproducible results.

use rand::Rng;

/// Picks a number uniformly from `low..=high`.
///
/// Returns `None` when either bound is negative or `low > high`.
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use rtl_core::random::rand_range;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let n = rand_range(&mut rng, 1, 6).unwrap();
/// assert!((1..=6).contains(&n));
/// assert_eq!(rand_range(&mut rng, 5, 1), None);
/// ```
pub fn rand_range<R: Rng + ?Sized>(rng: &mut R, low: i64, high: i64) -> Option<i64> {
    if low < 0 || high < 0 || low > high {
        return None;
    }
    Some(rng.gen_range(low..=high))
}

/// Shuffles `items` in place with the Fisher-Yates algorithm.
pub fn fisher_yates_shuffle<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rand_range_stays_within_bounds() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(42);

        // Act
        let draws: Vec<i64> = (0..1000)
            .map(|_| rand_range(&mut rng, 3, 9).expect("valid range"))
            .collect();

        // Assert
        assert!(draws.iter().all(|n| (3..=9).contains(n)));
        assert!(draws.contains(&3), "lower bound is inclusive");
        assert!(draws.contains(&9), "upper bound is inclusive");
    }

    #[test]
    fn test_rand_range_single_value() {
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(rand_range(&mut rng, 4, 4), Some(4));
        assert_eq!(rand_range(&mut rng, 0, 0), Some(0));
    }

    #[test]
    fn test_rand_range_rejects_invalid_bounds() {
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(rand_range(&mut rng, -1, 5), None);
        assert_eq!(rand_range(&mut rng, 0, -5), None);
        assert_eq!(rand_range(&mut rng, 6, 5), None);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(2024);
        let mut items: Vec<i32> = (0..50).collect();

        // Act
        fisher_yates_shuffle(&mut rng, &mut items);

        // Assert
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
        assert_ne!(items, sorted, "50 elements should not stay in order");
    }

    #[test]
    fn test_shuffle_is_reproducible_with_same_seed() {
        let mut a: Vec<u8> = (0..20).collect();
        let mut b = a.clone();

        fisher_yates_shuffle(&mut StdRng::seed_from_u64(9), &mut a);
        fisher_yates_shuffle(&mut StdRng::seed_from_u64(9), &mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_handles_tiny_slices() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty: [u8; 0] = [];
        let mut one = [7];

        fisher_yates_shuffle(&mut rng, &mut empty);
        fisher_yates_shuffle(&mut rng, &mut one);

        assert_eq!(one, [7]);
    }
}
