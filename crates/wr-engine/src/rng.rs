//! Weighted random sampling primitives
//!
//! All randomness enters the engine through an explicit `&mut impl Rng`
//! parameter so tests can replay spins with a seeded generator.

use rand::Rng;

/// Uniformly distributed integer in `[min, max]` inclusive.
///
/// Derived from a uniform float in `[0, 1)` rather than an integer range
/// so the draw sequence matches one float per call.
pub fn random_int<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    debug_assert!(min <= max);
    let span = (max - min + 1) as f64;
    min + (rng.random::<f64>() * span).floor() as i64
}

/// Picks one value from `(value, weight)` pairs with probability
/// proportional to its weight.
///
/// Cumulative subtraction walk: draw `r` uniform in `[0, W)` where `W` is
/// the total weight, then scan in input order returning the first item
/// whose weight exceeds the remaining `r`. If every weight is zero the
/// last item is returned — a defined degenerate case, not an error.
pub fn pick_weighted<'a, R: Rng, T>(rng: &mut R, items: &'a [(T, u32)]) -> &'a T {
    assert!(!items.is_empty(), "pick_weighted requires a non-empty slice");

    let total: u64 = items.iter().map(|(_, w)| u64::from(*w)).sum();
    let mut r = rng.random::<f64>() * total as f64;

    for (value, weight) in items {
        let weight = f64::from(*weight);
        if r < weight {
            return value;
        }
        r -= weight;
    }

    // All-zero weights (or float edge): fall back to the last item.
    &items[items.len() - 1].0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_int_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_int(&mut rng, -3, 5);
            assert!((-3..=5).contains(&v));
        }
    }

    #[test]
    fn test_random_int_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_int(&mut rng, 4, 4), 4);
    }

    #[test]
    fn test_pick_weighted_single_nonzero() {
        let mut rng = StdRng::seed_from_u64(1);
        let items = [("a", 0u32), ("b", 0), ("c", 5)];
        for _ in 0..100 {
            assert_eq!(*pick_weighted(&mut rng, &items), "c");
        }
    }

    #[test]
    fn test_pick_weighted_all_zero_falls_back_to_last() {
        let mut rng = StdRng::seed_from_u64(2);
        let items = [("a", 0u32), ("b", 0)];
        for _ in 0..100 {
            assert_eq!(*pick_weighted(&mut rng, &items), "b");
        }
    }

    #[test]
    fn test_pick_weighted_probability_mass() {
        // 3:1 weights should split draws roughly 75/25.
        let mut rng = StdRng::seed_from_u64(3);
        let items = [("heavy", 30u32), ("light", 10)];

        let mut heavy = 0u32;
        let n = 40_000;
        for _ in 0..n {
            if *pick_weighted(&mut rng, &items) == "heavy" {
                heavy += 1;
            }
        }

        let ratio = f64::from(heavy) / f64::from(n);
        assert!((0.72..0.78).contains(&ratio), "ratio was {ratio}");
    }
}
