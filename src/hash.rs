//! Universal hash family over a bounded integer domain.
//!
//! Each member is an affine map `key -> ((a*key + b) mod p) mod table_size`
//! with a prime modulus `p > table_size`. For a member drawn uniformly at
//! random, any two distinct keys collide with probability at most
//! `1/table_size`, which is the property the filter's false-positive
//! analysis relies on.

use crate::prime::next_prime_at_least;
use rand::Rng;

/// One member of the universal family, fixed at creation time.
///
/// A plain value type rather than a closure, so a drawn function can be
/// inspected, copied, and re-evaluated deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniversalHash {
    /// `a`, drawn from `[1, p-1]`
    multiplier: u64,
    /// `b`, drawn from `[0, p-1]`
    offset: u64,
    /// `p`, prime, strictly greater than `table_size`
    modulus: u64,
    /// `n`, the size of the output range
    table_size: u64,
}

impl UniversalHash {
    /// Draw a fresh member of the family bound to `table_size`.
    ///
    /// Every call draws `a` and `b` independently from `rng`; reusing one
    /// drawn function where independent ones are needed breaks the
    /// collision bound. `table_size` must be at least 1 (the filter
    /// constructor enforces this).
    pub fn random<R: Rng + ?Sized>(table_size: usize, rng: &mut R) -> Self {
        debug_assert!(table_size >= 1, "table_size must be >= 1");
        let n = table_size as u64;
        let p = next_prime_at_least(n + 1);
        UniversalHash {
            multiplier: rng.gen_range(1..p),
            offset: rng.gen_range(0..p),
            modulus: p,
            table_size: n,
        }
    }

    /// Map `key` into `[0, table_size)`.
    ///
    /// Evaluated in `u128` so `a*key + b` cannot overflow for any `u64` key.
    pub fn hash(&self, key: u64) -> usize {
        let h = (self.multiplier as u128 * key as u128 + self.offset as u128)
            % self.modulus as u128;
        (h % self.table_size as u128) as usize
    }

    /// The prime modulus `p` this member was drawn with.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// The output range bound `n`.
    pub fn table_size(&self) -> usize {
        self.table_size as usize
    }
}

/// Draw `count` independent members of the family, all bound to `table_size`.
pub fn draw_hash_functions<R: Rng + ?Sized>(
    count: usize,
    table_size: usize,
    rng: &mut R,
) -> Vec<UniversalHash> {
    (0..count)
        .map(|_| UniversalHash::random(table_size, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_output_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for table_size in [1usize, 2, 7, 100, 1000] {
            let h = UniversalHash::random(table_size, &mut rng);
            for key in [0u64, 1, 42, 999_999_999, u64::MAX] {
                assert!(h.hash(key) < table_size);
            }
        }
    }

    #[test]
    fn test_table_size_one_always_zero() {
        let mut rng = StdRng::seed_from_u64(2);
        let h = UniversalHash::random(1, &mut rng);
        for key in 0..100u64 {
            assert_eq!(h.hash(key), 0);
        }
    }

    #[test]
    fn test_deterministic_evaluation() {
        let mut rng = StdRng::seed_from_u64(3);
        let h = UniversalHash::random(64, &mut rng);
        for key in [0u64, 5, 1337, u64::MAX] {
            assert_eq!(h.hash(key), h.hash(key));
        }
    }

    #[test]
    fn test_modulus_exceeds_table_size() {
        let mut rng = StdRng::seed_from_u64(4);
        for table_size in [1usize, 10, 97, 4096] {
            let h = UniversalHash::random(table_size, &mut rng);
            assert!(h.modulus() > table_size as u64);
            assert_eq!(h.table_size(), table_size);
        }
    }

    #[test]
    fn test_independent_draws_differ() {
        let mut rng = StdRng::seed_from_u64(5);
        let functions = draw_hash_functions(8, 1000, &mut rng);
        assert_eq!(functions.len(), 8);

        // Independent draws should not all collapse to one member
        let distinct: std::collections::HashSet<_> = functions
            .iter()
            .map(|h| (h.multiplier, h.offset))
            .collect();
        assert!(distinct.len() > 1);

        // ...and should spread a fixed key across slots
        let slots: std::collections::HashSet<_> =
            functions.iter().map(|h| h.hash(42)).collect();
        assert!(slots.len() > 1);
    }

    #[test]
    #[should_panic(expected = "table_size must be >= 1")]
    fn test_zero_table_size_rejected() {
        let mut rng = StdRng::seed_from_u64(6);
        let _ = UniversalHash::random(0, &mut rng);
    }

    #[test]
    fn test_matches_affine_formula() {
        let h = UniversalHash {
            multiplier: 123,
            offset: 456,
            modulus: 1009,
            table_size: 100,
        };
        for key in [0u64, 7, 42, 100_000] {
            let expected = ((123u128 * key as u128 + 456) % 1009 % 100) as usize;
            assert_eq!(h.hash(key), expected);
        }
    }
}
