//! Bloom filter over integer keys.
//!
//! A fixed-size bit vector plus a family of independently drawn universal
//! hash functions. Answers "possibly present" or "definitely absent":
//! false positives happen at a rate governed by the sizing formula, false
//! negatives never happen because bits are only ever set, never cleared.

use crate::hash::{draw_hash_functions, UniversalHash};
use crate::{utils, Result};
use bit_vec::BitVec;
use rand::Rng;

/// Conventional default for the expected insertion count.
pub const DEFAULT_NUM_ITEMS: usize = 1000;
/// Conventional default for the target false-positive rate.
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.001;

/// A Bloom filter sized from an expected item count and a target
/// false-positive rate.
#[derive(Debug)]
pub struct BloomFilter {
    /// Expected insertion count the filter was sized for; not enforced
    num_items: usize,
    /// Bit-vector length, fixed at construction
    table_size: usize,
    /// Number of hash functions, fixed at construction
    num_hash: usize,
    /// Packed bit vector; bits only transition 0 -> 1
    bits: BitVec,
    /// Exactly `num_hash` independently drawn hash functions
    hash_functions: Vec<UniversalHash>,
    /// Number of insert calls, for diagnostics
    count: usize,
}

impl BloomFilter {
    /// Create a filter sized for `num_items` insertions at the target
    /// false-positive rate, drawing hash coefficients from the thread RNG.
    ///
    /// Conventional defaults are [`DEFAULT_NUM_ITEMS`] and
    /// [`DEFAULT_FALSE_POSITIVE_RATE`]. Sizing uses natural logs:
    /// `table_size = round(num_items * ln(rate) / ln(0.61))` and
    /// `num_hash = max(1, round(ln(2 * table_size / num_items)))`.
    pub fn new(num_items: usize, false_positive_rate: f64) -> Result<Self> {
        Self::with_rng(num_items, false_positive_rate, &mut rand::thread_rng())
    }

    /// Like [`BloomFilter::new`], but drawing hash coefficients from the
    /// supplied RNG. A seeded RNG makes the constructed filter fully
    /// reproducible.
    pub fn with_rng<R: Rng + ?Sized>(
        num_items: usize,
        false_positive_rate: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let table_size = utils::table_size_for(num_items, false_positive_rate)?;
        Self::build(num_items, table_size, rng)
    }

    /// Create a filter with an explicit bit-vector length instead of the
    /// derived one. The hash-function count is still derived from
    /// `table_size` and `num_items`.
    pub fn with_table_size(num_items: usize, table_size: usize) -> Result<Self> {
        Self::with_table_size_rng(num_items, table_size, &mut rand::thread_rng())
    }

    /// Like [`BloomFilter::with_table_size`], with a caller-supplied RNG.
    pub fn with_table_size_rng<R: Rng + ?Sized>(
        num_items: usize,
        table_size: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if num_items == 0 {
            return Err(crate::BloomError::InvalidParameter(
                "num_items must be > 0".to_string(),
            ));
        }
        if table_size == 0 {
            return Err(crate::BloomError::InvalidParameter(
                "table_size must be > 0".to_string(),
            ));
        }
        Self::build(num_items, table_size, rng)
    }

    fn build<R: Rng + ?Sized>(
        num_items: usize,
        table_size: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let num_hash = utils::num_hash_for(table_size, num_items);
        let hash_functions = draw_hash_functions(num_hash, table_size, rng);

        Ok(BloomFilter {
            num_items,
            table_size,
            num_hash,
            bits: BitVec::from_elem(table_size, false),
            hash_functions,
            count: 0,
        })
    }

    /// Insert a key into the filter.
    ///
    /// Sets the bit at each of the `num_hash` hashed positions. Idempotent;
    /// two hash functions landing on the same slot is harmless.
    pub fn insert(&mut self, key: u64) {
        for hash_fn in &self.hash_functions {
            self.bits.set(hash_fn.hash(key), true);
        }
        self.count += 1;
    }

    /// Check whether a key might be in the filter.
    ///
    /// Returns `false` only when the key is definitely absent. A key that
    /// was inserted is always reported present; a key that was never
    /// inserted is reported present with probability roughly
    /// [`utils::theoretical_fpr`].
    pub fn contains(&self, key: u64) -> bool {
        self.hash_functions
            .iter()
            .all(|hash_fn| self.bits.get(hash_fn.hash(key)).unwrap_or(false))
    }

    /// Render the bit vector as a '0'/'1' string, index 0 first.
    ///
    /// Diagnostic aid only; not part of the membership contract.
    pub fn to_bit_string(&self) -> String {
        self.bits
            .iter()
            .map(|bit| if bit { '1' } else { '0' })
            .collect()
    }

    /// The bit-vector length `n`.
    pub fn table_size(&self) -> usize {
        self.table_size
    }

    /// The number of hash functions `k`.
    pub fn num_hash(&self) -> usize {
        self.num_hash
    }

    /// The expected insertion count the filter was sized for.
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// The number of insert calls so far.
    pub fn len(&self) -> usize {
        self.count
    }

    /// True if nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Fraction of bits currently set.
    pub fn load_factor(&self) -> f64 {
        let set_bits = self.bits.iter().filter(|&bit| bit).count();
        set_bits as f64 / self.table_size as f64
    }

    /// Snapshot of the filter's parameters and fill state.
    pub fn stats(&self) -> FilterStats {
        FilterStats {
            table_size: self.table_size,
            num_hash: self.num_hash,
            num_items: self.num_items,
            elements_inserted: self.count,
            load_factor: self.load_factor(),
            theoretical_fpr: utils::theoretical_fpr(self.table_size, self.num_items),
        }
    }
}

/// Diagnostic snapshot of a [`BloomFilter`].
#[derive(Debug, Clone)]
pub struct FilterStats {
    pub table_size: usize,
    pub num_hash: usize,
    pub num_items: usize,
    pub elements_inserted: usize,
    pub load_factor: f64,
    pub theoretical_fpr: f64,
}

impl std::fmt::Display for FilterStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter Stats:\n\
             - Table size: {} bits\n\
             - Hash functions: {}\n\
             - Sized for: {} items\n\
             - Elements inserted: {}\n\
             - Load factor: {:.3}\n\
             - Theoretical FPR: {:.6}",
            self.table_size,
            self.num_hash,
            self.num_items,
            self.elements_inserted,
            self.load_factor,
            self.theoretical_fpr
        )
    }
}
