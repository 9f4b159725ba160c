//! Sizing formulas shared by filter construction, diagnostics, and the
//! false-positive benchmark.
//!
//! All logarithms here are natural logs. The table-size formula inverts the
//! approximation `fpr ~ 0.61^(table_size/num_items)`, and the hash-count
//! formula is `k = round(ln(2*table_size/num_items))` with a floor of 1.

use crate::{BloomError, Result};

/// Base of the false-positive approximation `fpr ~ FPR_BASE^(n/m)`.
pub const FPR_BASE: f64 = 0.61;

/// Compute the bit-vector length for `num_items` expected insertions at the
/// target false-positive rate.
///
/// `table_size = round(num_items * ln(fpr) / ln(0.61))`. Fails with
/// [`BloomError::InvalidParameter`] when `num_items` is zero, when `fpr`
/// lies outside `(0, 1)` (including NaN), or when the rounded result is
/// below 1.
pub fn table_size_for(num_items: usize, false_positive_rate: f64) -> Result<usize> {
    if num_items == 0 {
        return Err(BloomError::InvalidParameter(
            "num_items must be > 0".to_string(),
        ));
    }
    if !(false_positive_rate > 0.0 && false_positive_rate < 1.0) {
        return Err(BloomError::InvalidParameter(format!(
            "false_positive_rate must lie in (0, 1), got {}",
            false_positive_rate
        )));
    }

    let table_size =
        (num_items as f64 * false_positive_rate.ln() / FPR_BASE.ln()).round();
    if table_size < 1.0 {
        return Err(BloomError::InvalidParameter(format!(
            "derived table size {} is not positive (num_items={}, false_positive_rate={})",
            table_size, num_items, false_positive_rate
        )));
    }
    Ok(table_size as usize)
}

/// Number of hash functions for a filter of `table_size` bits sized for
/// `num_items` insertions: `max(1, round(ln(2*table_size/num_items)))`.
///
/// Natural log, consistent with [`table_size_for`]. `num_items` must be
/// positive (enforced by the constructors that call this).
pub fn num_hash_for(table_size: usize, num_items: usize) -> usize {
    let k = (2.0 * table_size as f64 / num_items as f64).ln().round() as i64;
    k.max(1) as usize
}

/// Theoretical false-positive rate `0.61^(table_size/num_items)` for a
/// filter of `table_size` bits holding `num_items` keys. This is the curve
/// the empirical benchmark compares measured rates against.
pub fn theoretical_fpr(table_size: usize, num_items: usize) -> f64 {
    FPR_BASE.powf(table_size as f64 / num_items as f64)
}
