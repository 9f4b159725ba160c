//! # Universal Bloom
//!
//! A Bloom filter over integer keys, built on a universal hash family with
//! prime-modulus affine hashing. The filter is sized from an expected item
//! count and a target false-positive rate; lookups answer "possibly
//! present" or "definitely absent" with no false negatives.
//!
//! Hash coefficients are drawn from a caller-suppliable RNG, so filters
//! can be made fully reproducible with a fixed seed.

pub mod bloom;
pub mod hash;
pub mod prime;
pub mod utils;

pub use bloom::{BloomFilter, FilterStats};
pub use hash::UniversalHash;

/// Common error type for the library
#[derive(Debug, Clone)]
pub enum BloomError {
    InvalidParameter(String),
}

impl std::fmt::Display for BloomError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BloomError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for BloomError {}

pub type Result<T> = std::result::Result<T, BloomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_filter() {
        let mut bloom = BloomFilter::new(1000, 0.01).unwrap();

        bloom.insert(42);
        bloom.insert(1337);
        bloom.insert(9999);

        assert!(bloom.contains(42));
        assert!(bloom.contains(1337));
        assert!(bloom.contains(9999));
    }

    #[test]
    fn test_degenerate_rate_fails() {
        let err = BloomFilter::new(1000, 1.0).unwrap_err();
        match err {
            BloomError::InvalidParameter(msg) => {
                assert!(msg.contains("false_positive_rate"));
            }
        }
    }

    #[test]
    fn test_filter_is_debug() {
        // unwrap_err on construction results needs BloomFilter: Debug
        let bloom = BloomFilter::new(10, 0.1).unwrap();
        let rendered = format!("{:?}", bloom);
        assert!(rendered.contains("BloomFilter"));
    }

    #[test]
    fn test_error_display() {
        let err = BloomError::InvalidParameter("table_size must be > 0".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid parameter: table_size must be > 0"
        );
    }
}
