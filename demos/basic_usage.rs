//! Basic usage examples for universal-bloom

use rand::{rngs::StdRng, SeedableRng};
use universal_bloom::bloom::{DEFAULT_FALSE_POSITIVE_RATE, DEFAULT_NUM_ITEMS};
use universal_bloom::{utils, BloomFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Universal Bloom Filter Examples ===\n");

    // Example 1: sized from a target false-positive rate
    println!("1. Sized filter:");
    let mut bloom = BloomFilter::new(DEFAULT_NUM_ITEMS, DEFAULT_FALSE_POSITIVE_RATE)?;

    let test_data = [42u64, 1337, 9999, 12345, 67890];
    for &item in &test_data {
        bloom.insert(item);
    }

    for &item in &test_data {
        println!("  {} in filter: {}", item, bloom.contains(item));
    }
    for &item in &[1u64, 2, 3, 4, 5] {
        println!("  {} in filter: {}", item, bloom.contains(item));
    }
    println!("  {}", bloom.stats());
    println!();

    // Example 2: reproducible filter from a seeded RNG
    println!("2. Seeded filter with a peek at the bits:");
    let mut rng = StdRng::seed_from_u64(7);
    let mut tiny = BloomFilter::with_table_size_rng(8, 32, &mut rng)?;
    for &item in &[5u64, 42] {
        tiny.insert(item);
    }
    println!("  bits (index 0 first): {}", tiny.to_bit_string());
    println!("  5 in filter:  {}", tiny.contains(5));
    println!("  42 in filter: {}", tiny.contains(42));
    println!();

    // Example 3: measured vs theoretical false-positive rate
    println!("3. Measured vs theoretical FPR:");
    let num_items = 1000usize;
    let mut rng = StdRng::seed_from_u64(11);
    let mut filter = BloomFilter::with_table_size_rng(num_items, 8000, &mut rng)?;
    for key in 0..num_items as u64 {
        filter.insert(key);
    }

    let probes = 10_000u64;
    let false_positives = (0..probes)
        .filter(|i| filter.contains(1_000_000 + i))
        .count();
    println!(
        "  measured:    {:.4}",
        false_positives as f64 / probes as f64
    );
    println!(
        "  theoretical: {:.4}",
        utils::theoretical_fpr(filter.table_size(), num_items)
    );

    Ok(())
}
