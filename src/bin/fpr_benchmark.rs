//! Empirical false-positive sweep: measured vs theoretical rate across
//! table sizes, for a fixed expected item count.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;
use std::time::Instant;
use universal_bloom::{utils, BloomFilter};

const NUM_ITEMS: usize = 1000;
const NUM_PROBES: usize = 10_000;

fn main() {
    println!("False-positive sweep ({} items per filter)", NUM_ITEMS);
    println!("{}", "=".repeat(55));

    // Table sizes from badly undersized to comfortably oversized
    let table_sizes: Vec<usize> = (1..=16).map(|i| i * 1000).collect();
    println!("Table sizes: {:?}", table_sizes);
    println!();

    let mut results = Vec::new();

    for (step, &table_size) in table_sizes.iter().enumerate() {
        println!("Measuring table_size = {}...", table_size);

        let mut rng = StdRng::seed_from_u64(step as u64);
        let mut filter = match BloomFilter::with_table_size_rng(NUM_ITEMS, table_size, &mut rng)
        {
            Ok(filter) => filter,
            Err(err) => {
                eprintln!("  skipped: {}", err);
                continue;
            }
        };

        // Random member set, so probes can be checked against it
        let mut members = HashSet::with_capacity(NUM_ITEMS);
        while members.len() < NUM_ITEMS {
            members.insert(rng.gen::<u64>());
        }

        let start = Instant::now();
        for &key in &members {
            filter.insert(key);
        }
        let insert_time = start.elapsed().as_secs_f64();

        let start = Instant::now();
        let mut probes = 0usize;
        let mut false_positives = 0usize;
        while probes < NUM_PROBES {
            let key = rng.gen::<u64>();
            if members.contains(&key) {
                continue;
            }
            if filter.contains(key) {
                false_positives += 1;
            }
            probes += 1;
        }
        let query_time = start.elapsed().as_secs_f64();

        let measured = false_positives as f64 / NUM_PROBES as f64;
        let theoretical = utils::theoretical_fpr(table_size, NUM_ITEMS);

        println!(
            "  done - k = {}, load = {:.3}, measured = {:.4}, theoretical = {:.4}",
            filter.num_hash(),
            filter.load_factor(),
            measured,
            theoretical
        );

        results.push((
            table_size,
            filter.num_hash(),
            filter.load_factor(),
            measured,
            theoretical,
            insert_time,
            query_time,
        ));
    }

    println!("\nResults (CSV format):");
    println!("table_size,num_hash,load_factor,measured_fpr,theoretical_fpr,insert_time,query_time");
    for (table_size, num_hash, load, measured, theoretical, insert_time, query_time) in &results
    {
        println!(
            "{},{},{:.4},{:.6},{:.6},{:.6},{:.6}",
            table_size, num_hash, load, measured, theoretical, insert_time, query_time
        );
    }

    if let Some(&(table_size, _, _, measured, theoretical, insert_time, query_time)) =
        results.last()
    {
        println!("\nKey findings (at table_size = {}):", table_size);
        println!("  Measured FPR:    {:.6}", measured);
        println!("  Theoretical FPR: {:.6}", theoretical);
        println!(
            "  Insert rate: {:.0} ops/s, query rate: {:.0} ops/s",
            NUM_ITEMS as f64 / insert_time,
            NUM_PROBES as f64 / query_time
        );
    }
}
