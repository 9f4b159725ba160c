//! Prime selection for hash-function moduli.

/// Return the smallest prime `q >= p`, with a floor of 3.
///
/// Candidates are tested by trial division against odd divisors up to
/// `floor(sqrt(candidate)) + 1`. This is not meant for cryptographic use;
/// the result serves as a modulus slightly above a table size, so the
/// candidates stay small and trial division is fast enough.
pub fn next_prime_at_least(p: u64) -> u64 {
    if p < 3 {
        return 3;
    }
    let mut candidate = if p % 2 == 0 { p + 1 } else { p };
    while !is_odd_prime(candidate) {
        candidate += 2;
    }
    candidate
}

/// Trial division for odd candidates >= 3.
fn is_odd_prime(candidate: u64) -> bool {
    let limit = (candidate as f64).sqrt() as u64 + 1;
    let mut divisor = 3;
    while divisor <= limit {
        if candidate % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
