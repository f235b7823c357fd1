//! Shannon entropy over characters.

use std::collections::HashMap;

use vigil_core::constants::{ENTROPY_MIN_LENGTH, LOW_ENTROPY_BITS};

/// `-Σ p·log2(p)` over character frequencies. Empty input is 0.
pub fn shannon_entropy(s: &str) -> f64 {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut total = 0usize;
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }
    let len = total as f64;
    counts
        .values()
        .map(|n| {
            let p = *n as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Low entropy for an identifier long enough to judge.
///
/// Short strings can't reach 2 bits (`"bob"` tops out near 0.9), so anything
/// under the minimum length is never flagged.
pub fn is_low_entropy(s: &str) -> bool {
    s.chars().count() >= ENTROPY_MIN_LENGTH && shannon_entropy(s) < LOW_ENTROPY_BITS
}
