//! Naive partial summation of the alternating Leibniz series.

/// Approximate π with `iterations` terms of the Leibniz series:
/// `4 · Σ_{k=0}^{n−1} (−1)^k / (2k + 1)`.
///
/// Terms are accumulated in order with a sign alternator starting at `+1.0`;
/// the final sum is scaled by `4.0`. Exactly `iterations` terms are consumed
/// regardless of how early the estimate stabilizes, and `iterations = 0`
/// yields the empty sum `0.0`.
///
/// Pure and total: same input, bit-identical output.
pub fn estimate_pi(iterations: u64) -> f64 {
    let mut sum = 0.0_f64;
    let mut sign = 1.0_f64;
    for k in 0..iterations {
        sum += sign / (2.0 * k as f64 + 1.0);
        sign = -sign;
    }
    sum * 4.0
}

/// Alternating-series remainder bound after `iterations` terms.
///
/// The truncation error of [`estimate_pi`] is bounded by the magnitude of
/// the first omitted term, `4 / (2n + 1)`.
pub fn remainder_bound(iterations: u64) -> f64 {
    4.0 / (2.0 * iterations as f64 + 1.0)
}
