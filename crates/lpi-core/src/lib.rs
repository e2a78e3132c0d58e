//! Leibniz series π evaluator.
//!
//! Approximates π as `4 · Σ (−1)^k / (2k + 1)`, summed term-by-term in
//! double precision with no compensation and no early exit. The series
//! converges slowly (error is O(1/n)), which is the point: it makes a
//! useful fixed-work kernel for timing runs.
//!
//! Zero I/O — pure math with no opinions about timing or output.

pub mod constants;
pub mod series;

pub use constants::REFERENCE_ITERATIONS;
pub use series::{estimate_pi, remainder_bound};
