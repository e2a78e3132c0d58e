/// Term count of the reference run (~2e-8 truncation error).
pub const REFERENCE_ITERATIONS: u64 = 100_000_000;
