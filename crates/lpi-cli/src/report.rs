//! Fixed-precision rendering of a timed run.

/// One completed evaluation: the estimate, the term count it used, and the
/// wall-clock seconds the evaluation call took.
pub struct RunReport {
    pub estimate: f64,
    pub iterations: u64,
    pub seconds: f64,
}

impl RunReport {
    /// The three stdout lines, in print order. The estimate always carries
    /// 10 digits after the decimal point and the time 6, trailing zeros
    /// included.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("π ≈ {:.10}", self.estimate),
            format!("Iterations: {}", self.iterations),
            format!("Time: {:.6} seconds", self.seconds),
        ]
    }
}
