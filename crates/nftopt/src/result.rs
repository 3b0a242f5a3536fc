use serde::{Deserialize, Serialize};

/// Outcome of an optimizer run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Final iterate.
    pub x: Vec<f64>,
    /// Number of completed iterations.
    pub nit: usize,
    /// Number of objective calls made by the loop.
    pub nfev: usize,
    /// Objective value at `x`, if the final evaluation was requested.
    pub fun: Option<f64>,
    /// True once more than one iteration has completed.
    ///
    /// This is a minimal-effort signal, not a convergence test.
    pub success: bool,
}
