//! Separable sum-of-cosines benchmark.
//!
//! `f(x) = Σ cos(x_i)` is minimized by `x_i = π (mod 2π)` for every
//! coordinate, and since the coordinates do not interact a single sweep
//! already lands on the minimum.

use std::f64::consts::{PI, TAU};

use nftopt::{NakanishiFujiiTodo, NftConfig, Observer, OptimizationResult};
use serde::Serialize;

use crate::error::DemoResult;

/// The benchmark objective.
pub fn sum_of_cosines(x: &[f64]) -> f64 {
    x.iter().map(|v| v.cos()).sum()
}

/// Benchmark run summary.
#[derive(Debug, Clone, Serialize)]
pub struct CosineReport {
    /// Raw optimizer result.
    pub result: OptimizationResult,
    /// Largest distance of any coordinate from `π` modulo `2π`.
    pub max_deviation: f64,
}

/// Sum-of-cosines benchmark over `n` coordinates.
pub struct CosineBenchmark {
    /// Number of coordinates.
    pub n: usize,
    /// Optimizer settings.
    pub config: NftConfig,
}

impl CosineBenchmark {
    /// One sweep over `n` coordinates with resets disabled.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            config: NftConfig {
                max_evaluations: 2 * n,
                reset_interval: -1,
                ..NftConfig::default()
            },
        }
    }

    /// Replace the optimizer settings.
    pub fn with_config(mut self, config: NftConfig) -> Self {
        self.config = config;
        self
    }

    /// Evenly spaced starting point over `[0, 2π]`.
    pub fn initial_params(&self) -> Vec<f64> {
        match self.n {
            0 => Vec::new(),
            1 => vec![0.0],
            n => {
                let step = TAU / (n - 1) as f64;
                (0..n).map(|i| step * i as f64).collect()
            }
        }
    }

    /// Run the benchmark, forwarding optimizer events to `observer`.
    pub fn run<Obs>(&self, observer: Obs) -> DemoResult<CosineReport>
    where
        Obs: Observer,
    {
        let result = NakanishiFujiiTodo::from_config(self.config).minimize_observed(
            sum_of_cosines,
            self.initial_params(),
            observer,
        )?;
        let max_deviation = result
            .x
            .iter()
            .map(|v| (v.rem_euclid(TAU) - PI).abs())
            .fold(0.0, f64::max);

        Ok(CosineReport {
            result,
            max_deviation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::DemoError;

    #[test]
    fn test_initial_params_span_full_period() {
        let params = CosineBenchmark::new(5).initial_params();
        assert_eq!(params.len(), 5);
        assert_eq!(params[0], 0.0);
        assert!((params[4] - TAU).abs() < 1e-12);
    }

    #[test]
    fn test_single_sweep_converges() {
        let report = CosineBenchmark::new(100).run(()).unwrap();
        assert!(report.max_deviation < 1e-8);
        assert_eq!(report.result.nit, 100);
    }

    #[test]
    fn test_empty_benchmark_is_rejected() {
        let bench = CosineBenchmark::new(0).with_config(NftConfig::default());
        let err = bench.run(()).unwrap_err();
        assert!(matches!(err, DemoError::Optimizer(e) if e.is_invalid_argument()));
    }
}
