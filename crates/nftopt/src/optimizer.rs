//! The Nakanishi-Fujii-Todo optimization loop.
//!
//! Each iteration visits one coordinate in round-robin order, samples the
//! objective at the current value and at `±π/2`, fits the sinusoid through
//! those samples and jumps straight to its minimum. The minimum value of the
//! fit is the objective at the new point, so it is reused as the next
//! iteration's unperturbed sample instead of being evaluated again.

use std::f64::consts::FRAC_PI_2;

use tracing::{debug, info, trace};

use crate::config::NftConfig;
use crate::error::{NftError, NftResult};
use crate::fit::{Samples, SinusoidFit};
use crate::objective::Objective;
use crate::observer::{IterationEvent, Observer};
use crate::result::OptimizationResult;

/// A minimization method over a real parameter vector.
///
/// This is the narrow contract a host framework needs to plug the method in:
/// an objective and a starting point go in, a result comes out.
pub trait Optimizer {
    /// Minimize the objective function.
    ///
    /// # Arguments
    /// * `objective` - The function to minimize
    /// * `initial_params` - Starting point
    ///
    /// # Errors
    ///
    /// Returns an error if the input is rejected or the objective fails.
    fn minimize<O>(&self, objective: O, initial_params: Vec<f64>) -> NftResult<OptimizationResult>
    where
        O: Objective;
}

/// Nakanishi-Fujii-Todo sequential minimal optimizer.
///
/// See K. M. Nakanishi, K. Fujii, S. Todo, "Sequential minimal optimization
/// for quantum-classical hybrid algorithms", arXiv:1903.12166.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NakanishiFujiiTodo {
    config: NftConfig,
}

impl NakanishiFujiiTodo {
    /// Create an optimizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an optimizer from an existing configuration.
    pub fn from_config(config: NftConfig) -> Self {
        Self { config }
    }

    /// Set the cap on objective calls.
    pub fn with_max_evaluations(mut self, max_evaluations: usize) -> Self {
        self.config.max_evaluations = max_evaluations;
        self
    }

    /// Set the forced reset period. Zero or negative disables resets.
    pub fn with_reset_interval(mut self, reset_interval: i64) -> Self {
        self.config.reset_interval = reset_interval;
        self
    }

    /// Set the degeneracy guard.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    /// Choose whether to evaluate the objective at the final point.
    pub fn with_evaluate_final(mut self, evaluate_final: bool) -> Self {
        self.config.evaluate_final = evaluate_final;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &NftConfig {
        &self.config
    }

    /// Minimize with an observer called after every coordinate update.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is rejected or the objective fails.
    pub fn minimize_observed<O, Obs>(
        &self,
        objective: O,
        initial_params: Vec<f64>,
        observer: Obs,
    ) -> NftResult<OptimizationResult>
    where
        O: Objective,
        Obs: Observer,
    {
        nakanishi_fujii_todo(objective, initial_params, &self.config, observer)
    }
}

impl Optimizer for NakanishiFujiiTodo {
    fn minimize<O>(&self, objective: O, initial_params: Vec<f64>) -> NftResult<OptimizationResult>
    where
        O: Objective,
    {
        self.minimize_observed(objective, initial_params, ())
    }
}

/// Runs the Nakanishi-Fujii-Todo loop from `x0`.
///
/// The loop stops once at least `config.max_evaluations` objective calls
/// have been made. The cap is checked after each full iteration, so the
/// reported `nfev` can exceed it by up to two.
///
/// # Errors
///
/// Returns `NftError::InvalidArgument` before any evaluation if `x0` is
/// empty or the configuration is invalid, and `NftError::Objective` if the
/// objective fails.
pub fn nakanishi_fujii_todo<O, Obs>(
    mut objective: O,
    x0: Vec<f64>,
    config: &NftConfig,
    mut observer: Obs,
) -> NftResult<OptimizationResult>
where
    O: Objective,
    Obs: Observer,
{
    if x0.is_empty() {
        return Err(NftError::InvalidArgument {
            reason: "initial point is empty",
        });
    }
    config.validate()?;

    let n = x0.len();
    let mut x = x0;
    let mut recycle_z0: Option<f64> = None;
    let mut iteration = 0usize;
    let mut evaluations = 0usize;

    let mut eval = |point: &[f64], evaluations: &mut usize| -> NftResult<f64> {
        let value = objective.evaluate(point).map_err(NftError::objective)?;
        *evaluations += 1;
        trace!(evaluations = *evaluations, value, "objective evaluated");
        Ok(value)
    };

    loop {
        let index = iteration % n;

        if config.is_reset_point(iteration) {
            recycle_z0 = None;
        }

        let (z0, recycled) = match recycle_z0 {
            Some(z0) => (z0, true),
            None => (eval(&x, &mut evaluations)?, false),
        };

        let theta = x[index];
        let mut shifted = x.clone();
        shifted[index] = theta + FRAC_PI_2;
        let z1 = eval(&shifted, &mut evaluations)?;
        shifted[index] = theta - FRAC_PI_2;
        let z3 = eval(&shifted, &mut evaluations)?;

        let samples = Samples { z0, z1, z3 };
        let fit = SinusoidFit::fit(samples, theta, config.epsilon);

        x[index] = fit.argmin;
        recycle_z0 = Some(fit.min_value());

        debug!(
            iteration,
            index,
            recycled,
            evaluations,
            argmin = fit.argmin,
            min_value = fit.min_value(),
            "coordinate updated"
        );

        observer.observe(&IterationEvent {
            iteration,
            index,
            params: &x,
            samples,
            recycled,
            fit,
            evaluations,
        });

        if evaluations >= config.max_evaluations {
            break;
        }
        iteration += 1;
    }

    let nit = iteration + 1;
    let fun = if config.evaluate_final {
        let mut final_evaluations = 0;
        Some(eval(&x, &mut final_evaluations)?)
    } else {
        None
    };

    info!(nit, nfev = evaluations, fun = ?fun, "optimization finished");

    Ok(OptimizationResult {
        x,
        nit,
        nfev: evaluations,
        fun,
        success: nit > 1,
    })
}
