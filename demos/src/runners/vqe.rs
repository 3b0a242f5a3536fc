//! VQE (Variational Quantum Eigensolver) runner.
//!
//! VQE is a hybrid classical-quantum algorithm for finding ground state
//! energies of quantum systems. Here the classical half is the NFT optimizer
//! and the quantum half is a statevector simulation of an RY/CZ ansatz.

use std::f64::consts::PI;

use nftopt::{IterationEvent, NakanishiFujiiTodo, NftConfig, Observer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::circuits::RyCzAnsatz;
use crate::error::{DemoError, DemoResult};
use crate::problems::PauliHamiltonian;

/// Result of a VQE run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VqeResult {
    /// Optimal energy found.
    pub optimal_energy: f64,
    /// Optimal parameters.
    pub optimal_params: Vec<f64>,
    /// Number of optimizer iterations.
    pub iterations: usize,
    /// Number of circuit evaluations made by the optimizer.
    pub circuit_evaluations: usize,
    /// Fitted minimum after each coordinate update.
    pub energy_history: Vec<f64>,
    /// Optimizer success flag.
    pub success: bool,
}

/// VQE runner configuration.
pub struct VqeRunner {
    /// The Hamiltonian to minimize.
    pub hamiltonian: PauliHamiltonian,
    /// Number of qubits.
    pub n_qubits: usize,
    /// Number of entangling blocks in the ansatz.
    pub reps: usize,
    /// Optimizer settings.
    pub config: NftConfig,
    /// Seed for the random initial parameters.
    pub seed: u64,
}

impl VqeRunner {
    /// Create a new VQE runner.
    pub fn new(hamiltonian: PauliHamiltonian) -> Self {
        let n_qubits = hamiltonian.num_qubits();
        Self {
            hamiltonian,
            n_qubits,
            reps: 1,
            config: NftConfig::default(),
            seed: 42,
        }
    }

    /// Set the number of ansatz repetitions.
    pub fn with_reps(mut self, reps: usize) -> Self {
        self.reps = reps;
        self
    }

    /// Replace the optimizer settings.
    pub fn with_config(mut self, config: NftConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the cap on circuit evaluations.
    pub fn with_max_evaluations(mut self, max_evaluations: usize) -> Self {
        self.config.max_evaluations = max_evaluations;
        self
    }

    /// Set the forced reset period of the optimizer.
    pub fn with_reset_interval(mut self, reset_interval: i64) -> Self {
        self.config.reset_interval = reset_interval;
        self
    }

    /// Set the seed for initial parameters.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The ansatz this runner optimizes.
    pub fn ansatz(&self) -> RyCzAnsatz {
        RyCzAnsatz::new(self.n_qubits, self.reps)
    }

    /// Get the number of parameters needed.
    pub fn num_parameters(&self) -> usize {
        self.ansatz().num_parameters()
    }

    /// Seeded initial parameters drawn uniformly from `[-π, π)`.
    pub fn initial_params(&self) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.num_parameters())
            .map(|_| rng.gen_range(-PI..PI))
            .collect()
    }

    /// Run VQE with seeded random initial parameters.
    pub fn run(&self) -> DemoResult<VqeResult> {
        self.run_with_params(self.initial_params())
    }

    /// Run VQE with specified initial parameters.
    pub fn run_with_params(&self, initial_params: Vec<f64>) -> DemoResult<VqeResult> {
        self.run_observed(initial_params, ())
    }

    /// Run VQE, forwarding every optimizer event to `observer`.
    pub fn run_observed<Obs>(
        &self,
        initial_params: Vec<f64>,
        mut observer: Obs,
    ) -> DemoResult<VqeResult>
    where
        Obs: Observer,
    {
        let expected = self.num_parameters();
        if initial_params.len() != expected {
            return Err(DemoError::ParameterCount {
                expected,
                actual: initial_params.len(),
            });
        }

        let ansatz = self.ansatz();
        let hamiltonian = &self.hamiltonian;
        let objective = |params: &[f64]| evaluate_energy(hamiltonian, &ansatz, params);

        let mut energy_history = Vec::new();
        let recorder = |event: &IterationEvent<'_>| {
            energy_history.push(event.fit.min_value());
            observer.observe(event);
        };

        let result = NakanishiFujiiTodo::from_config(self.config).minimize_observed(
            objective,
            initial_params,
            recorder,
        )?;

        let optimal_energy = result
            .fun
            .unwrap_or_else(|| evaluate_energy(hamiltonian, &ansatz, &result.x));

        info!(
            energy = optimal_energy,
            iterations = result.nit,
            evaluations = result.nfev,
            "VQE finished"
        );

        Ok(VqeResult {
            optimal_energy,
            optimal_params: result.x,
            iterations: result.nit,
            circuit_evaluations: result.nfev,
            energy_history,
            success: result.success,
        })
    }
}

/// Evaluate the energy expectation value for given parameters.
///
/// This simulates the circuit exactly. On hardware this would be a job
/// submission followed by shot-based estimation of each Pauli term.
pub fn evaluate_energy(hamiltonian: &PauliHamiltonian, ansatz: &RyCzAnsatz, params: &[f64]) -> f64 {
    let statevector = ansatz.statevector(params);
    hamiltonian.expectation(&statevector)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::problems::{PauliTerm, h2_hamiltonian};

    #[test]
    fn test_vqe_runner_creation() {
        let runner = VqeRunner::new(h2_hamiltonian())
            .with_reps(2)
            .with_max_evaluations(10)
            .with_reset_interval(-1)
            .with_seed(7);

        assert_eq!(runner.n_qubits, 2);
        assert_eq!(runner.reps, 2);
        assert_eq!(runner.config.max_evaluations, 10);
        assert_eq!(runner.config.reset_interval, -1);
        assert_eq!(runner.num_parameters(), 6);
    }

    #[test]
    fn test_initial_params_are_seeded() {
        let runner = VqeRunner::new(h2_hamiltonian()).with_seed(3);
        let first = runner.initial_params();
        assert_eq!(first, runner.initial_params());
        assert!(first.iter().all(|p| (-PI..PI).contains(p)));
    }

    #[test]
    fn test_energy_is_sinusoidal_in_each_parameter() {
        let h = h2_hamiltonian();
        let ansatz = RyCzAnsatz::new(2, 1);
        let base = [0.3, -1.1, 0.8, 2.0];

        for k in 0..base.len() {
            let at = |theta: f64| {
                let mut p = base;
                p[k] = theta;
                evaluate_energy(&h, &ansatz, &p)
            };
            // a sinusoid satisfies f(t) + f(t + π) = f(s) + f(s + π)
            let reference = at(0.0) + at(PI);
            for t in [0.4, 1.7, -2.2] {
                assert_relative_eq!(at(t) + at(t + PI), reference, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_vqe_reaches_h2_ground_state() {
        let h = h2_hamiltonian();
        let exact = h.ground_state_energy(2000);
        let runner = VqeRunner::new(h).with_max_evaluations(600);

        let result = runner.run().unwrap();

        assert!(result.success);
        assert!(result.optimal_energy < -1.8);
        assert!(result.optimal_energy >= exact - 1e-9);
        assert_eq!(result.energy_history.len(), result.iterations);
        assert!(result.circuit_evaluations >= 600);
    }

    #[test]
    fn test_single_qubit_problem_solved_in_one_sweep() {
        let h = PauliHamiltonian::new(vec![PauliTerm::z(1.0, 0)]);
        let runner = VqeRunner::new(h).with_reps(0).with_max_evaluations(3);

        let result = runner.run_with_params(vec![0.2]).unwrap();

        assert_relative_eq!(result.optimal_energy, -1.0, epsilon = 1e-12);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_energy_without_final_evaluation() {
        let config = NftConfig {
            max_evaluations: 40,
            evaluate_final: false,
            ..NftConfig::default()
        };
        let runner = VqeRunner::new(h2_hamiltonian()).with_config(config);

        let result = runner.run().unwrap();

        let expected =
            evaluate_energy(&runner.hamiltonian, &runner.ansatz(), &result.optimal_params);
        assert_eq!(result.optimal_energy, expected);
        assert!(result.circuit_evaluations >= 40);
    }

    #[test]
    fn test_rejects_wrong_parameter_count() {
        let runner = VqeRunner::new(h2_hamiltonian());
        let err = runner.run_with_params(vec![0.0; 3]).unwrap_err();
        assert!(matches!(
            err,
            DemoError::ParameterCount {
                expected: 4,
                actual: 3
            }
        ));
    }
}
