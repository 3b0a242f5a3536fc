//! Pauli-string Hamiltonians.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pauli {
    I,
    X,
    Y,
    Z,
}

/// A weighted tensor product of Pauli operators.
///
/// Qubits not listed act as identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauliTerm {
    /// Real coefficient of the term.
    pub coefficient: f64,
    /// `(qubit, operator)` pairs.
    pub operators: Vec<(usize, Pauli)>,
}

impl PauliTerm {
    /// Create a term from explicit operators.
    pub fn new(coefficient: f64, operators: Vec<(usize, Pauli)>) -> Self {
        Self {
            coefficient,
            operators,
        }
    }

    /// Constant term.
    pub fn identity(coefficient: f64) -> Self {
        Self::new(coefficient, Vec::new())
    }

    /// `coefficient · Z_q`.
    pub fn z(coefficient: f64, qubit: usize) -> Self {
        Self::new(coefficient, vec![(qubit, Pauli::Z)])
    }

    /// `coefficient · Z_a Z_b`.
    pub fn zz(coefficient: f64, a: usize, b: usize) -> Self {
        Self::new(coefficient, vec![(a, Pauli::Z), (b, Pauli::Z)])
    }

    /// `coefficient · X_a X_b`.
    pub fn xx(coefficient: f64, a: usize, b: usize) -> Self {
        Self::new(coefficient, vec![(a, Pauli::X), (b, Pauli::X)])
    }

    /// `coefficient · Y_a Y_b`.
    pub fn yy(coefficient: f64, a: usize, b: usize) -> Self {
        Self::new(coefficient, vec![(a, Pauli::Y), (b, Pauli::Y)])
    }

    /// True if every operator is the identity.
    pub fn is_identity(&self) -> bool {
        self.operators.iter().all(|&(_, p)| p == Pauli::I)
    }

    /// Apply the Pauli string to a basis state index.
    ///
    /// Returns the new index and the accumulated phase.
    pub fn apply(&self, index: usize) -> (usize, Complex64) {
        let mut new_index = index;
        let mut phase = Complex64::new(1.0, 0.0);

        for &(qubit, pauli) in &self.operators {
            let bit = (index >> qubit) & 1;

            match pauli {
                Pauli::I => {}
                Pauli::X => {
                    new_index ^= 1 << qubit;
                }
                Pauli::Y => {
                    new_index ^= 1 << qubit;
                    if bit == 0 {
                        phase *= Complex64::new(0.0, 1.0);
                    } else {
                        phase *= Complex64::new(0.0, -1.0);
                    }
                }
                Pauli::Z => {
                    if bit == 1 {
                        phase = -phase;
                    }
                }
            }
        }

        (new_index, phase)
    }
}

/// A Hamiltonian expressed as a sum of Pauli terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauliHamiltonian {
    pub terms: Vec<PauliTerm>,
}

impl PauliHamiltonian {
    pub fn new(terms: Vec<PauliTerm>) -> Self {
        Self { terms }
    }

    /// Number of qubits the Hamiltonian acts on.
    pub fn num_qubits(&self) -> usize {
        self.terms
            .iter()
            .flat_map(|t| t.operators.iter().map(|&(q, _)| q + 1))
            .max()
            .unwrap_or(0)
    }

    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Sum of the coefficients of all identity terms.
    pub fn identity_coefficient(&self) -> f64 {
        self.terms
            .iter()
            .filter(|t| t.is_identity())
            .map(|t| t.coefficient)
            .sum()
    }

    /// Upper bound on the spectral radius, `Σ |c_k|`.
    pub fn norm_bound(&self) -> f64 {
        self.terms.iter().map(|t| t.coefficient.abs()).sum()
    }

    /// Expectation value `⟨ψ|H|ψ⟩` for a normalized statevector.
    pub fn expectation(&self, state: &[Complex64]) -> f64 {
        let mut energy = 0.0;

        for term in &self.terms {
            let mut term_value = Complex64::new(0.0, 0.0);
            for (i, &amplitude) in state.iter().enumerate() {
                let (j, phase) = term.apply(i);
                term_value += state[j].conj() * phase * amplitude;
            }
            energy += term.coefficient * term_value.re;
        }

        energy
    }

    /// Computes `H|ψ⟩`.
    pub fn apply(&self, state: &[Complex64]) -> Vec<Complex64> {
        let mut out = vec![Complex64::new(0.0, 0.0); state.len()];
        for term in &self.terms {
            for (i, &amplitude) in state.iter().enumerate() {
                let (j, phase) = term.apply(i);
                out[j] += term.coefficient * phase * amplitude;
            }
        }
        out
    }

    /// Lowest eigenvalue, by power iteration on `‖H‖·I - H`.
    ///
    /// Intended for the few-qubit Hamiltonians used in the demos.
    pub fn ground_state_energy(&self, iterations: usize) -> f64 {
        let dim = 1usize << self.num_qubits();
        let shift = self.norm_bound();

        let mut state: Vec<Complex64> = (0..dim)
            .map(|i| Complex64::new(1.0 + 0.1 * i as f64, 0.0))
            .collect();
        normalize(&mut state);

        for _ in 0..iterations {
            let h_state = self.apply(&state);
            state = state
                .iter()
                .zip(&h_state)
                .map(|(&v, &hv)| shift * v - hv)
                .collect();
            normalize(&mut state);
        }

        self.expectation(&state)
    }
}

fn normalize(state: &mut [Complex64]) {
    let norm = state.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
    if norm > 0.0 {
        for a in state.iter_mut() {
            *a /= norm;
        }
    }
}
