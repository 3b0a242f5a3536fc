//! Hardware-efficient RY/CZ ansatz on a dense statevector.
//!
//! Every parameter enters through a single `RY(θ) = exp(-iθY/2)` gate, so
//! any Pauli expectation value is a sinusoid of period `2π` in each
//! parameter taken on its own.

use num_complex::Complex64;

/// Layers of RY rotations separated by a linear chain of CZ gates.
///
/// `reps` entangling blocks give `n_qubits * (reps + 1)` parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RyCzAnsatz {
    pub n_qubits: usize,
    pub reps: usize,
}

impl RyCzAnsatz {
    pub fn new(n_qubits: usize, reps: usize) -> Self {
        Self { n_qubits, reps }
    }

    /// Number of rotation angles the ansatz consumes.
    pub fn num_parameters(&self) -> usize {
        self.n_qubits * (self.reps + 1)
    }

    /// Prepares the ansatz state from `|0...0⟩`.
    ///
    /// # Panics
    ///
    /// Panics if `params.len() != self.num_parameters()`.
    pub fn statevector(&self, params: &[f64]) -> Vec<Complex64> {
        assert_eq!(
            params.len(),
            self.num_parameters(),
            "parameter count does not match ansatz"
        );

        let dim = 1 << self.n_qubits;
        let mut state = vec![Complex64::new(0.0, 0.0); dim];
        state[0] = Complex64::new(1.0, 0.0);

        let mut angles = params.chunks(self.n_qubits);
        for layer in 0..=self.reps {
            if let Some(layer_angles) = angles.next() {
                for (q, &theta) in layer_angles.iter().enumerate() {
                    apply_ry(&mut state, q, theta);
                }
            }
            if layer < self.reps {
                for q in 0..self.n_qubits.saturating_sub(1) {
                    apply_cz(&mut state, q, q + 1);
                }
            }
        }

        state
    }
}

fn apply_ry(state: &mut [Complex64], q: usize, theta: f64) {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    for i in 0..state.len() {
        if (i >> q) & 1 == 0 {
            let j = i | (1 << q);
            let a = state[i];
            let b = state[j];
            state[i] = c * a - s * b;
            state[j] = s * a + c * b;
        }
    }
}

fn apply_cz(state: &mut [Complex64], q0: usize, q1: usize) {
    for (i, amplitude) in state.iter_mut().enumerate() {
        if (i >> q0) & 1 == 1 && (i >> q1) & 1 == 1 {
            *amplitude = -*amplitude;
        }
    }
}
