//! Molecular Hamiltonians for VQE.
//!
//! These Hamiltonians are pre-computed using the Jordan-Wigner transformation
//! from second-quantized fermionic operators to qubit operators.

use super::hamiltonian::{Pauli, PauliHamiltonian, PauliTerm};

/// H2 molecule Hamiltonian at equilibrium bond distance (0.735 Angstrom).
///
/// Two-qubit reduced form in the minimal STO-3G basis:
///
/// H = g0 I + g1 Z0 + g2 Z1 + g3 Z0Z1 + g4 X0X1 + g5 Y0Y1
pub fn h2_hamiltonian() -> PauliHamiltonian {
    PauliHamiltonian::new(vec![
        PauliTerm::identity(-1.0523),
        PauliTerm::z(0.3979, 0),
        PauliTerm::z(-0.3979, 1),
        PauliTerm::zz(-0.0112, 0, 1),
        PauliTerm::xx(0.1809, 0, 1),
        PauliTerm::yy(0.1809, 0, 1),
    ])
}

/// H2 molecule Hamiltonian in 4-qubit encoding.
///
/// The full Jordan-Wigner representation over all spin-orbitals.
pub fn h2_hamiltonian_4q() -> PauliHamiltonian {
    PauliHamiltonian::new(vec![
        PauliTerm::identity(-0.8105),
        PauliTerm::z(0.1721, 0),
        PauliTerm::z(0.1721, 1),
        PauliTerm::z(-0.2234, 2),
        PauliTerm::z(-0.2234, 3),
        PauliTerm::zz(0.1209, 0, 1),
        PauliTerm::zz(0.1686, 0, 2),
        PauliTerm::zz(0.1205, 0, 3),
        PauliTerm::zz(0.1205, 1, 2),
        PauliTerm::zz(0.1686, 1, 3),
        PauliTerm::zz(0.1744, 2, 3),
        PauliTerm::new(0.0453, vec![(0, Pauli::X), (1, Pauli::X), (2, Pauli::Y), (3, Pauli::Y)]),
        PauliTerm::new(0.0453, vec![(0, Pauli::Y), (1, Pauli::Y), (2, Pauli::X), (3, Pauli::X)]),
        PauliTerm::new(-0.0453, vec![(0, Pauli::X), (1, Pauli::Y), (2, Pauli::Y), (3, Pauli::X)]),
        PauliTerm::new(-0.0453, vec![(0, Pauli::Y), (1, Pauli::X), (2, Pauli::X), (3, Pauli::Y)]),
    ])
}

/// Look up a molecule Hamiltonian by name.
pub fn molecule_hamiltonian(name: &str) -> Option<PauliHamiltonian> {
    match name.to_lowercase().as_str() {
        "h2" => Some(h2_hamiltonian()),
        "h2-4q" | "h2_4q" => Some(h2_hamiltonian_4q()),
        _ => None,
    }
}
