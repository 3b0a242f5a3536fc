//! Problem definitions for the demos.

pub mod hamiltonian;
pub mod molecules;

pub use hamiltonian::{Pauli, PauliHamiltonian, PauliTerm};
pub use molecules::{h2_hamiltonian, h2_hamiltonian_4q, molecule_hamiltonian};
