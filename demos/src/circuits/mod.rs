//! Parameterized circuits for the demos.

pub mod ansatz;

pub use ansatz::RyCzAnsatz;
