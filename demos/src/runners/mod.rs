//! Demo runners for the optimizer.

pub mod cosine;
pub mod vqe;

pub use cosine::{CosineBenchmark, CosineReport, sum_of_cosines};
pub use vqe::{VqeResult, VqeRunner, evaluate_energy};
