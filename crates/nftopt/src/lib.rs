//! Nakanishi-Fujii-Todo (NFT) sequential minimal optimization.
//!
//! NFT minimizes objectives that are sinusoidal in every coordinate taken on
//! its own, which is the case for expectation values of parameterized quantum
//! circuits built from Pauli rotations. Instead of estimating gradients it
//! fits the sinusoid along one coordinate from three samples and moves that
//! coordinate to the analytic minimum. One of the three samples is recycled
//! from the previous step, so most iterations cost two objective calls.
//!
//! # Example
//!
//! ```
//! use nftopt::{NakanishiFujiiTodo, Optimizer};
//!
//! let objective = |x: &[f64]| x.iter().map(|v| v.cos()).sum::<f64>();
//! let result = NakanishiFujiiTodo::new()
//!     .with_max_evaluations(64)
//!     .minimize(objective, vec![0.1, 0.2, 0.3])
//!     .unwrap();
//!
//! assert!(result.success);
//! assert!((result.fun.unwrap() + 3.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod error;
pub mod fit;
pub mod objective;
pub mod observer;
pub mod optimizer;
pub mod result;

// Re-exports
pub use config::NftConfig;
pub use error::{NftError, NftResult};
pub use fit::{Samples, SinusoidFit};
pub use objective::{Fallible, Objective, WithArgs, with_args};
pub use observer::{IterationEvent, Observer};
pub use optimizer::{NakanishiFujiiTodo, Optimizer, nakanishi_fujii_todo};
pub use result::OptimizationResult;
