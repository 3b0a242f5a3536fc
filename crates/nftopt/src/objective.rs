//! Objective functions accepted by the optimizer.
//!
//! Any `FnMut(&[f64]) -> f64` closure is an [`Objective`]. Objectives that can
//! fail (a remote device, a simulator returning errors) are wrapped in
//! [`Fallible`], and fixed extra arguments can be bound with [`with_args`].

use std::convert::Infallible;

/// A scalar objective over a real parameter vector.
///
/// The optimizer assumes that holding all but one coordinate fixed yields a
/// sinusoid of period `2π` in the remaining coordinate. This is not checked.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the evaluation fails. The optimizer does not retry.
    fn evaluate(&mut self, x: &[f64]) -> Result<f64, Self::Error>;
}

impl<F> Objective for F
where
    F: FnMut(&[f64]) -> f64,
{
    type Error = Infallible;

    fn evaluate(&mut self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Adapter for closures returning `Result<f64, E>`.
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Objective for Fallible<F>
where
    F: FnMut(&[f64]) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&mut self, x: &[f64]) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}

/// An objective bound to a fixed set of extra arguments.
#[derive(Debug, Clone)]
pub struct WithArgs<F, A> {
    f: F,
    args: A,
}

/// Binds `args` to `f`, producing an objective that calls `f(x, &args)`.
pub fn with_args<F, A>(f: F, args: A) -> WithArgs<F, A>
where
    F: FnMut(&[f64], &A) -> f64,
{
    WithArgs { f, args }
}

impl<F, A> WithArgs<F, A> {
    /// Returns the bound arguments.
    pub fn args(&self) -> &A {
        &self.args
    }
}

impl<F, A> Objective for WithArgs<F, A>
where
    F: FnMut(&[f64], &A) -> f64,
{
    type Error = Infallible;

    fn evaluate(&mut self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok((self.f)(x, &self.args))
    }
}
