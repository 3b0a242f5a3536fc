use crate::fit::{Samples, SinusoidFit};

/// Snapshot of one completed coordinate update.
#[derive(Debug, Clone, Copy)]
pub struct IterationEvent<'a> {
    /// Zero-based iteration counter.
    pub iteration: usize,
    /// Coordinate updated in this iteration.
    pub index: usize,
    /// Parameter vector after the update.
    pub params: &'a [f64],
    /// Samples used for the fit.
    pub samples: Samples,
    /// Whether `samples.z0` was taken from the previous iteration's minimum.
    pub recycled: bool,
    /// Fitted sinusoid along `index`.
    pub fit: SinusoidFit,
    /// Objective calls issued so far.
    pub evaluations: usize,
}

/// Receives an event after every coordinate update.
///
/// Observers see the run but cannot change it. Closures taking
/// `&IterationEvent` implement `Observer`, and `()` is a no-op observer.
pub trait Observer {
    fn observe(&mut self, event: &IterationEvent<'_>);
}

impl<F> Observer for F
where
    F: FnMut(&IterationEvent<'_>),
{
    fn observe(&mut self, event: &IterationEvent<'_>) {
        self(event);
    }
}

impl Observer for () {
    fn observe(&mut self, _event: &IterationEvent<'_>) {}
}
