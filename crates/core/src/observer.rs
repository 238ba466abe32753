/// Receives scan events and may steer the scan in return.
///
/// The solver reports every sampled bracket and every refinement to its
/// observer. Returning `Some(action)` asks for a solver-specific action;
/// `None` lets the scan go on unchanged. This is how a caller stops a scan
/// early, skips brackets, or computes something from every sample (the
/// viewport fitter tracks horizontal asymptotes this way).
///
/// `FnMut(&E) -> Option<A>` closures are observers, and `()` is the observer
/// that never acts.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
