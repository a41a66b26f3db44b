/// Receives solver events and may request a control action.
///
/// An observer lets a caller watch an iteration without widening the
/// solver API: collecting step output, printing progress, or stopping
/// early. Returning `Some(action)` requests a solver-specific action;
/// `None` lets the iteration continue unchanged.
///
/// Closures implement `Observer` automatically, and `()` is the no-op
/// observer that always returns `None`.
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
