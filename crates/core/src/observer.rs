/// Receives iteration events and decides how the iteration should proceed.
///
/// Observers let callers monitor an iteration without changing its API.
/// `observe` returns `Option<A>`, where `Some(action)` requests an
/// iteration-specific action and `None` lets it continue unchanged. An
/// iteration that offers no actions uses an uninhabited `A` such as
/// [`std::convert::Infallible`], so its observers can only ever return `None`.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |event: &u32| -> Option<Infallible> {
            seen.push(*event);
            None
        };

        for event in 0..3 {
            assert!(observer.observe(&event).is_none());
        }

        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn unit_observer_never_acts() {
        let action: Option<()> = ().observe(&"event");
        assert!(action.is_none());
    }
}
