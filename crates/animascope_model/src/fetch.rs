// SPDX-License-Identifier: MIT OR Apache-2.0
//! Deferred fetch coordination for lazily-cached remote values.
//!
//! A [`DeferredFetch`] sits between local callers and one remote command.
//! Any number of callers may ask for the value before the round-trip
//! completes; the first caller triggers the command and every later caller
//! is queued behind it. When the response arrives all queued continuations
//! run once, in call order. The same machinery backs both the effect fetch
//! and the effect-target fetch.

/// Continuation invoked once the deferred value is available.
pub type Continuation<T> = Box<dyn FnOnce(&T)>;

/// What [`DeferredFetch::ensure`] did with a continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The value was already cached; the continuation ran synchronously.
    Served,
    /// A fetch is in flight; the continuation was queued behind it.
    Coalesced,
    /// No fetch was in flight; the caller must now issue exactly one
    /// remote command and later call [`DeferredFetch::resolve`] or
    /// [`DeferredFetch::fail`].
    Issue,
}

enum FetchState<T> {
    /// Never fetched, or invalidated.
    Empty,
    /// A remote command is in flight; continuations wait in call order.
    Pending(Vec<Continuation<T>>),
    /// Fetched; later callers are served synchronously from the cache.
    Resolved(T),
}

/// Coalescing cache for a single lazily-fetched remote value.
pub struct DeferredFetch<T> {
    state: FetchState<T>,
}

impl<T> DeferredFetch<T> {
    /// Create a coordinator with nothing fetched.
    pub fn new() -> Self {
        Self { state: FetchState::Empty }
    }

    /// Request the value, queuing or serving `continuation` as needed.
    ///
    /// Returns [`Disposition::Issue`] when the caller is responsible for
    /// issuing the remote command; at most one command is ever in flight.
    pub fn ensure(&mut self, continuation: Continuation<T>) -> Disposition {
        match &mut self.state {
            FetchState::Resolved(value) => {
                continuation(value);
                Disposition::Served
            }
            FetchState::Pending(queue) => {
                queue.push(continuation);
                Disposition::Coalesced
            }
            FetchState::Empty => {
                self.state = FetchState::Pending(vec![continuation]);
                Disposition::Issue
            }
        }
    }

    /// Cache `value` and release every queued continuation in call order.
    pub fn resolve(&mut self, value: T) {
        let previous = std::mem::replace(&mut self.state, FetchState::Resolved(value));
        let queue = match previous {
            FetchState::Pending(queue) => queue,
            FetchState::Empty | FetchState::Resolved(_) => Vec::new(),
        };
        if let FetchState::Resolved(value) = &self.state {
            for continuation in queue {
                continuation(value);
            }
        }
    }

    /// Record that the in-flight command failed.
    ///
    /// The cache stays unpopulated and queued continuations are dropped
    /// without being invoked; the next [`ensure`](Self::ensure) issues a
    /// fresh command.
    pub fn fail(&mut self) {
        if matches!(self.state, FetchState::Pending(_)) {
            self.state = FetchState::Empty;
        }
    }

    /// Discard a cached value so the next request fetches again.
    ///
    /// A fetch already in flight is not cancelled: its queue survives and
    /// its eventual response becomes the new cached value. Responses carry
    /// no generation tag, so a stale response can overwrite a newer
    /// invalidation.
    pub fn invalidate(&mut self) {
        if !matches!(self.state, FetchState::Pending(_)) {
            self.state = FetchState::Empty;
        }
    }

    /// The cached value, if a fetch has completed.
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            FetchState::Resolved(value) => Some(value),
            FetchState::Empty | FetchState::Pending(_) => None,
        }
    }

    /// Whether a remote command is currently in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, FetchState::Pending(_))
    }
}

impl<T> Default for DeferredFetch<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_first_caller_issues_later_callers_coalesce() {
        let mut fetch = DeferredFetch::new();
        assert_eq!(fetch.ensure(Box::new(|_: &u32| {})), Disposition::Issue);
        assert_eq!(fetch.ensure(Box::new(|_: &u32| {})), Disposition::Coalesced);
        assert_eq!(fetch.ensure(Box::new(|_: &u32| {})), Disposition::Coalesced);
        assert!(fetch.is_pending());
    }

    #[test]
    fn test_resolve_releases_in_call_order() {
        let mut fetch = DeferredFetch::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for i in 0..3 {
            let order = Rc::clone(&order);
            fetch.ensure(Box::new(move |value: &u32| order.borrow_mut().push((i, *value))));
        }
        assert!(order.borrow().is_empty());

        fetch.resolve(7);
        assert_eq!(*order.borrow(), vec![(0, 7), (1, 7), (2, 7)]);
        assert_eq!(fetch.value(), Some(&7));
    }

    #[test]
    fn test_resolved_value_serves_synchronously() {
        let mut fetch = DeferredFetch::new();
        fetch.resolve("cached");
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let disposition = fetch.ensure(Box::new(move |value: &&str| *sink.borrow_mut() = Some(*value)));
        assert_eq!(disposition, Disposition::Served);
        assert_eq!(*seen.borrow(), Some("cached"));
    }

    #[test]
    fn test_fail_drops_queue_and_allows_fresh_command() {
        let mut fetch = DeferredFetch::new();
        let invoked = Rc::new(RefCell::new(false));
        let sink = Rc::clone(&invoked);
        fetch.ensure(Box::new(move |_: &u32| *sink.borrow_mut() = true));

        fetch.fail();
        assert!(!*invoked.borrow());
        assert!(fetch.value().is_none());
        assert_eq!(fetch.ensure(Box::new(|_: &u32| {})), Disposition::Issue);
    }

    #[test]
    fn test_invalidate_clears_cache_but_not_in_flight_queue() {
        let mut fetch = DeferredFetch::new();
        fetch.resolve(1);
        fetch.invalidate();
        assert!(fetch.value().is_none());
        assert_eq!(fetch.ensure(Box::new(|_: &u32| {})), Disposition::Issue);

        // Invalidation during a pending fetch leaves the queue intact; the
        // in-flight response still releases it.
        let released = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&released);
        fetch.ensure(Box::new(move |_: &u32| *sink.borrow_mut() += 1));
        fetch.invalidate();
        assert!(fetch.is_pending());
        fetch.resolve(2);
        assert_eq!(*released.borrow(), 1);
        assert_eq!(fetch.value(), Some(&2));
    }
}
