//! Observable value wrapper with change notification and version tracking.
//!
//! # Design
//!
//! [`Observable<T>`] wraps a value of type `T` in shared, reference-counted
//! storage (`Rc<RefCell<..>>`). When the value changes (determined by
//! `PartialEq`), all live subscribers are notified in registration order.
//!
//! # Failure Modes
//!
//! - **Re-entrant set**: all borrows are released before callbacks run, so a
//!   subscriber may call `set()`/`update()` on the same observable. Each
//!   change notifies again, recursively; a callback that mutates on every
//!   notification must converge on a fixed point or it recurses without
//!   bound.
//! - **Subscriber leak**: if [`Subscription`] guards are stored indefinitely
//!   without being dropped, callbacks accumulate. Dead weak references are
//!   cleaned lazily during notification.

use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A subscriber callback stored as a strong `Rc` in the guard, handed out
/// as `Weak` to the observable.
type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

struct ObservableInner<T> {
    value: T,
    version: u64,
    /// Subscribers stored as weak references. Dead entries are pruned on notify.
    subscribers: Vec<CallbackWeak<T>>,
}

/// A shared, version-tracked value with change notification.
///
/// Cloning an `Observable` creates a new handle to the **same** inner state;
/// both handles see the same value and share subscribers.
///
/// # Invariants
///
/// 1. `version` increments by exactly 1 on each value-changing mutation.
/// 2. `set(v)` where `v == current` is a no-op.
/// 3. Subscribers are notified in registration order.
/// 4. Dead subscribers (dropped [`Subscription`] guards) are pruned lazily.
pub struct Observable<T> {
    inner: Rc<RefCell<ObservableInner<T>>>,
}

// Manual Clone: shares the same Rc.
impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Create a new observable with the given initial value.
    ///
    /// The initial version is 0 and no subscribers are registered.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservableInner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Get a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Access the current value by reference without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Set a new value. If it differs from the current value (by `PartialEq`),
    /// the version is incremented and all live subscribers are notified.
    pub fn set(&self, value: T) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
            true
        };
        if changed {
            self.notify();
        }
    }

    /// Modify the value in place via a closure. If the value changes
    /// (compared by `PartialEq` against a snapshot), the version is
    /// incremented and subscribers are notified.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let old = inner.value.clone();
            f(&mut inner.value);
            if inner.value != old {
                inner.version += 1;
                true
            } else {
                false
            }
        };
        if changed {
            self.notify();
        }
    }

    /// Subscribe to value changes. The callback is invoked with a reference
    /// to the new value each time it changes.
    ///
    /// Returns a [`Subscription`] guard. Dropping the guard unsubscribes the
    /// callback (it will not be called after drop, though it may remain in
    /// the subscriber list until the next notification prunes it).
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        let weak = Rc::downgrade(&strong);
        self.inner.borrow_mut().subscribers.push(weak);
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Current version number. Increments by 1 on each value-changing
    /// mutation. Useful for dirty-checking in render loops.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of currently registered subscribers (including dead ones
    /// not yet pruned).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Notify live subscribers and prune dead ones.
    fn notify(&self) {
        // Collect live callbacks first to avoid holding the borrow during calls.
        let callbacks: Vec<CallbackRc<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            inner.subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        if callbacks.is_empty() {
            return;
        }

        tracing::trace!(subscribers = callbacks.len(), "observable.notify");
        let value = self.get();
        for callback in callbacks {
            callback(&value);
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Guard for an active subscription. Dropping it unsubscribes the callback.
pub struct Subscription {
    _guard: Box<dyn Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Subscription")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn set_notifies_subscribers_with_new_value() {
        let obs = Observable::new(1u32);
        let seen = Rc::new(Cell::new(0u32));
        let seen_in = Rc::clone(&seen);
        let _sub = obs.subscribe(move |v| seen_in.set(*v));

        obs.set(7);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn equal_value_set_is_noop() {
        let obs = Observable::new(5u32);
        let calls = Rc::new(Cell::new(0usize));
        let calls_in = Rc::clone(&calls);
        let _sub = obs.subscribe(move |_| calls_in.set(calls_in.get() + 1));

        obs.set(5);
        assert_eq!(calls.get(), 0);
        assert_eq!(obs.version(), 0);
    }

    #[test]
    fn version_increments_once_per_change() {
        let obs = Observable::new(0u32);
        obs.set(1);
        obs.set(2);
        obs.update(|v| *v += 1);
        obs.update(|_| {}); // no change
        assert_eq!(obs.version(), 3);
        assert_eq!(obs.get(), 3);
    }

    #[test]
    fn dropping_guard_unsubscribes() {
        let obs = Observable::new(0u32);
        let calls = Rc::new(Cell::new(0usize));
        let calls_in = Rc::clone(&calls);
        let sub = obs.subscribe(move |_| calls_in.set(calls_in.get() + 1));

        obs.set(1);
        assert_eq!(calls.get(), 1);

        drop(sub);
        obs.set(2);
        assert_eq!(calls.get(), 1);
        // Dead subscriber was pruned during the second notification.
        assert_eq!(obs.subscriber_count(), 0);
    }

    #[test]
    fn notification_order_is_registration_order() {
        let obs = Observable::new(0u32);
        let log = Rc::new(RefCell::new(Vec::new()));
        let log_a = Rc::clone(&log);
        let log_b = Rc::clone(&log);
        let _a = obs.subscribe(move |_| log_a.borrow_mut().push('a'));
        let _b = obs.subscribe(move |_| log_b.borrow_mut().push('b'));

        obs.set(1);
        assert_eq!(*log.borrow(), vec!['a', 'b']);
    }

    #[test]
    fn clones_share_state() {
        let obs = Observable::new(0u32);
        let handle = obs.clone();
        handle.set(9);
        assert_eq!(obs.get(), 9);
        assert_eq!(obs.version(), handle.version());
    }

    #[test]
    fn subscriber_may_set_reentrantly() {
        let obs = Observable::new(0u32);
        let handle = obs.clone();
        let _sub = obs.subscribe(move |v| {
            if *v < 3 {
                handle.set(*v + 1);
            }
        });

        // Each nested set notifies again until the callback stops mutating.
        obs.set(1);
        assert_eq!(obs.get(), 3);
        assert_eq!(obs.version(), 3);
    }

    #[test]
    fn with_reads_by_reference() {
        let obs = Observable::new(String::from("abc"));
        let len = obs.with(|s| s.len());
        assert_eq!(len, 3);
    }
}
