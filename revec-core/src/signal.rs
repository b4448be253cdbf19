//! Dirty-bit invalidation and observable state cells
//!
//! Every reactive node in the engine carries a [`DirtyFlag`]: one boolean
//! distinguishing "clean, cached result valid" from "stale, recompute on
//! next read", plus a token-keyed observer registry. Invalidation is
//! synchronous and idempotent per dirty cycle: observers fire only on the
//! clean-to-stale transition, so repeated mutations before the next read
//! notify exactly once.
//!
//! The model is single-owner and single-threaded; there is no locking and
//! all notification happens inline on the mutating call stack. Dependency
//! graphs must be acyclic; the flag does not detect cycles.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use hashbrown::HashMap;

/// Handle returned by [`DirtyFlag::subscribe`]; required to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

/// Receiver of invalidation notifications
///
/// Implementors clear their own evaluated state on `notify` and propagate
/// to their own observers (subject to the same transition rule).
pub trait Observer {
    /// An upstream dependency became stale
    fn notify(&self);
}

/// The dirty bit plus its observer registry
///
/// Observers are held weakly: a dropped observer is pruned on the next
/// notification or registry scan rather than kept alive by its sources.
pub struct DirtyFlag {
    evaluated: Cell<bool>,
    observers: RefCell<HashMap<u64, Weak<dyn Observer>>>,
    next_token: Cell<u64>,
}

impl DirtyFlag {
    /// Create a flag in the given initial state
    pub fn new(evaluated: bool) -> Self {
        Self {
            evaluated: Cell::new(evaluated),
            observers: RefCell::new(HashMap::new()),
            next_token: Cell::new(0),
        }
    }

    /// True while the cached state downstream of this flag is valid
    pub fn is_evaluated(&self) -> bool {
        self.evaluated.get()
    }

    /// Mark the flag clean after a read
    pub fn mark_clean(&self) {
        self.evaluated.set(true);
    }

    /// Flip the flag stale and notify observers
    ///
    /// Fires only on the clean-to-stale transition; returns whether the
    /// transition happened. Already-stale flags swallow the call, which is
    /// what keeps composite nodes from firing more than once per upstream
    /// batch.
    pub fn mark_stale(&self) -> bool {
        if !self.evaluated.replace(false) {
            return false;
        }
        // Snapshot before notifying: an observer may re-wire its own
        // subscriptions reentrantly while we iterate.
        let targets: Vec<Weak<dyn Observer>> =
            self.observers.borrow().values().cloned().collect();
        for target in targets {
            if let Some(observer) = target.upgrade() {
                observer.notify();
            }
        }
        true
    }

    /// Register an observer; the returned token is the only way to remove it
    pub fn subscribe(&self, observer: Weak<dyn Observer>) -> SubscriptionToken {
        let token = self.next_token.get();
        self.next_token.set(token + 1);
        self.observers.borrow_mut().insert(token, observer);
        SubscriptionToken(token)
    }

    /// Remove a previously registered observer
    ///
    /// Returns false if the token was already removed (or never issued by
    /// this flag).
    pub fn unsubscribe(&self, token: SubscriptionToken) -> bool {
        self.observers.borrow_mut().remove(&token.0).is_some()
    }

    /// Number of live observers, pruning any that have been dropped
    pub fn observer_count(&self) -> usize {
        let mut observers = self.observers.borrow_mut();
        observers.retain(|_, weak| weak.strong_count() > 0);
        observers.len()
    }
}

impl Default for DirtyFlag {
    fn default() -> Self {
        Self::new(true)
    }
}

impl core::fmt::Debug for DirtyFlag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DirtyFlag")
            .field("evaluated", &self.evaluated.get())
            .finish()
    }
}

/// Anything carrying a [`DirtyFlag`] that downstream nodes can depend on
pub trait Observable {
    /// The flag other nodes subscribe to
    fn flag(&self) -> Rc<DirtyFlag>;
}

/// An eagerly stored piece of observable state
///
/// Unlike a numeric cell, a `Signal` only invalidates when the value
/// actually changes: setting an equal value is a no-op. This is what backs
/// a vector's order/orientation state, where a no-op reorder must not
/// ripple into the cached views.
///
/// `Clone` shares the underlying node (handle semantics); use
/// [`Signal::copy`] for a decoupled duplicate.
#[derive(Clone)]
pub struct Signal<T> {
    node: Rc<SignalNode<T>>,
}

struct SignalNode<T> {
    value: RefCell<T>,
    flag: Rc<DirtyFlag>,
}

impl<T: Clone + PartialEq> Signal<T> {
    /// Create a signal holding an initial value
    pub fn new(value: T) -> Self {
        Self {
            node: Rc::new(SignalNode {
                value: RefCell::new(value),
                flag: Rc::new(DirtyFlag::new(true)),
            }),
        }
    }

    /// Read the value, marking the flag clean
    pub fn get(&self) -> T {
        self.node.flag.mark_clean();
        self.node.value.borrow().clone()
    }

    /// Read the value without touching the dirty flag
    pub fn peek(&self) -> T {
        self.node.value.borrow().clone()
    }

    /// Store a new value, invalidating observers only on an actual change
    ///
    /// Returns whether the value changed.
    pub fn set(&self, value: T) -> bool {
        if *self.node.value.borrow() == value {
            return false;
        }
        *self.node.value.borrow_mut() = value;
        self.node.flag.mark_stale();
        true
    }

    /// A decoupled duplicate: same value, fresh flag, no observers
    pub fn copy(&self) -> Self {
        Self::new(self.peek())
    }
}

impl<T: Clone + PartialEq> Observable for Signal<T> {
    fn flag(&self) -> Rc<DirtyFlag> {
        Rc::clone(&self.node.flag)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Signal").field(&*self.node.value.borrow()).finish()
    }
}
