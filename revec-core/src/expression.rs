//! Lazy-invalidation memo nodes
//!
//! An [`Expression`] is the derived-node counterpart to the eager cells:
//! push-based invalidation, pull-based recomputation. Upstream mutation
//! clears the node's evaluated flag (idempotently) and propagates to the
//! node's own observers; the value is only recomputed on the next read.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::signal::{DirtyFlag, Observable, Observer, SubscriptionToken};

/// A cached derived value with explicit dependency wiring
///
/// `Clone` shares the underlying node (handle semantics); use
/// [`Expression::copy`] for a decoupled duplicate with a fresh dependency
/// graph.
#[derive(Clone)]
pub struct Expression<T> {
    node: Rc<ExpressionNode<T>>,
}

struct ExpressionNode<T> {
    value: RefCell<Option<T>>,
    compute: RefCell<Rc<dyn Fn() -> T>>,
    flag: Rc<DirtyFlag>,
    upstream: RefCell<Vec<(Rc<DirtyFlag>, SubscriptionToken)>>,
}

impl<T> Observer for ExpressionNode<T> {
    fn notify(&self) {
        // Propagates downstream only on the clean-to-stale transition, so
        // a composite node fires at most once per upstream batch.
        self.flag.mark_stale();
    }
}

impl<T> Drop for ExpressionNode<T> {
    fn drop(&mut self) {
        for (flag, token) in self.upstream.borrow().iter() {
            flag.unsubscribe(*token);
        }
    }
}

impl<T: Clone + 'static> Expression<T> {
    /// Create a stale node that computes its value on first read
    pub fn new(compute: impl Fn() -> T + 'static) -> Self {
        Self {
            node: Rc::new(ExpressionNode {
                value: RefCell::new(None),
                compute: RefCell::new(Rc::new(compute)),
                flag: Rc::new(DirtyFlag::new(false)),
                upstream: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Read the value, recomputing only if the node is stale
    pub fn get(&self) -> T {
        if self.node.flag.is_evaluated() {
            if let Some(value) = self.node.value.borrow().as_ref() {
                return value.clone();
            }
        }
        let compute = {
            let guard = self.node.compute.borrow();
            Rc::clone(&*guard)
        };
        let value = compute();
        *self.node.value.borrow_mut() = Some(value.clone());
        self.node.flag.mark_clean();
        value
    }

    /// True if the cached value is current
    pub fn is_evaluated(&self) -> bool {
        self.node.flag.is_evaluated()
    }

    /// Force the node stale, notifying downstream observers
    pub fn invalidate(&self) {
        self.node.flag.mark_stale();
    }

    /// Subscribe this node to an upstream source's invalidations
    pub fn depends_on(&self, source: &dyn Observable) {
        let flag = source.flag();
        let weak = Rc::downgrade(&self.node);
        let weak: Weak<dyn Observer> = weak;
        let token = flag.subscribe(weak);
        self.node.upstream.borrow_mut().push((flag, token));
    }

    /// Drop every upstream subscription
    pub fn clear_dependencies(&self) {
        let mut upstream = self.node.upstream.borrow_mut();
        for (flag, token) in upstream.drain(..) {
            flag.unsubscribe(token);
        }
    }

    /// Replace the dependency set wholesale
    ///
    /// Used when the inputs a node reads from have been structurally
    /// replaced (for example after a resize swaps the owned cells).
    pub fn reseed_dependencies<'a>(
        &self,
        sources: impl IntoIterator<Item = &'a dyn Observable>,
    ) {
        self.clear_dependencies();
        for source in sources {
            self.depends_on(source);
        }
        self.invalidate();
    }

    /// Number of upstream subscriptions currently held
    pub fn dependency_count(&self) -> usize {
        self.node.upstream.borrow().len()
    }

    /// A decoupled duplicate: same cached value and compute function, but
    /// a fresh flag and no subscriptions in either direction
    pub fn copy(&self) -> Self {
        let compute = {
            let guard = self.node.compute.borrow();
            Rc::clone(&*guard)
        };
        Self {
            node: Rc::new(ExpressionNode {
                value: RefCell::new(self.node.value.borrow().clone()),
                compute: RefCell::new(compute),
                flag: Rc::new(DirtyFlag::new(self.node.flag.is_evaluated())),
                upstream: RefCell::new(Vec::new()),
            }),
        }
    }
}

impl<T: Clone + 'static> Observable for Expression<T> {
    fn flag(&self) -> Rc<DirtyFlag> {
        Rc::clone(&self.node.flag)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Expression<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Expression")
            .field("value", &*self.node.value.borrow())
            .field("evaluated", &self.node.flag.is_evaluated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Signal;
    use core::cell::Cell;

    #[test]
    fn test_lazy_recompute_on_read() {
        let runs = Rc::new(Cell::new(0u32));
        let counted = Rc::clone(&runs);
        let expr = Expression::new(move || {
            counted.set(counted.get() + 1);
            42
        });

        assert!(!expr.is_evaluated());
        assert_eq!(expr.get(), 42);
        assert_eq!(expr.get(), 42);
        assert_eq!(runs.get(), 1);

        expr.invalidate();
        assert_eq!(expr.get(), 42);
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn test_upstream_invalidation_propagates() {
        let signal = Signal::new(2u32);
        let reader = signal.clone();
        let doubled = Expression::new(move || reader.get() * 2);
        doubled.depends_on(&signal);

        assert_eq!(doubled.get(), 4);
        signal.set(5);
        assert!(!doubled.is_evaluated());
        assert_eq!(doubled.get(), 10);
    }

    #[test]
    fn test_composite_fires_once_per_batch() {
        let left = Signal::new(1u32);
        let right = Signal::new(2u32);
        let (l, r) = (left.clone(), right.clone());
        let sum = Expression::new(move || l.get() + r.get());
        sum.depends_on(&left);
        sum.depends_on(&right);

        let fired = Rc::new(Cell::new(0u32));
        struct Downstream(Rc<Cell<u32>>);
        impl Observer for Downstream {
            fn notify(&self) {
                self.0.set(self.0.get() + 1);
            }
        }
        let downstream = Rc::new(Downstream(Rc::clone(&fired)));
        let weak = Rc::downgrade(&downstream);
        let weak: Weak<dyn Observer> = weak;
        sum.flag().subscribe(weak);

        assert_eq!(sum.get(), 3);
        // Both upstreams change before the next read; downstream sees one
        // notification, not two.
        left.set(10);
        right.set(20);
        assert_eq!(fired.get(), 1);
        assert_eq!(sum.get(), 30);
    }

    #[test]
    fn test_copy_is_decoupled() {
        let signal = Signal::new(1u32);
        let reader = signal.clone();
        let expr = Expression::new(move || reader.get());
        expr.depends_on(&signal);
        assert_eq!(expr.get(), 1);

        let copy = expr.copy();
        assert_eq!(copy.dependency_count(), 0);
        signal.set(9);
        assert!(!expr.is_evaluated());
        assert!(copy.is_evaluated());
    }

    #[test]
    fn test_drop_unsubscribes() {
        let signal = Signal::new(1u32);
        let reader = signal.clone();
        let expr = Expression::new(move || reader.get());
        expr.depends_on(&signal);
        assert_eq!(signal.flag().observer_count(), 1);
        drop(expr);
        assert_eq!(signal.flag().observer_count(), 0);
    }

    #[test]
    fn test_reseed_dependencies() {
        let first = Signal::new(1u32);
        let second = Signal::new(2u32);
        let reader = second.clone();
        let expr = Expression::new(move || reader.get());
        expr.depends_on(&first);
        assert_eq!(expr.dependency_count(), 1);

        expr.reseed_dependencies([&second as &dyn Observable]);
        assert_eq!(expr.dependency_count(), 1);
        assert_eq!(first.flag().observer_count(), 0);

        expr.get();
        second.set(7);
        assert!(!expr.is_evaluated());
    }
}
