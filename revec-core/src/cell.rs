//! Scalar cells: the eager numeric leaves of the dependency graph
//!
//! A [`ScalarCell`] stores its value eagerly (reading never recomputes
//! anything), and every mutating operation stores the new value and flips
//! the dirty flag, notifying observers exactly once per dirty cycle.
//! Derived laziness lives in [`crate::expression::Expression`], not here.

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::signal::{DirtyFlag, Observable};
use crate::traits::CellValue;

/// A mutable numeric value with an invalidation contract
///
/// `Clone` shares the underlying cell (handle semantics, used by live
/// vector views); [`ScalarCell::copy`] produces an independent cell with
/// the same value and an empty observer set.
#[derive(Clone)]
pub struct ScalarCell<T> {
    node: Rc<CellNode<T>>,
}

struct CellNode<T> {
    value: RefCell<T>,
    flag: Rc<DirtyFlag>,
}

impl<T: CellValue + 'static> ScalarCell<T> {
    /// Create a cell holding a value
    pub fn new(value: T) -> Self {
        Self {
            node: Rc::new(CellNode {
                value: RefCell::new(value),
                flag: Rc::new(DirtyFlag::new(true)),
            }),
        }
    }

    /// Create a zero-valued cell
    pub fn zero() -> Self {
        Self::new(T::zero())
    }

    /// Read the value, marking the dirty flag clean
    pub fn get(&self) -> T {
        self.node.flag.mark_clean();
        self.node.value.borrow().clone()
    }

    /// Read the value without touching the dirty flag
    ///
    /// Display, equality, and bulk exports go through here so that
    /// inspecting a cell never interferes with the invalidation cycle.
    pub fn peek(&self) -> T {
        self.node.value.borrow().clone()
    }

    /// True while no unobserved mutation is pending
    pub fn is_evaluated(&self) -> bool {
        self.node.flag.is_evaluated()
    }

    fn store(&self, value: T) {
        *self.node.value.borrow_mut() = value;
        self.node.flag.mark_stale();
    }

    /// Replace the value with the result of a function of the current one
    ///
    /// The result is always written back to the backing storage before
    /// observers are notified.
    pub fn apply(&self, f: impl FnOnce(&T) -> T) {
        let next = {
            let current = self.node.value.borrow();
            f(&*current)
        };
        self.store(next);
    }

    /// Overwrite with a plain value
    pub fn set_value(&self, value: T) {
        self.store(value);
    }

    /// Overwrite with another cell's value
    pub fn set(&self, other: &ScalarCell<T>) {
        self.store(other.peek());
    }

    /// Add a plain value
    pub fn add_value(&self, value: T) {
        self.apply(|v| v.add(&value));
    }

    /// Add another cell's value
    pub fn add(&self, other: &ScalarCell<T>) {
        self.add_value(other.peek());
    }

    /// Subtract a plain value
    pub fn sub_value(&self, value: T) {
        self.apply(|v| v.sub(&value));
    }

    /// Subtract another cell's value
    pub fn sub(&self, other: &ScalarCell<T>) {
        self.sub_value(other.peek());
    }

    /// Multiply by a plain value
    pub fn mul_value(&self, value: T) {
        self.apply(|v| v.mul(&value));
    }

    /// Multiply by another cell's value
    pub fn mul(&self, other: &ScalarCell<T>) {
        self.mul_value(other.peek());
    }

    /// Divide by a plain value
    pub fn div_value(&self, value: T) {
        self.apply(|v| v.div(&value));
    }

    /// Divide by another cell's value
    ///
    /// Routed through the divisor's reciprocal and multiply, so exact
    /// divisor kinds (rationals) lose no precision on the way through.
    pub fn div(&self, other: &ScalarCell<T>) {
        let reciprocal = other.peek().reciprocal();
        self.apply(|v| v.mul(&reciprocal));
    }

    /// Negate in place
    pub fn negate(&self) {
        self.apply(CellValue::neg);
    }

    /// Replace with the multiplicative inverse
    pub fn reciprocate(&self) {
        self.apply(CellValue::reciprocal);
    }

    /// Square in place
    pub fn square(&self) {
        self.apply(CellValue::square);
    }

    /// Replace with the square root
    pub fn sqrt(&self) {
        self.apply(CellValue::sqrt);
    }

    /// Raise to an integer power
    pub fn pow(&self, exponent: i32) {
        self.apply(|v| v.pow(exponent));
    }

    /// Replace with the n-th root
    pub fn nth_root(&self, degree: u32) {
        self.apply(|v| v.nth_root(degree));
    }

    /// Remainder after division by a plain value
    pub fn rem_value(&self, value: T) {
        self.apply(|v| v.rem(&value));
    }

    /// Remainder after division by another cell's value
    pub fn rem(&self, other: &ScalarCell<T>) {
        self.rem_value(other.peek());
    }

    /// Add one
    pub fn increment(&self) {
        self.add_value(T::one());
    }

    /// Subtract one
    pub fn decrement(&self) {
        self.sub_value(T::one());
    }

    /// An independent cell: same value, fresh flag, empty observer set
    ///
    /// Mutating the copy never notifies observers registered on the
    /// original, and vice versa.
    pub fn copy(&self) -> Self {
        Self::new(self.peek())
    }

    /// True if this handle aliases the same cell as another
    pub fn shares_storage(&self, other: &ScalarCell<T>) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl<T: CellValue + 'static> Observable for ScalarCell<T> {
    fn flag(&self) -> Rc<DirtyFlag> {
        Rc::clone(&self.node.flag)
    }
}

impl<T: CellValue + 'static> core::fmt::Display for ScalarCell<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.peek())
    }
}

impl<T: CellValue + 'static> core::fmt::Debug for ScalarCell<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ScalarCell").field(&self.peek()).finish()
    }
}

impl<T: CellValue + 'static, U: CellValue + 'static> PartialEq<ScalarCell<U>> for ScalarCell<T> {
    /// Compare against any cell kind through this cell's own precision
    ///
    /// The operand's value is converted through the left cell's value type
    /// first, so an f32-backed cell compares at f32 precision even against
    /// an f64-backed operand.
    fn eq(&self, other: &ScalarCell<U>) -> bool {
        self.peek() == T::from_f64(other.peek().to_f64())
    }
}

impl<T: CellValue + 'static> PartialEq<f64> for ScalarCell<T> {
    /// Compare against a bare literal through this cell's own precision
    fn eq(&self, other: &f64) -> bool {
        self.peek() == T::from_f64(*other)
    }
}

impl<T: CellValue + 'static> PartialOrd for ScalarCell<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.peek().partial_cmp(&other.peek())
    }
}

/// Factory contract for building cells of a uniform kind
///
/// Every vector constructor that builds default elements goes through a
/// factory, never a hard-coded cell type.
pub trait CellFactory<T: CellValue + 'static> {
    /// A default (zero-valued) cell
    fn create(&self) -> ScalarCell<T> {
        ScalarCell::zero()
    }

    /// A value-initialized cell
    fn of(&self, value: T) -> ScalarCell<T> {
        ScalarCell::new(value)
    }
}

/// The default factory: plain value-backed cells
#[derive(Debug, Default, Clone, Copy)]
pub struct ValueFactory;

impl<T: CellValue + 'static> CellFactory<T> for ValueFactory {}
