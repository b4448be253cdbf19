#![no_std]

//! ReVec Core - Reactive Cell and Expression Primitives
//!
//! This crate provides the dependency-tracked building blocks for the
//! reactive vector engine: error taxonomy, pure validation functions, the
//! cell value traits, and (behind the `alloc` feature) the dirty-flag
//! observer machinery, scalar cells, state signals, and lazy expression
//! nodes that everything higher up is assembled from.
//!
//! The model is single-owner and single-threaded: no locking, synchronous
//! notification on the mutating call stack, and acyclic dependency graphs
//! as a caller responsibility.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod rational;
pub mod traits;
pub mod validation;

#[cfg(feature = "alloc")]
pub mod cell;
#[cfg(feature = "alloc")]
pub mod expression;
#[cfg(feature = "alloc")]
pub mod signal;

pub use error::{ErrorCategory, Result, RevecError};
pub use rational::Rational;
pub use traits::{CellKind, CellValue};
pub use validation::{
    validate_dimensions, validate_index, validate_major_index, validate_same_length,
};

#[cfg(feature = "alloc")]
pub use cell::{CellFactory, ScalarCell, ValueFactory};
#[cfg(feature = "alloc")]
pub use expression::Expression;
#[cfg(feature = "alloc")]
pub use signal::{DirtyFlag, Observable, Observer, Signal, SubscriptionToken};
