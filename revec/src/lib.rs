//! ReVec - Reactive Dependency-Tracked Vectors
//!
//! This library provides an n-dimensional vector abstraction whose storage
//! is built from invalidation-tracked scalar cells, with homogeneous
//! coordinates for affine transforms.
//!
//! ## Architecture
//!
//! ReVec follows a clean primitive/implementation separation:
//!
//! - **revec-core**: Error taxonomy, value traits, and the dirty-flag /
//!   signal / expression reactive primitives (no_std)
//! - **revec**: The vector engine assembled from those primitives
//!
//! ## Quick Start
//!
//! ```rust
//! use revec::{Order, Orientation, VectorCore};
//!
//! let v = VectorCore::from_values(Order::RowMajor, Orientation::Row, vec![3.0, 4.0])?;
//! assert_eq!(v.size(), 5.0);
//!
//! // The nested view tracks the order/orientation alignment lazily.
//! assert_eq!(v.data2().len(), 1);
//! v.transpose();
//! assert_eq!(v.data2().len(), 2);
//! # Ok::<(), revec::RevecError>(())
//! ```
//!
//! ## Features
//!
//! - **Lazy invalidation**: mutation flips a dirty bit once and notifies
//!   observers synchronously; derived views recompute on the next read
//! - **Dual representation**: the same storage reads as a flat sequence
//!   or as the nested row/column view, following the alignment of storage
//!   [`Order`] and vector [`Orientation`]
//! - **Affine type-state**: homogeneous vectors are Absolute points or
//!   Relative directions, with the trailing-coordinate invariant enforced
//!   around every operation
//! - **Copy decoupling**: copying any cell, vector, or expression severs
//!   all observer wiring

// Re-export core primitives and definitions
pub use revec_core::{
    // Value types and traits
    CellFactory, CellKind, CellValue, Rational, ScalarCell, ValueFactory,
    // Reactive primitives
    DirtyFlag, Expression, Observable, Observer, Signal, SubscriptionToken,
    // Error handling
    ErrorCategory, Result, RevecError,
    // Validation utilities
    validate_dimensions, validate_index, validate_major_index, validate_same_length,
};

// Engine modules
pub mod axis;
pub mod fixed;
pub mod homogeneous;
pub mod matrix;
pub mod vector;

pub use axis::{Order, Orientation};
pub use fixed::{HVector2, HVector3, HVector4, Vector2, Vector3, Vector4, VectorN, VectorR};
pub use homogeneous::{HomogeneousKind, HomogeneousVector};
pub use matrix::SquareMatrix;
pub use vector::{Nested, VectorCore};
