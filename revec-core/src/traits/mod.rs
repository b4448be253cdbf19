//! Core value traits for the reactive vector engine
//!
//! These are pure type constraints with no concrete reactive machinery;
//! the cell/expression implementations live in the sibling modules.

mod element;

pub use element::{CellKind, CellValue};
