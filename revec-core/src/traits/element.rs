//! Numeric value type constraints for cells
//!
//! This module defines the trait that constrains what types can be
//! stored inside a scalar cell, together with implementations for the
//! standard numeric types. Exact types (see [`crate::rational::Rational`])
//! override the lossy defaults where precision matters.

use num_traits::Float;

/// Discriminant for the numeric kind backing a cell
///
/// Used for diagnostics and for choosing conversion widths when a vector
/// is exported to primitive arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    F32,
    F64,
    I32,
    I64,
    Rational,
}

impl core::fmt::Display for CellKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            CellKind::F32 => "f32",
            CellKind::F64 => "f64",
            CellKind::I32 => "i32",
            CellKind::I64 => "i64",
            CellKind::Rational => "rational",
        };
        write!(f, "{name}")
    }
}

/// Trait for types that can back a scalar cell
///
/// All cell value types must be:
/// - Clone: cells copy their value on read
/// - PartialEq/PartialOrd: cells compare and order by value
/// - Debug/Display: cells render through their value
///
/// The arithmetic methods are total; defaults route through `f64`, and
/// exact types override them to stay exact. `from_f64`/`to_f64` define
/// the canonical conversion used when comparing a cell against a bare
/// numeric literal: the literal is converted through the cell's own
/// precision first.
pub trait CellValue:
    Clone + PartialEq + PartialOrd + core::fmt::Debug + core::fmt::Display
{
    /// The kind discriminant for this value type
    fn kind() -> CellKind;

    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Convert from f64 at this type's own precision
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    fn to_f64(&self) -> f64;

    /// Sum of this value and another
    fn add(&self, other: &Self) -> Self;

    /// Difference of this value and another
    fn sub(&self, other: &Self) -> Self;

    /// Product of this value and another
    fn mul(&self, other: &Self) -> Self;

    /// Additive inverse
    fn neg(&self) -> Self;

    /// Multiplicative inverse
    fn reciprocal(&self) -> Self {
        Self::from_f64(1.0 / self.to_f64())
    }

    /// Quotient of this value and another
    ///
    /// Routed through the divisor's [`CellValue::reciprocal`] so exact
    /// types keep full precision.
    fn div(&self, other: &Self) -> Self {
        self.mul(&other.reciprocal())
    }

    /// This value multiplied by itself
    fn square(&self) -> Self {
        self.mul(self)
    }

    /// Square root (lossy for non-float types)
    fn sqrt(&self) -> Self {
        Self::from_f64(Float::sqrt(self.to_f64()))
    }

    /// Integer power
    fn pow(&self, exponent: i32) -> Self {
        Self::from_f64(Float::powi(self.to_f64(), exponent))
    }

    /// n-th root (lossy for non-float types)
    fn nth_root(&self, degree: u32) -> Self {
        Self::from_f64(Float::powf(self.to_f64(), 1.0 / degree as f64))
    }

    /// Remainder of this value divided by another
    fn rem(&self, other: &Self) -> Self {
        Self::from_f64(self.to_f64() % other.to_f64())
    }

    /// True if this value equals the additive identity
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

// Implement CellValue for standard numeric types

impl CellValue for f64 {
    fn kind() -> CellKind {
        CellKind::F64
    }

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(&self) -> f64 {
        *self
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn neg(&self) -> Self {
        -self
    }

    fn sqrt(&self) -> Self {
        Float::sqrt(*self)
    }
}

impl CellValue for f32 {
    fn kind() -> CellKind {
        CellKind::F32
    }

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn neg(&self) -> Self {
        -self
    }

    fn sqrt(&self) -> Self {
        Float::sqrt(*self)
    }
}

impl CellValue for i32 {
    fn kind() -> CellKind {
        CellKind::I32
    }

    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn from_f64(value: f64) -> Self {
        value as i32
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }

    fn add(&self, other: &Self) -> Self {
        self.wrapping_add(*other)
    }

    fn sub(&self, other: &Self) -> Self {
        self.wrapping_sub(*other)
    }

    fn mul(&self, other: &Self) -> Self {
        self.wrapping_mul(*other)
    }

    fn neg(&self) -> Self {
        self.wrapping_neg()
    }

    fn reciprocal(&self) -> Self {
        if *self == 0 {
            0
        } else {
            1 / self
        }
    }

    fn div(&self, other: &Self) -> Self {
        if *other == 0 {
            0
        } else {
            self / other
        }
    }

    fn rem(&self, other: &Self) -> Self {
        if *other == 0 {
            0
        } else {
            self % other
        }
    }
}

impl CellValue for i64 {
    fn kind() -> CellKind {
        CellKind::I64
    }

    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn from_f64(value: f64) -> Self {
        value as i64
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }

    fn add(&self, other: &Self) -> Self {
        self.wrapping_add(*other)
    }

    fn sub(&self, other: &Self) -> Self {
        self.wrapping_sub(*other)
    }

    fn mul(&self, other: &Self) -> Self {
        self.wrapping_mul(*other)
    }

    fn neg(&self) -> Self {
        self.wrapping_neg()
    }

    fn reciprocal(&self) -> Self {
        if *self == 0 {
            0
        } else {
            1 / self
        }
    }

    fn div(&self, other: &Self) -> Self {
        if *other == 0 {
            0
        } else {
            self / other
        }
    }

    fn rem(&self, other: &Self) -> Self {
        if *other == 0 {
            0
        } else {
            self % other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_arithmetic() {
        assert_eq!(CellValue::add(&2.0, &3.0), 5.0);
        assert_eq!(CellValue::mul(&2.0, &3.0), 6.0);
        assert_eq!(CellValue::div(&6.0, &3.0), 2.0);
        assert_eq!(2.0f64.square(), 4.0);
        assert_eq!(9.0f64.sqrt(), 3.0);
        assert_eq!(2.0f64.pow(10), 1024.0);
    }

    #[test]
    fn test_f32_canonical_conversion() {
        // A literal converted through f32 compares at f32 precision.
        let stored = <f32 as CellValue>::from_f64(0.1);
        assert_eq!(stored, 0.1f32);
        assert_ne!(stored.to_f64(), 0.1f64);
    }

    #[test]
    fn test_integer_division_is_total() {
        assert_eq!(CellValue::div(&7i64, &2i64), 3);
        assert_eq!(CellValue::div(&7i64, &0i64), 0);
        assert_eq!(CellValue::rem(&7i64, &3i64), 1);
        assert_eq!(3i64.reciprocal(), 0);
        assert_eq!(1i64.reciprocal(), 1);
    }

    #[test]
    fn test_kind_discriminants() {
        assert_eq!(<f64 as CellValue>::kind(), CellKind::F64);
        assert_eq!(<i32 as CellValue>::kind(), CellKind::I32);
    }
}
