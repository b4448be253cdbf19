//! Homogeneous-coordinate vectors for affine transforms
//!
//! A [`HomogeneousVector`] wraps a core vector of size n+1 and presents a
//! projected dimensionality of n. The trailing coordinate encodes the
//! affine class: 1 for Absolute vectors (points), 0 for Relative vectors
//! (directions). The class is an explicit field, never derived from the
//! data, and the trailing invariant is restored at construction and
//! checked around every mutating operation.

use revec_core::{CellValue, Result, RevecError, ScalarCell};

use crate::axis::{Order, Orientation};
use crate::matrix::SquareMatrix;
use crate::vector::VectorCore;

/// Affine class of a homogeneous vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HomogeneousKind {
    /// A point: trailing coordinate fixed to 1, not scalable
    Absolute,
    /// A direction: trailing coordinate fixed to 0, freely scalable
    Relative,
}

impl HomogeneousKind {
    /// The trailing coordinate this class mandates
    pub fn trailing_value<T: CellValue>(&self) -> T {
        match self {
            HomogeneousKind::Absolute => T::one(),
            HomogeneousKind::Relative => T::zero(),
        }
    }
}

/// A core vector of size n+1 decorated with an affine class
pub struct HomogeneousVector<T: CellValue + 'static> {
    vector: VectorCore<T>,
    kind: HomogeneousKind,
}

impl<T: CellValue + 'static> HomogeneousVector<T> {
    /// Build from the projected (positional) values; the trailing
    /// coordinate is appended and finalized to the class constant
    pub fn new(
        kind: HomogeneousKind,
        order: Order,
        orientation: Orientation,
        projected: Vec<T>,
    ) -> Result<Self> {
        if projected.is_empty() {
            return Err(RevecError::ZeroDimensions);
        }
        let mut values = projected;
        values.push(kind.trailing_value());
        Ok(Self {
            vector: VectorCore::from_values(order, orientation, values)?,
            kind,
        })
    }

    /// Adopt an already-built (n+1)-sized core vector
    ///
    /// The trailing cell is forced to the class constant, restoring the
    /// invariant regardless of what the core held.
    pub fn from_core(kind: HomogeneousKind, vector: VectorCore<T>) -> Result<Self> {
        if vector.dimensions() < 2 {
            return Err(RevecError::DimensionMismatch);
        }
        Ok(Self::from_parts(kind, vector))
    }

    /// Decorate a core vector already known to be (n+1)-sized
    pub(crate) fn from_parts(kind: HomogeneousKind, vector: VectorCore<T>) -> Self {
        let decorated = Self { vector, kind };
        decorated.finalize();
        decorated
    }

    /// Force the trailing coordinate to the class constant
    fn finalize(&self) {
        self.trailing_cell().set_value(self.kind.trailing_value());
    }

    fn trailing_cell(&self) -> &ScalarCell<T> {
        &self.vector[self.vector.dimensions() - 1]
    }

    /// The affine class
    pub fn kind(&self) -> HomogeneousKind {
        self.kind
    }

    /// Dimensionality without the trailing coordinate
    pub fn projected_dimensions(&self) -> usize {
        self.vector.dimensions() - 1
    }

    /// The trailing coordinate's current value
    pub fn trailing(&self) -> T {
        self.trailing_cell().peek()
    }

    /// The wrapped (n+1)-sized core vector
    pub fn core(&self) -> &VectorCore<T> {
        &self.vector
    }

    /// Live n-sized view aliasing the positional cells
    ///
    /// Mutations through the view are visible on this vector and vice
    /// versa; the trailing coordinate stays out of reach.
    pub fn mutable_vector(&self) -> VectorCore<T> {
        // Projected size >= 1 by construction, so the range is valid.
        self.vector.view_range(0, self.projected_dimensions())
    }

    /// Add a Relative operand elementwise
    ///
    /// Only a directional operand (trailing coordinate 0) preserves the
    /// affine class; anything else is rejected before any mutation.
    pub fn add(&self, other: &HomogeneousVector<T>) -> Result<()> {
        if !other.trailing().is_zero() {
            return Err(RevecError::OperandNotRelative);
        }
        self.vector.add(other.core())
    }

    /// Subtract a Relative operand elementwise
    pub fn sub(&self, other: &HomogeneousVector<T>) -> Result<()> {
        if !other.trailing().is_zero() {
            return Err(RevecError::OperandNotRelative);
        }
        self.vector.sub(other.core())
    }

    /// Multiply by a scalar; points are not scalable
    pub fn scale(&self, factor: &T) -> Result<()> {
        if self.kind == HomogeneousKind::Absolute {
            return Err(RevecError::AbsoluteNotScalable);
        }
        self.vector.scale(factor);
        Ok(())
    }

    /// Divide by a scalar; points are not scalable
    pub fn scale_div(&self, divisor: &T) -> Result<()> {
        if self.kind == HomogeneousKind::Absolute {
            return Err(RevecError::AbsoluteNotScalable);
        }
        self.vector.scale_div(divisor);
        Ok(())
    }

    fn accept_product(&self, product: Vec<T>) -> Result<()> {
        let expected: T = self.kind.trailing_value();
        match product.last() {
            Some(trailing) if *trailing == expected => {
                self.vector.operate_on_data(&product, |_, next| next.clone())
            }
            _ => Err(RevecError::TrailingInvariant),
        }
    }

    /// Row-vector matrix product vᵀ·M, written back in place
    ///
    /// The full product is computed first; a result whose trailing
    /// coordinate violates the affine class is rejected and the vector
    /// left unchanged.
    pub fn transform(&self, matrix: &SquareMatrix<T>) -> Result<()> {
        self.accept_product(matrix.vector_mul(&self.vector.data())?)
    }

    /// Column-vector matrix product M·v, written back in place
    pub fn pre_transform(&self, matrix: &SquareMatrix<T>) -> Result<()> {
        self.accept_product(matrix.mul_vector(&self.vector.data())?)
    }

    /// Translate by a vector
    ///
    /// A projected-size argument only touches the positional part (through
    /// the live n-view); a full-size argument is a plain elementwise add.
    pub fn translate(&self, offset: &VectorCore<T>) -> Result<()> {
        if offset.dimensions() == self.projected_dimensions() {
            self.mutable_vector().add(offset)
        } else {
            self.vector.add(offset)
        }
    }

    /// Deep copy preserving the affine class
    pub fn copy(&self) -> HomogeneousVector<T> {
        HomogeneousVector {
            vector: self.vector.copy(),
            kind: self.kind,
        }
    }
}

impl<T: CellValue + 'static> std::fmt::Display for HomogeneousVector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.vector)
    }
}

impl<T: CellValue + 'static> std::fmt::Debug for HomogeneousVector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomogeneousVector")
            .field("kind", &self.kind)
            .field("vector", &self.vector)
            .finish()
    }
}

impl<T: CellValue + 'static> PartialEq for HomogeneousVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.vector == other.vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(values: Vec<f64>) -> HomogeneousVector<f64> {
        HomogeneousVector::new(
            HomogeneousKind::Absolute,
            Order::RowMajor,
            Orientation::Row,
            values,
        )
        .unwrap()
    }

    fn direction(values: Vec<f64>) -> HomogeneousVector<f64> {
        HomogeneousVector::new(
            HomogeneousKind::Relative,
            Order::RowMajor,
            Orientation::Row,
            values,
        )
        .unwrap()
    }

    #[test]
    fn test_absolute_construction_stores_trailing_one() {
        let p = point(vec![1.0, 2.0]);
        assert_eq!(p.core().data(), vec![1.0, 2.0, 1.0]);
        assert_eq!(p.projected_dimensions(), 2);
        assert_eq!(p.trailing(), 1.0);

        let d = direction(vec![1.0, 2.0]);
        assert_eq!(d.core().data(), vec![1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_from_core_finalizes_trailing() {
        let core = VectorCore::from_values(Order::RowMajor, Orientation::Row, vec![4.0, 5.0, 9.0])
            .unwrap();
        let p = HomogeneousVector::from_core(HomogeneousKind::Absolute, core).unwrap();
        assert_eq!(p.core().data(), vec![4.0, 5.0, 1.0]);
    }

    #[test]
    fn test_scaling_a_point_is_rejected_unchanged() {
        let p = point(vec![1.0, 2.0]);
        assert_eq!(p.scale(&2.0).unwrap_err(), RevecError::AbsoluteNotScalable);
        assert_eq!(p.scale_div(&2.0).unwrap_err(), RevecError::AbsoluteNotScalable);
        assert_eq!(p.core().data(), vec![1.0, 2.0, 1.0]);

        let d = direction(vec![1.0, 2.0]);
        d.scale(&2.0).unwrap();
        assert_eq!(d.core().data(), vec![2.0, 4.0, 0.0]);
    }

    #[test]
    fn test_adding_relative_preserves_trailing() {
        let p = point(vec![1.0, 2.0]);
        let d = direction(vec![10.0, 20.0]);
        p.add(&d).unwrap();
        assert_eq!(p.core().data(), vec![11.0, 22.0, 1.0]);

        let q = point(vec![0.0, 0.0]);
        assert_eq!(p.add(&q).unwrap_err(), RevecError::OperandNotRelative);
        assert_eq!(p.core().data(), vec![11.0, 22.0, 1.0]);

        p.sub(&d).unwrap();
        assert_eq!(p.core().data(), vec![1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_matrix_transform_checks_trailing() {
        let p = point(vec![1.0, 2.0]);
        let translate = SquareMatrix::translation(&[5.0, 7.0]).unwrap();
        p.pre_transform(&translate).unwrap();
        assert_eq!(p.core().data(), vec![6.0, 9.0, 1.0]);

        // A matrix that zeroes the trailing coordinate breaks the class.
        let collapse = SquareMatrix::from_rows(vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ])
        .unwrap();
        assert_eq!(
            p.pre_transform(&collapse).unwrap_err(),
            RevecError::TrailingInvariant
        );
        assert_eq!(p.core().data(), vec![6.0, 9.0, 1.0]);
    }

    #[test]
    fn test_translate_projected_and_full() {
        let p = point(vec![1.0, 2.0]);
        let offset = VectorCore::from_values(Order::RowMajor, Orientation::Row, vec![3.0, 4.0])
            .unwrap();
        p.translate(&offset).unwrap();
        assert_eq!(p.core().data(), vec![4.0, 6.0, 1.0]);

        let full = VectorCore::from_values(
            Order::RowMajor,
            Orientation::Row,
            vec![1.0, 1.0, 0.0],
        )
        .unwrap();
        p.translate(&full).unwrap();
        assert_eq!(p.core().data(), vec![5.0, 7.0, 1.0]);
    }

    #[test]
    fn test_mutable_vector_is_live_and_projected() {
        let p = point(vec![1.0, 2.0]);
        let view = p.mutable_vector();
        assert_eq!(view.dimensions(), 2);
        view[0].set_value(9.0);
        assert_eq!(p.core().data(), vec![9.0, 2.0, 1.0]);
        p.core()[1].set_value(8.0);
        assert_eq!(view.value(1).unwrap(), 8.0);
    }

    #[test]
    fn test_copy_preserves_class_and_decouples() {
        let p = point(vec![1.0, 2.0]);
        let c = p.copy();
        assert_eq!(c, p);
        c.core()[0].set_value(100.0);
        assert_eq!(p.core().value(0).unwrap(), 1.0);
    }
}
