//! Square matrices for affine transforms
//!
//! A plain row-major value matrix, sized to multiply homogeneous vectors.
//! Matrices are not reactive: they are transform inputs, not graph nodes.

use revec_core::{validate_dimensions, validate_index, CellValue, Result, RevecError};

/// A dense square matrix of cell values, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T: CellValue> {
    dim: usize,
    values: Vec<T>,
}

impl<T: CellValue> SquareMatrix<T> {
    /// The identity matrix of a given dimension
    pub fn identity(dim: usize) -> Result<Self> {
        validate_dimensions(dim)?;
        let mut values = vec![T::zero(); dim * dim];
        for i in 0..dim {
            values[i * dim + i] = T::one();
        }
        Ok(Self { dim, values })
    }

    /// Build from explicit rows, validating squareness
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let dim = rows.len();
        validate_dimensions(dim)?;
        let mut values = Vec::with_capacity(dim * dim);
        for row in rows {
            if row.len() != dim {
                return Err(RevecError::MatrixShape);
            }
            values.extend(row);
        }
        Ok(Self { dim, values })
    }

    /// The (n+1)-sized affine translation matrix for n offsets
    ///
    /// Identity with the offsets in the last column, so multiplying an
    /// Absolute homogeneous vector moves its positional part.
    pub fn translation(offsets: &[T]) -> Result<Self> {
        let dim = offsets.len() + 1;
        let mut matrix = Self::identity(dim)?;
        for (i, offset) in offsets.iter().enumerate() {
            matrix.set(i, dim - 1, offset.clone())?;
        }
        Ok(matrix)
    }

    /// Row/column dimension
    pub fn dimensions(&self) -> usize {
        self.dim
    }

    /// The value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        validate_index(row, self.dim)?;
        validate_index(col, self.dim)?;
        Ok(&self.values[row * self.dim + col])
    }

    /// Overwrite the value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        validate_index(row, self.dim)?;
        validate_index(col, self.dim)?;
        self.values[row * self.dim + col] = value;
        Ok(())
    }

    /// The column-vector product M·v
    pub fn mul_vector(&self, vector: &[T]) -> Result<Vec<T>> {
        if vector.len() != self.dim {
            return Err(RevecError::MatrixShape);
        }
        let mut out = Vec::with_capacity(self.dim);
        for row in 0..self.dim {
            let mut sum = T::zero();
            for col in 0..self.dim {
                sum = sum.add(&self.values[row * self.dim + col].mul(&vector[col]));
            }
            out.push(sum);
        }
        Ok(out)
    }

    /// The row-vector product vᵀ·M
    pub fn vector_mul(&self, vector: &[T]) -> Result<Vec<T>> {
        if vector.len() != self.dim {
            return Err(RevecError::MatrixShape);
        }
        let mut out = Vec::with_capacity(self.dim);
        for col in 0..self.dim {
            let mut sum = T::zero();
            for row in 0..self.dim {
                sum = sum.add(&vector[row].mul(&self.values[row * self.dim + col]));
            }
            out.push(sum);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_product() {
        let m = SquareMatrix::<f64>::identity(3).unwrap();
        let v = vec![1.0, 2.0, 3.0];
        assert_eq!(m.mul_vector(&v).unwrap(), v);
        assert_eq!(m.vector_mul(&v).unwrap(), v);
    }

    #[test]
    fn test_from_rows_validates_squareness() {
        assert_eq!(
            SquareMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err(),
            RevecError::MatrixShape
        );
        assert_eq!(
            SquareMatrix::<f64>::from_rows(vec![]).unwrap_err(),
            RevecError::ZeroDimensions
        );
    }

    #[test]
    fn test_products_transpose_each_other() {
        let m = SquareMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.mul_vector(&[1.0, 1.0]).unwrap(), vec![3.0, 7.0]);
        assert_eq!(m.vector_mul(&[1.0, 1.0]).unwrap(), vec![4.0, 6.0]);
        assert_eq!(m.mul_vector(&[1.0]).unwrap_err(), RevecError::MatrixShape);
    }

    #[test]
    fn test_translation_matrix() {
        let m = SquareMatrix::translation(&[5.0, 7.0]).unwrap();
        // Point (1, 2, 1) moves; direction (1, 2, 0) does not.
        assert_eq!(m.mul_vector(&[1.0, 2.0, 1.0]).unwrap(), vec![6.0, 9.0, 1.0]);
        assert_eq!(m.mul_vector(&[1.0, 2.0, 0.0]).unwrap(), vec![1.0, 2.0, 0.0]);
    }
}
