//! The n-dimensional reactive vector
//!
//! A [`VectorCore`] owns an ordered sequence of scalar cells plus two
//! small state signals (storage [`Order`] and [`Orientation`]). The same
//! storage is visible three ways: as the flat cell sequence, as live
//! sliced sub-vectors sharing the cells, and as the cached nested
//! [`Nested`] view whose shape follows the order/orientation alignment.
//! The nested view is an expression node: transposing or reordering the
//! vector invalidates it, and the next read re-wraps the (unchanged) cell
//! handles.

use std::cell::RefCell;
use std::ops::Index;

use revec_core::{
    validate_dimensions, validate_index, validate_major_index, validate_same_length, CellFactory,
    CellValue, Expression, Result, RevecError, ScalarCell, Signal, ValueFactory,
};

use crate::axis::{Order, Orientation};

/// The nested (list-of-major-lines) view of a vector's flat storage
///
/// Aligned vectors produce one line holding every cell; non-aligned
/// vectors produce one singleton line per cell. The inner handles alias
/// the vector's own cells.
pub type Nested<T> = Vec<Vec<ScalarCell<T>>>;

/// An ordered sequence of scalar cells with order/orientation state
pub struct VectorCore<T: CellValue + 'static> {
    cells: Vec<ScalarCell<T>>,
    order: Signal<Order>,
    orientation: Signal<Orientation>,
    nested: RefCell<Option<Expression<Nested<T>>>>,
}

impl<T: CellValue + 'static> VectorCore<T> {
    /// Build a vector of default-valued cells through a factory
    pub fn new(
        size: usize,
        order: Order,
        orientation: Orientation,
        factory: &impl CellFactory<T>,
    ) -> Result<Self> {
        validate_dimensions(size)?;
        let cells = (0..size).map(|_| factory.create()).collect();
        Ok(Self::from_cells(cells, order, orientation))
    }

    /// Build a zero-filled vector with the default factory
    pub fn zeros(size: usize, order: Order, orientation: Orientation) -> Result<Self> {
        Self::new(size, order, orientation, &ValueFactory)
    }

    /// Build a vector from an explicit value sequence
    pub fn from_values(order: Order, orientation: Orientation, values: Vec<T>) -> Result<Self> {
        validate_dimensions(values.len())?;
        let cells = values.into_iter().map(ScalarCell::new).collect();
        Ok(Self::from_cells(cells, order, orientation))
    }

    pub(crate) fn from_cells(cells: Vec<ScalarCell<T>>, order: Order, orientation: Orientation) -> Self {
        Self {
            cells,
            order: Signal::new(order),
            orientation: Signal::new(orientation),
            nested: RefCell::new(None),
        }
    }

    /// Number of stored elements
    pub fn dimensions(&self) -> usize {
        self.cells.len()
    }

    /// Rows in the conceptual row/column shape (1 for a row vector)
    pub fn row_count(&self) -> usize {
        match self.orientation() {
            Orientation::Row => 1,
            Orientation::Column => self.dimensions(),
        }
    }

    /// Columns in the conceptual row/column shape (1 for a column vector)
    pub fn column_count(&self) -> usize {
        match self.orientation() {
            Orientation::Row => self.dimensions(),
            Orientation::Column => 1,
        }
    }

    /// Current storage order
    pub fn order(&self) -> Order {
        self.order.get()
    }

    /// Current orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation.get()
    }

    /// True when the storage order matches the orientation's associated
    /// order, i.e. the nested view collapses to one major line
    pub fn is_aligned(&self) -> bool {
        self.order() == self.orientation().associated_order()
    }

    /// The cell at a flat index
    pub fn element(&self, index: usize) -> Result<&ScalarCell<T>> {
        validate_index(index, self.dimensions())?;
        Ok(&self.cells[index])
    }

    /// The cell at a (major, minor) position
    ///
    /// A vector's major axis has exactly one line, so the major index
    /// must be zero.
    pub fn element_at(&self, major: usize, minor: usize) -> Result<&ScalarCell<T>> {
        validate_major_index(major)?;
        self.element(minor)
    }

    /// The value at a flat index
    pub fn value(&self, index: usize) -> Result<T> {
        Ok(self.element(index)?.peek())
    }

    /// Overwrite the value at a flat index
    pub fn set_value(&self, index: usize, value: T) -> Result<()> {
        self.element(index)?.set_value(value);
        Ok(())
    }

    /// All cell handles, in storage order
    pub fn cells(&self) -> &[ScalarCell<T>] {
        &self.cells
    }

    // ---- elementwise arithmetic -------------------------------------

    /// Combine each element with the matching external item
    ///
    /// Shape is validated before any element is mutated, so a rejected
    /// call leaves the vector unchanged. Each combined result is written
    /// back into the backing cell.
    pub fn operate_on_data(&self, items: &[T], combine: impl Fn(&T, &T) -> T) -> Result<()> {
        validate_same_length(self.dimensions(), items.len())?;
        for (cell, item) in self.cells.iter().zip(items) {
            cell.apply(|current| combine(current, item));
        }
        Ok(())
    }

    /// Combine each major line of the nested view with an external line
    ///
    /// The line count and per-line lengths are validated up front against
    /// the current alignment before any element is mutated.
    pub fn operate_on_data2(&self, lines: &[Vec<T>], combine: impl Fn(&T, &T) -> T) -> Result<()> {
        let nested = self.data2();
        validate_same_length(nested.len(), lines.len())?;
        for (row, line) in nested.iter().zip(lines) {
            validate_same_length(row.len(), line.len())?;
        }
        for (row, line) in nested.iter().zip(lines) {
            for (cell, item) in row.iter().zip(line) {
                cell.apply(|current| combine(current, item));
            }
        }
        Ok(())
    }

    fn combine_with(&self, other: &VectorCore<T>, combine: impl Fn(&T, &T) -> T) -> Result<()> {
        validate_same_length(self.dimensions(), other.dimensions())?;
        if self.orientation() != other.orientation() {
            return Err(RevecError::OrientationMismatch);
        }
        // Snapshot the operand first; `other` may alias `self`.
        let items = other.data();
        self.operate_on_data(&items, combine)
    }

    /// Elementwise sum with another vector of matching shape
    pub fn add(&self, other: &VectorCore<T>) -> Result<()> {
        self.combine_with(other, |a, b| a.add(b))
    }

    /// Elementwise difference with another vector of matching shape
    pub fn sub(&self, other: &VectorCore<T>) -> Result<()> {
        self.combine_with(other, |a, b| a.sub(b))
    }

    /// Elementwise product with another vector of matching shape
    pub fn mul(&self, other: &VectorCore<T>) -> Result<()> {
        self.combine_with(other, |a, b| a.mul(b))
    }

    /// Elementwise quotient with another vector of matching shape
    pub fn div(&self, other: &VectorCore<T>) -> Result<()> {
        self.combine_with(other, |a, b| a.div(b))
    }

    /// Multiply every element by a scalar
    pub fn scale(&self, factor: &T) {
        for cell in &self.cells {
            cell.mul_value(factor.clone());
        }
    }

    /// Divide every element by a scalar
    pub fn scale_div(&self, divisor: &T) {
        for cell in &self.cells {
            cell.div_value(divisor.clone());
        }
    }

    // ---- structure --------------------------------------------------

    /// Grow with factory-default cells or shrink from the tail
    pub fn resize(&mut self, size: usize, factory: &impl CellFactory<T>) -> Result<()> {
        validate_dimensions(size)?;
        if size <= self.cells.len() {
            self.cells.truncate(size);
        } else {
            while self.cells.len() < size {
                self.cells.push(factory.create());
            }
        }
        // The cached nested view wraps the old cell set; rebuild on next read.
        self.reseed_views();
        Ok(())
    }

    /// Flip the orientation in place (Row <-> Column)
    pub fn transpose(&self) {
        let flipped = self.orientation.peek().other();
        self.orientation.set(flipped);
    }

    /// Change the storage order, optionally transposing the data
    ///
    /// A no-op reorder never triggers a transpose.
    pub fn set_order(&self, order: Order, transpose_data: bool) {
        if self.order.set(order) && transpose_data {
            self.transpose();
        }
    }

    fn reseed_views(&self) {
        *self.nested.borrow_mut() = None;
    }

    // ---- views ------------------------------------------------------

    /// The cached nested view of the flat storage
    ///
    /// One major line containing every cell when aligned, otherwise one
    /// singleton line per cell. The backing expression is invalidated by
    /// order/orientation changes and rebuilt lazily; the handles it hands
    /// out always alias the live cells.
    pub fn data2(&self) -> Nested<T> {
        if self.nested.borrow().is_none() {
            *self.nested.borrow_mut() = Some(self.build_nested());
        }
        let nested = self.nested.borrow();
        match nested.as_ref() {
            Some(expression) => expression.get(),
            // Unreachable by construction; rebuild defensively.
            None => Vec::new(),
        }
    }

    fn build_nested(&self) -> Expression<Nested<T>> {
        let cells = self.cells.clone();
        let order = self.order.clone();
        let orientation = self.orientation.clone();
        let expression = Expression::new(move || {
            if order.get() == orientation.get().associated_order() {
                vec![cells.clone()]
            } else {
                cells.iter().map(|cell| vec![cell.clone()]).collect()
            }
        });
        expression.depends_on(&self.order);
        expression.depends_on(&self.orientation);
        expression
    }

    /// Live view over a whole major line (index must be zero)
    pub fn major_vector(&self, index: usize) -> Result<VectorCore<T>> {
        validate_major_index(index)?;
        Ok(Self::from_cells(
            self.cells.clone(),
            self.order(),
            self.orientation(),
        ))
    }

    /// Live single-element view with flipped orientation
    pub fn minor_vector(&self, index: usize) -> Result<VectorCore<T>> {
        validate_index(index, self.dimensions())?;
        Ok(Self::from_cells(
            vec![self.cells[index].clone()],
            self.order(),
            self.orientation().other(),
        ))
    }

    /// Live row slice: the major line for row vectors, a minor singleton
    /// for column vectors
    pub fn row_vector(&self, index: usize) -> Result<VectorCore<T>> {
        match self.orientation() {
            Orientation::Row => self.major_vector(index),
            Orientation::Column => self.minor_vector(index),
        }
    }

    /// Live column slice, the mirror of [`VectorCore::row_vector`]
    pub fn column_vector(&self, index: usize) -> Result<VectorCore<T>> {
        match self.orientation() {
            Orientation::Column => self.major_vector(index),
            Orientation::Row => self.minor_vector(index),
        }
    }

    /// Live view over a contiguous index range, sharing the cells
    pub(crate) fn view_range(&self, start: usize, end: usize) -> VectorCore<T> {
        Self::from_cells(
            self.cells[start..end].to_vec(),
            self.order(),
            self.orientation(),
        )
    }

    // ---- metrics & exports ------------------------------------------

    /// Sum of squared elements, exact in the cell value type
    pub fn size_squared(&self) -> T {
        self.cells
            .iter()
            .fold(T::zero(), |acc, cell| acc.add(&cell.peek().square()))
    }

    /// Euclidean norm
    pub fn size(&self) -> f64 {
        self.size_squared().to_f64().sqrt()
    }

    /// All element values, in storage order
    pub fn data(&self) -> Vec<T> {
        self.cells.iter().map(ScalarCell::peek).collect()
    }

    /// All element values widened to f64
    pub fn double_data(&self) -> Vec<f64> {
        self.cells.iter().map(|cell| cell.peek().to_f64()).collect()
    }

    /// All element values narrowed to i64
    pub fn int_data(&self) -> Vec<i64> {
        self.cells
            .iter()
            .map(|cell| cell.peek().to_f64() as i64)
            .collect()
    }

    /// Deep copy: fresh cells and state, no shared observer wiring
    pub fn copy(&self) -> VectorCore<T> {
        Self::from_cells(
            self.cells.iter().map(ScalarCell::copy).collect(),
            self.order.peek(),
            self.orientation.peek(),
        )
    }
}

impl<T: CellValue + 'static> Index<usize> for VectorCore<T> {
    type Output = ScalarCell<T>;

    fn index(&self, index: usize) -> &ScalarCell<T> {
        &self.cells[index]
    }
}

impl<T: CellValue + 'static> std::fmt::Display for VectorCore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, ")")
    }
}

impl<T: CellValue + 'static> std::fmt::Debug for VectorCore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorCore")
            .field("cells", &self.cells)
            .field("order", &self.order.peek())
            .field("orientation", &self.orientation.peek())
            .finish()
    }
}

impl<T: CellValue + 'static> PartialEq for VectorCore<T> {
    fn eq(&self, other: &Self) -> bool {
        self.row_count() == other.row_count()
            && self.column_count() == other.column_count()
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| a.peek() == b.peek())
    }
}

impl<T: CellValue + 'static> PartialOrd for VectorCore<T> {
    /// Total dimensions first, then lexicographic by element
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match self.dimensions().cmp(&other.dimensions()) {
            std::cmp::Ordering::Equal => {}
            unequal => return Some(unequal),
        }
        for (a, b) in self.cells.iter().zip(&other.cells) {
            match a.peek().partial_cmp(&b.peek()) {
                Some(std::cmp::Ordering::Equal) => continue,
                unequal => return unequal,
            }
        }
        Some(std::cmp::Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: Vec<f64>) -> VectorCore<f64> {
        VectorCore::from_values(Order::RowMajor, Orientation::Row, values).unwrap()
    }

    #[test]
    fn test_construction_validates_dimensionality() {
        assert_eq!(
            VectorCore::<f64>::from_values(Order::RowMajor, Orientation::Row, vec![]).unwrap_err(),
            RevecError::ZeroDimensions
        );
        assert_eq!(
            VectorCore::<f64>::zeros(0, Order::RowMajor, Orientation::Row).unwrap_err(),
            RevecError::ZeroDimensions
        );
        assert_eq!(row(vec![1.0, 2.0]).dimensions(), 2);
    }

    #[test]
    fn test_euclidean_norm() {
        let v = row(vec![3.0, 4.0]);
        assert_eq!(v.size_squared(), 25.0);
        assert_eq!(v.size(), 5.0);
    }

    #[test]
    fn test_major_minor_indexing() {
        let v = row(vec![1.0, 2.0, 3.0]);
        assert_eq!(v.element_at(0, 2).unwrap().peek(), 3.0);
        assert_eq!(v.element_at(1, 0).unwrap_err(), RevecError::NoSuchMajorLine);
        assert_eq!(v.element(3).unwrap_err(), RevecError::IndexOutOfBounds);
    }

    #[test]
    fn test_add_and_failed_add_leaves_unchanged() {
        let v = row(vec![1.0, 2.0]);
        let w = row(vec![10.0, 20.0]);
        v.add(&w).unwrap();
        assert_eq!(v.data(), vec![11.0, 22.0]);

        let short = row(vec![1.0]);
        assert_eq!(v.add(&short).unwrap_err(), RevecError::DimensionMismatch);
        assert_eq!(v.data(), vec![11.0, 22.0]);

        let column = VectorCore::from_values(Order::RowMajor, Orientation::Column, vec![1.0, 1.0])
            .unwrap();
        assert_eq!(v.add(&column).unwrap_err(), RevecError::OrientationMismatch);
        assert_eq!(v.data(), vec![11.0, 22.0]);
    }

    #[test]
    fn test_self_add_doubles() {
        let v = row(vec![1.0, 2.0]);
        let view = v.major_vector(0).unwrap();
        v.add(&view).unwrap();
        assert_eq!(v.data(), vec![2.0, 4.0]);
    }

    #[test]
    fn test_elementwise_mul_div() {
        let v = row(vec![2.0, 9.0]);
        let w = row(vec![3.0, 3.0]);
        v.mul(&w).unwrap();
        assert_eq!(v.data(), vec![6.0, 27.0]);
        v.div(&w).unwrap();
        assert_eq!(v.data(), vec![2.0, 9.0]);
        v.scale(&2.0);
        assert_eq!(v.data(), vec![4.0, 18.0]);
    }

    #[test]
    fn test_alignment_round_trip() {
        let v = row(vec![1.0, 2.0, 3.0]);
        assert!(v.is_aligned());
        assert_eq!(v.data2().len(), 1);
        assert_eq!(v.data2()[0].len(), 3);

        v.transpose();
        assert!(!v.is_aligned());
        let nested = v.data2();
        assert_eq!(nested.len(), 3);
        assert!(nested.iter().all(|line| line.len() == 1));

        v.transpose();
        assert!(v.is_aligned());
        assert_eq!(v.data2().len(), 1);
    }

    #[test]
    fn test_nested_view_is_live() {
        let v = row(vec![1.0, 2.0]);
        let nested = v.data2();
        v[0].set_value(5.0);
        assert_eq!(nested[0][0].peek(), 5.0);
    }

    #[test]
    fn test_set_order_noop_does_not_transpose() {
        let v = row(vec![1.0, 2.0]);
        v.set_order(Order::RowMajor, true);
        assert_eq!(v.orientation(), Orientation::Row);

        v.set_order(Order::ColumnMajor, true);
        assert_eq!(v.orientation(), Orientation::Column);
        assert_eq!(v.order(), Order::ColumnMajor);
        assert!(v.is_aligned());

        v.set_order(Order::RowMajor, false);
        assert_eq!(v.orientation(), Orientation::Column);
        assert!(!v.is_aligned());
    }

    #[test]
    fn test_slicing() {
        let v = row(vec![1.0, 2.0, 3.0]);
        let major = v.major_vector(0).unwrap();
        assert_eq!(major.dimensions(), 3);
        major[0].set_value(9.0);
        assert_eq!(v.value(0).unwrap(), 9.0);
        assert_eq!(v.major_vector(1).unwrap_err(), RevecError::NoSuchMajorLine);

        let minor = v.minor_vector(2).unwrap();
        assert_eq!(minor.dimensions(), 1);
        assert_eq!(minor.orientation(), Orientation::Column);
        assert_eq!(minor.value(0).unwrap(), 3.0);

        // For a row vector, rows address the major line and columns the minors.
        assert_eq!(v.row_vector(0).unwrap().dimensions(), 3);
        assert_eq!(v.column_vector(1).unwrap().value(0).unwrap(), 2.0);
    }

    #[test]
    fn test_resize_pads_and_trims() {
        let mut v = row(vec![1.0, 2.0]);
        v.resize(4, &ValueFactory).unwrap();
        assert_eq!(v.data(), vec![1.0, 2.0, 0.0, 0.0]);
        v.resize(2, &ValueFactory).unwrap();
        assert_eq!(v.data(), vec![1.0, 2.0]);
        assert_eq!(v.resize(0, &ValueFactory).unwrap_err(), RevecError::ZeroDimensions);
    }

    #[test]
    fn test_copy_decoupling() {
        let v = row(vec![1.0, 2.0]);
        let c = v.copy();
        c[0].set_value(100.0);
        assert_eq!(v.value(0).unwrap(), 1.0);
        v[1].set_value(50.0);
        assert_eq!(c.value(1).unwrap(), 2.0);
    }

    #[test]
    fn test_display_and_equality() {
        let v = row(vec![1.0, 2.0]);
        assert_eq!(v.to_string(), "(1, 2)");
        let w = row(vec![1.0, 2.0]);
        assert_eq!(v, w);
        w.transpose();
        assert_ne!(v, w);
    }

    #[test]
    fn test_ordering_by_dimensions_then_elements() {
        let short = row(vec![9.0]);
        let long = row(vec![1.0, 1.0]);
        assert!(short < long);
        let a = row(vec![1.0, 2.0]);
        let b = row(vec![1.0, 3.0]);
        assert!(a < b);
    }

    #[test]
    fn test_exports() {
        let v = row(vec![1.5, 2.5]);
        assert_eq!(v.double_data(), vec![1.5, 2.5]);
        assert_eq!(v.int_data(), vec![1, 2]);
    }

    #[test]
    fn test_norm_matches_manual_sum_randomized() {
        use rand::{Rng, SeedableRng};
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let len = rng.gen_range(1..8);
            let values: Vec<f64> = (0..len).map(|_| rng.gen_range(-10.0..10.0)).collect();
            let v = row(values.clone());
            let expected: f64 = values.iter().map(|x| x * x).sum();
            assert!((v.size_squared() - expected).abs() < 1e-9);
            assert!((v.size() - expected.sqrt()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_operate_on_data2_validates_shape() {
        let v = row(vec![1.0, 2.0]);
        // Aligned: one line of two elements.
        v.operate_on_data2(&[vec![10.0, 20.0]], |a, b| a.add(b)).unwrap();
        assert_eq!(v.data(), vec![11.0, 22.0]);
        assert_eq!(
            v.operate_on_data2(&[vec![1.0]], |a, b| a.add(b)).unwrap_err(),
            RevecError::DimensionMismatch
        );
        assert_eq!(v.data(), vec![11.0, 22.0]);
    }
}
