//! Fixed-arity and resizable vector wrappers
//!
//! Thin composition wrappers over [`VectorCore`]: each asserts its arity
//! at construction and exposes named accessors as direct index reads.
//! Only [`VectorR`] can change dimensionality after construction.

use revec_core::{
    validate_same_length, CellFactory, CellValue, Result, ScalarCell, ValueFactory,
};

use crate::axis::{Order, Orientation};
use crate::homogeneous::{HomogeneousKind, HomogeneousVector};
use crate::vector::VectorCore;

macro_rules! forward_common {
    () => {
        /// The wrapped core vector
        pub fn core(&self) -> &VectorCore<T> {
            &self.core
        }

        /// Unwrap into the core vector
        pub fn into_core(self) -> VectorCore<T> {
            self.core
        }

        /// Number of stored elements
        pub fn dimensions(&self) -> usize {
            self.core.dimensions()
        }

        /// Euclidean norm
        pub fn size(&self) -> f64 {
            self.core.size()
        }

        /// The cell at a flat index
        pub fn element(&self, index: usize) -> Result<&ScalarCell<T>> {
            self.core.element(index)
        }
    };
}

macro_rules! named_accessor {
    ($get:ident, $set:ident, $index:expr) => {
        #[doc = concat!("The `", stringify!($get), "` component")]
        pub fn $get(&self) -> T {
            self.core[$index].peek()
        }

        #[doc = concat!("Overwrite the `", stringify!($get), "` component")]
        pub fn $set(&self, value: T) {
            self.core[$index].set_value(value);
        }
    };
}

/// A two-dimensional vector
#[derive(Debug)]
pub struct Vector2<T: CellValue + 'static> {
    core: VectorCore<T>,
}

impl<T: CellValue + 'static> Vector2<T> {
    /// Build a row vector from components
    pub fn new(x: T, y: T) -> Self {
        Self {
            // Two explicit values; construction cannot fail.
            core: VectorCore::from_cells(
                vec![ScalarCell::new(x), ScalarCell::new(y)],
                Order::RowMajor,
                Orientation::Row,
            ),
        }
    }

    /// Adopt a core vector, asserting its arity
    pub fn from_core(core: VectorCore<T>) -> Result<Self> {
        validate_same_length(2, core.dimensions())?;
        Ok(Self { core })
    }

    forward_common!();
    named_accessor!(x, set_x, 0);
    named_accessor!(y, set_y, 1);
}

/// A three-dimensional vector
pub struct Vector3<T: CellValue + 'static> {
    core: VectorCore<T>,
}

impl<T: CellValue + 'static> Vector3<T> {
    /// Build a row vector from components
    pub fn new(x: T, y: T, z: T) -> Self {
        Self {
            core: VectorCore::from_cells(
                vec![ScalarCell::new(x), ScalarCell::new(y), ScalarCell::new(z)],
                Order::RowMajor,
                Orientation::Row,
            ),
        }
    }

    /// Adopt a core vector, asserting its arity
    pub fn from_core(core: VectorCore<T>) -> Result<Self> {
        validate_same_length(3, core.dimensions())?;
        Ok(Self { core })
    }

    forward_common!();
    named_accessor!(x, set_x, 0);
    named_accessor!(y, set_y, 1);
    named_accessor!(z, set_z, 2);
}

/// A four-dimensional vector
pub struct Vector4<T: CellValue + 'static> {
    core: VectorCore<T>,
}

impl<T: CellValue + 'static> Vector4<T> {
    /// Build a row vector from components
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            core: VectorCore::from_cells(
                vec![
                    ScalarCell::new(x),
                    ScalarCell::new(y),
                    ScalarCell::new(z),
                    ScalarCell::new(w),
                ],
                Order::RowMajor,
                Orientation::Row,
            ),
        }
    }

    /// Adopt a core vector, asserting its arity
    pub fn from_core(core: VectorCore<T>) -> Result<Self> {
        validate_same_length(4, core.dimensions())?;
        Ok(Self { core })
    }

    forward_common!();
    named_accessor!(x, set_x, 0);
    named_accessor!(y, set_y, 1);
    named_accessor!(z, set_z, 2);
    named_accessor!(w, set_w, 3);
}

/// An arbitrary fixed-arity vector
///
/// The declared arity is checked at construction and never changes.
pub struct VectorN<T: CellValue + 'static> {
    core: VectorCore<T>,
    arity: usize,
}

impl<T: CellValue + 'static> VectorN<T> {
    /// Adopt a core vector under a declared arity
    pub fn new(arity: usize, core: VectorCore<T>) -> Result<Self> {
        validate_same_length(arity, core.dimensions())?;
        Ok(Self { core, arity })
    }

    /// The declared arity
    pub fn arity(&self) -> usize {
        self.arity
    }

    forward_common!();
}

/// The resizable vector: the only variant whose dimensionality can change
pub struct VectorR<T: CellValue + 'static> {
    core: VectorCore<T>,
}

impl<T: CellValue + 'static> VectorR<T> {
    /// Adopt a core vector of any dimensionality
    pub fn new(core: VectorCore<T>) -> Self {
        Self { core }
    }

    /// Resize with zero-valued default cells
    pub fn resize(&mut self, size: usize) -> Result<()> {
        self.core.resize(size, &ValueFactory)
    }

    /// Resize, building any new cells through a factory
    pub fn resize_with(&mut self, size: usize, factory: &impl CellFactory<T>) -> Result<()> {
        self.core.resize(size, factory)
    }

    forward_common!();
}

/// A two-dimensional homogeneous vector (stored size three)
pub struct HVector2<T: CellValue + 'static> {
    inner: HomogeneousVector<T>,
}

impl<T: CellValue + 'static> HVector2<T> {
    /// Build from positional components
    pub fn new(kind: HomogeneousKind, x: T, y: T) -> Self {
        let core = VectorCore::from_cells(
            vec![
                ScalarCell::new(x),
                ScalarCell::new(y),
                ScalarCell::new(kind.trailing_value()),
            ],
            Order::RowMajor,
            Orientation::Row,
        );
        Self {
            inner: HomogeneousVector::from_parts(kind, core),
        }
    }

    /// Adopt a decorator, asserting its projected arity
    pub fn from_homogeneous(inner: HomogeneousVector<T>) -> Result<Self> {
        validate_same_length(2, inner.projected_dimensions())?;
        Ok(Self { inner })
    }

    /// The wrapped decorator
    pub fn homogeneous(&self) -> &HomogeneousVector<T> {
        &self.inner
    }

    /// The `x` component
    pub fn x(&self) -> T {
        self.inner.core()[0].peek()
    }

    /// The `y` component
    pub fn y(&self) -> T {
        self.inner.core()[1].peek()
    }
}

/// A three-dimensional homogeneous vector (stored size four)
pub struct HVector3<T: CellValue + 'static> {
    inner: HomogeneousVector<T>,
}

impl<T: CellValue + 'static> HVector3<T> {
    /// Build from positional components
    pub fn new(kind: HomogeneousKind, x: T, y: T, z: T) -> Self {
        let core = VectorCore::from_cells(
            vec![
                ScalarCell::new(x),
                ScalarCell::new(y),
                ScalarCell::new(z),
                ScalarCell::new(kind.trailing_value()),
            ],
            Order::RowMajor,
            Orientation::Row,
        );
        Self {
            inner: HomogeneousVector::from_parts(kind, core),
        }
    }

    /// Adopt a decorator, asserting its projected arity
    pub fn from_homogeneous(inner: HomogeneousVector<T>) -> Result<Self> {
        validate_same_length(3, inner.projected_dimensions())?;
        Ok(Self { inner })
    }

    /// The wrapped decorator
    pub fn homogeneous(&self) -> &HomogeneousVector<T> {
        &self.inner
    }

    /// The `x` component
    pub fn x(&self) -> T {
        self.inner.core()[0].peek()
    }

    /// The `y` component
    pub fn y(&self) -> T {
        self.inner.core()[1].peek()
    }

    /// The `z` component
    pub fn z(&self) -> T {
        self.inner.core()[2].peek()
    }
}

/// A four-dimensional homogeneous vector (stored size five)
#[derive(Debug)]
pub struct HVector4<T: CellValue + 'static> {
    inner: HomogeneousVector<T>,
}

impl<T: CellValue + 'static> HVector4<T> {
    /// Build from positional components
    pub fn new(kind: HomogeneousKind, x: T, y: T, z: T, w: T) -> Self {
        let core = VectorCore::from_cells(
            vec![
                ScalarCell::new(x),
                ScalarCell::new(y),
                ScalarCell::new(z),
                ScalarCell::new(w),
                ScalarCell::new(kind.trailing_value()),
            ],
            Order::RowMajor,
            Orientation::Row,
        );
        Self {
            inner: HomogeneousVector::from_parts(kind, core),
        }
    }

    /// Adopt a decorator, asserting its projected arity
    pub fn from_homogeneous(inner: HomogeneousVector<T>) -> Result<Self> {
        validate_same_length(4, inner.projected_dimensions())?;
        Ok(Self { inner })
    }

    /// The wrapped decorator
    pub fn homogeneous(&self) -> &HomogeneousVector<T> {
        &self.inner
    }

    /// The `x` component
    pub fn x(&self) -> T {
        self.inner.core()[0].peek()
    }

    /// The `y` component
    pub fn y(&self) -> T {
        self.inner.core()[1].peek()
    }

    /// The `z` component
    pub fn z(&self) -> T {
        self.inner.core()[2].peek()
    }

    /// The `w` component
    pub fn w(&self) -> T {
        self.inner.core()[3].peek()
    }
}
