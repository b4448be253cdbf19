//! Storage order and vector orientation
//!
//! A vector carries two independent representation axes: the [`Order`] in
//! which its flat storage maps onto nested rows/columns, and the
//! [`Orientation`] saying whether it is conceptually a row or a column.
//! The two meet in [`Orientation::associated_order`]: when a vector's
//! order matches its orientation's associated order, the nested view
//! collapses to a single major line.

/// Linearization convention for nested access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Order {
    RowMajor,
    ColumnMajor,
}

impl Order {
    /// The opposite convention
    pub const fn other(&self) -> Order {
        match self {
            Order::RowMajor => Order::ColumnMajor,
            Order::ColumnMajor => Order::RowMajor,
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Order::RowMajor => "row-major",
            Order::ColumnMajor => "column-major",
        };
        write!(f, "{name}")
    }
}

/// Whether a vector is conceptually a row or a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Row,
    Column,
}

impl Orientation {
    /// The order under which this orientation collapses to one major line
    pub const fn associated_order(&self) -> Order {
        match self {
            Orientation::Row => Order::RowMajor,
            Orientation::Column => Order::ColumnMajor,
        }
    }

    /// The transposed orientation
    pub const fn other(&self) -> Orientation {
        match self {
            Orientation::Row => Orientation::Column,
            Orientation::Column => Orientation::Row,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Orientation::Row => "row",
            Orientation::Column => "column",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_involutive() {
        assert_eq!(Order::RowMajor.other().other(), Order::RowMajor);
        assert_eq!(Orientation::Row.other().other(), Orientation::Row);
    }

    #[test]
    fn test_associated_order() {
        assert_eq!(Orientation::Row.associated_order(), Order::RowMajor);
        assert_eq!(Orientation::Column.associated_order(), Order::ColumnMajor);
        assert_eq!(
            Orientation::Row.other().associated_order(),
            Order::RowMajor.other()
        );
    }
}
