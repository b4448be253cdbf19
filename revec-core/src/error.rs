//! Error types for reactive vector operations

/// Broad classification of a [`RevecError`]
///
/// Every error belongs to exactly one category. Callers that only care
/// about the kind of contract violation (rather than the specific
/// invariant) can dispatch on this instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A malformed or incompatible argument was passed
    InvalidArgument,
    /// The operation is not legal in the value's current state
    InvalidState,
    /// An index addressed a non-existent element or line
    Indexing,
}

/// Errors that can occur during cell and vector operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevecError {
    /// A vector must have at least one dimension
    ZeroDimensions,
    /// Operand dimensionality does not match this vector
    DimensionMismatch,
    /// Operand orientation does not match this vector
    OrientationMismatch,
    /// Element index beyond the stored dimensionality
    IndexOutOfBounds,
    /// A vector's major axis has exactly one line; any other major index
    /// addresses nothing
    NoSuchMajorLine,
    /// Homogeneous add/subtract requires a Relative operand (trailing
    /// coordinate zero)
    OperandNotRelative,
    /// A matrix product produced a trailing coordinate that violates the
    /// vector's Absolute/Relative invariant
    TrailingInvariant,
    /// Absolute homogeneous vectors (points) cannot be scaled
    AbsoluteNotScalable,
    /// A rational number cannot have a zero denominator
    ZeroDenominator,
    /// A matrix operand was not square or did not match the vector size
    MatrixShape,
}

impl RevecError {
    /// Classify this error into its broad category
    pub const fn category(&self) -> ErrorCategory {
        match self {
            RevecError::ZeroDimensions
            | RevecError::DimensionMismatch
            | RevecError::OrientationMismatch
            | RevecError::OperandNotRelative
            | RevecError::TrailingInvariant
            | RevecError::ZeroDenominator
            | RevecError::MatrixShape => ErrorCategory::InvalidArgument,
            RevecError::AbsoluteNotScalable => ErrorCategory::InvalidState,
            RevecError::IndexOutOfBounds | RevecError::NoSuchMajorLine => ErrorCategory::Indexing,
        }
    }
}

impl core::fmt::Display for RevecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            RevecError::ZeroDimensions => "Vector dimensionality must be at least one",
            RevecError::DimensionMismatch => "Operand dimensionality mismatch",
            RevecError::OrientationMismatch => "Operand orientation mismatch",
            RevecError::IndexOutOfBounds => "Index out of bounds",
            RevecError::NoSuchMajorLine => "No such major line",
            RevecError::OperandNotRelative => "Operand is not a relative (directional) vector",
            RevecError::TrailingInvariant => "Result violates the homogeneous trailing coordinate",
            RevecError::AbsoluteNotScalable => "Absolute homogeneous vectors cannot be scaled",
            RevecError::ZeroDenominator => "Zero denominator",
            RevecError::MatrixShape => "Matrix shape mismatch",
        };
        write!(f, "{msg}")
    }
}

/// Result type for reactive vector operations
pub type Result<T> = core::result::Result<T, RevecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            RevecError::DimensionMismatch.category(),
            ErrorCategory::InvalidArgument
        );
        assert_eq!(
            RevecError::AbsoluteNotScalable.category(),
            ErrorCategory::InvalidState
        );
        assert_eq!(
            RevecError::NoSuchMajorLine.category(),
            ErrorCategory::Indexing
        );
        assert_eq!(
            RevecError::IndexOutOfBounds.category(),
            ErrorCategory::Indexing
        );
    }
}
