//! Pure validation functions for vector contracts
//!
//! These are the shape and indexing checks shared by all vector types.
//! They are pure functions with no side effects; every mutating operation
//! is expected to run its checks through here *before* touching any
//! element, so a rejected call leaves the value unchanged.

use crate::RevecError;

/// Validate that a dimensionality is acceptable (at least one element)
pub const fn validate_dimensions(size: usize) -> Result<(), RevecError> {
    if size == 0 {
        return Err(RevecError::ZeroDimensions);
    }
    Ok(())
}

/// Validate an element index against a stored dimensionality
pub const fn validate_index(index: usize, dimensions: usize) -> Result<(), RevecError> {
    if index >= dimensions {
        return Err(RevecError::IndexOutOfBounds);
    }
    Ok(())
}

/// Validate a major-line index
///
/// A vector's major axis always collapses to a single line, so the only
/// addressable major index is zero.
pub const fn validate_major_index(index: usize) -> Result<(), RevecError> {
    if index != 0 {
        return Err(RevecError::NoSuchMajorLine);
    }
    Ok(())
}

/// Validate that an operand length matches the current dimensionality
pub const fn validate_same_length(dimensions: usize, operand: usize) -> Result<(), RevecError> {
    if dimensions != operand {
        return Err(RevecError::DimensionMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimensions() {
        assert_eq!(validate_dimensions(1), Ok(()));
        assert_eq!(validate_dimensions(4), Ok(()));
        assert_eq!(validate_dimensions(0), Err(RevecError::ZeroDimensions));
    }

    #[test]
    fn test_validate_index() {
        assert_eq!(validate_index(0, 3), Ok(()));
        assert_eq!(validate_index(2, 3), Ok(()));
        assert_eq!(validate_index(3, 3), Err(RevecError::IndexOutOfBounds));
        assert_eq!(validate_index(0, 0), Err(RevecError::IndexOutOfBounds));
    }

    #[test]
    fn test_validate_major_index() {
        assert_eq!(validate_major_index(0), Ok(()));
        assert_eq!(validate_major_index(1), Err(RevecError::NoSuchMajorLine));
    }

    #[test]
    fn test_validate_same_length() {
        assert_eq!(validate_same_length(3, 3), Ok(()));
        assert_eq!(validate_same_length(3, 2), Err(RevecError::DimensionMismatch));
    }
}
