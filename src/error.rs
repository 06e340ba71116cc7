//! Error types for fallible conversions

use thiserror::Error;

/// Errors produced by the fallible slice conversions.
///
/// The arithmetic API itself is infallible by contract; only the
/// `TryFrom<&[T]>` seam can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LaneError {
    /// Slice length did not match the vector's lane count
    #[error("lane count mismatch: expected {expected}, got {actual}")]
    SizeMismatch {
        /// Required number of elements
        expected: usize,
        /// Number of elements provided
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_mismatch_display() {
        let err = LaneError::SizeMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "lane count mismatch: expected 4, got 3");
    }

    #[test]
    fn error_equality() {
        let a = LaneError::SizeMismatch {
            expected: 2,
            actual: 5,
        };
        let b = LaneError::SizeMismatch {
            expected: 2,
            actual: 5,
        };
        assert_eq!(a, b);
    }
}
