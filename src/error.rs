//! Error types for numvec operations

use thiserror::Error;

/// Result type for numvec operations
pub type Result<T> = std::result::Result<T, VectorError>;

/// Errors that can occur during vector construction and arithmetic
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VectorError {
    /// Factory was handed an empty sequence
    #[error("Empty vector is not allowed")]
    EmptyVector,

    /// Operation is undefined on an empty vector (mean, max, min)
    #[error("Cannot compute {operation} of empty vector")]
    EmptyInput {
        /// Name of the rejected operation
        operation: &'static str,
    },

    /// Length mismatch between operands
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length of the first operand
        expected: usize,
        /// Length of the offending operand
        actual: usize,
    },

    /// Normalizing a vector whose Euclidean norm is zero
    #[error("Cannot normalize zero vector")]
    ZeroNorm,

    /// Elementwise division by a zero divisor
    #[error("Division by zero at index {index}")]
    DivideByZero {
        /// First index holding a zero divisor
        index: usize,
    },

    /// Cosine similarity with a zero-norm operand
    #[error("Cosine similarity undefined for zero vector")]
    UndefinedSimilarity,

    /// Variadic add called with fewer than two vectors
    #[error("Need at least two vectors, got {got}")]
    InsufficientOperands {
        /// Number of vectors supplied
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vector_error() {
        let err = VectorError::EmptyVector;
        assert_eq!(err.to_string(), "Empty vector is not allowed");
    }

    #[test]
    fn test_empty_input_error() {
        let err = VectorError::EmptyInput { operation: "mean" };
        assert_eq!(err.to_string(), "Cannot compute mean of empty vector");
    }

    #[test]
    fn test_length_mismatch_error() {
        let err = VectorError::LengthMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "Length mismatch: expected 3, got 2");
    }

    #[test]
    fn test_zero_norm_error() {
        assert_eq!(VectorError::ZeroNorm.to_string(), "Cannot normalize zero vector");
    }

    #[test]
    fn test_divide_by_zero_error() {
        let err = VectorError::DivideByZero { index: 1 };
        assert_eq!(err.to_string(), "Division by zero at index 1");
    }

    #[test]
    fn test_undefined_similarity_error() {
        assert_eq!(
            VectorError::UndefinedSimilarity.to_string(),
            "Cosine similarity undefined for zero vector"
        );
    }

    #[test]
    fn test_insufficient_operands_error() {
        let err = VectorError::InsufficientOperands { got: 1 };
        assert_eq!(err.to_string(), "Need at least two vectors, got 1");
    }

    #[test]
    fn test_error_equality() {
        let err1 = VectorError::LengthMismatch {
            expected: 10,
            actual: 5,
        };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
        assert_ne!(err1, VectorError::ZeroNorm);
    }

    #[test]
    fn test_construction_and_arithmetic_errors_are_distinct() {
        assert_ne!(
            VectorError::EmptyVector,
            VectorError::EmptyInput { operation: "max" }
        );
    }
}
