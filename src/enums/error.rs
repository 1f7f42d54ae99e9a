//! # Error Module - Custom *Cowarray* Error Type
//!
//! Defines the unified error type for the crate.
//!
//! ## Features
//! - Covers shape mismatches in elementwise kernels.
//! - Implements `Display` for readable output and `Error` for integration
//! with standard Rust error handling.

use std::error::Error;
use std::fmt;

use crate::enums::shape_dim::ShapeDim;

/// Catch all error type for `cowarray`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Two non-empty operands of an elementwise operation had different
    /// lengths. Empty operands broadcast instead of erroring.
    LengthMismatch {
        op: &'static str,
        left: ShapeDim,
        right: ShapeDim,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::LengthMismatch { op, left, right } => {
                write!(
                    f,
                    "Length mismatch in elementwise '{}': left operand has {}, right operand has {}.",
                    op, left, right
                )
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let err = ArrayError::LengthMismatch {
            op: "+",
            left: ShapeDim::Rank1(2),
            right: ShapeDim::Rank1(3),
        };
        let msg = err.to_string();
        assert!(msg.contains('+'));
        assert!(msg.contains("2 values"));
        assert!(msg.contains("3 values"));
    }
}
