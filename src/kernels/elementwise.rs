//! # Elementwise Kernels Module
//!
//! Elementwise arithmetic over [`CowArray`] operands, with empty-operand
//! broadcasting and scalar expansion.
//!
//! These are the checked entry points: they report shape problems as
//! [`ArrayError`] values. The `std::ops` operator sugar in
//! [`crate::kernels::ops`] is built on top of them.
//!
//! ## Broadcasting rules
//! - Two operands of equal length combine pairwise.
//! - An *empty* operand stands in for an array of zeros of the other
//!   operand's length. Layered value systems use this to express "no
//!   override" without materialising a zero buffer.
//! - Two non-empty operands of different lengths are a length mismatch.
//!
//! ```rust
//! use cowarray::{CowArray, elementwise_add};
//!
//! let empty: CowArray<i32> = CowArray::new();
//! let vals = CowArray::from(vec![1, 2, 3]);
//! let out = elementwise_add(&empty, &vals).unwrap();
//! assert_eq!(out.as_slice(), &[1, 2, 3]);
//! ```

use num_traits::Zero;

use crate::enums::error::ArrayError;
use crate::enums::operators::{ArithmeticOperator, LogicalOperator};
use crate::structs::cow_array::CowArray;
use crate::traits::shape::Shape;
use crate::traits::type_unions::Numeric;

/// Applies `op` pairwise over `lhs` and `rhs`.
///
/// An empty operand broadcasts as zeros of the other operand's length;
/// mismatched non-empty lengths are an error. Note that with integer
/// elements, division or remainder by zero panics - including by zeros
/// produced by an empty divisor.
pub fn apply_binary<T: Numeric>(
    op: ArithmeticOperator,
    lhs: &CowArray<T>,
    rhs: &CowArray<T>,
) -> Result<CowArray<T>, ArrayError> {
    if !lhs.is_empty() && !rhs.is_empty() && lhs.len() != rhs.len() {
        return Err(ArrayError::LengthMismatch {
            op: op.symbol(),
            left: Shape::shape(lhs),
            right: Shape::shape(rhs),
        });
    }
    let out = if lhs.is_empty() && rhs.is_empty() {
        CowArray::new()
    } else if lhs.is_empty() {
        rhs.iter().map(|&r| op.apply(T::zero(), r)).collect()
    } else if rhs.is_empty() {
        lhs.iter().map(|&l| op.apply(l, T::zero())).collect()
    } else {
        lhs.iter()
            .zip(rhs.iter())
            .map(|(&l, &r)| op.apply(l, r))
            .collect()
    };
    Ok(out)
}

/// Applies `op` between every element of `lhs` and the scalar `rhs`.
#[inline]
pub fn apply_scalar<T: Numeric>(
    op: ArithmeticOperator,
    lhs: &CowArray<T>,
    rhs: T,
) -> CowArray<T> {
    lhs.iter().map(|&l| op.apply(l, rhs)).collect()
}

/// Applies `op` between the scalar `lhs` and every element of `rhs`.
#[inline]
pub fn apply_scalar_lhs<T: Numeric>(
    op: ArithmeticOperator,
    lhs: T,
    rhs: &CowArray<T>,
) -> CowArray<T> {
    rhs.iter().map(|&r| op.apply(lhs, r)).collect()
}

/// Applies `op` pairwise over two boolean arrays, broadcasting an empty
/// operand as all-`false`.
pub fn apply_logical(
    op: LogicalOperator,
    lhs: &CowArray<bool>,
    rhs: &CowArray<bool>,
) -> Result<CowArray<bool>, ArrayError> {
    if !lhs.is_empty() && !rhs.is_empty() && lhs.len() != rhs.len() {
        return Err(ArrayError::LengthMismatch {
            op: op.symbol(),
            left: Shape::shape(lhs),
            right: Shape::shape(rhs),
        });
    }
    let out = if lhs.is_empty() && rhs.is_empty() {
        CowArray::new()
    } else if lhs.is_empty() {
        rhs.iter().map(|&r| op.apply(false, r)).collect()
    } else if rhs.is_empty() {
        lhs.iter().map(|&l| op.apply(l, false)).collect()
    } else {
        lhs.iter()
            .zip(rhs.iter())
            .map(|(&l, &r)| op.apply(l, r))
            .collect()
    };
    Ok(out)
}

/// Elementwise negation.
#[inline]
pub fn apply_neg<T>(arr: &CowArray<T>) -> CowArray<T>
where
    T: Numeric + std::ops::Neg<Output = T>,
{
    arr.iter().map(|&v| -v).collect()
}

/// Elementwise addition: `lhs + rhs`.
///
/// # Errors
/// Returns [`ArrayError::LengthMismatch`] for non-empty operands of
/// different lengths.
#[inline]
pub fn elementwise_add<T: Numeric>(
    lhs: &CowArray<T>,
    rhs: &CowArray<T>,
) -> Result<CowArray<T>, ArrayError> {
    apply_binary(ArithmeticOperator::Add, lhs, rhs)
}

/// Elementwise subtraction: `lhs - rhs`.
///
/// # Errors
/// Returns [`ArrayError::LengthMismatch`] for non-empty operands of
/// different lengths.
#[inline]
pub fn elementwise_sub<T: Numeric>(
    lhs: &CowArray<T>,
    rhs: &CowArray<T>,
) -> Result<CowArray<T>, ArrayError> {
    apply_binary(ArithmeticOperator::Subtract, lhs, rhs)
}

/// Elementwise multiplication: `lhs * rhs`.
///
/// # Errors
/// Returns [`ArrayError::LengthMismatch`] for non-empty operands of
/// different lengths.
#[inline]
pub fn elementwise_mul<T: Numeric>(
    lhs: &CowArray<T>,
    rhs: &CowArray<T>,
) -> Result<CowArray<T>, ArrayError> {
    apply_binary(ArithmeticOperator::Multiply, lhs, rhs)
}

/// Elementwise division: `lhs / rhs`.
///
/// Integer division by zero panics, as with the native operator.
///
/// # Errors
/// Returns [`ArrayError::LengthMismatch`] for non-empty operands of
/// different lengths.
#[inline]
pub fn elementwise_div<T: Numeric>(
    lhs: &CowArray<T>,
    rhs: &CowArray<T>,
) -> Result<CowArray<T>, ArrayError> {
    apply_binary(ArithmeticOperator::Divide, lhs, rhs)
}

/// Elementwise remainder: `lhs % rhs`.
///
/// Integer remainder by zero panics, as with the native operator.
///
/// # Errors
/// Returns [`ArrayError::LengthMismatch`] for non-empty operands of
/// different lengths.
#[inline]
pub fn elementwise_rem<T: Numeric>(
    lhs: &CowArray<T>,
    rhs: &CowArray<T>,
) -> Result<CowArray<T>, ArrayError> {
    apply_binary(ArithmeticOperator::Remainder, lhs, rhs)
}

/// Elementwise boolean OR.
#[inline]
pub fn elementwise_or(
    lhs: &CowArray<bool>,
    rhs: &CowArray<bool>,
) -> Result<CowArray<bool>, ArrayError> {
    apply_logical(LogicalOperator::Or, lhs, rhs)
}

/// Elementwise boolean XOR.
#[inline]
pub fn elementwise_xor(
    lhs: &CowArray<bool>,
    rhs: &CowArray<bool>,
) -> Result<CowArray<bool>, ArrayError> {
    apply_logical(LogicalOperator::Xor, lhs, rhs)
}

/// Elementwise boolean AND.
#[inline]
pub fn elementwise_and(
    lhs: &CowArray<bool>,
    rhs: &CowArray<bool>,
) -> Result<CowArray<bool>, ArrayError> {
    apply_logical(LogicalOperator::And, lhs, rhs)
}

/// Elementwise negation of every element.
#[inline]
pub fn elementwise_neg<T>(arr: &CowArray<T>) -> CowArray<T>
where
    T: Numeric + std::ops::Neg<Output = T>,
{
    apply_neg(arr)
}
