//! # Operator Sugar Module
//!
//! Implements the standard Rust arithmetic operators for [`CowArray`] on
//! top of the checked kernels in [`crate::kernels::elementwise`].
//!
//! Operators must return a value, so the error path degrades gracefully:
//! a length mismatch is reported on the diagnostic channel and the result
//! is an empty array, leaving both operands untouched. Callers that want
//! the error itself should use the `elementwise_*` kernels directly.
//!
//! ```rust
//! use cowarray::CowArray;
//!
//! let a = CowArray::from(vec![1, 2, 3]);
//! let b = CowArray::from(vec![4, 5, 6]);
//! assert_eq!((&a + &b).as_slice(), &[5, 7, 9]);
//! assert_eq!((&a * 2).as_slice(), &[2, 4, 6]);
//! assert_eq!((10 - &a).as_slice(), &[9, 8, 7]);
//! ```
//!
//! Boolean arrays take the bitwise operators (`|`, `^`, `&`) rather than
//! overloading `+ - *`; the broadcast rules are identical with `false` as
//! the zero element.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Rem, Sub};

use crate::enums::error::ArrayError;
use crate::enums::operators::{ArithmeticOperator, LogicalOperator};
use crate::kernels::elementwise::{
    apply_binary, apply_logical, apply_neg, apply_scalar, apply_scalar_lhs,
};
use crate::structs::cow_array::CowArray;
use crate::traits::type_unions::Numeric;

/// Reports a kernel error on the diagnostic channel and substitutes an
/// empty result, so expression chains keep working in a degraded state.
fn degrade<T>(result: Result<CowArray<T>, ArrayError>) -> CowArray<T> {
    match result {
        Ok(out) => out,
        Err(e) => {
            eprintln!("CowArray operator: {} Yielding an empty result.", e);
            CowArray::new()
        }
    }
}

macro_rules! impl_array_arith_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<T: Numeric> $trait for &CowArray<T> {
            type Output = CowArray<T>;
            #[inline]
            fn $method(self, rhs: Self) -> CowArray<T> {
                degrade(apply_binary($op, self, rhs))
            }
        }

        impl<T: Numeric> $trait for CowArray<T> {
            type Output = CowArray<T>;
            #[inline]
            fn $method(self, rhs: Self) -> CowArray<T> {
                degrade(apply_binary($op, &self, &rhs))
            }
        }

        impl<T: Numeric> $trait<T> for &CowArray<T> {
            type Output = CowArray<T>;
            #[inline]
            fn $method(self, rhs: T) -> CowArray<T> {
                apply_scalar($op, self, rhs)
            }
        }

        impl<T: Numeric> $trait<T> for CowArray<T> {
            type Output = CowArray<T>;
            #[inline]
            fn $method(self, rhs: T) -> CowArray<T> {
                apply_scalar($op, &self, rhs)
            }
        }
    };
}

impl_array_arith_op!(Add, add, ArithmeticOperator::Add);
impl_array_arith_op!(Sub, sub, ArithmeticOperator::Subtract);
impl_array_arith_op!(Mul, mul, ArithmeticOperator::Multiply);
impl_array_arith_op!(Div, div, ArithmeticOperator::Divide);
impl_array_arith_op!(Rem, rem, ArithmeticOperator::Remainder);

// Scalar-on-the-left forms need one impl per primitive, since a blanket
// `impl Add<CowArray<T>> for T` is not expressible.
macro_rules! impl_scalar_lhs_arith {
    ($($t:ty),* $(,)?) => {
        $(
            impl_scalar_lhs_arith!(@one $t, Add, add, ArithmeticOperator::Add);
            impl_scalar_lhs_arith!(@one $t, Sub, sub, ArithmeticOperator::Subtract);
            impl_scalar_lhs_arith!(@one $t, Mul, mul, ArithmeticOperator::Multiply);
            impl_scalar_lhs_arith!(@one $t, Div, div, ArithmeticOperator::Divide);
            impl_scalar_lhs_arith!(@one $t, Rem, rem, ArithmeticOperator::Remainder);
        )*
    };
    (@one $t:ty, $trait:ident, $method:ident, $op:expr) => {
        impl $trait<&CowArray<$t>> for $t {
            type Output = CowArray<$t>;
            #[inline]
            fn $method(self, rhs: &CowArray<$t>) -> CowArray<$t> {
                apply_scalar_lhs($op, self, rhs)
            }
        }

        impl $trait<CowArray<$t>> for $t {
            type Output = CowArray<$t>;
            #[inline]
            fn $method(self, rhs: CowArray<$t>) -> CowArray<$t> {
                apply_scalar_lhs($op, self, &rhs)
            }
        }
    };
}

impl_scalar_lhs_arith!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl<T> Neg for &CowArray<T>
where
    T: Numeric + Neg<Output = T>,
{
    type Output = CowArray<T>;
    #[inline]
    fn neg(self) -> CowArray<T> {
        apply_neg(self)
    }
}

impl<T> Neg for CowArray<T>
where
    T: Numeric + Neg<Output = T>,
{
    type Output = CowArray<T>;
    #[inline]
    fn neg(self) -> CowArray<T> {
        apply_neg(&self)
    }
}

macro_rules! impl_bool_logical_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait for &CowArray<bool> {
            type Output = CowArray<bool>;
            #[inline]
            fn $method(self, rhs: Self) -> CowArray<bool> {
                degrade(apply_logical($op, self, rhs))
            }
        }

        impl $trait for CowArray<bool> {
            type Output = CowArray<bool>;
            #[inline]
            fn $method(self, rhs: Self) -> CowArray<bool> {
                degrade(apply_logical($op, &self, &rhs))
            }
        }
    };
}

impl_bool_logical_op!(BitOr, bitor, LogicalOperator::Or);
impl_bool_logical_op!(BitXor, bitxor, LogicalOperator::Xor);
impl_bool_logical_op!(BitAnd, bitand, LogicalOperator::And);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_array_ops() {
        let a = CowArray::from(vec![10, 20, 30]);
        let b = CowArray::from(vec![1, 2, 3]);
        assert_eq!((&a + &b).as_slice(), &[11, 22, 33]);
        assert_eq!((&a - &b).as_slice(), &[9, 18, 27]);
        assert_eq!((&a * &b).as_slice(), &[10, 40, 90]);
        assert_eq!((&a / &b).as_slice(), &[10, 10, 10]);
        assert_eq!((&a % &b).as_slice(), &[0, 0, 0]);
        assert_eq!((a + b).as_slice(), &[11, 22, 33]);
    }

    #[test]
    fn test_array_scalar_ops() {
        let a = CowArray::from(vec![1.0f64, 2.0, 4.0]);
        assert_eq!((&a + 1.0).as_slice(), &[2.0, 3.0, 5.0]);
        assert_eq!((&a * 2.0).as_slice(), &[2.0, 4.0, 8.0]);
        assert_eq!((8.0 / &a).as_slice(), &[8.0, 4.0, 2.0]);
        assert_eq!((1.0 - a).as_slice(), &[0.0, -1.0, -3.0]);
    }

    #[test]
    fn test_mismatch_degrades_to_empty() {
        let a = CowArray::from(vec![1, 2]);
        let b = CowArray::from(vec![1, 2, 3]);
        let out = &a + &b;
        assert!(out.is_empty());
        assert_eq!(a.as_slice(), &[1, 2]);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_empty_broadcast_through_operators() {
        let empty: CowArray<i32> = CowArray::new();
        let vals = CowArray::from(vec![1, 2, 3]);
        assert_eq!((&empty + &vals).as_slice(), &[1, 2, 3]);
        assert_eq!((&vals - &empty).as_slice(), &[1, 2, 3]);
        assert_eq!((&vals * &empty).as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn test_neg() {
        let a = CowArray::from(vec![1.5f32, -2.5]);
        assert_eq!((-&a).as_slice(), &[-1.5, 2.5]);
        assert_eq!((-a).as_slice(), &[-1.5, 2.5]);
    }

    #[test]
    fn test_bool_bitwise_ops() {
        let a = CowArray::from(vec![true, false, true]);
        let b = CowArray::from(vec![false, false, true]);
        assert_eq!((&a | &b).as_slice(), &[true, false, true]);
        assert_eq!((&a ^ &b).as_slice(), &[true, false, false]);
        assert_eq!((&a & &b).as_slice(), &[false, false, true]);
    }

    #[test]
    fn test_bool_mismatch_degrades() {
        let a = CowArray::from(vec![true]);
        let b = CowArray::from(vec![true, false]);
        assert!((&a | &b).is_empty());
    }

    #[test]
    fn test_operands_survive_shared() {
        let a = CowArray::from(vec![1, 2, 3]);
        let shared = a.clone();
        let _ = &a + &shared;
        assert!(a.ptr_eq(&shared));
        assert_eq!(a.as_slice(), &[1, 2, 3]);
    }
}
