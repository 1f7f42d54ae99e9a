//! # Shape Trait Module
//!
//! Uniform shape reporting for arrays and the scalars they broadcast with.

use crate::enums::shape_dim::ShapeDim;

/// Reports the dimensional shape of a value.
///
/// Arrays report `Rank1(len)`; scalar element types report `Rank0` so that
/// kernel diagnostics can describe both operands of a mixed operation.
pub trait Shape {
    fn shape(&self) -> ShapeDim;
}

macro_rules! impl_scalar_shape {
    ($($t:ty),* $(,)?) => {
        $(
            impl Shape for $t {
                #[inline]
                fn shape(&self) -> ShapeDim {
                    ShapeDim::Rank0
                }
            }
        )*
    };
}

impl_scalar_shape!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, bool);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_shapes() {
        assert_eq!(5i32.shape(), ShapeDim::Rank0);
        assert_eq!(1.5f64.shape(), ShapeDim::Rank0);
        assert_eq!(true.shape(), ShapeDim::Rank0);
    }
}
