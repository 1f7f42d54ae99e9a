use num_traits::Num;

/// Trait for types valid as numeric array elements.
///
/// Useful when specifying `my_fn::<T: Numeric>() {}`.
///
/// Extends and constrains the *num-traits* `Num` implementation to fit the
/// crate's type universe: the elementwise kernels rely on `T::zero()` for
/// empty-operand broadcasting and on the five `Num` operators.
pub trait Numeric: Num + Copy + Default + 'static {}
impl Numeric for f32 {}
impl Numeric for f64 {}
impl Numeric for i8 {}
impl Numeric for i16 {}
impl Numeric for i32 {}
impl Numeric for i64 {}
impl Numeric for u8 {}
impl Numeric for u16 {}
impl Numeric for u32 {}
impl Numeric for u64 {}
