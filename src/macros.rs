//! # Macros Module
//!
//! Constructor convenience macros.

/// Creates a [`CowArray`](crate::CowArray) from a list of elements, in the
/// style of `vec!`.
///
/// ```rust
/// use cowarray::{CowArray, cowarray};
///
/// let a = cowarray![1, 2, 3];
/// assert_eq!(a.as_slice(), &[1, 2, 3]);
///
/// let b = cowarray![0u8; 4];
/// assert_eq!(b.as_slice(), &[0, 0, 0, 0]);
///
/// let c: CowArray<f32> = cowarray![];
/// assert!(c.is_empty());
/// ```
#[macro_export]
macro_rules! cowarray {
    () => {
        $crate::CowArray::new()
    };
    ($value:expr; $n:expr) => {
        $crate::CowArray::fill($value, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::CowArray::from(vec![$($x),+])
    };
}
