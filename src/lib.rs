//! # **cowarray** — *Copy-on-write typed arrays*
//!
//! Reference-counted, copy-on-write array containers for pipelines where
//! large buffers - geometry points, topology indices, selection sets,
//! per-element attributes - are copied far more often than they are
//! mutated.
//!
//! ## Core ideas
//! - [`CowArray<T>`] copies in O(1): clones share one buffer and only the
//!   first mutation of a sharing handle pays for a copy.
//! - Read access (`as_slice`, `iter`, indexing through `Deref`) never
//!   copies; every copy is confined to the `&mut self` surface.
//! - [`ForeignSource`] wraps memory owned elsewhere (mmap regions, FFI
//!   buffers) zero-copy, with an exactly-once notification when the last
//!   array reference goes away.
//! - Elementwise `+ - * / %` with empty-operand broadcasting, as checked
//!   kernels ([`elementwise_add`] and friends) or as plain operators that
//!   degrade to an empty result on shape errors.
//!
//! ## Quickstart
//! ```rust
//! use cowarray::{CowArray, cowarray};
//!
//! let indices: CowArray<u32> = cowarray![0, 1, 2, 2, 3, 0];
//! let shared = indices.clone();            // O(1), no element copy
//! assert!(indices.ptr_eq(&shared));
//!
//! let mut remapped = shared.clone();
//! remapped.as_mut_slice()[0] = 4;          // detaches; the others are untouched
//! assert_eq!(indices[0], 0);
//!
//! let offsets = &indices + 10u32;          // elementwise, scalar broadcast
//! assert_eq!(offsets.as_slice(), &[10, 11, 12, 12, 13, 10]);
//! ```
//!
//! ## Feature flags
//! - `parallel_proc`: parallel iterators over array elements via *Rayon*.

pub mod enums {
    pub mod error;
    pub mod operators;
    pub mod shape_dim;
}

pub mod structs {
    pub mod cow_array;
    pub mod foreign_source;
}

pub mod kernels {
    pub mod elementwise;
    pub mod ops;
}

pub mod traits {
    pub mod print;
    pub mod shape;
    pub mod type_unions;
}

pub mod macros;

pub use enums::error::ArrayError;
pub use enums::operators::{ArithmeticOperator, LogicalOperator};
pub use enums::shape_dim::ShapeDim;
pub use kernels::elementwise::{
    elementwise_add, elementwise_and, elementwise_div, elementwise_mul, elementwise_neg,
    elementwise_or, elementwise_rem, elementwise_sub, elementwise_xor,
};
pub use structs::cow_array::CowArray;
pub use structs::foreign_source::ForeignSource;
pub use traits::print::Print;
pub use traits::shape::Shape;
pub use traits::type_unions::Numeric;
