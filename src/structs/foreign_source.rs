//! # **ForeignSource Module** - *Externally owned backing memory*
//!
//! Ownership descriptor for array storage that this crate did not allocate:
//! memory-mapped files, buffers lent by another array library over FFI, or
//! any allocation whose lifetime is managed outside the crate.
//!
//! ## Design
//! A `ForeignSource` keeps the external owner alive (type-erased) for as
//! long as any array references the memory, and optionally notifies the
//! creator the moment the last reference goes away. Reference counting is
//! carried by `Arc<ForeignSource>`: arrays wrapping the memory each hold a
//! handle, and the notification fires from `Drop`, which guarantees it runs
//! exactly once, only after every handle is gone.
//!
//! ## Typical use
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use cowarray::{CowArray, ForeignSource};
//!
//! static RELEASED: AtomicUsize = AtomicUsize::new(0);
//!
//! let points: Vec<f32> = vec![0.0, 1.0, 2.0];
//! let arr = CowArray::from_owner_with_detach(points, |_| {
//!     RELEASED.fetch_add(1, Ordering::Relaxed);
//! });
//! let copy = arr.clone();
//! drop(arr);
//! assert_eq!(RELEASED.load(Ordering::Relaxed), 0);
//! drop(copy);
//! assert_eq!(RELEASED.load(Ordering::Relaxed), 1);
//! ```

use std::any::Any;
use std::fmt;

pub(crate) type DetachFn = Box<dyn FnOnce(&ForeignSource) + Send + Sync>;

/// # ForeignSource
///
/// Lifetime anchor for externally owned array memory.
///
/// ## Purpose
/// - Keeps the external owner (a `Vec`, an `Arc<[u8]>`, an mmap handle, a
///   boxed FFI allocation...) alive while arrays view into it.
/// - Delivers a detach notification exactly once, when the last
///   `Arc<ForeignSource>` handle is dropped, so the creator knows no array
///   references remain.
///
/// ## Behaviour
/// - Arrays never mutate foreign memory: any mutating operation on an array
///   backed by a `ForeignSource` first deep-copies into private storage.
/// - The callback receives `&ForeignSource`, from which the owner can be
///   recovered with [`ForeignSource::owner_ref`].
pub struct ForeignSource {
    owner: Box<dyn Any + Send + Sync>,
    on_detach: Option<DetachFn>,
}

impl ForeignSource {
    /// Wraps an external owner with no detach notification.
    pub fn new<O>(owner: O) -> Self
    where
        O: Send + Sync + 'static,
    {
        Self {
            owner: Box::new(owner),
            on_detach: None,
        }
    }

    /// Wraps an external owner and registers a detach callback.
    ///
    /// The callback is invoked exactly once, when the last handle to this
    /// source is released - never before, never twice.
    pub fn with_on_detach<O, F>(owner: O, on_detach: F) -> Self
    where
        O: Send + Sync + 'static,
        F: FnOnce(&ForeignSource) + Send + Sync + 'static,
    {
        Self {
            owner: Box::new(owner),
            on_detach: Some(Box::new(on_detach)),
        }
    }

    pub(crate) fn from_parts(
        owner: Box<dyn Any + Send + Sync>,
        on_detach: Option<DetachFn>,
    ) -> Self {
        Self { owner, on_detach }
    }

    /// Returns the wrapped owner, if it is of type `O`.
    #[inline]
    pub fn owner_ref<O: 'static>(&self) -> Option<&O> {
        self.owner.downcast_ref::<O>()
    }
}

impl Drop for ForeignSource {
    fn drop(&mut self) {
        if let Some(on_detach) = self.on_detach.take() {
            on_detach(self);
        }
    }
}

impl fmt::Debug for ForeignSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignSource")
            .field("has_on_detach", &self.on_detach.is_some())
            .finish_non_exhaustive()
    }
}
