//! # ImmArray
//! Copy-on-write array operations for code that treats arrays as immutable
//! values.
//!
//! Every operation that looks like a mutation (`set`, `splice`, `push`,
//! `pop`, `shift`, `unshift`, `move_item`, `map`, `filter`, `flatten`)
//! returns a new [`ImmArray`] and leaves its input alone. When an operation
//! would not change anything, it hands back the *same* array instead of an
//! equal copy. That makes [`ImmArray::ptr_eq`] a reliable change signal for
//! state-management layers that skip work when nothing moved.
//!
//! ```
//! # use imm_array::ImmArray;
//! # use assert2::assert;
//! let before = ImmArray::from(vec![1, 2, 3]);
//!
//! let same = before.set(1, 2);
//! assert!(ImmArray::ptr_eq(&before, &same));
//!
//! let after = before.set(1, 20);
//! assert!(!ImmArray::ptr_eq(&before, &after));
//! assert!(after == [1, 20, 3]);
//! assert!(before == [1, 2, 3]);
//! ```
//!
//! ## Internal Representation
//! An `ImmArray<T>` is a handle to an `Arc<[T]>`. Cloning the handle is cheap
//! and keeps its identity. There is no structural sharing between versions:
//! a change copies the whole slice once.
//!
//! ## Permissive indexing
//! Indices are never validated. An index past the end clamps to the end, the
//! same way slicing and concatenating would. For instance `set` with an index
//! past the end appends the value.

#[macro_use]
mod log;
mod imm_array;

#[cfg(feature = "serde")]
mod serde;

pub use crate::imm_array::*;
