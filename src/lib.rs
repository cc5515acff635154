//! Non-mutating variants of the common slice editing operations.
//!
//! The standard `Vec` and slice methods for inserting, deleting,
//! compacting, reversing and sorting all work in place. This crate offers
//! the same operations as functions that leave their inputs alone:
//!
//!   - the inputs are borrowed and never modified;
//!   - a non-empty result is always in a freshly allocated buffer, so it
//!     never shares storage with an input; and
//!   - an empty result is always the *absent* vector, `Vec::new()`, which
//!     owns no allocation (see [`slice::is_absent`]).
//!
//! The operations are available as [free functions](slice/index.html) and,
//! for single-input operations, as methods of the
//! [`ImmutableSlice`](slice/trait.ImmutableSlice.html) extension trait.
//!
//! # Usage
//!
//! ```toml
//! [dependencies]
//! immutable-slice = "0.1.0"
//! ```
//!
//! ```rust
//! use immutable_slice::{slice, ImmutableSlice};
//!
//! let s = vec![1, 2, 3, 4, 5];
//!
//! assert_eq!(slice::delete_func(&s, |x| x % 2 == 0), [1, 3, 5]);
//! assert_eq!(s.reversed(), [5, 4, 3, 2, 1]);
//! assert_eq!(s, [1, 2, 3, 4, 5]);
//! ```
//!
//! # Panics
//!
//! Out-of-range indices are programming errors. They panic, as slice
//! indexing does, and never produce a partial result.
//!
//! # Diagnostics
//!
//! Allocations and contract violations are reported through `tracing`
//! (and `log`, through its `log` feature) at the `trace` and `debug`
//! levels. The crate never installs a subscriber.

#![warn(missing_docs)]

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

mod internal;

pub mod slice;
pub use slice::{is_absent, ImmutableSlice};
