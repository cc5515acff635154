//! Non-mutating slice operations.
//!
//! Every function here borrows its inputs and returns a fresh `Vec`. The
//! inputs are never modified, and a non-empty result always lives in a
//! buffer allocated by the call, so it can be freely mutated without
//! affecting any input.
//!
//! A result with no elements is always the *absent* vector, `Vec::new()`,
//! which owns no allocation at all. Use [`is_absent`] to test for it.
//!
//! ```
//! use immutable_slice::slice;
//!
//! let s = vec![1, 2, 9, 8, 5];
//! let r = slice::replace(&s, 2, 4, &[3, 4]);
//!
//! assert_eq!(r, [1, 2, 3, 4, 5]);
//! assert_eq!(s, [1, 2, 9, 8, 5]);
//!
//! assert!(slice::is_absent(&slice::delete(&s, 0, s.len())));
//! ```
//!
//! # Panics
//!
//! Index arguments are contracts, not conditions to recover from. An
//! out-of-range index, a range whose start is past its end, or a total
//! length beyond [`max_len`] panics before anything is allocated.
//!
//! # Shallow copies
//!
//! Elements are copied with `Clone`. For handle types such as `Rc` this
//! copies the handle, so the pointee is shared between input and output.

use std::cmp::Ordering;
use std::mem;

use tracing::trace;

use crate::internal::contract;

mod traits;
pub use self::traits::ImmutableSlice;

#[cfg(test)]
mod test_helpers;

const TARGET: &str = "immutable_slice::slice";

/// Is `v` the absent vector, i.e., empty and owning no allocation?
///
/// Every operation in this module returns an absent vector when its result
/// has no elements. Vectors of a zero-sized type never allocate, so any
/// empty one of those counts.
///
/// ```
/// use immutable_slice::slice::is_absent;
///
/// assert!(is_absent(&Vec::<u8>::new()));
/// assert!(!is_absent(&Vec::<u8>::with_capacity(4)));
/// assert!(!is_absent(&vec![1u8]));
/// ```
#[allow(clippy::ptr_arg)]
pub fn is_absent<T>(v: &Vec<T>) -> bool {
    v.is_empty() && (v.capacity() == 0 || mem::size_of::<T>() == 0)
}

/// The largest number of elements a result of type `T` may hold.
///
/// This is the allocation limit of `Vec<T>`: `isize::MAX` bytes, or
/// `usize::MAX` elements for zero-sized types.
pub fn max_len<T>() -> usize {
    match mem::size_of::<T>() {
        0 => usize::MAX,
        size => isize::MAX as usize / size,
    }
}

#[inline]
fn absent<T>() -> Vec<T> {
    trace!(target: TARGET, "result is empty; returning absent vector");
    Vec::new()
}

#[inline]
fn fresh<T>(len: usize) -> Vec<T> {
    trace!(target: TARGET, len, "allocating result buffer");
    Vec::with_capacity(len)
}

/// Creates a new vector holding the elements of `s` followed by `elems`.
///
/// Shorthand for `concat(&[s, elems])`.
pub fn append<T: Clone>(s: &[T], elems: &[T]) -> Vec<T> {
    concat(&[s, elems])
}

/// Creates a new vector holding `elems` followed by the elements of `s`.
///
/// Shorthand for `concat(&[elems, s])`.
pub fn prepend<T: Clone>(s: &[T], elems: &[T]) -> Vec<T> {
    concat(&[elems, s])
}

/// Creates a new vector holding the elements of every slice in `slices`, in
/// order.
///
/// Returns the absent vector, without allocating, when the slices hold no
/// elements between them.
///
/// # Panics
///
/// Panics if the total length exceeds [`max_len`].
///
/// ```
/// use immutable_slice::slice::concat;
///
/// let v = concat(&[&[1, 2, 3][..], &[][..], &[8, 9, 10][..]]);
/// assert_eq!(v, [1, 2, 3, 8, 9, 10]);
/// ```
pub fn concat<T: Clone>(slices: &[&[T]]) -> Vec<T> {
    let limit = max_len::<T>();
    let mut size: usize = 0;
    for s in slices {
        size = match size.checked_add(s.len()) {
            Some(size) if size <= limit => size,
            _ => contract::len_overflow(limit),
        };
    }

    if size == 0 {
        return absent();
    }

    let mut output = fresh(size);
    for s in slices {
        output.extend_from_slice(s);
    }
    output
}

/// Creates a new vector with `elems` inserted into `s` at `index`.
///
/// # Panics
///
/// Panics if `index > s.len()`.
#[track_caller]
pub fn insert<T: Clone>(s: &[T], index: usize, elems: &[T]) -> Vec<T> {
    contract::check_insert(index, s.len());
    concat(&[&s[..index], elems, &s[index..]])
}

/// Creates a new vector with the elements of `s[start..end]` replaced by
/// `elems`.
///
/// This covers insertion (`start == end`) and deletion (`elems` empty).
///
/// # Panics
///
/// Panics if `start > end` or `end > s.len()`.
#[track_caller]
pub fn replace<T: Clone>(s: &[T], start: usize, end: usize, elems: &[T]) -> Vec<T> {
    contract::check_range(start, end, s.len());
    concat(&[&s[..start], elems, &s[end..]])
}

/// Creates a new vector with the elements of `s[start..end]` removed.
///
/// An empty range still produces a copy of `s` rather than something that
/// could share its storage. Removing everything produces the absent
/// vector.
///
/// # Panics
///
/// Panics if `start > end` or `end > s.len()`, even when the range is
/// empty.
#[track_caller]
pub fn delete<T: Clone>(s: &[T], start: usize, end: usize) -> Vec<T> {
    contract::check_range(start, end, s.len());

    if start == end {
        return copy_of(s);
    }

    let len = s.len();
    if start == 0 && end == len {
        return absent();
    }

    let mut output = fresh(len - (end - start));
    if start == 0 {
        output.extend_from_slice(&s[end..]);
    } else if end == len {
        output.extend_from_slice(&s[..start]);
    } else {
        output.extend_from_slice(&s[..start]);
        output.extend_from_slice(&s[end..]);
    }
    output
}

/// Creates a new vector holding the elements of `s` for which `del`
/// returns false, in their original order.
///
/// `del` is called exactly once per element, front to back.
pub fn delete_func<T, F>(s: &[T], mut del: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    if s.is_empty() {
        return absent();
    }

    let mut output = fresh(s.len());
    for v in s {
        if !del(v) {
            output.push(v.clone());
        }
    }

    if output.is_empty() {
        return absent();
    }
    output
}

/// Creates a new vector in which each run of consecutive equal elements of
/// `s` is replaced by the first element of the run.
///
/// ```
/// use immutable_slice::slice::compact;
///
/// assert_eq!(compact(&[1, 1, 1, 2, 3, 3, 4, 5, 5, 5]), [1, 2, 3, 4, 5]);
/// ```
pub fn compact<T: Clone + PartialEq>(s: &[T]) -> Vec<T> {
    compact_func(s, |a, b| a == b)
}

/// Like [`compact`], but uses `eq` to decide whether two neighbours belong
/// to the same run.
///
/// `eq(current, previous)` is asked about each element and the element
/// just before it in `s`. A run continues for as long as neighbours
/// compare equal, so `a, b, c` with `a ~ b` and `b ~ c` collapses to `a`
/// whatever `eq` says about `a` and `c`.
pub fn compact_func<T, F>(s: &[T], mut eq: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let (first, rest) = match s.split_first() {
        Some(split) => split,
        None => return absent(),
    };

    let mut output = fresh(s.len());
    output.push(first.clone());
    for (previous, current) in s.iter().zip(rest) {
        if !eq(current, previous) {
            output.push(current.clone());
        }
    }
    output
}

/// Creates a new vector holding the elements of `s` in reverse order.
pub fn reverse<T: Clone>(s: &[T]) -> Vec<T> {
    if s.is_empty() {
        return absent();
    }

    let mut output = fresh(s.len());
    output.extend(s.iter().rev().cloned());
    output
}

/// Creates a sorted copy of `s`.
///
/// The sort is not stable.
pub fn sort<T: Clone + Ord>(s: &[T]) -> Vec<T> {
    let mut output = copy_of(s);
    output.sort_unstable();
    output
}

/// Creates a copy of `s` sorted by the comparator `cmp`.
///
/// The sort is not stable. If `cmp` is not a total order the resulting
/// order is unspecified.
pub fn sort_func<T, F>(s: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut output = copy_of(s);
    output.sort_unstable_by(cmp);
    output
}

/// Creates a copy of `s` sorted by the comparator `cmp`, keeping elements
/// that compare equal in their original order.
pub fn sort_stable_func<T, F>(s: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut output = copy_of(s);
    output.sort_by(cmp);
    output
}

fn copy_of<T: Clone>(s: &[T]) -> Vec<T> {
    if s.is_empty() {
        return absent();
    }

    let mut output = fresh(s.len());
    output.extend_from_slice(s);
    output
}
