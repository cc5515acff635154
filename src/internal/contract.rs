//! Panics for caller errors.
//!
//! These are reported before any output buffer is allocated, so a failed
//! call leaves nothing behind.

use tracing::debug;

const TARGET: &str = "immutable_slice::contract";

/// Checks that `[start, end)` is a valid range into a slice of length `len`.
#[inline]
#[track_caller]
pub fn check_range(start: usize, end: usize, len: usize) {
    if start > end {
        range_order_fail(start, end);
    }
    if end > len {
        range_end_fail(end, len);
    }
}

/// Checks that `index` is a valid insertion point for a slice of length `len`.
#[inline]
#[track_caller]
pub fn check_insert(index: usize, len: usize) {
    if index > len {
        insert_index_fail(index, len);
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn range_order_fail(start: usize, end: usize) -> ! {
    debug!(target: TARGET, start, end, "range start is past range end");
    panic!("slice index starts at {} but ends at {}", start, end);
}

#[cold]
#[inline(never)]
#[track_caller]
fn range_end_fail(end: usize, len: usize) -> ! {
    debug!(target: TARGET, end, len, "range end is out of bounds");
    panic!(
        "range end index {} out of range for slice of length {}",
        end, len
    );
}

#[cold]
#[inline(never)]
#[track_caller]
fn insert_index_fail(index: usize, len: usize) -> ! {
    debug!(target: TARGET, index, len, "insertion index is out of bounds");
    panic!(
        "insertion index (is {}) should be <= len (is {})",
        index, len
    );
}

#[cold]
#[inline(never)]
#[track_caller]
pub fn len_overflow(limit: usize) -> ! {
    debug!(target: TARGET, limit, "total length exceeds the largest allocatable length");
    panic!("concat: total length overflow");
}
