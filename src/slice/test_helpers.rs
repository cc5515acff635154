use std::mem;

use super::is_absent;

// Route `tracing` records through `log` so `RUST_LOG=trace` shows them.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn byte_range<T>(s: &[T]) -> (usize, usize) {
    let start = s.as_ptr() as usize;
    (start, start + s.len() * mem::size_of::<T>())
}

/// Do the buffers behind `a` and `b` overlap?
pub fn shares_storage<T>(a: &[T], b: &[T]) -> bool {
    let (a_start, a_end) = byte_range(a);
    let (b_start, b_end) = byte_range(b);
    a_start < b_end && b_start < a_end
}

/// Checks the shape every result must have: absent when empty, otherwise
/// disjoint from each input.
pub fn check_result<T>(output: &Vec<T>, inputs: &[&[T]]) -> bool {
    if output.is_empty() {
        return is_absent(output);
    }
    inputs.iter().all(|input| !shares_storage(output, input))
}
