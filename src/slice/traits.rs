use std::cmp::Ordering;

/// Non-mutating editing operations as methods.
///
/// Implemented for `[T]`, so every method is also available on vectors,
/// arrays and boxed slices through auto-deref. Each method delegates to
/// the free function of the same meaning in [`slice`](super), and so
/// has the same guarantees: the receiver is never modified, and an empty
/// result is the absent vector.
///
/// ```
/// use immutable_slice::ImmutableSlice;
///
/// let v = vec![3, 1, 2];
/// assert_eq!(v.sorted().appended(&[4]), [1, 2, 3, 4]);
/// assert_eq!(v, [3, 1, 2]);
/// ```
pub trait ImmutableSlice {
    /// The element type.
    type Item;

    /// The elements of `self` followed by `elems`.
    fn appended(&self, elems: &[Self::Item]) -> Vec<Self::Item>;

    /// `elems` followed by the elements of `self`.
    fn prepended(&self, elems: &[Self::Item]) -> Vec<Self::Item>;

    /// The elements of `self` with `elems` inserted at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the length.
    fn inserted(&self, index: usize, elems: &[Self::Item]) -> Vec<Self::Item>;

    /// The elements of `self` with the range `start..end` replaced by
    /// `elems`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end` is greater than the length.
    fn replaced(&self, start: usize, end: usize, elems: &[Self::Item]) -> Vec<Self::Item>;

    /// The elements of `self` with the range `start..end` removed.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end` is greater than the length.
    fn deleted(&self, start: usize, end: usize) -> Vec<Self::Item>;

    /// The elements of `self` for which `del` returns false.
    fn deleted_if<F>(&self, del: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool;

    /// The elements of `self` with runs of equal elements collapsed.
    fn compacted(&self) -> Vec<Self::Item>
    where
        Self::Item: PartialEq;

    /// The elements of `self` with runs of neighbours related by `eq`
    /// collapsed.
    fn compacted_by<F>(&self, eq: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool;

    /// The elements of `self` in reverse order.
    fn reversed(&self) -> Vec<Self::Item>;

    /// The elements of `self` in ascending order. Not stable.
    fn sorted(&self) -> Vec<Self::Item>
    where
        Self::Item: Ord;

    /// The elements of `self` ordered by `cmp`. Not stable.
    fn sorted_by<F>(&self, cmp: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering;

    /// The elements of `self` ordered by `cmp`, with equal elements kept
    /// in their original order.
    fn stable_sorted_by<F>(&self, cmp: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering;
}

impl<T: Clone> ImmutableSlice for [T] {
    type Item = T;

    fn appended(&self, elems: &[T]) -> Vec<T> {
        super::append(self, elems)
    }

    fn prepended(&self, elems: &[T]) -> Vec<T> {
        super::prepend(self, elems)
    }

    #[track_caller]
    fn inserted(&self, index: usize, elems: &[T]) -> Vec<T> {
        super::insert(self, index, elems)
    }

    #[track_caller]
    fn replaced(&self, start: usize, end: usize, elems: &[T]) -> Vec<T> {
        super::replace(self, start, end, elems)
    }

    #[track_caller]
    fn deleted(&self, start: usize, end: usize) -> Vec<T> {
        super::delete(self, start, end)
    }

    fn deleted_if<F>(&self, del: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        super::delete_func(self, del)
    }

    fn compacted(&self) -> Vec<T>
    where
        T: PartialEq,
    {
        super::compact(self)
    }

    fn compacted_by<F>(&self, eq: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        super::compact_func(self, eq)
    }

    fn reversed(&self) -> Vec<T> {
        super::reverse(self)
    }

    fn sorted(&self) -> Vec<T>
    where
        T: Ord,
    {
        super::sort(self)
    }

    fn sorted_by<F>(&self, cmp: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        super::sort_func(self, cmp)
    }

    fn stable_sorted_by<F>(&self, cmp: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        super::sort_stable_func(self, cmp)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::ImmutableSlice;
    use crate::slice::is_absent;

    #[test]
    fn methods_match_functions() {
        let v = vec![5, 3, 3, 1, 4];

        assert_eq!(v.appended(&[9]), [5, 3, 3, 1, 4, 9]);
        assert_eq!(v.prepended(&[9]), [9, 5, 3, 3, 1, 4]);
        assert_eq!(v.inserted(2, &[7, 8]), [5, 3, 7, 8, 3, 1, 4]);
        assert_eq!(v.replaced(1, 3, &[0]), [5, 0, 1, 4]);
        assert_eq!(v.deleted(1, 4), [5, 4]);
        assert_eq!(v.deleted_if(|&x| x == 3), [5, 1, 4]);
        assert_eq!(v.compacted(), [5, 3, 1, 4]);
        assert_eq!(v.compacted_by(|a, b| (a % 2) == (b % 2)), [5, 4]);
        assert_eq!(v.reversed(), [4, 1, 3, 3, 5]);
        assert_eq!(v.sorted(), [1, 3, 3, 4, 5]);
        assert_eq!(v.sorted_by(|a, b| b.cmp(a)), [5, 4, 3, 3, 1]);

        assert_eq!(v, [5, 3, 3, 1, 4]);
    }

    #[test]
    fn stable_sorted_by_keeps_ties_in_order() {
        let v = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let sorted = v.stable_sorted_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(sorted, [(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn works_on_arrays_and_boxed_slices() {
        let a = [2, 1];
        let b: Box<[i32]> = Box::new([2, 1]);
        assert_eq!(a.sorted(), b.sorted());
        assert!(is_absent(&a.deleted(0, 2)));
        assert!(is_absent(&b.deleted_if(|_| true)));
    }

    #[test]
    fn comparator_may_be_reversed() {
        let v = ["bb", "a", "ccc"];
        let by_len = v.sorted_by(|a, b| match a.len().cmp(&b.len()) {
            Ordering::Equal => a.cmp(b),
            ord => ord.reverse(),
        });
        assert_eq!(by_len, ["ccc", "bb", "a"]);
    }

    #[test]
    #[should_panic(expected = "insertion index (is 3) should be <= len (is 2)")]
    fn inserted_out_of_bounds() {
        [1, 2].inserted(3, &[0]);
    }
}
