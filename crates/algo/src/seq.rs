/// A sequence addressable by logical position.
///
/// Positions run from `0` to `len() - 1` regardless of how the elements are
/// laid out in memory. Implementations must panic on out-of-bounds access.
pub trait RandomAccess {
    /// Element type.
    type Item;

    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    /// Whether the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at logical position `index`.
    fn at(&self, index: usize) -> &Self::Item;

    /// Swaps the elements at logical positions `a` and `b`.
    fn swap_at(&mut self, a: usize, b: usize);
}

impl<T> RandomAccess for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap_at(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

impl<T> RandomAccess for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap_at(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_positions_match_indexing() {
        let mut values = [10, 20, 30];
        let seq: &mut [i32] = &mut values;

        assert_eq!(RandomAccess::len(seq), 3);
        assert_eq!(*seq.at(1), 20);

        seq.swap_at(0, 2);
        assert_eq!(values, [30, 20, 10]);
    }

    #[test]
    fn empty_vec_is_empty() {
        let v: Vec<u8> = Vec::new();
        assert!(RandomAccess::is_empty(&v));
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_panics() {
        let v = vec![1];
        let _ = v.at(1);
    }
}
