//! Standard trait implementations for [`RingBuffer`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use ringkit_algo::RandomAccess;

use crate::iter::{IntoIter, Iter, IterMut};
use crate::policy::OverflowPolicy;
use crate::ring::RingBuffer;

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "index {index} out of bounds for ring buffer of length {}",
                self.len()
            ),
        }
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!("index {index} out of bounds for ring buffer of length {len}"),
        }
    }
}

impl<T> RandomAccess for RingBuffer<T> {
    type Item = T;

    fn len(&self) -> usize {
        RingBuffer::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap_at(&mut self, a: usize, b: usize) {
        self.swap_logical(a, b);
    }
}

/// Equality is by logical content: capacity, policy and physical layout are
/// ignored.
impl<T, U> PartialEq<RingBuffer<U>> for RingBuffer<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &RingBuffer<U>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<T, U> PartialEq<[U]> for RingBuffer<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T, U> PartialEq<&[U]> for RingBuffer<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        *self == **other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for RingBuffer<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        *self == other[..]
    }
}

impl<T, U> PartialEq<Vec<U>> for RingBuffer<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        *self == other[..]
    }
}

impl<T: Hash> Hash for RingBuffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// Collects into an evicting buffer sized exactly to the items.
impl<T> FromIterator<T> for RingBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vec::from_iter(iter).into()
    }
}

impl<T> From<Vec<T>> for RingBuffer<T> {
    fn from(items: Vec<T>) -> Self {
        let capacity = items.len();
        RingBuffer::from_vec(items, capacity, OverflowPolicy::Evict)
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
