//! Iterators over a ring buffer's logical sequence.

use std::iter::{Chain, FusedIterator};
use std::slice;

use crate::ring::RingBuffer;

/// Borrowing iterator, oldest to newest. Created by [`RingBuffer::iter`].
pub struct Iter<'a, T> {
    store: &'a [Option<T>],
    head: usize,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(store: &'a [Option<T>], head: usize, len: usize) -> Self {
        Self {
            store,
            head,
            front: 0,
            back: len,
        }
    }

    fn slot(&self, offset: usize) -> Option<&'a T> {
        let store: &'a [Option<T>] = self.store;
        store[(self.head + offset) % store.len()].as_ref()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            head: self.head,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.slot(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<&'a T> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.slot(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

type SlotsMut<'a, T> = Chain<slice::IterMut<'a, Option<T>>, slice::IterMut<'a, Option<T>>>;

/// Mutable iterator, oldest to newest. Created by [`RingBuffer::iter_mut`].
pub struct IterMut<'a, T> {
    slots: SlotsMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    /// Splits the live region of `store` into its (at most two) contiguous runs.
    pub(crate) fn new(store: &'a mut [Option<T>], head: usize, len: usize) -> Self {
        let modulus = store.len();
        let (wrapped, from_head) = store.split_at_mut(head);
        let slots = if head + len <= modulus {
            from_head[..len].iter_mut().chain(slice::IterMut::default())
        } else {
            let wrapped_len = head + len - modulus;
            from_head.iter_mut().chain(wrapped[..wrapped_len].iter_mut())
        };
        Self { slots }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.slots.next().and_then(Option::as_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.slots.next_back().and_then(Option::as_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator, oldest to newest.
pub struct IntoIter<T> {
    buffer: RingBuffer<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buffer: RingBuffer<T>) -> Self {
        Self { buffer }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.buffer.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buffer.len(), Some(self.buffer.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.buffer.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
