//! Logical positions into a [`RingBuffer`](crate::RingBuffer).
//!
//! A [`Cursor`] is a plain value: the logical offset from the front of the
//! buffer plus the buffer generation it was issued in. It borrows nothing,
//! so it can be held across mutations; the buffer rejects it with
//! [`BufferError::StaleCursor`](crate::BufferError::StaleCursor) once the
//! mapping from offsets to elements has changed (growth, `clear`, or any
//! operation that moves the front).
//!
//! Arithmetic and comparison work on the logical offset only, so two cursors
//! of the same generation order consistently no matter where the elements
//! physically wrap around in the backing store.

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A random-access position in a ring buffer's logical sequence.
///
/// Ordering compares the generation first, then the offset; cursors of one
/// generation therefore order by offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cursor {
    generation: u64,
    offset: usize,
}

impl Cursor {
    pub(crate) fn new(generation: u64, offset: usize) -> Self {
        Self { generation, offset }
    }

    /// Logical offset from the front of the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Buffer generation this cursor belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Signed logical distance from `origin` to `self`.
    pub fn offset_from(self, origin: Cursor) -> isize {
        debug_assert_eq!(
            self.generation, origin.generation,
            "distance between cursors of different generations"
        );
        if self.offset >= origin.offset {
            (self.offset - origin.offset) as isize
        } else {
            -((origin.offset - self.offset) as isize)
        }
    }
}

impl Add<usize> for Cursor {
    type Output = Cursor;

    fn add(self, n: usize) -> Cursor {
        Cursor::new(self.generation, self.offset + n)
    }
}

impl AddAssign<usize> for Cursor {
    fn add_assign(&mut self, n: usize) {
        self.offset += n;
    }
}

impl Sub<usize> for Cursor {
    type Output = Cursor;

    /// # Panics
    ///
    /// Panics if the result would sit before the first element.
    #[track_caller]
    fn sub(self, n: usize) -> Cursor {
        match self.offset.checked_sub(n) {
            Some(offset) => Cursor::new(self.generation, offset),
            None => panic!(
                "cursor at offset {} moved {n} positions before the front",
                self.offset
            ),
        }
    }
}

impl SubAssign<usize> for Cursor {
    #[track_caller]
    fn sub_assign(&mut self, n: usize) {
        *self = *self - n;
    }
}

impl Sub<Cursor> for Cursor {
    type Output = isize;

    fn sub(self, origin: Cursor) -> isize {
        self.offset_from(origin)
    }
}
