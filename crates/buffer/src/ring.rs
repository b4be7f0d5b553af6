use std::ops::Range;

use crate::cursor::Cursor;
use crate::error::BufferError;
use crate::iter::{Iter, IterMut};
use crate::policy::OverflowPolicy;

/// Fixed-capacity circular buffer with an evict-or-grow overflow policy.
///
/// Elements live in a backing store of `capacity + 1` slots. The spare slot
/// keeps a full buffer and an empty buffer distinguishable under the modular
/// head/tail arithmetic: logical element `i` sits in physical slot
/// `(head + i) % (capacity + 1)` and the tail (next free write slot) is
/// always `(head + len) % (capacity + 1)`.
///
/// With [`OverflowPolicy::Evict`] a push into a full buffer overwrites the
/// element at the opposite end. With [`OverflowPolicy::Grow`] the backing
/// store is reallocated at double capacity and nothing is lost.
///
/// Positions handed out as [`Cursor`]s stay valid until the buffer reallocates,
/// is cleared, or moves its front; see [`generation`](Self::generation).
#[derive(Clone)]
pub struct RingBuffer<T> {
    store: Box<[Option<T>]>,
    capacity: usize,
    head: usize,
    len: usize,
    policy: OverflowPolicy,
    generation: u64,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer that evicts when full.
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, OverflowPolicy::Evict)
    }

    /// Create an empty buffer that doubles its capacity instead of evicting.
    pub fn growable(capacity: usize) -> Self {
        Self::with_policy(capacity, OverflowPolicy::Grow)
    }

    /// Create an empty buffer with an explicit overflow policy.
    pub fn with_policy(capacity: usize, policy: OverflowPolicy) -> Self {
        Self {
            store: empty_store(capacity + 1),
            capacity,
            head: 0,
            len: 0,
            policy,
            generation: 0,
        }
    }

    pub(crate) fn from_vec(items: Vec<T>, capacity: usize, policy: OverflowPolicy) -> Self {
        debug_assert!(items.len() <= capacity);
        let len = items.len();
        let mut store: Vec<Option<T>> = Vec::with_capacity(capacity + 1);
        store.extend(items.into_iter().map(Some));
        store.resize_with(capacity + 1, || None);
        Self {
            store: store.into_boxed_slice(),
            capacity,
            head: 0,
            len,
            policy,
            generation: 0,
        }
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the next push would evict (or grow).
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Maximum number of elements the buffer holds before overflowing.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Same as [`capacity`](Self::capacity).
    pub fn max_size(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Counter bumped whenever logical offsets stop naming the same elements:
    /// on growth, on [`clear`](Self::clear), and whenever the front moves
    /// (`push_front`, `pop_front`, eviction from the front).
    ///
    /// Cursors issued under an older generation are rejected.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The element at logical position `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.store[self.physical(index)].as_ref()
    }

    /// Mutable access to the element at logical position `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let slot = self.physical(index);
        self.store[slot].as_mut()
    }

    /// The oldest element, or `None` when empty.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// The newest element, or `None` when empty.
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.len.checked_sub(1).and_then(|last| self.get_mut(last))
    }

    /// Append `value` after the newest element.
    ///
    /// On a full evicting buffer the oldest element is dropped from the front
    /// and returned. Growable buffers never return anything.
    pub fn push_back(&mut self, value: T) -> Option<T> {
        if self.is_full() && self.policy == OverflowPolicy::Grow {
            self.grow_with(self.len, value);
            return None;
        }

        let tail = self.tail();
        self.store[tail] = Some(value);
        if self.len < self.capacity {
            self.len += 1;
            return None;
        }

        let evicted = self.store[self.head].take();
        self.head = self.next_slot(self.head);
        self.bump_generation();
        tracing::trace!(capacity = self.capacity, "evicted front element");
        evicted
    }

    /// Prepend `value` before the oldest element.
    ///
    /// On a full evicting buffer the newest element is dropped from the back
    /// and returned.
    pub fn push_front(&mut self, value: T) -> Option<T> {
        if self.is_full() && self.policy == OverflowPolicy::Grow {
            self.grow_with(0, value);
            return None;
        }

        self.head = self.prev_slot(self.head);
        self.store[self.head] = Some(value);
        self.bump_generation();
        if self.len < self.capacity {
            self.len += 1;
            return None;
        }

        // The write consumed the spare slot; logical position `len` is the
        // old back.
        let last = self.physical(self.len);
        let evicted = self.store[last].take();
        tracing::trace!(capacity = self.capacity, "evicted back element");
        evicted
    }

    /// Remove and return the newest element.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let tail = self.tail();
        self.store[tail].take()
    }

    /// Remove and return the oldest element.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.store[self.head].take();
        self.head = self.next_slot(self.head);
        self.len -= 1;
        self.bump_generation();
        value
    }

    /// Cursor at the oldest element.
    pub fn begin(&self) -> Cursor {
        Cursor::new(self.generation, 0)
    }

    /// Cursor one past the newest element.
    pub fn end(&self) -> Cursor {
        Cursor::new(self.generation, self.len)
    }

    /// Cursor at logical `offset` in the current generation.
    pub fn cursor(&self, offset: usize) -> Cursor {
        Cursor::new(self.generation, offset)
    }

    /// The element under `cursor`.
    pub fn at(&self, cursor: Cursor) -> Result<&T, BufferError> {
        self.check_generation(cursor)?;
        let len = self.len;
        self.get(cursor.offset()).ok_or(BufferError::OutOfRange {
            offset: cursor.offset(),
            len,
        })
    }

    pub fn at_mut(&mut self, cursor: Cursor) -> Result<&mut T, BufferError> {
        self.check_generation(cursor)?;
        let len = self.len;
        self.get_mut(cursor.offset()).ok_or(BufferError::OutOfRange {
            offset: cursor.offset(),
            len,
        })
    }

    /// Logical index range spanned by the cursor pair `[first, last)`.
    ///
    /// Feed the result to any `ringkit_algo` function to run it on a
    /// sub-sequence. A `first` past `last` yields an empty range.
    pub fn range(&self, first: Cursor, last: Cursor) -> Result<Range<usize>, BufferError> {
        self.check_generation(first)?;
        self.check_generation(last)?;
        let end = last.offset();
        if end > self.len {
            return Err(BufferError::OutOfRange {
                offset: end,
                len: self.len,
            });
        }
        Ok(first.offset().min(end)..end)
    }

    /// Insert `value` so that it ends up at `position`.
    ///
    /// Inserting at [`begin`](Self::begin) behaves like
    /// [`push_front`](Self::push_front). Anywhere else the elements from
    /// `position` to the back shift one slot towards the back; if the buffer
    /// was full and evicts, the oldest element is then dropped from the front.
    /// Returns a cursor to the inserted element, valid in the buffer's new
    /// generation.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`] if `position` lies after [`end`](Self::end),
    /// [`BufferError::StaleCursor`] if `position` predates the current generation.
    pub fn insert(&mut self, position: Cursor, value: T) -> Result<Cursor, BufferError> {
        self.check_generation(position)?;
        let offset = position.offset();
        if offset > self.len {
            return Err(BufferError::OutOfRange {
                offset,
                len: self.len,
            });
        }

        if offset == 0 {
            self.push_front(value);
            return Ok(self.begin());
        }

        if self.is_full() && self.policy == OverflowPolicy::Grow {
            self.grow_with(offset, value);
            return Ok(self.cursor(offset));
        }

        let tail = self.tail();
        self.store[tail] = Some(value);
        for i in (offset..self.len).rev() {
            let (a, b) = (self.physical(i), self.physical(i + 1));
            self.store.swap(a, b);
        }

        if self.len < self.capacity {
            self.len += 1;
            return Ok(self.cursor(offset));
        }

        self.store[self.head] = None;
        self.head = self.next_slot(self.head);
        self.bump_generation();
        tracing::trace!(capacity = self.capacity, "evicted front element on insert");
        Ok(self.cursor(offset - 1))
    }

    /// Remove the element at logical `index`, shifting later elements forward.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let slot = self.physical(index);
        let value = self.store[slot].take();
        for i in index..self.len - 1 {
            let (a, b) = (self.physical(i), self.physical(i + 1));
            self.store.swap(a, b);
        }
        self.len -= 1;
        value
    }

    /// Remove the element under `position`.
    ///
    /// Returns a cursor to the element that followed it, or [`end`](Self::end).
    /// A `position` at or past the end (including any position in an empty
    /// buffer) is a no-op that returns `end`.
    pub fn erase(&mut self, position: Cursor) -> Result<Cursor, BufferError> {
        self.check_generation(position)?;
        match self.remove(position.offset()) {
            Some(_) => Ok(position),
            None => Ok(self.end()),
        }
    }

    /// Remove the half-open logical range `[first, last)`.
    ///
    /// A `last` beyond the end is clamped to the end. An empty or reversed
    /// range is a no-op that returns [`end`](Self::end). Otherwise returns a
    /// cursor to the element now at `first`.
    pub fn erase_range(&mut self, first: Cursor, last: Cursor) -> Result<Cursor, BufferError> {
        self.check_generation(first)?;
        self.check_generation(last)?;

        let start = first.offset();
        let end = last.offset().min(self.len);
        if start >= end {
            return Ok(self.end());
        }

        let count = end - start;
        for i in start..end {
            let slot = self.physical(i);
            self.store[slot] = None;
        }
        for i in end..self.len {
            let (a, b) = (self.physical(i - count), self.physical(i));
            self.store.swap(a, b);
        }
        self.len -= count;
        Ok(first)
    }

    /// Drop every element. Capacity and policy are kept.
    pub fn clear(&mut self) {
        for i in 0..self.len {
            let slot = self.physical(i);
            self.store[slot] = None;
        }
        self.head = 0;
        self.len = 0;
        self.bump_generation();
        tracing::trace!(capacity = self.capacity, "ring buffer cleared");
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.store, self.head, self.len)
    }

    /// Mutably iterate from oldest to newest.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.store, self.head, self.len)
    }

    /// Sort the whole buffer in place through its logical positions.
    pub fn sort_unstable(&mut self)
    where
        T: Ord,
    {
        let len = self.len;
        ringkit_algo::sort_unstable(self, 0..len);
    }

    pub fn sort_unstable_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        let len = self.len;
        ringkit_algo::sort_unstable_by(self, 0..len, compare);
    }

    /// Reverse the logical order in place.
    pub fn reverse(&mut self) {
        let len = self.len;
        ringkit_algo::reverse(self, 0..len);
    }

    pub fn is_sorted(&self) -> bool
    where
        T: PartialOrd,
    {
        ringkit_algo::is_sorted(self, 0..self.len)
    }

    pub(crate) fn swap_logical(&mut self, a: usize, b: usize) {
        assert!(
            a < self.len && b < self.len,
            "swap positions ({a}, {b}) out of bounds for ring buffer of length {}",
            self.len
        );
        let (a, b) = (self.physical(a), self.physical(b));
        self.store.swap(a, b);
    }

    /// Reallocate at the grown capacity, placing `value` at logical `offset`.
    ///
    /// Elements land in logical order starting at physical slot 0.
    fn grow_with(&mut self, offset: usize, value: T) {
        let old_capacity = self.capacity;
        let new_capacity = OverflowPolicy::grown_capacity(old_capacity);

        let mut store: Vec<Option<T>> = Vec::with_capacity(new_capacity + 1);
        let mut value = Some(value);
        for i in 0..self.len {
            if i == offset {
                store.push(value.take());
            }
            let slot = self.physical(i);
            store.push(self.store[slot].take());
        }
        if value.is_some() {
            store.push(value);
        }
        store.resize_with(new_capacity + 1, || None);

        self.store = store.into_boxed_slice();
        self.capacity = new_capacity;
        self.head = 0;
        self.len += 1;
        self.bump_generation();
        tracing::debug!(old_capacity, new_capacity, len = self.len, "ring buffer grown");
    }

    fn check_generation(&self, cursor: Cursor) -> Result<(), BufferError> {
        if cursor.generation() != self.generation {
            return Err(BufferError::StaleCursor {
                cursor: cursor.generation(),
                current: self.generation,
            });
        }
        Ok(())
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn physical(&self, offset: usize) -> usize {
        (self.head + offset) % self.store.len()
    }

    fn tail(&self) -> usize {
        self.physical(self.len)
    }

    fn next_slot(&self, slot: usize) -> usize {
        (slot + 1) % self.store.len()
    }

    fn prev_slot(&self, slot: usize) -> usize {
        (slot + self.store.len() - 1) % self.store.len()
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Create a full buffer holding `capacity` copies of `value`.
    pub fn from_elem(capacity: usize, value: T, policy: OverflowPolicy) -> Self {
        Self::from_vec(vec![value; capacity], capacity, policy)
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

fn empty_store<T>(slots: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(slots).collect()
}
