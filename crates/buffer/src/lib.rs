//! Circular buffer with random-access logical cursors.
//!
//! [`RingBuffer`] stores up to `capacity` elements in a backing store of
//! `capacity + 1` slots and exposes them in logical order (oldest first),
//! independent of where they physically wrap. What happens on overflow is
//! chosen at construction through [`OverflowPolicy`]:
//!
//! - [`OverflowPolicy::Evict`]: pushing into a full buffer overwrites the
//!   element at the opposite end.
//! - [`OverflowPolicy::Grow`]: the buffer reallocates at double capacity.
//!
//! [`Cursor`]s address logical positions for `insert`/`erase` and can be
//! turned into index ranges for the generic algorithms in `ringkit_algo`.
//!
//! ```
//! use ringkit_buffer::RingBuffer;
//!
//! let mut rb = RingBuffer::new(5);
//! for v in 1..=5 {
//!     rb.push_back(v);
//! }
//! rb.erase_range(rb.begin() + 1, rb.end() - 1).unwrap();
//! assert_eq!(rb, [1, 5]);
//! ```

mod cursor;
mod error;
mod iter;
mod policy;
mod ring;
#[cfg(feature = "serde")]
mod serde_impl;
mod traits;

pub use cursor::Cursor;
pub use error::BufferError;
pub use iter::{IntoIter, Iter, IterMut};
pub use policy::OverflowPolicy;
pub use ring::RingBuffer;
