//! Buffer error types.

/// Errors produced by cursor-addressed buffer operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("position {offset} is out of range for buffer of length {len}")]
    OutOfRange { offset: usize, len: usize },

    #[error("stale cursor: issued at generation {cursor}, buffer is at generation {current}")]
    StaleCursor { cursor: u64, current: u64 },
}
