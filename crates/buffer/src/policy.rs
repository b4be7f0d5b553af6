/// What a buffer does when a push or insert arrives while it is full.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverflowPolicy {
    /// Overwrite the element at the opposite end of the write.
    #[default]
    Evict,
    /// Reallocate to a larger backing store and keep every element.
    Grow,
}

impl OverflowPolicy {
    /// Capacity after one growth step from `capacity`.
    ///
    /// Doubles, with an empty buffer growing to a single slot.
    pub fn grown_capacity(capacity: usize) -> usize {
        capacity.saturating_mul(2).max(1)
    }
}
