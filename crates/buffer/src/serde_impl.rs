//! Serde support, enabled with the `serde` feature.
//!
//! A buffer serializes as `{ "capacity": .., "policy": .., "items": [..] }`
//! with `items` in logical order, so the physical layout never leaks into
//! the wire form.

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::policy::OverflowPolicy;
use crate::ring::RingBuffer;

struct Items<'a, T>(&'a RingBuffer<T>);

impl<T: Serialize> Serialize for Items<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<T: Serialize> Serialize for RingBuffer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RingBuffer", 3)?;
        state.serialize_field("capacity", &self.capacity())?;
        state.serialize_field("policy", &self.policy())?;
        state.serialize_field("items", &Items(self))?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "RingBuffer")]
struct Repr<T> {
    capacity: usize,
    #[serde(default)]
    policy: OverflowPolicy,
    items: Vec<T>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RingBuffer<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = Repr::<T>::deserialize(deserializer)?;
        if repr.items.len() > repr.capacity {
            return Err(D::Error::custom(format!(
                "{} items exceed capacity {}",
                repr.items.len(),
                repr.capacity
            )));
        }
        Ok(RingBuffer::from_vec(repr.items, repr.capacity, repr.policy))
    }
}
