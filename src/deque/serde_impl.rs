//! `serde` support: a [`RingDeque`] is a plain sequence in front-to-back order.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use super::RingDeque;

/// Upper bound on the capacity pre-allocated from an untrusted length hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for RingDeque<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

struct RingDequeVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for RingDequeVisitor<T> {
    type Value = RingDeque<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let hint = seq.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut deque = RingDeque::with_capacity(hint);
        while let Some(item) = seq.next_element()? {
            deque.push_back(item);
        }
        Ok(deque)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RingDeque<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(RingDequeVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_wrapped_deque_is_logical_sequence() {
        let mut d: RingDeque<i32> = RingDeque::with_capacity(4);
        d.push_back(2);
        d.push_back(3);
        d.push_front(1);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "[1,2,3]");

        let back: RingDeque<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        assert_eq!(back.capacity(), 4);
    }

    #[test]
    fn test_serde_rejects_non_sequence() {
        let err = serde_json::from_str::<RingDeque<i32>>("{\"a\":1}").unwrap_err();
        assert!(err.to_string().contains("a sequence"));
    }
}
