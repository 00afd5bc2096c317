//! `serde` support for [`ImmArray`](crate::ImmArray).
//!
//! - **Serialize**: as a sequence of elements.
//! - **Deserialize**: from any sequence, into a freshly allocated array.

use std::{fmt, marker::PhantomData, mem};

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

use crate::ImmArray;

impl<T: Serialize> Serialize for ImmArray<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

/// Upper bound on what a claimed sequence length may pre-allocate.
const MAX_PREALLOC_BYTES: usize = 1024 * 1024;

struct ImmArrayVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for ImmArrayVisitor<T> {
    type Value = ImmArray<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let cap = a
            .size_hint()
            .unwrap_or(0)
            .min(MAX_PREALLOC_BYTES / mem::size_of::<T>().max(1));
        let mut items = Vec::with_capacity(cap);
        while let Some(item) = a.next_element::<T>()? {
            items.push(item);
        }
        Ok(ImmArray::from(items))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ImmArray<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ImmArrayVisitor(PhantomData))
    }
}
