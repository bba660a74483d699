// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Serde support, enabled by the `serde` feature.
//!
//! Serialization emits the content bytes. Deserialization takes the fallible
//! posture of [`try_assign`](crate::FixedString::try_assign): input longer
//! than the capacity is an error, never a truncation. Formats that represent
//! bytes as sequences (serde_json among them) land in `visit_seq`, which
//! fills a stack buffer and never allocates.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::string::FixedString;

impl<const N: usize> Serialize for FixedString<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

struct FixedStringVisitor<const N: usize>(PhantomData<FixedString<N>>);

impl<'de, const N: usize> Visitor<'de> for FixedStringVisitor<N> {
    type Value = FixedString<N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at most {} bytes", N)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        FixedString::try_from_bytes(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        self.visit_bytes(v.as_bytes())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut buf = [0u8; N];
        let mut len = 0usize;
        while let Some(byte) = seq.next_element::<u8>()? {
            if len == N {
                return Err(de::Error::invalid_length(len + 1, &self));
            }
            buf[len] = byte;
            len += 1;
        }
        FixedString::try_from_bytes(&buf[..len]).map_err(de::Error::custom)
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedString<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(FixedStringVisitor(PhantomData))
    }
}
