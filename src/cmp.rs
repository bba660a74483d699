// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content-only total order.
//!
//! Every comparison here looks at `as_bytes()` and nothing else: bytes past
//! the current length are never inspected, so two strings with equal content
//! compare equal no matter what their spare capacity once held. Ordering is
//! plain lexicographic byte order (a strict prefix sorts first), which makes
//! the type usable as a `BTreeMap`/`BTreeSet` key. `Hash` feeds the same
//! content view, keeping it consistent with `Eq`.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::string::FixedString;

impl<const N: usize> PartialEq for FixedString<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for FixedString<N> {}

impl<const N: usize> Ord for FixedString<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl<const N: usize> PartialOrd for FixedString<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Hash for FixedString<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

// Content comparisons against plain byte and str views, so call sites can
// compare without constructing a second fixed string.

impl<const N: usize> PartialEq<[u8]> for FixedString<N> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<&[u8]> for FixedString<N> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<str> for FixedString<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for FixedString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<FixedString<N>> for [u8] {
    fn eq(&self, other: &FixedString<N>) -> bool {
        self == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<FixedString<N>> for str {
    fn eq(&self, other: &FixedString<N>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
