//! Conversions and formatting at the crate boundary.
//!
//! The trait spellings (`TryFrom`, `FromStr`) reuse the fallible,
//! non-truncating contract; nothing here truncates implicitly. The owned
//! conversions are the only allocating operations in the crate and are gated
//! behind the `alloc` feature.

use core::fmt;
use core::str::FromStr;

use crate::error::CapacityError;
use crate::string::FixedString;

#[cfg(feature = "alloc")]
use alloc::{borrow::Cow, string::String, vec::Vec};

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TryFrom<&[u8]> for FixedString<N> {
    type Error = CapacityError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_bytes(src)
    }
}

impl<const N: usize> TryFrom<&str> for FixedString<N> {
    type Error = CapacityError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::try_from_bytes(src.as_bytes())
    }
}

impl<const N: usize> FromStr for FixedString<N> {
    type Err = CapacityError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::try_from_bytes(src.as_bytes())
    }
}

/// Escaped byte-string form: `b"ab\0cd"` prints as `"ab\x00cd"`. Content may
/// not be UTF-8, so this never assumes it is.
impl<const N: usize> fmt::Debug for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}

/// Lossy text rendering: valid UTF-8 passes through, invalid sequences come
/// out as U+FFFD. Allocation-free, so it works in `no_std` log sinks.
impl<const N: usize> fmt::Display for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;

        let mut rest = self.as_bytes();
        loop {
            match core::str::from_utf8(rest) {
                Ok(tail) => return f.write_str(tail),
                Err(err) => {
                    let (valid, after) = rest.split_at(err.valid_up_to());
                    f.write_str(core::str::from_utf8(valid).unwrap_or(""))?;
                    f.write_char(char::REPLACEMENT_CHARACTER)?;
                    match err.error_len() {
                        Some(skip) => rest = &after[skip..],
                        // Truncated sequence at the end of the content.
                        None => return Ok(()),
                    }
                }
            }
        }
    }
}

#[cfg(feature = "alloc")]
impl<const N: usize> FixedString<N> {
    /// Copies the content into an owned, growable byte vector.
    ///
    /// The result is exactly `as_bytes()` and independent of `self`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Copies the content into an owned `String`, replacing invalid UTF-8
    /// sequences with U+FFFD.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }
}

#[cfg(feature = "alloc")]
impl<const N: usize> From<&FixedString<N>> for Vec<u8> {
    fn from(src: &FixedString<N>) -> Self {
        src.to_vec()
    }
}
