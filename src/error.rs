//! The one observable runtime failure: input longer than capacity.

use core::fmt;

/// Returned by the fallible, non-truncating paths when the input does not
/// fit. The receiver of a failed assignment is guaranteed untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    len: usize,
    capacity: usize,
}

impl CapacityError {
    pub(crate) const fn new(len: usize, capacity: usize) -> Self {
        Self { len, capacity }
    }

    /// Length of the rejected input, in bytes.
    pub const fn input_len(&self) -> usize {
        self.len
    }

    /// Capacity of the string that rejected it.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input of {} bytes exceeds string capacity of {}",
            self.len, self.capacity
        )
    }
}

impl core::error::Error for CapacityError {}
