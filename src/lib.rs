//! Fixed-capacity, stack-allocated strings.
//!
//! This crate provides [`FixedString<N>`], a string whose capacity is baked
//! into the type and whose storage lives inline. No heap, no growth, no
//! hidden allocation: the type is built for hard-real-time and embedded
//! code, and its `repr(C)` layout makes it safe to place in shared memory
//! between processes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  string.rs  │────▶│   cmp.rs     │     │  convert.rs  │
//! │ (FixedString│     │ (content-only│     │ (TryFrom,    │
//! │  construct/ │     │  total order)│     │  Display,    │
//! │  assign)    │     │              │     │  Vec/String) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  error.rs   │
//! │(CapacityErr)│
//! └─────────────┘
//! ```
//!
//! # The construction/assignment contract
//!
//! | Path | Oversized input | Why |
//! |------|-----------------|-----|
//! | [`FixedString::from_literal`] | build error | size known at compile time, so the check is free |
//! | [`FixedString::from_truncated`] and friends | silent truncation | opt-in, named, deterministic |
//! | [`FixedString::try_assign`] / [`FixedString::try_from_bytes`] | `Err`, receiver untouched | assignment is atomic: full success or no effect |
//!
//! The invariants every operation maintains:
//!
//! - `len() <= N` always;
//! - the byte at offset `len()` behind [`FixedString::as_ptr`] is NUL;
//! - no operation allocates, panics on normal input, or blocks.
//!
//! These hold for every reachable state and are exercised by the property
//! tests in `tests/property.rs`, the fuzz targets in `fuzz/`, and the Kani
//! proofs in `kani-proofs/`.
//!
//! # Usage
//!
//! ```
//! use fixstr::FixedString;
//!
//! // Compile-time checked: a literal that does not fit will not build.
//! let mut topic = FixedString::<32>::from_literal(b"wheel/odometry");
//!
//! // Runtime input must either opt into truncation...
//! let clipped = FixedString::<8>::from_str_truncated("a very long label");
//! assert_eq!(clipped.len(), 8);
//!
//! // ...or take the fallible path, which never leaves partial state.
//! assert!(topic.try_assign("imu/accel").is_ok());
//! assert!(topic.try_assign([b'x'; 64].as_slice()).is_err());
//! assert_eq!(topic, "imu/accel");
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Module declarations
mod cmp;
mod convert;
mod error;
mod string;

#[cfg(feature = "serde")]
mod serde_impls;

// Re-exports for public API
pub use error::CapacityError;
pub use string::FixedString;
