// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the truncating construction paths.
//!
//! Truncation is the one place where input is deliberately discarded, so it
//! has to be exact: the longest fitting prefix, a correct length, and a NUL
//! in the terminator position, for every possible input.

#![no_main]

use libfuzzer_sys::fuzz_target;

use fixstr::FixedString;

/// The terminator contract behind `as_ptr`: a NUL at offset `len()`. This is
/// the one check that needs a raw read, since safe views stop at the content.
/// The pointer is derived from the whole value, whose `repr(C)` layout puts
/// the content at offset zero, so the read stays in bounds of one object.
fn assert_terminated<const N: usize>(s: &FixedString<N>) {
    let base = (s as *const FixedString<N>).cast::<u8>();
    let terminator = unsafe { *base.add(s.len()) };
    assert_eq!(terminator, 0, "missing NUL at offset {}", s.len());
}

fn exercise<const N: usize>(data: &[u8]) {
    let s = FixedString::<N>::from_truncated(data);

    // Longest fitting prefix, nothing more.
    let expect = data.len().min(N);
    assert_eq!(s.len(), expect);
    assert_eq!(s.as_bytes(), &data[..expect]);
    assert!(s.len() <= s.capacity());
    assert_terminated(&s);

    // The checked path must agree with the truncating path whenever the
    // input fits, and must refuse whenever it does not.
    match FixedString::<N>::try_from_bytes(data) {
        Ok(checked) => {
            assert!(data.len() <= N);
            assert_eq!(checked, s);
        }
        Err(err) => {
            assert!(data.len() > N);
            assert_eq!(err.input_len(), data.len());
            assert_eq!(err.capacity(), N);
        }
    }
}

fuzz_target!(|data: &[u8]| {
    exercise::<1>(data);
    exercise::<8>(data);
    exercise::<64>(data);
});
