// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for assignment atomicity.
//!
//! The contract clients build on: `try_assign` either copies the whole input
//! or leaves the receiver untouched. The fuzzer drives arbitrary
//! initial-state/input pairs through it and checks both branches.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use fixstr::FixedString;

#[derive(Debug, Arbitrary)]
struct AssignCase<'a> {
    initial: &'a [u8],
    attempt: &'a [u8],
}

fn exercise<const N: usize>(case: &AssignCase) {
    let mut s = FixedString::<N>::from_truncated(case.initial);
    let snapshot = s;

    match s.try_assign(case.attempt) {
        Ok(()) => {
            assert!(case.attempt.len() <= N);
            assert_eq!(s.as_bytes(), case.attempt);
            assert_eq!(s.len(), case.attempt.len());
        }
        Err(err) => {
            assert!(case.attempt.len() > N);
            assert_eq!(err.input_len(), case.attempt.len());
            // No partial mutation, byte for byte.
            assert_eq!(s, snapshot);
            assert_eq!(s.as_bytes(), snapshot.as_bytes());
            assert_eq!(s.len(), snapshot.len());
        }
    }
}

fuzz_target!(|case: AssignCase| {
    exercise::<1>(&case);
    exercise::<8>(&case);
    exercise::<64>(&case);
});
