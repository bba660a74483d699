// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the fixed string core.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: construction and assignment never panic, for any input
//!    within the bounded harness sizes
//! 2. **Truncation bound**: the truncating constructor stores exactly the
//!    longest fitting prefix
//! 3. **Atomicity**: a failed `try_assign` leaves the receiver bit-identical
//! 4. **Order consistency**: `cmp` equals byte-slice order and is
//!    antisymmetric
//!
//! The harnesses fix `N = 8` with inputs up to twice the capacity; the
//! properties themselves are capacity-independent, so the small bound keeps
//! the solver fast without weakening what is checked.

#[cfg(kani)]
mod proofs {
    use fixstr::FixedString;

    const CAP: usize = 8;
    const MAX_INPUT: usize = 16;

    /// An arbitrary byte slice of length 0..=MAX_INPUT, backed by `buf`.
    fn any_input(buf: &[u8; MAX_INPUT]) -> &[u8] {
        let len: usize = kani::any();
        kani::assume(len <= MAX_INPUT);
        &buf[..len]
    }

    #[kani::proof]
    #[kani::unwind(17)]
    fn truncating_construction_stores_longest_fitting_prefix() {
        let data: [u8; MAX_INPUT] = kani::any();
        let input = any_input(&data);

        let s = FixedString::<CAP>::from_truncated(input);

        let expect = if input.len() < CAP { input.len() } else { CAP };
        assert!(s.len() <= CAP);
        assert_eq!(s.len(), expect);
        assert_eq!(s.as_bytes(), &input[..expect]);
    }

    #[kani::proof]
    #[kani::unwind(17)]
    fn checked_construction_is_exact_or_refused() {
        let data: [u8; MAX_INPUT] = kani::any();
        let input = any_input(&data);

        match FixedString::<CAP>::try_from_bytes(input) {
            Ok(s) => {
                assert!(input.len() <= CAP);
                assert_eq!(s.len(), input.len());
                assert_eq!(s.as_bytes(), input);
            }
            Err(err) => {
                assert!(input.len() > CAP);
                assert_eq!(err.input_len(), input.len());
                assert_eq!(err.capacity(), CAP);
            }
        }
    }

    #[kani::proof]
    #[kani::unwind(17)]
    fn failed_assign_leaves_receiver_bit_identical() {
        let initial: [u8; CAP] = kani::any();
        let attempt: [u8; MAX_INPUT] = kani::any();
        let attempt_len: usize = kani::any();
        kani::assume(attempt_len > CAP && attempt_len <= MAX_INPUT);

        let mut s = FixedString::<CAP>::from_truncated(&initial);
        let snapshot = s;

        let result = s.try_assign(&attempt[..attempt_len]);

        assert!(result.is_err());
        assert_eq!(s.len(), snapshot.len());
        assert_eq!(s.as_bytes(), snapshot.as_bytes());
    }

    #[kani::proof]
    #[kani::unwind(17)]
    fn successful_assign_copies_the_whole_input() {
        let attempt: [u8; CAP] = kani::any();
        let attempt_len: usize = kani::any();
        kani::assume(attempt_len <= CAP);

        let mut s = FixedString::<CAP>::from_truncated(b"seed");
        let result = s.try_assign(&attempt[..attempt_len]);

        assert!(result.is_ok());
        assert_eq!(s.len(), attempt_len);
        assert_eq!(s.as_bytes(), &attempt[..attempt_len]);
    }

    #[kani::proof]
    #[kani::unwind(9)]
    fn order_matches_byte_order_and_is_antisymmetric() {
        let a: [u8; CAP] = kani::any();
        let b: [u8; CAP] = kani::any();
        let a_len: usize = kani::any();
        let b_len: usize = kani::any();
        kani::assume(a_len <= CAP && b_len <= CAP);

        let sa = FixedString::<CAP>::from_truncated(&a[..a_len]);
        let sb = FixedString::<CAP>::from_truncated(&b[..b_len]);

        assert_eq!(sa.cmp(&sb), a[..a_len].cmp(&b[..b_len]));
        assert_eq!(sa.cmp(&sb), sb.cmp(&sa).reverse());
        assert_eq!(sa == sb, a[..a_len] == b[..b_len]);
    }
}
