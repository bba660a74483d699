// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the total order.
//!
//! Comparison backs map keys and sorted containers; an inconsistency there
//! corrupts trees silently. Every operator must agree with `cmp`, and `cmp`
//! must agree with plain byte-slice order.

#![no_main]

use std::cmp::Ordering;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use fixstr::FixedString;

#[derive(Debug, Arbitrary)]
struct OrderCase<'a> {
    a: &'a [u8],
    b: &'a [u8],
}

fn exercise<const N: usize>(case: &OrderCase) {
    let sa = FixedString::<N>::from_truncated(case.a);
    let sb = FixedString::<N>::from_truncated(case.b);

    // The order is exactly the lexicographic order of the stored bytes.
    assert_eq!(sa.cmp(&sb), sa.as_bytes().cmp(sb.as_bytes()));

    // Antisymmetry and operator consistency.
    assert_eq!(sa.cmp(&sb), sb.cmp(&sa).reverse());
    assert_eq!(sa == sb, sa.cmp(&sb) == Ordering::Equal);
    assert_eq!(sa < sb, sa.cmp(&sb) == Ordering::Less);
    assert_eq!(sa > sb, sa.cmp(&sb) == Ordering::Greater);
    assert_eq!(sa.cmp(&sa), Ordering::Equal);
}

fuzz_target!(|case: OrderCase| {
    exercise::<1>(&case);
    exercise::<8>(&case);
    exercise::<64>(&case);
});
