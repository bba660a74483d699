//! Every construction path, against the documented capacity contract.

use core::ffi::CStr;

use fixstr::FixedString;

#[test]
fn default_is_empty() {
    let s = FixedString::<8>::default();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    assert_eq!(s.as_bytes(), b"");
}

#[test]
fn literal_shorter_than_capacity() {
    let s = FixedString::<8>::from_literal(b"abc");
    assert_eq!(s.len(), 3);
    assert_eq!(s.as_bytes(), b"abc");
}

#[test]
fn literal_at_exact_capacity() {
    let s = FixedString::<4>::from_literal(b"abcd");
    assert_eq!(s.len(), 4);
    assert_eq!(s.as_bytes(), b"abcd");
}

#[test]
fn empty_literal() {
    let s = FixedString::<4>::from_literal(b"");
    assert!(s.is_empty());
}

#[test]
fn literal_works_in_const_context() {
    static LABEL: FixedString<16> = FixedString::from_literal(b"lidar/rear");
    const OTHER: FixedString<16> = FixedString::from_literal(b"lidar/front");
    assert_eq!(LABEL.as_bytes(), b"lidar/rear");
    assert_eq!(OTHER.as_bytes(), b"lidar/front");
}

#[test]
fn truncating_from_short_input_copies_everything() {
    let s = FixedString::<8>::from_truncated(b"abc");
    assert_eq!(s.len(), 3);
    assert_eq!(s.as_bytes(), b"abc");
}

#[test]
fn truncating_from_long_input_keeps_the_prefix() {
    let s = FixedString::<4>::from_truncated(b"abcdef");
    assert_eq!(s.len(), 4);
    assert_eq!(s.as_bytes(), b"abcd");
}

#[test]
fn truncating_from_str_counts_bytes_not_chars() {
    // Multi-byte content truncates at a byte count; the tail byte of a
    // split code point is simply dropped from the prefix copy.
    let s = FixedString::<3>::from_str_truncated("abé");
    assert_eq!(s.len(), 3);
    assert_eq!(s.as_bytes(), &[b'a', b'b', 0xC3]);
}

#[test]
fn counted_buffer_preserves_embedded_nuls() {
    let raw = b"ab\0cd\0";
    let s = FixedString::<8>::from_truncated(raw);
    assert_eq!(s.len(), 6);
    assert_eq!(s.as_bytes(), raw);
}

#[test]
fn c_str_reads_up_to_its_terminator() {
    let c = CStr::from_bytes_with_nul(b"abcd\0").unwrap();
    let s = FixedString::<8>::from_c_str(c);
    assert_eq!(s.len(), 4);
    assert_eq!(s.as_bytes(), b"abcd");
}

#[test]
fn c_str_longer_than_capacity_truncates() {
    let c = CStr::from_bytes_with_nul(b"abcdef\0").unwrap();
    let s = FixedString::<4>::from_c_str(c);
    assert_eq!(s.as_bytes(), b"abcd");
}

#[test]
fn try_from_bytes_accepts_up_to_capacity() {
    let s = FixedString::<4>::try_from_bytes(b"abcd").unwrap();
    assert_eq!(s.as_bytes(), b"abcd");
}

#[test]
fn try_from_bytes_rejects_oversized_input() {
    let err = FixedString::<4>::try_from_bytes(b"abcde").unwrap_err();
    assert_eq!(err.input_len(), 5);
    assert_eq!(err.capacity(), 4);
}

#[test]
fn clone_and_copy_are_independent_values() {
    let a = FixedString::<8>::from_literal(b"abc");
    #[allow(clippy::clone_on_copy)]
    let b = a.clone();
    let c = a;
    assert_eq!(a, b);
    assert_eq!(a, c);
}
