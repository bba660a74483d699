//! Interop surfaces: UTF-8 views, formatting, owned conversions, serde.

use fixstr::FixedString;

#[test]
fn as_str_on_valid_utf8() {
    let s = FixedString::<16>::from_literal(b"plain ascii");
    assert_eq!(s.as_str().unwrap(), "plain ascii");
}

#[test]
fn as_str_on_invalid_utf8_reports_the_error() {
    let s = FixedString::<8>::from_truncated(&[b'a', 0xC0, b'b']);
    let err = s.as_str().unwrap_err();
    assert_eq!(err.valid_up_to(), 1);
}

#[test]
fn as_ptr_points_at_the_content() {
    let s = FixedString::<8>::from_literal(b"abc");
    assert_eq!(s.as_ptr(), s.as_bytes().as_ptr());
    assert!(!s.as_ptr().is_null());
}

#[test]
fn display_is_lossy_but_total() {
    assert_eq!(
        FixedString::<16>::from_literal(b"hello").to_string(),
        "hello"
    );
    assert_eq!(
        FixedString::<8>::from_truncated(&[0xFF, b'x']).to_string(),
        "\u{FFFD}x"
    );
}

#[test]
fn debug_shows_escaped_bytes() {
    let s = FixedString::<8>::from_truncated(b"a\0\n");
    assert_eq!(format!("{:?}", s), "\"a\\x00\\n\"");
}

#[test]
fn to_vec_is_exact_and_independent() {
    let mut s = FixedString::<8>::from_literal(b"abc");
    let owned = s.to_vec();
    s.assign_literal(b"zz");
    assert_eq!(owned, b"abc");
}

#[test]
fn to_string_lossy_round_trips_valid_content() {
    let s = FixedString::<16>::from_literal(b"round trip");
    let owned = s.to_string_lossy().into_owned();
    let back = FixedString::<16>::try_from(owned.as_str()).unwrap();
    assert_eq!(back, s);
}

#[test]
fn vec_from_reference() {
    let s = FixedString::<8>::from_literal(b"abc");
    let v: Vec<u8> = (&s).into();
    assert_eq!(v, b"abc");
}

#[cfg(feature = "serde")]
mod serde_round_trips {
    use super::*;

    #[test]
    fn json_round_trip_preserves_content() {
        let s = FixedString::<8>::from_truncated(b"a\0b");
        let json = serde_json::to_string(&s).unwrap();
        let back: FixedString<8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn deserialization_fails_rather_than_truncates() {
        let json = serde_json::to_string(&FixedString::<16>::from_literal(b"abcdefgh")).unwrap();
        assert!(serde_json::from_str::<FixedString<4>>(&json).is_err());
    }
}
