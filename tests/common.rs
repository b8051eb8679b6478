//! Integration tests for teeny-common crate.

use teeny_common::{BytePos, Span};

#[test]
fn test_span_merge() {
    let a = Span::from_usize(10, 20);
    let b = Span::from_usize(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged.start.0, 10);
    assert_eq!(merged.end.0, 30);
}

#[test]
fn test_span_point_is_empty() {
    let eof = Span::point(42);
    assert!(eof.is_empty());
    assert_eq!(eof.range(), 42..42);
    assert!(!Span::from_usize(5, 10).is_empty());
}

#[test]
fn test_span_display() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.to_string(), "5..15");
    assert_eq!(format!("{span:?}"), "5..15");
}

#[test]
fn test_byte_pos_conversions() {
    let pos = BytePos::from(10usize);
    assert_eq!(pos, BytePos(10));
    assert_eq!(usize::from(pos), 10);
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_byte_pos_saturates_past_u32() {
    let far = u32::MAX as usize + 7;
    assert_eq!(BytePos::from(far), BytePos(u32::MAX));
    assert_eq!(Span::point(far).range(), (u32::MAX as usize)..(u32::MAX as usize));
}
