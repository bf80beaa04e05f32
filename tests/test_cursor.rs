//! Cursor contract integration tests: bidirectional traversal, bounded
//! views, transcoding decorators and the hash math helpers.

use traverse::prelude::*;

#[test]
fn test_bidirectional_walk_tracks_index() {
    let mut cursor = of_bytes(b"hello");
    assert_eq!(cursor.index(), 0);
    cursor.next().unwrap();
    cursor.next().unwrap();
    cursor.next().unwrap();
    assert_eq!(cursor.index(), 3);
    cursor.previous().unwrap();
    assert_eq!(cursor.index(), 2);
    cursor.next().unwrap();
    assert_eq!(cursor.index(), 3);
}

#[test]
fn test_peeks_never_move() {
    let mut cursor = of_string("ab");
    cursor.next().unwrap();
    for _ in 0..3 {
        assert_eq!(cursor.peek_next().unwrap(), 'b');
        assert_eq!(cursor.peek_previous().unwrap(), 'a');
    }
    assert_eq!(cursor.index(), 1);
}

#[test]
fn test_empty_cursors() {
    let mut bytes = EmptyBytes;
    assert!(!bytes.has_next());
    assert!(!bytes.has_previous());
    assert_eq!(bytes.next(), Err(Error::EndOfSequence));

    let mut chars = EmptyCodePoints;
    assert!(!chars.has_next());
    assert_eq!(chars.previous(), Err(Error::EndOfSequence));
    assert_eq!(chars.drain_to_string().unwrap(), "");
}

#[test]
fn test_bounded_view_bound_enforcement() {
    let mut view = of_bytes(b"0123456789").limited_to(4);
    let mut taken = Vec::new();
    while view.has_next() {
        taken.push(view.next().unwrap());
    }
    assert_eq!(taken, b"0123");
    assert_eq!(view.index(), 4);
    assert_eq!(view.next(), Err(Error::EndOfSequence));
}

#[test]
fn test_bounded_view_over_decoded_cursor() {
    // Views compose over any cursor, codec outputs included.
    let first_two = of_string("Zm9vYmFy")
        .base64_decode()
        .limited_to(2)
        .drain()
        .unwrap();
    assert_eq!(first_two, b"fo");
}

#[test]
fn test_bounded_view_lower_bound() {
    let mut inner = of_bytes(b"abcdef");
    inner.next().unwrap();
    inner.next().unwrap();
    let mut view = inner.limited_to(3);
    assert_eq!(view.previous(), Err(Error::EndOfSequence));
    assert_eq!(view.next().unwrap(), b'c');
    assert_eq!(view.previous().unwrap(), b'c');
    assert_eq!(view.previous(), Err(Error::EndOfSequence));
}

#[test]
fn test_utf8_idempotence() {
    let samples = [
        "",
        "plain ascii",
        "caf\u{e9} au lait",
        "středník",
        "日本語のテキスト",
        "mixed 平面 🂡🀄 text",
    ];
    for text in samples {
        let bytes = of_string(text).as_utf8().drain().unwrap();
        assert_eq!(bytes, text.as_bytes(), "text {text:?}");
        let back = of_bytes(&bytes).as_utf8_chars().drain_to_string().unwrap();
        assert_eq!(back, text, "text {text:?}");
    }
}

#[test]
fn test_code_point_index_counts_scalar_values() {
    // Supplementary-plane characters are one step, not two.
    let mut cursor = of_string("🂡🂢🂣");
    cursor.next().unwrap();
    cursor.next().unwrap();
    assert_eq!(cursor.index(), 2);
    let remaining = cursor.drain().unwrap();
    assert_eq!(remaining, ['🂣']);
}

#[test]
fn test_case_fold_through_codec() {
    // Fold the symbols of an encoded run without disturbing offsets.
    let folded = of_bytes(b"foo")
        .base64_encode()
        .to_ascii_lower_case()
        .drain_to_string()
        .unwrap();
    assert_eq!(folded, "zm9v");
}

#[test]
fn test_latin1_projection() {
    let bytes = of_string("Ab\u{e9}").as_latin1().drain().unwrap();
    assert_eq!(bytes, [b'A', b'b', 0xE9]);
    assert_eq!(
        of_string("€").as_latin1().drain(),
        Err(Error::InvalidCodePoint(0x20AC))
    );
    let text = of_bytes(&[0x41, 0xFF]).as_latin1_chars().drain_to_string().unwrap();
    assert_eq!(text, "A\u{ff}");
}

#[test]
fn test_drain_is_the_only_eager_step() {
    // Nothing is pulled from the source until the consumer asks.
    let mut encoded = of_bytes(b"abc").base64_encode();
    assert_eq!(encoded.index(), 0);
    assert_eq!(encoded.next().unwrap(), 'Y');
    assert_eq!(encoded.index(), 1);
}

#[test]
fn test_power_of_two_boundaries() {
    let cases = [
        (0, 0),
        (1, 1),
        (3, 4),
        (4, 4),
        (5, 8),
        (7, 8),
        (8, 8),
        (128, 128),
        (129, 256),
        (255, 256),
        (256, 256),
        (0x2000_0000, 0x2000_0000),
        (0x2000_0001, 0x4000_0000),
    ];
    for (input, expected) in cases {
        assert_eq!(round_to_power_of_two(input), expected, "input {input}");
    }
}

#[test]
fn test_hash_combination_order_properties() {
    let ordered_ab = multi_hash_ordered(multi_hash_ordered(77, 65537, 13), 16633, 5342);
    let ordered_ba = multi_hash_ordered(multi_hash_ordered(77, 16633, 5342), 65537, 13);
    assert_ne!(ordered_ab, ordered_ba);

    let unordered_ab = multi_hash_unordered(multi_hash_unordered(77, 65537, 13), 16633, 5342);
    let unordered_ba = multi_hash_unordered(multi_hash_unordered(77, 16633, 5342), 65537, 13);
    assert_eq!(unordered_ab, unordered_ba);
}
