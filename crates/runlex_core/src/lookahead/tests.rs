use super::*;
use crate::{CharacterKind, CharacterStream, StrReader, Token, TokenStream, GUARDED_SCAN_LIMIT};
use pretty_assertions::assert_eq;

fn chars(text: &str) -> LookAheadBuffer<CharacterStream<StrReader<'_>>> {
    CharacterStream::new(StrReader::new(text)).lexer()
}

fn tok(kind: CharacterKind, start: usize, end: usize) -> Token<usize, CharacterKind> {
    Token::new(kind, start..end)
}

// === peek / next ===

#[test]
fn peek_twice_returns_same_value() {
    let mut lexer = chars("\t");
    let tab = tok(CharacterKind::Tab, 0, 1);
    assert_eq!(lexer.peek(), Some(tab.clone()));
    assert_eq!(lexer.peek(), Some(tab));
}

#[test]
fn next_after_peek_consumes() {
    let mut lexer = chars("\t");
    assert!(lexer.peek().is_some());
    assert_eq!(lexer.next(), Some(tok(CharacterKind::Tab, 0, 1)));
    assert_eq!(lexer.peek(), None);
    assert_eq!(lexer.next(), None);
}

#[test]
fn peek_further_then_closer() {
    let mut lexer = chars("a1");
    assert_eq!(lexer.peek_at(2), Some(tok(CharacterKind::Digit, 1, 2)));
    assert_eq!(lexer.peek_at(1), Some(tok(CharacterKind::LowercaseLetter, 0, 1)));
    assert_eq!(lexer.peek_at(2), Some(tok(CharacterKind::Digit, 1, 2)));
    assert_eq!(lexer.buffered(), 2);
}

#[test]
fn peek_zero_does_not_pull() {
    let mut lexer = chars("ab");
    assert_eq!(lexer.peek_at(0), None);
    assert_eq!(lexer.buffered(), 0);
    lexer.peek_at(2);
    assert_eq!(lexer.peek_at(0), Some(tok(CharacterKind::LowercaseLetter, 0, 1)));
}

#[test]
fn peek_past_end_keeps_what_exists() {
    let mut lexer = chars("ab");
    assert_eq!(lexer.peek_at(5), None);
    assert_eq!(lexer.buffered(), 2);
    assert_eq!(lexer.next(), Some(tok(CharacterKind::LowercaseLetter, 0, 1)));
    assert_eq!(lexer.next(), Some(tok(CharacterKind::LowercaseLetter, 1, 2)));
    assert_eq!(lexer.next(), None);
}

#[test]
fn next_drains_buffer_before_source() {
    let mut lexer = (1..=5).look_ahead();
    assert_eq!(lexer.peek_at(3), Some(3));
    assert_eq!(lexer.next(), Some(1));
    assert_eq!(lexer.buffered(), 2);
    assert_eq!(lexer.peek_at(3), Some(4));
    let rest: Vec<i32> = lexer.collect();
    assert_eq!(rest, vec![2, 3, 4, 5]);
}

#[test]
fn size_hint_counts_buffered_items() {
    let mut lexer = (0..10).look_ahead();
    lexer.peek_at(4);
    lexer.next();
    assert_eq!(lexer.size_hint(), (9, Some(9)));
}

// === peek_until ===

#[test]
fn peek_until_scans_increasing_distance() {
    let mut lexer = (0..10).look_ahead();
    assert!(lexer.peek_until(|&n| n == 6));
    assert_eq!(lexer.buffered(), 7);
    assert_eq!(lexer.next(), Some(0));
}

#[test]
fn peek_until_exhausted() {
    let mut lexer = (0..3).look_ahead();
    assert!(!lexer.peek_until(|&n| n > 10));
    assert_eq!(lexer.next(), Some(0));
}

#[test]
fn peek_until_respects_limit() {
    let mut lexer = (0..10).look_ahead();
    assert!(!lexer.peek_until_within(|&n| n == 6, 3));
    assert!(lexer.peek_until_within(|&n| n == 2, 3));
    assert_eq!(lexer.buffered(), 3);
}

// === next_if / skip_if ===

#[test]
fn next_if_consumes_only_on_match() {
    let mut lexer = (0..3).look_ahead();
    assert_eq!(lexer.next_if(|&n| n == 1), None);
    assert_eq!(lexer.next_if(|&n| n == 0), Some(0));
    assert!(lexer.skip_if(|&n| n == 1));
    assert!(!lexer.skip_if(|&n| n == 7));
    assert_eq!(lexer.next(), Some(2));
    assert_eq!(lexer.next_if(|_| true), None);
}

// === next_until ===

#[test]
fn next_until_with_no_match() {
    let text = " ab ";
    let mut lexer = chars(text);
    assert_eq!(lexer.next(), Some(tok(CharacterKind::Space, 0, 1)));
    assert_eq!(lexer.next(), Some(tok(CharacterKind::LowercaseLetter, 1, 2)));
    let b = lexer.next_until_not_in(&[CharacterKind::LowercaseLetter]);
    assert_eq!(b, Some(tok(CharacterKind::LowercaseLetter, 2, 3)));
    // The trailing space is next, and it already satisfies the stop condition.
    assert_eq!(lexer.next_until_not_in(&[CharacterKind::LowercaseLetter]), None);
    assert_eq!(lexer.next(), Some(tok(CharacterKind::Space, 3, 4)));
}

#[test]
fn next_until_early_stop_consumes_nothing() {
    let mut lexer = (0..5).look_ahead();
    assert_eq!(lexer.next_until(|&n| n == 0), None);
    assert_eq!(lexer.next(), Some(0));
}

#[test]
fn next_until_exhaustion_returns_last() {
    let mut lexer = (0..5).look_ahead();
    assert_eq!(lexer.next_until(|&n| n > 100), Some(4));
    assert_eq!(lexer.next(), None);
}

#[test]
fn next_until_on_empty_input() {
    let mut lexer = chars("");
    assert_eq!(lexer.next_until(|_| false), None);
    assert!(!lexer.skip_until(|_| false));
}

#[test]
fn next_until_stops_at_limit() {
    let mut lexer = (0..100).look_ahead();
    assert_eq!(lexer.next_until_within(|_| false, 3), Some(2));
    assert!(lexer.skip_until_within(|_| false, 2));
    assert_eq!(lexer.next(), Some(5));
}

#[test]
fn configured_limits_apply_to_plain_forms() {
    let mut lexer = (0..100).look_ahead().with_limits(ScanLimits::with_until(4));
    assert_eq!(lexer.limits(), ScanLimits::with_until(4));
    assert_eq!(lexer.next_until(|_| false), Some(3));
    assert!(!lexer.peek_until(|&n| n == 50));
}

#[test]
fn guarded_limits_bound_endless_sources() {
    let mut lexer = std::iter::repeat(1u8).look_ahead().with_limits(ScanLimits::guarded());
    assert!(!lexer.peek_until(|&n| n == 0));
    assert_eq!(lexer.buffered(), GUARDED_SCAN_LIMIT);
    assert_eq!(lexer.next_until(|&n| n == 0), Some(1));
}

// === kind-set adapters ===

#[test]
fn next_until_in_set() {
    let mut lexer = chars("ab;c");
    let last = lexer.next_until_in(&[CharacterKind::Semicolon, CharacterKind::Comma]);
    assert_eq!(last, Some(tok(CharacterKind::LowercaseLetter, 1, 2)));
    assert_eq!(
        lexer.next_if_kind(CharacterKind::Semicolon),
        Some(tok(CharacterKind::Semicolon, 2, 3))
    );
    assert!(!lexer.skip_until_in(&[CharacterKind::LowercaseLetter]));
    assert!(!lexer.skip_until_not_in(&[CharacterKind::Space]));
    assert!(lexer.skip_until_in(&[CharacterKind::Space]));
    assert_eq!(lexer.next(), None);
}

// === value semantics ===

#[test]
fn clone_advances_independently() {
    let mut first = chars("xyz");
    first.peek_at(2);
    let mut copy = first.clone();
    assert_eq!(first.next(), Some(tok(CharacterKind::LowercaseLetter, 0, 1)));
    assert_eq!(first.next(), Some(tok(CharacterKind::LowercaseLetter, 1, 2)));
    assert_eq!(copy.next(), Some(tok(CharacterKind::LowercaseLetter, 0, 1)));
    assert_eq!(copy.buffered(), 1);
    assert_eq!(first.buffered(), 0);
}

#[test]
fn into_parts_returns_pending_items() {
    let mut lexer = (0..5).look_ahead();
    lexer.peek_at(3);
    lexer.next();
    let (mut source, pending) = lexer.into_parts();
    assert_eq!(pending, VecDeque::from(vec![1, 2]));
    assert_eq!(source.next(), Some(3));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn peek_is_idempotent(items in proptest::collection::vec(any::<u16>(), 0..64), d in 1usize..80) {
            let mut lexer = items.into_iter().look_ahead();
            let first = lexer.peek_at(d);
            let second = lexer.peek_at(d);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn next_after_peek_matches(items in proptest::collection::vec(any::<u16>(), 0..64), d in 1usize..80) {
            let mut lexer = items.into_iter().look_ahead();
            lexer.peek_at(d);
            let peeked = lexer.peek();
            prop_assert_eq!(lexer.next(), peeked);
        }

        #[test]
        fn peeking_never_changes_sequence(
            items in proptest::collection::vec(any::<u16>(), 0..64),
            peeks in proptest::collection::vec(0usize..10, 0..64),
        ) {
            let mut lexer = items.clone().into_iter().look_ahead();
            let mut seen = Vec::new();
            for d in peeks {
                lexer.peek_at(d);
                if let Some(item) = lexer.next() {
                    seen.push(item);
                }
            }
            seen.extend(lexer);
            prop_assert_eq!(seen, items);
        }

        #[test]
        fn next_until_stops_before_match(items in proptest::collection::vec(0u8..4, 0..64)) {
            let mut lexer = items.clone().into_iter().look_ahead();
            let last = lexer.next_until(|&n| n == 0);
            let stop = items.iter().position(|&n| n == 0).unwrap_or(items.len());
            let expected = if stop == 0 { None } else { Some(items[stop - 1]) };
            prop_assert_eq!(last, expected);
            prop_assert_eq!(lexer.next(), items.get(stop).copied());
        }
    }
}
