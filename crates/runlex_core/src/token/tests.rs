use super::*;
use crate::CharacterKind;
use pretty_assertions::assert_eq;

#[test]
fn accessors() {
    let token = Token::new(CharacterKind::Digit, 3..5);
    assert_eq!(token.start(), 3);
    assert_eq!(token.end(), 5);
    assert_eq!(LexToken::kind(&token), CharacterKind::Digit);
    assert_eq!(LexToken::range(&token), 3..5);
}

#[test]
fn from_range_absent() {
    assert_eq!(Token::<usize, _>::from_range(CharacterKind::Tab, None), None);
    assert_eq!(
        Token::from_range(CharacterKind::Tab, Some(0..1)),
        Some(Token::new(CharacterKind::Tab, 0..1))
    );
}

#[test]
fn spanning_two_tokens() {
    let first = Token::new(CharacterKind::LowercaseLetter, 0..1);
    let last = Token::new(CharacterKind::Digit, 4..5);
    assert_eq!(
        Token::spanning("word", &first, Some(&last)),
        Some(Token::new("word", 0..5))
    );
    assert_eq!(
        Token::<usize, &str>::spanning::<CharacterKind, CharacterKind>("word", &first, None),
        None
    );
}

#[test]
fn ordering_by_start() {
    let mut tokens = vec![
        Token::new(CharacterKind::Comma, 4..5),
        Token::new(CharacterKind::Space, 0..1),
        Token::new(CharacterKind::Dash, 2..3),
    ];
    tokens.sort_by(Token::cmp_by_start);
    let starts: Vec<usize> = tokens.iter().map(Token::start).collect();
    assert_eq!(starts, vec![0, 2, 4]);
}

#[test]
fn slice_text() {
    let text = "ab ж";
    assert_eq!(Token::new(CharacterKind::Space, 2..3).slice(text), Some(" "));
    assert_eq!(
        Token::new(CharacterKind::LowercaseLetter, 3..5).slice(text),
        Some("ж")
    );
    assert_eq!(Token::new(CharacterKind::OtherCharacter, 3..4).slice(text), None);
}

#[test]
fn display_and_debug() {
    let token = Token::new(CharacterKind::Tab, 0..1);
    assert_eq!(token.to_string(), "<Tab 0..1>");
    assert_eq!(format!("{token:?}"), "Tab 0..1");
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "empty token range")]
fn empty_range_is_rejected() {
    let _ = Token::new(CharacterKind::Tab, 2..2);
}
