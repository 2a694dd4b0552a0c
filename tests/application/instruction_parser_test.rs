use officio::application::services::parse_directives;
use officio::domain::Directive;

#[test]
fn given_german_sentence_count_when_parsing_then_caps_sentences() {
    assert_eq!(
        parse_directives("Bitte in 3 Sätzen zusammenfassen"),
        vec![Directive::MaxSentences(3)]
    );
}

#[test]
fn given_singular_satz_when_parsing_then_caps_sentences() {
    assert_eq!(
        parse_directives("maximal 5 Satz"),
        vec![Directive::MaxSentences(5)]
    );
}

#[test]
fn given_english_sentences_when_parsing_then_caps_sentences() {
    assert_eq!(
        parse_directives("at most 2 sentences please"),
        vec![Directive::MaxSentences(2)]
    );
}

#[test]
fn given_uppercase_without_space_when_parsing_then_caps_sentences() {
    assert_eq!(parse_directives("4SÄTZE"), vec![Directive::MaxSentences(4)]);
}

#[test]
fn given_two_sentence_counts_when_parsing_then_uses_first_only() {
    assert_eq!(
        parse_directives("3 Sätze, keinesfalls 10 Sätze"),
        vec![Directive::MaxSentences(3)]
    );
}

#[test]
fn given_number_without_sentence_word_when_parsing_then_returns_nothing() {
    assert!(parse_directives("die 3 wichtigsten Punkte").is_empty());
}

#[test]
fn given_bullet_keyword_in_any_case_when_parsing_then_requests_bullets() {
    assert_eq!(
        parse_directives("Als BULLET Points"),
        vec![Directive::BulletPointsOnly]
    );
    assert_eq!(
        parse_directives("bitte in Stichpunkten"),
        vec![Directive::BulletPointsOnly]
    );
}

#[test]
fn given_bullets_mentioned_before_count_when_parsing_then_cap_still_comes_first() {
    assert_eq!(
        parse_directives("Stichpunkte, höchstens 4 Sätze"),
        vec![Directive::MaxSentences(4), Directive::BulletPointsOnly]
    );
}

#[test]
fn given_plain_focus_when_parsing_then_returns_no_directives() {
    assert!(parse_directives("Fokus auf die Kosten").is_empty());
    assert!(parse_directives("").is_empty());
}

#[test]
fn given_count_overflowing_u32_when_parsing_then_ignores_cap() {
    assert!(parse_directives("99999999999 Sätze").is_empty());
}
