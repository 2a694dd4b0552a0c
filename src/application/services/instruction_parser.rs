use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Directive;

static SENTENCE_LIMIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:satz|sätze|saetze|sentence)").unwrap()
});

const BULLET_KEYWORDS: [&str; 2] = ["bullet", "stichpunkt"];

/// Extracts formatting directives from a free-form focus or style instruction.
///
/// The sentence cap always precedes the bullet directive, independent of the
/// order in which the phrases appear in `instruction`.
pub fn parse_directives(instruction: &str) -> Vec<Directive> {
    let mut directives = Vec::new();

    if let Some(count) = sentence_limit(instruction) {
        directives.push(Directive::MaxSentences(count));
    }

    let lowered = instruction.to_lowercase();
    if BULLET_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        directives.push(Directive::BulletPointsOnly);
    }

    directives
}

fn sentence_limit(instruction: &str) -> Option<u32> {
    SENTENCE_LIMIT
        .captures(instruction)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
