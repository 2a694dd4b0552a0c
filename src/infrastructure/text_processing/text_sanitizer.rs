use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Word split across a line break: "Zusammen-\nfassung".
static HYPHENATED_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)").unwrap()
});

const SOFT_HYPHEN: char = '\u{00AD}';

/// Cleans raw PDF page text for prompting.
///
/// Applies NFKC (ligatures such as "ﬁ" become "fi"), rejoins hyphenated line
/// breaks, drops soft hyphens and control characters, collapses runs of
/// blanks and keeps at most one empty line between paragraphs.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw
        .nfkc()
        .filter(|&c| c != SOFT_HYPHEN && (c == '\n' || c == '\t' || !c.is_control()))
        .collect();
    let joined = HYPHENATED_BREAK.replace_all(&normalized, "$head$tail");

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in joined.lines() {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(words.join(" "));
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs.join("\n\n")
}
