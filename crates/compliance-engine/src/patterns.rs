//! Matching helpers shared by the category checkers

use shared_types::Location;

use crate::catalog::RulePattern;

/// Characters of context kept on each side of a match
pub const CONTEXT_CHARS: usize = 100;

/// Location used when a pattern's match cannot be located again
pub const PATTERN_FOUND_LABEL: &str = "Pattern found in document";

/// True if any keyword occurs as a plain substring (no word boundaries)
pub fn contains_any_keyword(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// True if at least one pattern matches somewhere in the text
pub fn any_match(text: &str, patterns: &[RulePattern]) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(text))
}

/// Patterns that match nowhere in the text, in declaration order
pub fn missing_patterns<'a>(text: &str, patterns: &'a [RulePattern]) -> Vec<&'a RulePattern> {
    patterns
        .iter()
        .filter(|pattern| !pattern.is_match(text))
        .collect()
}

/// Snippet around the first match of `pattern`, or a fixed label when the
/// pattern does not match
pub fn find_pattern_context(text: &str, pattern: &RulePattern) -> Location {
    match pattern.regex().find(text) {
        Some(m) => Location::Snippet(context_window(text, m.start(), m.end(), CONTEXT_CHARS)),
        None => Location::Label(PATTERN_FOUND_LABEL.to_string()),
    }
}

/// Up to `context_chars` characters either side of `start..end`, wrapped in
/// ellipses. Offsets are byte offsets on char boundaries; the window is
/// counted in chars so multi-byte text is never split.
pub fn context_window(text: &str, start: usize, end: usize, context_chars: usize) -> String {
    let window_start = text[..start]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(start);

    let window_end = text[end..]
        .char_indices()
        .nth(context_chars)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());

    format!("...{}...", &text[window_start..window_end])
}
