//! Text cleanup applied before rule matching

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    /// Anything other than word characters, whitespace, basic punctuation,
    /// percent and dollar signs. `\w` is Unicode-aware: combining marks are
    /// kept, while other-number symbols such as `²` and `½` are stripped.
    static ref DISALLOWED_CHARS: Regex = Regex::new(r#"[^\w\s.,!?;:\-()"'%$]"#).unwrap();
}

/// Lowercase, collapse whitespace runs to one space, drop disallowed
/// characters, then trim.
///
/// Characters are stripped after whitespace is collapsed, so removing a
/// symbol that sat between two spaces leaves a double space behind.
pub fn normalize_text(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let collapsed = WHITESPACE_RUN.replace_all(&lowered, " ");
    let cleaned = DISALLOWED_CHARS.replace_all(&collapsed, "");
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lowercases_and_collapses_whitespace() {
        assert_eq!(
            normalize_text("  Past   Performance\n\tIs NOT a Guarantee  "),
            "past performance is not a guarantee"
        );
    }

    #[test]
    fn test_keeps_punctuation_and_symbols() {
        assert_eq!(
            normalize_text("Returns: 8.5% (net), $1,000; \"top-10\" firm's #1 pick!"),
            "returns: 8.5% (net), $1,000; \"top-10\" firm's 1 pick!"
        );
    }

    #[test]
    fn test_strips_symbols_after_collapsing() {
        assert_eq!(normalize_text("Award® winning • team"), "award winning  team");
    }

    #[test]
    fn test_keeps_unicode_word_characters() {
        assert_eq!(normalize_text("Rendement GARANTI à 5%"), "rendement garanti à 5%");
    }

    #[test]
    fn test_unicode_word_class_edges() {
        assert_eq!(normalize_text("Cafe\u{301} ½ x²"), "cafe\u{301}  x");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_text(" \n\t "), "");
    }
}
