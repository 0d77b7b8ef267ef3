//! Text normalization for the lexical pipeline.
//!
//! The embedding pipeline hands raw text to its own tokenizer and does not
//! go through here.

/// Normalizes raw text: lowercase, word characters and single spaces only.
///
/// Every character that is neither a word character (Unicode alphanumeric
/// or `_`) nor whitespace is dropped, whitespace runs collapse to a single
/// space, and the result is trimmed. Total over all inputs; empty and
/// whitespace-only strings map to `""`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            // Leading whitespace never becomes a separator.
            pending_space = !out.is_empty();
        } else if c.is_alphanumeric() || c == '_' {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Hello, World!"), "hello world");
    }

    #[test]
    fn test_collapses_and_trims_whitespace() {
        assert_eq!(normalize("  a\t\tb \n c  "), "a b c");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(normalize(" \t\r\n "), "");
    }

    #[test]
    fn test_symbols_only_input() {
        assert_eq!(normalize("!@#$%^&*()"), "");
    }

    #[test]
    fn test_keeps_underscores_and_digits() {
        assert_eq!(normalize("user_id = 42;"), "user_id 42");
    }

    #[test]
    fn test_punctuation_inside_words() {
        assert_eq!(normalize("don't stop-me"), "dont stopme");
    }

    #[test]
    fn test_unicode_letters_survive() {
        assert_eq!(normalize("Café au lait!"), "café au lait");
    }

    #[test]
    fn test_idempotent_on_normalized_text() {
        let once = normalize("The QUICK brown fox.");
        assert_eq!(normalize(&once), once);
    }
}
