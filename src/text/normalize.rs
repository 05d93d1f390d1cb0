//! Whitespace tokenization and normalization of raw text

/// Splits `text` into whitespace-separated tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Joins tokens with single spaces.
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut joined = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        joined.push_str(token.as_ref());
    }
    joined
}

/// Collapses whitespace runs to single spaces, trims both ends and drops
/// control characters. Loaded documents go through this so that line breaks
/// and indentation never reach the aligner.
pub fn normalize(text: &str) -> String {
    let tokens: Vec<String> = tokenize(text)
        .into_iter()
        .map(|token| token.chars().filter(|c| !c.is_control()).collect::<String>())
        .filter(|token| !token.is_empty())
        .collect();
    join_tokens(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("  one\ttwo\n\nthree "), vec!["one", "two", "three"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_join_tokens() {
        assert_eq!(join_tokens(&["a", "b", "c"]), "a b c");
        assert_eq!(join_tokens::<&str>(&[]), "");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("The  planet\r\nMars\n"), "The planet Mars");
        assert_eq!(normalize("a\u{0007}b \u{0000} c"), "ab c");
        assert_eq!(normalize(""), "");
    }
}
