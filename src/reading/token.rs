use std::fmt;

/// A single word shown by the reader.
///
/// Never empty and never contains whitespace. Trailing punctuation stays part
/// of the word because the pacing clock keys off it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct WordToken(String);

impl WordToken {
    /// Builds a token from a whitespace-free, non-empty slice.
    ///
    /// Returns `None` for anything that would break the token invariant.
    pub fn new(text: &str) -> Option<Self> {
        if text.is_empty() || text.chars().any(char::is_whitespace) {
            return None;
        }
        Some(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last character of the word, used for punctuation pauses.
    pub fn trailing_char(&self) -> Option<char> {
        self.0.chars().next_back()
    }
}

impl fmt::Display for WordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WordToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_token_rejects_empty() {
        assert!(WordToken::new("").is_none());
    }

    #[test]
    fn test_word_token_rejects_internal_whitespace() {
        assert!(WordToken::new("two words").is_none());
        assert!(WordToken::new("tab\there").is_none());
    }

    #[test]
    fn test_word_token_keeps_punctuation() {
        let token = WordToken::new("world.").unwrap();
        assert_eq!(token.as_str(), "world.");
        assert_eq!(token.trailing_char(), Some('.'));
    }
}
