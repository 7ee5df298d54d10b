use crate::engine::config::TimingConfig;
use crate::reading::WordToken;
use std::time::Duration;

/// Pause class of a word, decided by its trailing character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseKind {
    /// Ends with `.`, `!` or `?`
    Sentence,
    /// Ends with `,` or `;`
    Clause,
    None,
}

fn is_sentence_terminator(c: char) -> bool {
    c == '.' || c == '?' || c == '!'
}

fn is_clause_separator(c: char) -> bool {
    c == ',' || c == ';'
}

pub fn pause_kind(word: &WordToken) -> PauseKind {
    match word.trailing_char() {
        Some(c) if is_sentence_terminator(c) => PauseKind::Sentence,
        Some(c) if is_clause_separator(c) => PauseKind::Clause,
        _ => PauseKind::None,
    }
}

/// Base delay per word in milliseconds, without rounding.
pub fn wpm_to_milliseconds(wpm: u32) -> f64 {
    60_000.0 / wpm.max(1) as f64
}

/// Delay in milliseconds to hold `word` on screen before the next advance.
pub fn word_delay_ms(word: &WordToken, wpm: u32, config: &TimingConfig) -> f64 {
    let base_delay = wpm_to_milliseconds(wpm);
    match pause_kind(word) {
        PauseKind::Sentence => base_delay * config.sentence_multiplier,
        PauseKind::Clause => base_delay * config.clause_multiplier,
        PauseKind::None => base_delay,
    }
}

pub fn word_delay(word: &WordToken, wpm: u32, config: &TimingConfig) -> Duration {
    Duration::from_secs_f64(word_delay_ms(word, wpm, config) / 1000.0)
}

/// Splits text on whitespace runs, dropping empty pieces.
pub fn tokenize_text(text: &str) -> Vec<WordToken> {
    text.split_whitespace().filter_map(WordToken::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> WordToken {
        WordToken::new(text).unwrap()
    }

    #[test]
    fn test_wpm_to_milliseconds_300() {
        // 300 WPM = 200ms per word (60,000 / 300 = 200)
        assert_eq!(wpm_to_milliseconds(300), 200.0);
    }

    #[test]
    fn test_wpm_to_milliseconds_keeps_precision() {
        // 350 WPM = 171.428... ms, no integer truncation
        assert_eq!(wpm_to_milliseconds(350), 60_000.0 / 350.0);
    }

    #[test]
    fn test_plain_word_uses_base_delay() {
        let config = TimingConfig::default();
        for wpm in [50, 175, 300, 425, 1200] {
            assert_eq!(word_delay_ms(&word("hello"), wpm, &config), 60_000.0 / wpm as f64);
        }
    }

    #[test]
    fn test_sentence_end_delay() {
        let config = TimingConfig::default();
        let expected = 60_000.0 / 300.0 * 2.2;
        assert_eq!(word_delay_ms(&word("end."), 300, &config), expected);
        assert_eq!(word_delay_ms(&word("really?"), 300, &config), expected);
        assert_eq!(word_delay_ms(&word("wow!"), 300, &config), expected);
    }

    #[test]
    fn test_clause_delay() {
        let config = TimingConfig::default();
        let expected = 60_000.0 / 300.0 * 1.5;
        assert_eq!(word_delay_ms(&word("first,"), 300, &config), expected);
        assert_eq!(word_delay_ms(&word("then;"), 300, &config), expected);
    }

    #[test]
    fn test_only_trailing_character_counts() {
        assert_eq!(pause_kind(&word("e.g")), PauseKind::None);
        assert_eq!(pause_kind(&word("\"quoted.\"")), PauseKind::None);
        assert_eq!(pause_kind(&word("wait...")), PauseKind::Sentence);
        assert_eq!(pause_kind(&word("so,.")), PauseKind::Sentence);
    }

    #[test]
    fn test_word_delay_duration() {
        let config = TimingConfig::default();
        assert_eq!(word_delay(&word("hello"), 300, &config), Duration::from_millis(200));
    }

    #[test]
    fn test_tokenize_collapses_whitespace_runs() {
        let tokens = tokenize_text("  Hello \n\t world.  ");
        let texts: Vec<&str> = tokens.iter().map(WordToken::as_str).collect();
        assert_eq!(texts, vec!["Hello", "world."]);
    }

    #[test]
    fn test_tokenize_empty_text() {
        assert!(tokenize_text("   \n ").is_empty());
    }
}
