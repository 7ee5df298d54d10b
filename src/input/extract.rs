use super::ContentSource;
use crate::reading::{tokenize_text, WordToken};

/// Paragraphs at or below this many characters are treated as captions or
/// navigation and skipped.
pub const MIN_PARAGRAPH_CHARS: usize = 40;

/// Joined article text must be longer than this to be read.
pub const MIN_ARTICLE_CHARS: usize = 100;

pub const FALLBACK_WORDS: [&str; 8] = [
    "No", "content", "detected.", "Please", "select", "text", "to", "read.",
];

/// Picks the words to read from a content source.
///
/// Order: the user's selection, then the visible article paragraphs, then a
/// fixed placeholder message. Never returns an empty sequence.
pub fn extract(source: &dyn ContentSource) -> Vec<WordToken> {
    let selection = source.selection_text();
    if !selection.trim().is_empty() {
        tracing::debug!("extracting from selection");
        return tokenize_text(&selection);
    }

    let article = article_text(source);
    if article.chars().count() > MIN_ARTICLE_CHARS {
        tracing::debug!(chars = article.len(), "extracting article paragraphs");
        return tokenize_text(&article);
    }

    tracing::debug!("no content found, using fallback message");
    fallback_words()
}

fn article_text(source: &dyn ContentSource) -> String {
    source
        .paragraph_candidates()
        .into_iter()
        .filter(|p| p.text.trim().chars().count() > MIN_PARAGRAPH_CHARS)
        .filter(|p| p.visible)
        .map(|p| p.text)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn fallback_words() -> Vec<WordToken> {
    FALLBACK_WORDS.iter().filter_map(|w| WordToken::new(w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ParagraphCandidate;

    struct FakeSource {
        selection: String,
        paragraphs: Vec<ParagraphCandidate>,
    }

    impl ContentSource for FakeSource {
        fn selection_text(&self) -> String {
            self.selection.clone()
        }

        fn paragraph_candidates(&self) -> Vec<ParagraphCandidate> {
            self.paragraphs.clone()
        }
    }

    fn texts(words: &[WordToken]) -> Vec<&str> {
        words.iter().map(WordToken::as_str).collect()
    }

    fn long_paragraph(tag: &str) -> ParagraphCandidate {
        ParagraphCandidate::visible(format!(
            "{tag} paragraph with more than forty characters of body text in it."
        ))
    }

    #[test]
    fn test_selection_wins_over_paragraphs() {
        let source = FakeSource {
            selection: "Hello world.".to_string(),
            paragraphs: vec![long_paragraph("First"), long_paragraph("Second")],
        };
        assert_eq!(texts(&extract(&source)), vec!["Hello", "world."]);
    }

    #[test]
    fn test_whitespace_only_selection_is_ignored() {
        let source = FakeSource {
            selection: "  \n\t ".to_string(),
            paragraphs: vec![],
        };
        assert_eq!(texts(&extract(&source)), FALLBACK_WORDS.to_vec());
    }

    #[test]
    fn test_visible_long_paragraphs_are_joined() {
        let source = FakeSource {
            selection: String::new(),
            paragraphs: vec![
                long_paragraph("First"),
                ParagraphCandidate::visible("Short caption".to_string()),
                long_paragraph("Second"),
            ],
        };
        let words = extract(&source);
        assert_eq!(words[0].as_str(), "First");
        assert!(!texts(&words).contains(&"caption"));
        assert!(texts(&words).contains(&"Second"));
    }

    #[test]
    fn test_hidden_paragraphs_are_skipped() {
        let mut hidden = long_paragraph("Hidden");
        hidden.visible = false;
        let source = FakeSource {
            selection: String::new(),
            paragraphs: vec![hidden, long_paragraph("First"), long_paragraph("Second")],
        };
        assert!(!texts(&extract(&source)).contains(&"Hidden"));
    }

    #[test]
    fn test_paragraph_of_exactly_forty_chars_is_dropped() {
        let forty = "a".repeat(MIN_PARAGRAPH_CHARS);
        let source = FakeSource {
            selection: String::new(),
            paragraphs: vec![ParagraphCandidate::visible(forty); 4],
        };
        assert_eq!(texts(&extract(&source)), FALLBACK_WORDS.to_vec());
    }

    #[test]
    fn test_short_article_falls_back() {
        // one qualifying paragraph, but under the article threshold
        let source = FakeSource {
            selection: String::new(),
            paragraphs: vec![long_paragraph("Only")],
        };
        assert_eq!(texts(&extract(&source)), FALLBACK_WORDS.to_vec());
    }

    #[test]
    fn test_no_content_yields_exact_fallback() {
        let source = FakeSource {
            selection: String::new(),
            paragraphs: vec![],
        };
        let words = extract(&source);
        assert_eq!(words.len(), 8);
        assert_eq!(texts(&words), FALLBACK_WORDS.to_vec());
    }
}
