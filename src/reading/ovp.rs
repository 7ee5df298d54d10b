//! OVP (Optimal Viewing Position) pivot calculation
//!
//! The pivot letter is the fixation point of a word. It shifts right as words
//! get longer and is capped at the fifth letter:
//! - 1 char word → position 0 (1st letter)
//! - 2-5 char words → position 1 (2nd letter)
//! - 6-9 char words → position 2 (3rd letter)
//! - 10-13 char words → position 3 (4th letter)
//! - 14+ char words → position 4 (5th letter)
//!
//! Lengths are counted in grapheme clusters so an accented letter or emoji is
//! never split across segments.

use unicode_segmentation::UnicodeSegmentation;

const MAX_PIVOT: usize = 4;

/// A word split around its pivot letter.
///
/// `before + pivot + after` always equals the original word. `before` and
/// `after` may be empty and must still be rendered (as nothing).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PivotSegments {
    pub before: String,
    pub pivot: String,
    pub after: String,
}

impl PivotSegments {
    pub fn to_word(&self) -> String {
        format!("{}{}{}", self.before, self.pivot, self.after)
    }
}

/// Returns the 0-based grapheme index of the pivot letter.
pub fn pivot_index(word: &str) -> usize {
    let len = word.graphemes(true).count();
    match len {
        0..=1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => MAX_PIVOT,
    }
}

/// Splits a word into the text before the pivot, the pivot, and the rest.
pub fn format_word(word: &str) -> PivotSegments {
    let pivot = pivot_index(word);
    let graphemes: Vec<&str> = word.graphemes(true).collect();

    if graphemes.is_empty() {
        return PivotSegments::default();
    }

    PivotSegments {
        before: graphemes[..pivot].concat(),
        pivot: graphemes[pivot].to_string(),
        after: graphemes[pivot + 1..].concat(),
    }
}
