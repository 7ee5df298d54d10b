use crate::reading::PivotSegments;
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

const PROGRESS_WIDTH: usize = 40;

/// Columns of padding that put the pivot letter on the center column.
pub fn pivot_padding(segments: &PivotSegments, width: u16) -> usize {
    let center = usize::from(width / 2);
    center.saturating_sub(segments.before.width())
}

/// The word as three spans (before, pivot, after) behind a padding span.
///
/// Empty `before`/`after` segments still get their span.
pub fn word_line(segments: &PivotSegments, width: u16, dimmed: bool) -> Line<'static> {
    let (text, pivot) = if dimmed {
        (colors::dimmed(), colors::dimmed())
    } else {
        (colors::text(), colors::pivot())
    };
    let text_style = Style::default().fg(text);
    let pivot_style = Style::default().fg(pivot).add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::raw(" ".repeat(pivot_padding(segments, width))),
        Span::styled(segments.before.clone(), text_style),
        Span::styled(segments.pivot.clone(), pivot_style),
        Span::styled(segments.after.clone(), text_style),
    ])
}

pub fn render_word_display(segments: &PivotSegments, width: u16, dimmed: bool) -> Paragraph<'static> {
    Paragraph::new(word_line(segments, width, dimmed))
        .alignment(Alignment::Left)
        .style(Style::default().bg(colors::background()))
}

/// Pivot marker drawn above and below the word.
pub fn render_pivot_marker(width: u16) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::raw(" ".repeat(usize::from(width / 2))),
        Span::styled("│", Style::default().fg(colors::dimmed())),
    ]);
    Paragraph::new(line).style(Style::default().bg(colors::background()))
}

pub fn render_progress_bar(progress: f64) -> Line<'static> {
    let filled_len = (progress.clamp(0.0, 1.0) * PROGRESS_WIDTH as f64).round() as usize;
    let empty_len = PROGRESS_WIDTH - filled_len;

    Line::from(vec![
        Span::styled("━".repeat(filled_len), Style::default().fg(colors::pivot())),
        Span::styled("─".repeat(empty_len), Style::default().fg(colors::dimmed())),
    ])
    .alignment(Alignment::Center)
}

pub fn render_status(wpm: u32, paused: bool) -> Line<'static> {
    let state = if paused { "SPACE: Play" } else { "SPACE: Pause" };
    let hint = Style::default().fg(colors::dimmed());

    Line::from(vec![
        Span::styled(format!("{wpm} WPM"), Style::default().fg(colors::text())),
        Span::styled(format!("   {state}   ↑/↓: Speed   ←/→: Skip   ESC: Quit"), hint),
    ])
    .alignment(Alignment::Center)
}

pub fn render_placeholder(source: &str) -> Paragraph<'static> {
    let text = format!(
        "Focus Reader\n\nENTER: start reading   q: quit\n\nsource: {source}"
    );
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::format_word;

    #[test]
    fn test_pivot_lands_on_center_column() {
        let segments = format_word("reading");
        // "re" takes two columns before the pivot
        assert_eq!(pivot_padding(&segments, 40), 18);
    }

    #[test]
    fn test_pivot_padding_never_underflows() {
        let segments = format_word("Antidisestablishmentarianism");
        assert_eq!(pivot_padding(&segments, 4), 0);
    }

    #[test]
    fn test_word_line_keeps_empty_segments() {
        let line = word_line(&format_word("I"), 10, false);
        assert_eq!(line.spans.len(), 4);
        assert_eq!(line.spans[1].content, "");
        assert_eq!(line.spans[2].content, "I");
        assert_eq!(line.spans[3].content, "");
    }

    #[test]
    fn test_word_line_pivot_is_highlighted() {
        let line = word_line(&format_word("hello"), 10, false);
        assert_eq!(line.spans[2].content, "e");
        assert_eq!(line.spans[2].style.fg, Some(colors::pivot()));
    }

    #[test]
    fn test_word_line_dimmed_when_paused() {
        let line = word_line(&format_word("hello"), 10, true);
        assert_eq!(line.spans[2].style.fg, Some(colors::dimmed()));
    }

    #[test]
    fn test_render_progress_bar_bounds() {
        let empty = render_progress_bar(0.0);
        assert_eq!(empty.spans[0].content.chars().count(), 0);

        let half = render_progress_bar(0.5);
        assert_eq!(half.spans[0].content.chars().count(), PROGRESS_WIDTH / 2);

        let full = render_progress_bar(1.0);
        assert_eq!(full.spans[1].content.chars().count(), 0);
    }

    #[test]
    fn test_render_status_shows_wpm() {
        let line = render_status(325, false);
        assert_eq!(line.spans[0].content, "325 WPM");
    }

    #[test]
    fn test_render_placeholder_creates_paragraph() {
        let paragraph = render_placeholder("text:article.txt");
        let _ = paragraph;
    }
}
