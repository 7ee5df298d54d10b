use ratatui::style::Color;

/// Reader theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub pivot: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::focus()
    }
}

impl Theme {
    /// Dark background, light gray text, green pivot letter
    pub fn focus() -> Self {
        Self {
            background: Color::Rgb(17, 17, 17), // #111111
            text: Color::Rgb(209, 213, 219),    // #D1D5DB Gray 300
            pivot: Color::Rgb(34, 197, 94),     // #22C55E Green 500
            dimmed: Color::Rgb(107, 114, 128),  // #6B7280 Gray 500
        }
    }

    pub fn current() -> Self {
        Self::focus()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn pivot() -> Color {
        Theme::current().pivot
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
}
