// Configuration for the reader engine and its presentation
// Defaults are the pacing values the reader ships with

use std::time::Duration;

/// Pacing configuration for the reading clock
#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// WPM used on the very first start (default 300)
    pub wpm: u32,

    /// WPM floor; speed changes clamp here (default 50)
    pub min_wpm: u32,

    /// Multiplier for words ending in `.`, `!` or `?` (default 2.2x)
    pub sentence_multiplier: f64,

    /// Multiplier for words ending in `,` or `;` (default 1.5x)
    pub clause_multiplier: f64,

    /// WPM change per speed key press (default 25)
    pub speed_step: u32,

    /// Words skipped per seek key press (default 10)
    pub seek_step: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wpm: 300,
            min_wpm: 50,
            sentence_multiplier: 2.2,
            clause_multiplier: 1.5,
            speed_step: 25,
            seek_step: 10,
        }
    }
}

impl TimingConfig {
    /// Overrides the starting WPM, respecting the floor.
    pub fn with_wpm(mut self, wpm: u32) -> Self {
        self.wpm = wpm.max(self.min_wpm);
        self
    }
}

/// Presentation hints handed to the render sink
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationConfig {
    /// How long the sink keeps a dismissed reader on screen (default 300ms)
    pub teardown_grace: Duration,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            teardown_grace: Duration::from_millis(300),
        }
    }
}

/// Master configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub timing: TimingConfig,
    pub presentation: PresentationConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_defaults() {
        let config = TimingConfig::default();
        assert_eq!(config.wpm, 300);
        assert_eq!(config.min_wpm, 50);
        assert_eq!(config.speed_step, 25);
        assert_eq!(config.seek_step, 10);
    }

    #[test]
    fn test_with_wpm_respects_floor() {
        assert_eq!(TimingConfig::default().with_wpm(10).wpm, 50);
        assert_eq!(TimingConfig::default().with_wpm(450).wpm, 450);
    }

    #[test]
    fn test_presentation_default_grace() {
        assert_eq!(
            PresentationConfig::default().teardown_grace,
            Duration::from_millis(300)
        );
    }
}
