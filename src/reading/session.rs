use crate::engine::scheduler::TimerId;
use crate::reading::WordToken;

/// Observable phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Paused,
    Running,
}

/// Reading progress for the one active (or idle) session.
///
/// Every mutator keeps `current_index` inside `[0, words.len() - 1]` and `wpm`
/// at or above the floor passed in by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub(crate) words: Vec<WordToken>,
    pub(crate) current_index: usize,
    pub(crate) wpm: u32,
    pub(crate) is_reading: bool,
    pub(crate) is_paused: bool,
    pub(crate) pending_timer: Option<TimerId>,
}

impl Session {
    pub fn new(wpm: u32) -> Self {
        Self {
            words: Vec::new(),
            current_index: 0,
            wpm,
            is_reading: false,
            is_paused: false,
            pending_timer: None,
        }
    }

    pub fn words(&self) -> &[WordToken] {
        &self.words
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn is_reading(&self) -> bool {
        self.is_reading
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending_timer
    }

    pub fn phase(&self) -> Phase {
        match (self.is_reading, self.is_paused) {
            (false, _) => Phase::Idle,
            (true, true) => Phase::Paused,
            (true, false) => Phase::Running,
        }
    }

    pub fn current_word(&self) -> Option<&WordToken> {
        self.words.get(self.current_index)
    }

    pub fn is_at_last_word(&self) -> bool {
        self.current_index + 1 >= self.words.len()
    }

    /// Fraction of the text shown so far, counting the current word.
    pub fn progress_fraction(&self) -> f64 {
        if self.words.is_empty() {
            return 0.0;
        }
        (self.current_index + 1) as f64 / self.words.len() as f64
    }

    /// Loads a fresh word sequence. WPM carries over from the last session.
    pub(crate) fn reset_for_start(&mut self, words: Vec<WordToken>) {
        self.words = words;
        self.current_index = 0;
        self.is_reading = true;
        self.is_paused = true;
        self.pending_timer = None;
    }

    /// Drops the words and returns to idle. The caller cancels the timer first.
    pub(crate) fn reset_for_stop(&mut self) {
        self.words.clear();
        self.current_index = 0;
        self.is_reading = false;
        self.is_paused = false;
        self.pending_timer = None;
    }

    pub(crate) fn step_forward(&mut self) {
        if !self.is_at_last_word() {
            self.current_index += 1;
        }
    }

    pub(crate) fn adjust_wpm(&mut self, delta: i32, min_wpm: u32) {
        let new_wpm = (self.wpm as i64 + delta as i64).max(min_wpm as i64);
        self.wpm = u32::try_from(new_wpm).unwrap_or(u32::MAX);
    }

    pub(crate) fn seek(&mut self, delta: i64) {
        let last = self.words.len().saturating_sub(1) as i64;
        let target = (self.current_index as i64).saturating_add(delta).clamp(0, last);
        self.current_index = target as usize;
    }
}
