//! Render sink for the terminal.
//!
//! Keeps the latest render instruction for the draw loop. A dismissed reader
//! stays on screen, faded, for the teardown grace period before the idle
//! screen comes back.

use crate::engine::{RenderInstruction, RenderSink};
use std::time::{Duration, Instant};

/// What the draw loop should paint right now.
#[derive(Debug, PartialEq)]
pub enum ReaderFrame<'a> {
    Hidden,
    Active(&'a RenderInstruction),
    Closing(&'a RenderInstruction),
}

#[derive(Debug)]
pub struct ReaderComponent {
    current: Option<RenderInstruction>,
    dismissed_at: Option<Instant>,
    grace: Duration,
}

impl ReaderComponent {
    pub fn new(grace: Duration) -> Self {
        Self {
            current: None,
            dismissed_at: None,
            grace,
        }
    }

    pub fn frame(&self, now: Instant) -> ReaderFrame<'_> {
        let Some(instruction) = &self.current else {
            return ReaderFrame::Hidden;
        };

        match self.dismissed_at {
            None => ReaderFrame::Active(instruction),
            Some(at) if now.saturating_duration_since(at) < self.grace => {
                ReaderFrame::Closing(instruction)
            }
            Some(_) => ReaderFrame::Hidden,
        }
    }

    fn render_at(&mut self, instruction: &RenderInstruction, now: Instant) {
        if instruction.visible {
            self.current = Some(instruction.clone());
            self.dismissed_at = None;
        } else if self.current.is_some() && self.dismissed_at.is_none() {
            // keep the last visible word for the closing fade
            self.dismissed_at = Some(now);
        }
    }
}

impl RenderSink for ReaderComponent {
    fn render(&mut self, instruction: &RenderInstruction) {
        self.render_at(instruction, Instant::now());
    }
}
