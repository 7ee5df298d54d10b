use super::event::AppEvent;
use crate::engine::{Config, DeadlineScheduler, Reader, ReaderEvent};
use crate::input::Document;
use crate::ui::reader::{ReaderComponent, ReaderFrame};
use std::time::{Duration, Instant};

pub type TuiReader = Reader<Document, DeadlineScheduler, ReaderComponent>;

/// Host wiring between terminal events, the wall clock and the reader.
pub struct App {
    reader: TuiReader,
    source: String,
    exit: bool,
}

impl App {
    pub fn new(document: Document, config: Config) -> Self {
        let source = document.source.clone();
        let sink = ReaderComponent::new(config.presentation.teardown_grace);
        Self {
            reader: Reader::new(document, DeadlineScheduler::new(), sink, config),
            source,
            exit: false,
        }
    }

    pub fn reader(&self) -> &TuiReader {
        &self.reader
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_reading(&self) -> bool {
        self.reader.is_reading()
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Toggle => self.reader.dispatch(ReaderEvent::Toggle),
            AppEvent::Command(command) => self.reader.dispatch(ReaderEvent::Key(command)),
            AppEvent::Exit => {
                if self.reader.is_reading() {
                    self.reader.stop();
                }
                self.exit = true;
            }
            AppEvent::None => {}
        }
    }

    /// Fires the pending advancement if its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(timer) = self.reader.scheduler_mut().take_due(now) {
            self.reader.dispatch(ReaderEvent::Advance(timer));
        }
    }

    /// How long the event loop may block before the next deadline or frame.
    pub fn poll_timeout(&self, now: Instant, frame_tick: Duration) -> Duration {
        self.reader
            .scheduler()
            .time_until_due(now)
            .map_or(frame_tick, |due| due.min(frame_tick))
    }

    pub fn frame(&self, now: Instant) -> ReaderFrame<'_> {
        self.reader.sink().frame(now)
    }
}
