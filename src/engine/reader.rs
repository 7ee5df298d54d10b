//! The reading session state machine.
//!
//! `Reader` owns the one [`Session`] and mediates every command: toggles from
//! the host, key commands, and advancement timers coming back from the
//! [`Scheduler`]. Each handler that changes what the user sees finishes with a
//! single call to `emit`.

use crate::engine::config::Config;
use crate::engine::render::{RenderInstruction, RenderSink};
use crate::engine::scheduler::{Scheduler, TimerId};
use crate::input::{extract, ContentSource};
use crate::reading::{format_word, word_delay, Phase, Session};

/// Commands a user can issue while a session is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Quit,
    TogglePause,
    SpeedUp,
    SlowDown,
    SeekBack,
    SeekForward,
}

/// Everything that can drive the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderEvent {
    Toggle,
    Key(KeyCommand),
    Advance(TimerId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    Finished,
    Quit,
}

pub struct Reader<D, S, R> {
    session: Session,
    config: Config,
    source: D,
    scheduler: S,
    sink: R,
}

impl<D, S, R> Reader<D, S, R>
where
    D: ContentSource,
    S: Scheduler,
    R: RenderSink,
{
    pub fn new(source: D, scheduler: S, sink: R, config: Config) -> Self {
        Self {
            session: Session::new(config.timing.wpm),
            config,
            source,
            scheduler,
            sink,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn is_reading(&self) -> bool {
        self.session.is_reading()
    }

    pub fn dispatch(&mut self, event: ReaderEvent) {
        match event {
            ReaderEvent::Toggle => self.toggle(),
            ReaderEvent::Key(command) => self.key_command(command),
            ReaderEvent::Advance(timer) => self.advance(timer),
        }
    }

    pub fn toggle(&mut self) {
        if self.session.is_reading() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Loads words and shows the first one, paused. No-op while reading.
    pub fn start(&mut self) {
        if self.session.is_reading() {
            return;
        }

        let words = extract(&self.source);
        tracing::info!(words = words.len(), wpm = self.session.wpm(), "reading started");
        self.session.reset_for_start(words);
        self.emit();
    }

    pub fn stop(&mut self) {
        self.finish(StopReason::Quit);
    }

    fn finish(&mut self, reason: StopReason) {
        self.cancel_pending();
        tracing::info!(
            ?reason,
            index = self.session.current_index(),
            total = self.session.words().len(),
            "reading stopped"
        );
        self.session.reset_for_stop();
        self.emit();
    }

    pub fn key_command(&mut self, command: KeyCommand) {
        if !self.session.is_reading() {
            tracing::trace!(?command, "ignoring key while idle");
            return;
        }

        let timing = &self.config.timing;
        let speed_step = timing.speed_step as i32;
        let seek_step = timing.seek_step as i64;

        match command {
            KeyCommand::Quit => self.stop(),
            KeyCommand::TogglePause => self.toggle_pause(),
            KeyCommand::SpeedUp => self.set_speed(speed_step),
            KeyCommand::SlowDown => self.set_speed(-speed_step),
            KeyCommand::SeekBack => self.seek(-seek_step),
            KeyCommand::SeekForward => self.seek(seek_step),
        }
    }

    /// Pausing cancels the pending timer; resuming advances right away.
    pub fn toggle_pause(&mut self) {
        if !self.session.is_reading() {
            return;
        }

        self.session.is_paused = !self.session.is_paused;
        if self.session.is_paused {
            tracing::debug!(index = self.session.current_index(), "paused");
            self.cancel_pending();
            self.emit();
        } else {
            tracing::debug!(index = self.session.current_index(), "resumed");
            self.step();
        }
    }

    /// Handles a fired timer. Stale timers are ignored.
    pub fn advance(&mut self, timer: TimerId) {
        if self.session.pending_timer() != Some(timer) {
            tracing::trace!(?timer, "ignoring stale timer");
            return;
        }
        self.session.pending_timer = None;
        self.step();
    }

    /// Changes speed; the already armed timer keeps its delay.
    pub fn set_speed(&mut self, delta: i32) {
        self.session.adjust_wpm(delta, self.config.timing.min_wpm);
        tracing::debug!(wpm = self.session.wpm(), "speed changed");
        self.emit();
    }

    /// Moves by `delta` words, clamped to the text. Leaves the timer alone.
    pub fn seek(&mut self, delta: i64) {
        self.session.seek(delta);
        tracing::debug!(index = self.session.current_index(), "seek");
        self.emit();
    }

    fn step(&mut self) {
        if self.session.phase() != Phase::Running {
            return;
        }

        if self.session.is_at_last_word() {
            self.finish(StopReason::Finished);
            return;
        }

        self.session.step_forward();
        self.emit();
        self.arm();
    }

    fn arm(&mut self) {
        self.cancel_pending();

        let Some(word) = self.session.current_word() else {
            return;
        };
        let delay = word_delay(word, self.session.wpm(), &self.config.timing);
        let timer = self.scheduler.schedule(delay);
        tracing::trace!(?timer, ?delay, "timer armed");
        self.session.pending_timer = Some(timer);
    }

    fn cancel_pending(&mut self) {
        if let Some(timer) = self.session.pending_timer.take() {
            tracing::trace!(?timer, "timer cancelled");
            self.scheduler.cancel(timer);
        }
    }

    /// The single place render instructions leave the reader.
    fn emit(&mut self) {
        let session = &self.session;
        let instruction = if session.is_reading() {
            RenderInstruction {
                word: session
                    .current_word()
                    .map(|w| format_word(w.as_str()))
                    .unwrap_or_default(),
                progress: session.progress_fraction(),
                wpm: session.wpm(),
                visible: true,
                dimmed: session.is_paused(),
            }
        } else {
            RenderInstruction::hidden(session.wpm())
        };
        self.sink.render(&instruction);
    }
}
