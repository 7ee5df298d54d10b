use crate::app::App;
use crate::ui::command::key_to_app_event;
use crate::ui::reader::view::{
    render_pivot_marker, render_placeholder, render_progress_bar, render_status,
    render_word_display,
};
use crate::ui::reader::ReaderFrame;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::colors;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    // dropped after `terminal`, restoring the screen last
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let frame_tick = Duration::from_millis(1000 / 60);

        while !app.should_exit() {
            self.render_frame(app)?;

            let timeout = app.poll_timeout(Instant::now(), frame_tick);
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_event(key_to_app_event(key, app.is_reading()));
                    }
                }
            }

            app.tick(Instant::now());
        }

        Ok(())
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let now = Instant::now();

        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(
                Block::default().style(Style::default().bg(colors::background())),
                area,
            );

            let (instruction, closing) = match app.frame(now) {
                ReaderFrame::Hidden => {
                    let middle = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([
                            Constraint::Percentage(40),
                            Constraint::Length(5),
                            Constraint::Min(0),
                        ])
                        .split(area)[1];
                    frame.render_widget(render_placeholder(app.source()), middle);
                    return;
                }
                ReaderFrame::Active(instruction) => (instruction, false),
                ReaderFrame::Closing(instruction) => (instruction, true),
            };

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(0),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Min(0),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(area);

            let width = area.width;
            frame.render_widget(render_pivot_marker(width), rows[1]);
            frame.render_widget(
                render_word_display(&instruction.word, width, instruction.dimmed || closing),
                rows[2],
            );
            frame.render_widget(render_pivot_marker(width), rows[3]);
            frame.render_widget(render_progress_bar(instruction.progress), rows[5]);
            frame.render_widget(render_status(instruction.wpm, instruction.dimmed), rows[6]);
        })?;

        Ok(())
    }
}
