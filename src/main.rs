use clap::Parser;
use focus_reader::app::App;
use focus_reader::engine::{Config, TimingConfig};
use focus_reader::input::{Document, Selection};
use focus_reader::ui::TuiManager;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Read a document one word at a time.
#[derive(Parser, Debug)]
#[command(name = "focus-reader", version, about)]
struct Cli {
    /// Text, EPUB or PDF file to read
    path: Option<PathBuf>,

    /// Read this text instead of the document's article paragraphs
    #[arg(long, conflicts_with = "clipboard")]
    selection: Option<String>,

    /// Use the clipboard contents as the selection, re-read on every start
    #[arg(long)]
    clipboard: bool,

    /// Starting words per minute
    #[arg(long, default_value_t = TimingConfig::default().wpm)]
    wpm: u32,

    /// Write logs to this file (controlled by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let selection = match (cli.selection, cli.clipboard) {
        (Some(text), _) => Selection::Text(text),
        (None, true) => Selection::Clipboard,
        (None, false) => Selection::None,
    };

    // Load before entering the alternate screen so errors stay visible
    let document = match &cli.path {
        Some(path) => Document::load(path, selection)?,
        None => Document::empty(selection),
    };

    let config = Config {
        timing: TimingConfig::default().with_wpm(cli.wpm),
        ..Config::default()
    };

    let mut app = App::new(document, config);
    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
