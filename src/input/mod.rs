use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod clipboard;
pub mod epub;
pub mod extract;
pub mod pdf;
pub mod text;

pub use extract::{extract, fallback_words, FALLBACK_WORDS};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Document has no text: {0}")]
    EmptyDocument(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A block of text the extractor may read, with its visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphCandidate {
    pub text: String,
    pub visible: bool,
}

impl ParagraphCandidate {
    pub fn visible(text: String) -> Self {
        Self {
            text,
            visible: true,
        }
    }
}

/// What the extractor can ask of a document.
pub trait ContentSource {
    /// The user's current selection, or an empty string.
    fn selection_text(&self) -> String;

    /// Paragraph-level blocks in document order.
    fn paragraph_candidates(&self) -> Vec<ParagraphCandidate>;
}

/// Where the "selection" of a document comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Text(String),
    /// Read from the system clipboard on every start.
    Clipboard,
}

/// A loaded document plus its selection source.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub paragraphs: Vec<ParagraphCandidate>,
    pub selection: Selection,
    pub source: String,
}

impl Document {
    /// A document with no paragraphs; only the selection can supply words.
    pub fn empty(selection: Selection) -> Self {
        Self {
            paragraphs: Vec::new(),
            selection,
            source: "none".to_string(),
        }
    }

    /// Loads a file, picking the loader from its extension.
    pub fn load(path: &Path, selection: Selection) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let mut document = match extension.as_deref() {
            Some("epub") => epub::load(path)?,
            Some("pdf") => pdf::load(path)?,
            _ => text::load(path)?,
        };

        if document.paragraphs.iter().all(|p| p.text.trim().is_empty()) {
            return Err(LoadError::EmptyDocument(path.to_path_buf()));
        }

        tracing::info!(
            source = %document.source,
            paragraphs = document.paragraphs.len(),
            "document loaded"
        );
        document.selection = selection;
        Ok(document)
    }
}

impl ContentSource for Document {
    fn selection_text(&self) -> String {
        match &self.selection {
            Selection::None => String::new(),
            Selection::Text(text) => text.clone(),
            Selection::Clipboard => clipboard::read_text().unwrap_or_else(|err| {
                tracing::warn!(%err, "clipboard unavailable, ignoring selection");
                String::new()
            }),
        }
    }

    fn paragraph_candidates(&self) -> Vec<ParagraphCandidate> {
        self.paragraphs.clone()
    }
}

/// Splits text into blank-line separated blocks, joining wrapped lines.
pub(crate) fn split_paragraphs(text: &str) -> Vec<ParagraphCandidate> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(ParagraphCandidate::visible(current.join(" ")));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(ParagraphCandidate::visible(current.join(" ")));
    }

    paragraphs
}
