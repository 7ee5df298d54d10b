use super::{split_paragraphs, Document, LoadError, Selection};
use std::path::Path;

/// Load text from a PDF file using pdf-extract.
///
/// Extracted text is split into blank-line separated blocks; PDFs carry no
/// visibility information, so every block counts as visible.
pub fn load(path: &Path) -> Result<Document, LoadError> {
    let buffer = std::fs::read(path).map_err(|e| LoadError::PdfParse(e.to_string()))?;

    let text = pdf_extract::extract_text_from_mem(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    Ok(Document {
        paragraphs: split_paragraphs(&text),
        selection: Selection::None,
        source: format!("pdf:{}", path.display()),
    })
}
