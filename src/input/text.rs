use super::{split_paragraphs, Document, LoadError, Selection};
use std::path::Path;

/// Load a UTF-8 plain text file; every blank-line separated block is a paragraph.
pub fn load(path: &Path) -> Result<Document, LoadError> {
    let content = std::fs::read_to_string(path)?;

    Ok(Document {
        paragraphs: split_paragraphs(&content),
        selection: Selection::None,
        source: format!("text:{}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_text_load_paragraphs() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Title\n\nFirst paragraph\ncontinues here.\n\nSecond one.").unwrap();

        let document = load(file.path()).unwrap();
        let texts: Vec<&str> = document.paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Title", "First paragraph continues here.", "Second one."]
        );
        assert!(document.paragraphs.iter().all(|p| p.visible));
        assert!(document.source.starts_with("text:"));
    }

    #[test]
    fn test_text_load_invalid_utf8_is_io_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();
        assert!(matches!(load(file.path()), Err(LoadError::Io(_))));
    }
}
