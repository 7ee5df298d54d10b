use super::LoadError;

/// Reads the system clipboard as the user's "selection".
pub fn read_text() -> Result<String, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))
}
