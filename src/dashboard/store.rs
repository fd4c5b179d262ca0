//! File-backed persistence for the last successfully queried symbol.

use std::path::PathBuf;

use crate::core::EbError;

/// Stores the most recently successful stock symbol in a small text file.
///
/// The value is read at query time when the user's input resolves to the
/// fallback, and overwritten only after a fetch succeeds. A missing file is
/// the first-run state, not an error.
#[derive(Debug, Clone)]
pub struct SymbolStore {
    path: PathBuf,
}

impl SymbolStore {
    /// Creates a store backed by the file at `path`. The file is not touched
    /// until [`load`](Self::load) or [`save`](Self::save) is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the persisted symbol.
    ///
    /// Returns `Ok(None)` when the file does not exist yet or holds only
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`EbError::Io`] for any read failure other than the file
    /// being absent.
    pub fn load(&self) -> Result<Option<String>, EbError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => {
                let symbol = text.trim();
                Ok((!symbol.is_empty()).then(|| symbol.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(EbError::Io(e)),
        }
    }

    /// Overwrites the persisted symbol.
    ///
    /// # Errors
    ///
    /// Returns [`EbError::Io`] if the file cannot be written.
    pub fn save(&self, symbol: &str) -> Result<(), EbError> {
        std::fs::write(&self.path, symbol).map_err(EbError::Io)
    }
}
