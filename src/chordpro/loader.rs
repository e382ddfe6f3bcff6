//! Document loading utilities
//!
//!     `DocumentLoader` reads source text from a file, reader or string and
//!     hands it to the parser. Loading is the only fallible step: once the text
//!     is in memory, parsing is total and returns a document directly. An I/O
//!     failure of the input transport is reported as a [LoaderError], distinct
//!     from syntactic malformation, which never errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use chordpro_parser::chordpro::loader::DocumentLoader;
//!
//! // From file
//! let doc = DocumentLoader::from_path("song.cho")?.parse();
//!
//! // From string
//! let doc = DocumentLoader::from_string("{title: X}\n").parse();
//! ```

use super::assembling::parse;
use super::ast::Document;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Error that can occur when loading documents.
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error while reading the source.
    Io(String),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

/// Source text holder with a parse shortcut.
#[derive(Debug)]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(DocumentLoader { source })
    }

    /// Load from any sequential reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoaderError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(DocumentLoader { source })
    }

    /// Load from a string.
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// The loaded source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parse the loaded source. Total: always yields a document.
    pub fn parse(&self) -> Document {
        parse(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_parses() {
        let doc = DocumentLoader::from_string("{title: X}\n").parse();
        assert_eq!(doc.title(), Some("X"));
    }

    #[test]
    fn test_from_reader_parses() {
        let doc = DocumentLoader::from_reader("Hello\n".as_bytes())
            .expect("read")
            .parse();
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DocumentLoader::from_path("definitely/not/here.cho").unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }
}
