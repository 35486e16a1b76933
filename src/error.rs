//! Error types for reading, converting and writing documents.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The converter could not turn its input into HTML.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("input is not valid UTF-8 (invalid byte sequence at offset {offset})")]
    InvalidUtf8 { offset: usize },

    #[error("converter produced invalid UTF-8 (invalid byte sequence at offset {offset})")]
    InvalidOutput { offset: usize },
}

#[derive(Error, Debug)]
pub enum CmsError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to convert markdown: {0}")]
    Conversion(#[from] ConversionError),

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}
