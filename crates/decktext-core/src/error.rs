//! Error types for slide text extraction.

use thiserror::Error;

/// Errors that can occur while extracting text from a presentation package.
///
/// A missing slide part is deliberately *not* represented here: absence is an
/// expected signal that ends the slide walk, so
/// [`SlideArchive::read_member`](crate::SlideArchive::read_member) reports it
/// as `Ok(None)` instead of an error.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The input is not a readable ZIP archive, or a member entry is corrupt.
    #[error("archive error: {0}")]
    InvalidArchive(#[from] zip::result::ZipError),

    /// Reading the input file or a member's decompressed stream failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Slide XML is malformed, or its bytes cannot be decoded under the
    /// detected encoding.
    #[error("XML parse error: {0}")]
    Parse(String),
}

/// Type alias for [`Result<T, DeckError>`].
pub type Result<T> = std::result::Result<T, DeckError>;
