//! Core text-extraction pipeline for PowerPoint slide decks.
//!
//! A `.pptx` package is a ZIP archive with one XML part per slide
//! (`ppt/slides/slide1.xml`, `slide2.xml`, ...). This crate locates those
//! parts in ascending order, streams through each one's XML keeping only
//! text-run content, and joins the per-slide results with a blank line
//! between slides.
//!
//! The pipeline is sequential and synchronous: one archive handle, owned for
//! the whole run and released on every exit path. A missing slide index ends
//! the walk; every other failure aborts it.
//!
//! # Example
//!
//! ```no_run
//! let text = decktext_core::extract_file("talk.pptx")?;
//! println!("{text}");
//! # Ok::<(), decktext_core::DeckError>(())
//! ```

pub mod archive;
pub mod document;
pub mod error;
pub mod slide;

pub use archive::SlideArchive;
pub use document::{document_text, SLIDE_SEPARATOR};
pub use error::{DeckError, Result};
pub use slide::slide_text;

use std::path::Path;

/// Open a presentation package and extract the text of all its slides.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, is not a valid ZIP
/// archive, or any slide part is corrupt or malformed.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut archive = SlideArchive::open(path)?;
    document_text(&mut archive)
}
