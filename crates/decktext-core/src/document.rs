//! Walks the slide parts of a package in order and joins their text.

use std::io::{Read, Seek};

use crate::archive::SlideArchive;
use crate::error::{DeckError, Result};
use crate::slide::slide_text;

/// Separator inserted between consecutive slides, never after the last.
pub const SLIDE_SEPARATOR: &str = "\n\n";

/// Member name of the slide with the given 1-based index.
fn slide_member_name(index: usize) -> String {
    format!("ppt/slides/slide{index}.xml")
}

/// Extract and join the text of every slide in the package.
///
/// Slides are read in ascending index order starting at 1; the first missing
/// index ends the walk, so a deck with `slide1.xml` and `slide3.xml` but no
/// `slide2.xml` yields only slide 1's text. Termination is guaranteed: the
/// archive is finite and indices only increase.
///
/// # Errors
///
/// Any failure other than a missing slide part aborts the whole run: a
/// corrupt member, an unreadable stream, or malformed slide XML. There is no
/// per-slide fault isolation.
pub fn document_text<R: Read + Seek>(archive: &mut SlideArchive<R>) -> Result<String> {
    let mut slides = Vec::new();

    for index in 1usize.. {
        let member = slide_member_name(index);
        let Some(bytes) = archive.read_member(&member)? else {
            log::debug!("no {member}; deck has {} slides", slides.len());
            break;
        };

        let text = slide_text(&bytes).map_err(|e| add_member_context(&member, e))?;
        log::debug!("slide {index}: {} chars", text.len());
        slides.push(text);
    }

    Ok(slides.join(SLIDE_SEPARATOR))
}

/// Attach the member name to parse diagnostics so failures name the slide.
fn add_member_context(member: &str, err: DeckError) -> DeckError {
    match err {
        DeckError::Parse(msg) => DeckError::Parse(format!("{member}: {msg}")),
        other => other,
    }
}
