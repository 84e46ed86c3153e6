//! ZIP archive access for presentation packages.
//!
//! A `.pptx` file is a ZIP archive; slide parts live under `ppt/slides/`.
//! This module owns the random-access handle and exposes exact-name member
//! reads with a structured not-found signal.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{DeckError, Result};

/// Random-access handle over an opened presentation package.
///
/// The underlying reader is owned for the lifetime of the handle and released
/// on drop, on success and failure paths alike.
#[derive(Debug)]
pub struct SlideArchive<R: Read + Seek> {
    inner: ZipArchive<R>,
}

impl SlideArchive<File> {
    /// Open a presentation package from the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Io`] if the file cannot be opened and
    /// [`DeckError::InvalidArchive`] if it is not a readable ZIP archive.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: Read + Seek> SlideArchive<R> {
    /// Create a handle from any seekable reader.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidArchive`] if the reader's contents are not
    /// a readable ZIP archive.
    pub fn from_reader(reader: R) -> Result<Self> {
        let inner = ZipArchive::new(reader)?;
        log::debug!("opened archive with {} members", inner.len());
        Ok(Self { inner })
    }

    /// Number of members in the archive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the archive has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    /// Read a member's full decompressed contents by exact name.
    ///
    /// Member names are case-sensitive full paths within the archive, e.g.
    /// `ppt/slides/slide7.xml`. Returns `Ok(None)` when no member has that
    /// name, so callers can tell a missing member apart from an unreadable
    /// one. The archive directory is never mutated.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidArchive`] for a corrupt entry and
    /// [`DeckError::Io`] when the decompressed stream cannot be read.
    pub fn read_member(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        let mut member = match self.inner.by_name(name) {
            Ok(member) => member,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(DeckError::InvalidArchive(e)),
        };

        let mut bytes = Vec::new();
        member.read_to_end(&mut bytes)?;
        Ok(Some(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::{SimpleFileOptions, ZipWriter};

    /// Helper to build an in-memory archive from (name, contents) pairs.
    fn archive_with(members: &[(&str, &str)]) -> SlideArchive<Cursor<Vec<u8>>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, contents) in members {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(contents.as_bytes()).unwrap();
        }
        let cursor = zip.finish().unwrap();
        SlideArchive::from_reader(cursor).unwrap()
    }

    #[test]
    fn test_read_existing_member() {
        let mut archive = archive_with(&[("ppt/slides/slide1.xml", "<sld/>")]);

        let bytes = archive.read_member("ppt/slides/slide1.xml").unwrap();
        assert_eq!(bytes.as_deref(), Some(b"<sld/>".as_slice()));
    }

    #[test]
    fn test_missing_member_is_none_not_error() {
        let mut archive = archive_with(&[("ppt/slides/slide1.xml", "<sld/>")]);

        let result = archive.read_member("ppt/slides/slide2.xml").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_member_names_are_exact_and_case_sensitive() {
        let mut archive = archive_with(&[("ppt/slides/slide1.xml", "<sld/>")]);

        assert!(archive.read_member("ppt/slides/Slide1.xml").unwrap().is_none());
        assert!(archive.read_member("slide1.xml").unwrap().is_none());
    }

    #[test]
    fn test_reads_do_not_consume_the_directory() {
        let mut archive = archive_with(&[("ppt/slides/slide1.xml", "first")]);

        let first = archive.read_member("ppt/slides/slide1.xml").unwrap();
        let second = archive.read_member("ppt/slides/slide1.xml").unwrap();
        assert_eq!(first, second);
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn test_invalid_archive_is_distinct_from_not_found() {
        let result = SlideArchive::from_reader(Cursor::new(b"not a zip archive".to_vec()));

        match result {
            Err(DeckError::InvalidArchive(_)) => {}
            other => panic!("Expected InvalidArchive, got {other:?}"),
        }
    }

    #[test]
    fn test_open_nonexistent_path_is_io_error() {
        let result = SlideArchive::open("/nonexistent/deck.pptx");

        match result {
            Err(DeckError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_archive() {
        let archive = archive_with(&[]);
        assert!(archive.is_empty());
        assert_eq!(archive.len(), 0);
    }
}
