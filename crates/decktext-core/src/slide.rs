//! Text extraction from a single slide's XML part.
//!
//! Slide parts are PresentationML documents; the only renderable text lives
//! in text-run elements whose local name is `t` (`<a:t>` in the standard
//! namespace prefix). Everything else is formatting markup and is ignored.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{DeckError, Result};

/// Extract the visible text of one slide.
///
/// Streams through the XML as start/end/text events without building a tree,
/// toggling a single "inside text run" flag on `t` elements and accumulating
/// character data while it is set. After the event stream is consumed, all
/// runs of whitespace collapse to single ASCII spaces and the result is
/// trimmed, producing a single-line string per slide.
///
/// The input need not be UTF-8: a byte-order mark wins, then the XML
/// declaration's `encoding` label, then a UTF-8 fallback.
///
/// # Errors
///
/// Returns [`DeckError::Parse`] if the XML is malformed or the bytes cannot
/// be decoded under the detected encoding.
pub fn slide_text(xml: &[u8]) -> Result<String> {
    let xml = decode_xml(xml)?;

    let mut reader = Reader::from_str(&xml);
    reader.trim_text(false); // whitespace inside text runs is significant until normalization

    let mut in_text_run = false;
    let mut collected = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => {
                in_text_run = true;
            }
            Ok(Event::End(e)) if e.local_name().as_ref() == b"t" => {
                in_text_run = false;
                // Keeps adjacent runs from fusing; collapsed by normalization.
                collected.push(' ');
            }
            Ok(Event::Text(e)) if in_text_run => {
                let text = e.unescape().map_err(|err| parse_error(&reader, &err))?;
                collected.push_str(&text);
            }
            Ok(Event::CData(e)) if in_text_run => {
                let text = reader
                    .decoder()
                    .decode(&e)
                    .map_err(|err| parse_error(&reader, &err))?;
                collected.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(parse_error(&reader, &err)),
        }
        buf.clear();
    }

    Ok(normalize_whitespace(&collected))
}

/// Collapse all whitespace runs to single spaces and trim the ends.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_error(reader: &Reader<&[u8]>, err: &quick_xml::Error) -> DeckError {
    DeckError::Parse(format!("at byte {}: {err}", reader.buffer_position()))
}

/// Decode slide XML bytes to UTF-8 before tokenizing.
///
/// Detection order: byte-order mark, then the declared `encoding="..."`
/// label, then UTF-8. Unknown or malformed declarations fall back to UTF-8;
/// bytes the chosen encoding cannot represent are a parse error.
fn decode_xml(xml: &[u8]) -> Result<Cow<'_, str>> {
    let encoding = Encoding::for_bom(xml)
        .map(|(encoding, _bom_length)| encoding)
        .or_else(|| declared_encoding(xml))
        .unwrap_or(UTF_8);

    let (text, actual, had_errors) = encoding.decode(xml);
    if had_errors {
        return Err(DeckError::Parse(format!(
            "content is not valid {}",
            actual.name()
        )));
    }
    Ok(text)
}

/// Pull the encoding label out of an XML declaration, if one is present.
///
/// Works on raw bytes so a non-UTF-8 body cannot derail the scan; the
/// declaration itself is ASCII in every ASCII-compatible encoding, and the
/// non-compatible ones (UTF-16/32) always carry a BOM handled earlier.
fn declared_encoding(xml: &[u8]) -> Option<&'static Encoding> {
    let declaration_end = xml.windows(2).position(|w| w == b"?>")?;
    let declaration = &xml[..declaration_end];
    if !declaration.starts_with(b"<?xml") {
        return None;
    }

    let label_start = declaration.windows(8).position(|w| w == b"encoding")? + 8;
    let rest = &declaration[label_start..];
    let rest = &rest[rest.iter().position(|&b| b == b'=')? + 1..];
    let quote_at = rest.iter().position(|&b| b == b'"' || b == b'\'')?;
    let quote = rest[quote_at];
    let label = &rest[quote_at + 1..];
    let label = &label[..label.iter().position(|&b| b == quote)?];

    Encoding::for_label(label)
}
