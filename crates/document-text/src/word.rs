//! Word document (OOXML) text extraction
//!
//! Reads `word/document.xml` out of the package and walks it with a pull
//! parser. Paragraphs end with a newline; table cells are separated by a
//! space so cell text does not run together.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use shared_types::{DocumentFormat, ExtractedText, ExtractionError};

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract body text from .docx bytes
pub fn extract_word(bytes: &[u8]) -> Result<ExtractedText, ExtractionError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| word_error(&e))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| word_error(&e))?
        .read_to_string(&mut xml)
        .map_err(|e| word_error(&e))?;

    let text = document_xml_text(&xml)?;
    Ok(ExtractedText::new(&text, 1, DocumentFormat::Docx))
}

/// Collect the visible text of a WordprocessingML body
pub fn document_xml_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"w:t" {
                    in_text_run = true;
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                b"w:tc" => text.push(' '),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let unescaped = t.unescape().map_err(|e| word_error(&e))?;
                text.push_str(&unescaped);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(word_error(&format!(
                    "malformed XML at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    Ok(text)
}

fn word_error(err: &dyn std::fmt::Display) -> ExtractionError {
    ExtractionError::Word(err.to_string())
}
