use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use super::ExtractError;

/// Main document part inside the OOXML container.
const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts the text of every body paragraph in document order, joined by `\n`.
pub fn extract_docx_text(content: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(content))?;

    let mut xml = String::new();
    let mut part = archive.by_name(DOCUMENT_PART)?;
    part.read_to_string(&mut xml)?;

    Ok(body_paragraphs(&xml)?.join("\n"))
}

/// Collects the text of `w:p` elements that sit directly in the document body.
///
/// Paragraphs inside tables or nested in text boxes are skipped. Within a run,
/// `w:tab` becomes `\t` and `w:br` / `w:cr` become `\n`.
fn body_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut paragraph_depth = 0usize;
    let mut table_depth = 0usize;
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        let collecting = paragraph_depth == 1 && table_depth == 0;

        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => {
                    paragraph_depth += 1;
                    if paragraph_depth == 1 {
                        current.clear();
                    }
                }
                b"w:tbl" => table_depth += 1,
                b"w:r" => run_depth += 1,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    if collecting {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                    paragraph_depth = paragraph_depth.saturating_sub(1);
                }
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:r" => run_depth = run_depth.saturating_sub(1),
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if paragraph_depth == 0 && table_depth == 0 => {
                    paragraphs.push(String::new());
                }
                b"w:tab" if collecting && run_depth > 0 => current.push('\t'),
                b"w:br" | b"w:cr" if collecting && run_depth > 0 => current.push('\n'),
                _ => {}
            },
            Event::Text(e) if collecting && in_text => {
                current.push_str(&e.unescape()?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
