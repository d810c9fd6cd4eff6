//! Text extraction: turns an uploaded document into plain text.
//!
//! Dispatch is a case-sensitive suffix test on the filename:
//! `.pdf` → per-page text joined by `\n`, `.docx` → body paragraphs joined by `\n`,
//! `.txt` → strict UTF-8. Anything else yields an empty string.

pub mod docx;
pub mod pdf;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to parse PDF: {0}")]
    Pdf(String),

    #[error("Failed to open DOCX archive: {0}")]
    Docx(#[from] zip::result::ZipError),

    #[error("Failed to parse DOCX XML: {0}")]
    DocxXml(#[from] quick_xml::Error),

    #[error("Text file is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("I/O error while reading document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Extraction worker failed: {0}")]
    Worker(String),
}

/// Document formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Returns `None` for unsupported filenames. Matching is case-sensitive.
    pub fn detect(filename: &str) -> Option<Self> {
        if filename.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if filename.ends_with(".docx") {
            Some(Self::Docx)
        } else if filename.ends_with(".txt") {
            Some(Self::PlainText)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::PlainText => "txt",
        }
    }
}

/// Extracts plain text from `content` based on the extension of `filename`.
///
/// Unsupported formats return an empty string rather than an error; use
/// [`DocumentFormat::detect`] first to tell the two cases apart.
pub fn extract_text(filename: &str, content: &[u8]) -> Result<String, ExtractError> {
    let Some(format) = DocumentFormat::detect(filename) else {
        return Ok(String::new());
    };

    let text = match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(content)?,
        DocumentFormat::Docx => docx::extract_docx_text(content)?,
        DocumentFormat::PlainText => String::from_utf8(content.to_vec())?,
    };

    debug!(
        format = format.as_str(),
        bytes = content.len(),
        chars = text.chars().count(),
        "Extracted document text"
    );

    Ok(text)
}

/// Runs [`extract_text`] on the blocking pool. PDF and DOCX parsing are CPU-bound,
/// and a panic inside a parser surfaces as [`ExtractError::Worker`].
pub async fn extract_text_blocking(
    filename: String,
    content: bytes::Bytes,
) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || extract_text(&filename, &content))
        .await
        .map_err(|e| ExtractError::Worker(e.to_string()))?
}
