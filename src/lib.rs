//! # unword
//!
//! DOCX plain-text extraction with a raw-XML fallback.
//!
//! This library extracts a single flattened text blob (paragraphs and table
//! contents) from Word documents. A structured parser handles well-formed
//! files; when it fails, a raw markup walk over `word/document.xml` recovers
//! whatever text it can through three progressively looser strategies.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unword::{extract_text, process_document, try_extract_text};
//!
//! // Infallible extraction: errors come back as descriptive strings
//! let text = extract_text("document.docx");
//! println!("{}", text);
//!
//! // Typed-result variant
//! let text = try_extract_text("document.docx")?;
//!
//! // Content plus file metadata
//! let (content, meta) = process_document("document.docx");
//! println!("{} bytes extracted, success={}", meta.content_length, meta.success);
//! # Ok::<(), unword::Error>(())
//! ```
//!
//! Legacy binary `.doc` files are recognized but always reported as
//! unsupported.

pub mod container;
pub mod detect;
pub mod docx;
pub mod error;
pub mod extract;
pub mod model;

// Re-exports
pub use container::{DocxContainer, DOCUMENT_XML};
pub use detect::DocFormat;
pub use docx::fallback::{RawElement, WORDML_NS};
pub use docx::DocxParser;
pub use error::{Error, Result};
pub use extract::{extract_docx, extract_fallback, extract_structured};
pub use model::{Cell, Document, FileMetadata, Paragraph, Row, Table};

use std::path::Path;

/// Extract text from a document, returning a typed result.
///
/// Dispatches on the file extension: `.docx` goes through the structured
/// path with the raw-markup fallback; `.doc` is recognized but unsupported;
/// anything else is unknown. An error is returned only when both extraction
/// tiers fail.
pub fn try_extract_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    match DocFormat::from_path(path) {
        Some(DocFormat::Docx) => match extract::extract_structured(path) {
            Ok(text) => Ok(text),
            Err(err) => {
                log::warn!(
                    "structured extraction failed for {}, trying raw markup fallback: {}",
                    path.display(),
                    err
                );
                extract::extract_fallback(path)
            }
        },
        Some(DocFormat::Doc) => Err(Error::UnsupportedFormat(
            "legacy binary .doc documents".to_string(),
        )),
        None => Err(Error::UnknownFormat),
    }
}

/// Extract text from a document, never failing.
///
/// Failures are reported in the returned string: unsupported extensions as
/// `"Unsupported file format: …"`, extraction failures as the sentinels
/// documented in [`extract`].
pub fn extract_text(path: impl AsRef<Path>) -> String {
    process_document(path).0
}

/// Process a document and return its content together with file metadata.
///
/// The content string is always produced (possibly empty or an
/// error-describing sentinel). The metadata carries path, name, size,
/// content length, and a success flag: true only for a `.docx` input whose
/// extraction yielded non-empty, non-error content. Unsupported formats are
/// reported as content but flagged unsuccessful.
pub fn process_document(path: impl AsRef<Path>) -> (String, FileMetadata) {
    let path = path.as_ref();
    let mut meta = FileMetadata::for_path(path);
    if meta.error.is_some() {
        return (String::new(), meta);
    }

    let format = DocFormat::from_path(path);
    let content = match format {
        Some(DocFormat::Docx) => extract::extract_docx(path),
        Some(DocFormat::Doc) => "Unsupported file format: .doc".to_string(),
        None => format!("Unsupported file format: {}", detect::extension_of(path)),
    };

    meta.content_length = content.len();
    meta.success = matches!(format, Some(DocFormat::Docx))
        && !content.is_empty()
        && !content.starts_with("Error");

    (content, meta)
}
