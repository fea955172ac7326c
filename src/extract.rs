//! Two-tier extraction pipeline for DOCX files.
//!
//! The structured step returns a tagged result; the caller decides to run
//! the raw-markup fallback on failure. Nothing here panics on malformed
//! input: [`extract_docx`] always produces a string, converting terminal
//! fallback errors into the descriptive sentinels callers of the original
//! tool relied on.

use crate::container::{DocxContainer, DOCUMENT_XML};
use crate::docx::{fallback, DocxParser};
use crate::error::{Error, Result};

/// Sentinel returned when the archive lacks the main document markup.
pub const MISSING_DOCUMENT_XML: &str = "Error: Could not find document.xml in DOCX file";

/// Structured extraction: parse the document model and flatten it.
///
/// Fails on any archive or XML problem; callers are expected to fall back
/// to [`extract_fallback`].
pub fn extract_structured(path: impl AsRef<std::path::Path>) -> Result<String> {
    let mut parser = DocxParser::open(path)?;
    let doc = parser.parse()?;
    Ok(doc.plain_text())
}

/// Raw-markup fallback: read `word/document.xml` directly and recover text
/// through the three-tier walk in [`fallback`].
pub fn extract_fallback(path: impl AsRef<std::path::Path>) -> Result<String> {
    let container = DocxContainer::open(path)?;
    let xml = container.read_xml(DOCUMENT_XML)?;
    fallback::extract_from_str(&xml)
}

/// Extract text from a DOCX file, never failing.
///
/// Runs the structured path first; on any error logs a warning and runs the
/// raw-markup fallback. Terminal fallback errors are rendered as sentinel
/// strings: a missing markup entry yields [`MISSING_DOCUMENT_XML`], anything
/// else an `"Error extracting DOCX content: …"` message.
pub fn extract_docx(path: impl AsRef<std::path::Path>) -> String {
    let path = path.as_ref();
    match extract_structured(path) {
        Ok(text) => text,
        Err(err) => {
            log::warn!(
                "structured extraction failed for {}, trying raw markup fallback: {}",
                path.display(),
                err
            );
            match extract_fallback(path) {
                Ok(text) => text,
                Err(Error::MissingComponent(_)) => MISSING_DOCUMENT_XML.to_string(),
                Err(err) => format!("Error extracting DOCX content: {}", err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn write_archive(entries: &[(&str, &str)]) -> tempfile::NamedTempFile {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in entries {
            writer
                .start_file(name.to_string(), SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        let data = writer.finish().unwrap().into_inner();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&data).unwrap();
        file
    }

    const DOC_XML: &str = "<?xml version=\"1.0\"?>\
        <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
        <w:body><w:p><w:r><w:t>Hello</w:t></w:r></w:p></w:body></w:document>";

    #[test]
    fn test_structured_extraction() {
        let file = write_archive(&[(DOCUMENT_XML, DOC_XML)]);
        assert_eq!(extract_structured(file.path()).unwrap(), "Hello");
        assert_eq!(extract_docx(file.path()), "Hello");
    }

    #[test]
    fn test_fallback_agrees_with_structured() {
        let file = write_archive(&[(DOCUMENT_XML, DOC_XML)]);
        assert_eq!(extract_fallback(file.path()).unwrap(), "Hello");
    }

    #[test]
    fn test_missing_document_xml_sentinel() {
        let file = write_archive(&[("word/styles.xml", "<w:styles/>")]);
        assert_eq!(extract_docx(file.path()), MISSING_DOCUMENT_XML);
    }

    #[test]
    fn test_unreadable_file_yields_error_string() {
        let content = extract_docx("/nonexistent/input.docx");
        assert!(content.starts_with("Error extracting DOCX content:"));
    }

    #[test]
    fn test_not_an_archive_yields_error_string() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a zip file").unwrap();

        let content = extract_docx(file.path());
        assert!(content.starts_with("Error extracting DOCX content:"));
    }
}
