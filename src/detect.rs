//! Format detection for Word documents.

use std::path::Path;

/// Recognized Word document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    /// Office Open XML document (.docx), a ZIP archive of XML parts.
    Docx,
    /// Legacy binary Word document (.doc). Recognized but never extracted.
    Doc,
}

impl DocFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            DocFormat::Docx => "docx",
            DocFormat::Doc => "doc",
        }
    }

    /// Returns a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            DocFormat::Docx => "Word Document",
            DocFormat::Doc => "Legacy Word Document",
        }
    }

    /// Detect the format from the file extension (case-insensitive).
    ///
    /// Returns `None` for unrecognized extensions.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "docx" => Some(DocFormat::Docx),
            "doc" => Some(DocFormat::Doc),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Lowercased extension of a path with a leading dot, or an empty string.
///
/// Used for the "Unsupported file format" message so unrecognized inputs
/// are reported the way the caller named them.
pub fn extension_of(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display() {
        assert_eq!(DocFormat::Docx.to_string(), "Word Document");
        assert_eq!(DocFormat::Doc.to_string(), "Legacy Word Document");
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(DocFormat::Docx.extension(), "docx");
        assert_eq!(DocFormat::Doc.extension(), "doc");
    }

    #[test]
    fn test_from_path() {
        assert_eq!(DocFormat::from_path("report.docx"), Some(DocFormat::Docx));
        assert_eq!(DocFormat::from_path("REPORT.DOCX"), Some(DocFormat::Docx));
        assert_eq!(DocFormat::from_path("old.doc"), Some(DocFormat::Doc));
        assert_eq!(DocFormat::from_path("notes.pdf"), None);
        assert_eq!(DocFormat::from_path("no_extension"), None);
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("notes.PDF"), ".pdf");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("no_extension"), "");
    }
}
