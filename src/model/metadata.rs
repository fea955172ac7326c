//! File-level metadata collected during processing.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Metadata about a processed file.
///
/// Populated once per invocation: path fields on stat, the content fields
/// after extraction. Never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Path as given by the caller.
    pub path: String,

    /// File name component of the path.
    pub name: String,

    /// File size in bytes.
    pub size: u64,

    /// Length of the extracted content in bytes.
    pub content_length: usize,

    /// Whether extraction produced usable content.
    pub success: bool,

    /// Error description when the file could not be inspected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileMetadata {
    /// Stat a file and record its path, name, and size.
    ///
    /// On stat failure the error is recorded instead of propagated;
    /// `content_length` and `success` stay at their defaults until
    /// extraction fills them in.
    pub fn for_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match std::fs::metadata(path) {
            Ok(stat) => Self {
                path: path.to_string_lossy().into_owned(),
                name,
                size: stat.len(),
                content_length: 0,
                success: false,
                error: None,
            },
            Err(e) => Self {
                path: path.to_string_lossy().into_owned(),
                name,
                size: 0,
                content_length: 0,
                success: false,
                error: Some(format!("Could not get metadata: {}", e)),
            },
        }
    }
}
