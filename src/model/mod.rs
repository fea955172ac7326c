//! Intermediate document model for Word documents.
//!
//! The structured parser converts `word/document.xml` into these structures,
//! and `Document::plain_text` flattens them to the final text blob.

mod document;
mod metadata;
mod table;

pub use document::*;
pub use metadata::*;
pub use table::*;
