//! DOCX (Word) document extraction.
//!
//! Two paths: [`DocxParser`] builds a structured model from
//! `word/document.xml`, and [`fallback`] walks the raw markup when the
//! structured parse fails.

pub mod fallback;

mod parser;

pub use parser::DocxParser;
