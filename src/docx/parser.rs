//! Structured DOCX parser.

use crate::container::{DocxContainer, DOCUMENT_XML};
use crate::error::{Error, Result};
use crate::model::{Cell, Document, Paragraph, Row, Table};

/// Parser for DOCX (Word) documents.
///
/// Builds a [`Document`] from `word/document.xml` in a single streaming
/// pass. Any archive or XML failure is returned to the caller, which may
/// then fall back to the raw-markup walk in [`super::fallback`].
pub struct DocxParser {
    container: DocxContainer,
}

impl DocxParser {
    /// Open a DOCX file for parsing.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let container = DocxContainer::open(path)?;
        Ok(Self { container })
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = DocxContainer::from_bytes(data)?;
        Ok(Self { container })
    }

    /// Parse the document and return a Document model.
    pub fn parse(&mut self) -> Result<Document> {
        let xml = self.container.read_xml(DOCUMENT_XML)?;
        parse_document_xml(&xml)
    }

    /// Get a reference to the container.
    pub fn container(&self) -> &DocxContainer {
        &self.container
    }
}

/// Parse `word/document.xml` content into a Document.
///
/// Body-level `w:p` elements become paragraphs; top-level `w:tbl` elements
/// become tables, with each cell's paragraphs joined by newlines. Paragraphs
/// inside table cells do not appear in `Document::paragraphs`, and content
/// of tables nested inside cells is not collected (the raw-markup fallback
/// recovers such documents).
pub fn parse_document_xml(xml: &str) -> Result<Document> {
    let mut doc = Document::new();

    let mut reader = quick_xml::Reader::from_str(xml);
    // Keep whitespace: runs may carry xml:space="preserve"
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();

    let mut saw_body = false;
    let mut in_body = false;
    let mut in_text = false;
    let mut in_instr_text = false; // w:instrText holds field codes, not content

    // Body-level paragraph state
    let mut in_paragraph = false;
    let mut para_text = String::new();

    // Table state (collected only at depth 1)
    let mut table_depth: u32 = 0;
    let mut current_table = Table::new();
    let mut current_row = Row::new();
    let mut in_cell = false;
    let mut cell_parts: Vec<String> = Vec::new();
    let mut in_cell_paragraph = false;
    let mut cell_para = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(ref e)) => match e.name().as_ref() {
                b"w:body" => {
                    saw_body = true;
                    in_body = true;
                }
                b"w:tbl" if in_body => {
                    table_depth += 1;
                    if table_depth == 1 {
                        current_table = Table::new();
                    }
                }
                b"w:tr" if table_depth == 1 => {
                    current_row = Row::new();
                }
                b"w:tc" if table_depth == 1 => {
                    in_cell = true;
                    cell_parts.clear();
                }
                b"w:p" if in_body => {
                    if table_depth == 0 {
                        in_paragraph = true;
                        para_text.clear();
                    } else if table_depth == 1 && in_cell {
                        in_cell_paragraph = true;
                        cell_para.clear();
                    }
                }
                b"w:t" => in_text = true,
                b"w:instrText" => in_instr_text = true,
                b"w:tab" => append_literal(
                    "\t",
                    in_paragraph,
                    &mut para_text,
                    in_cell_paragraph,
                    &mut cell_para,
                ),
                b"w:br" | b"w:cr" => append_literal(
                    "\n",
                    in_paragraph,
                    &mut para_text,
                    in_cell_paragraph,
                    &mut cell_para,
                ),
                _ => {}
            },
            Ok(quick_xml::events::Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:body" => saw_body = true,
                b"w:tab" => append_literal(
                    "\t",
                    in_paragraph,
                    &mut para_text,
                    in_cell_paragraph,
                    &mut cell_para,
                ),
                b"w:br" | b"w:cr" => append_literal(
                    "\n",
                    in_paragraph,
                    &mut para_text,
                    in_cell_paragraph,
                    &mut cell_para,
                ),
                _ => {}
            },
            Ok(quick_xml::events::Event::Text(ref e)) => {
                if in_text && !in_instr_text {
                    let text = e.unescape().map_err(|e| Error::XmlParse(e.to_string()))?;
                    append_literal(
                        &text,
                        in_paragraph,
                        &mut para_text,
                        in_cell_paragraph,
                        &mut cell_para,
                    );
                }
            }
            Ok(quick_xml::events::Event::End(ref e)) => match e.name().as_ref() {
                b"w:body" => in_body = false,
                b"w:t" => in_text = false,
                b"w:instrText" => in_instr_text = false,
                b"w:p" => {
                    if in_paragraph {
                        doc.add_paragraph(Paragraph::with_text(std::mem::take(&mut para_text)));
                        in_paragraph = false;
                    } else if in_cell_paragraph {
                        cell_parts.push(std::mem::take(&mut cell_para));
                        in_cell_paragraph = false;
                    }
                }
                b"w:tc" if table_depth == 1 => {
                    current_row.add_cell(Cell::with_text(cell_parts.join("\n")));
                    in_cell = false;
                }
                b"w:tr" if table_depth == 1 => {
                    current_table.add_row(std::mem::take(&mut current_row));
                }
                b"w:tbl" if table_depth > 0 => {
                    if table_depth == 1 {
                        doc.add_table(std::mem::take(&mut current_table));
                    }
                    table_depth -= 1;
                }
                _ => {}
            },
            Ok(quick_xml::events::Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    // A document part without a body is not a parseable Word document;
    // report it so the caller can try the raw-markup fallback.
    if !saw_body {
        return Err(Error::XmlParse("missing w:body element".to_string()));
    }

    Ok(doc)
}

/// Append text to whichever paragraph accumulator is active.
fn append_literal(
    text: &str,
    in_paragraph: bool,
    para_text: &mut String,
    in_cell_paragraph: bool,
    cell_para: &mut String,
) {
    if in_paragraph {
        para_text.push_str(text);
    } else if in_cell_paragraph {
        cell_para.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document_xml(body: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{}</w:body></w:document>",
            body
        )
    }

    #[test]
    fn test_parse_paragraphs() {
        let xml = document_xml(
            "<w:p><w:r><w:t>Hello</w:t></w:r><w:r><w:t xml:space=\"preserve\"> World</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Second</w:t></w:r></w:p>",
        );
        let doc = parse_document_xml(&xml).unwrap();

        assert_eq!(doc.paragraphs.len(), 2);
        assert_eq!(doc.paragraphs[0].text, "Hello World");
        assert_eq!(doc.paragraphs[1].text, "Second");
        assert!(doc.tables.is_empty());
    }

    #[test]
    fn test_parse_table() {
        let xml = document_xml(
            "<w:tbl>\
             <w:tr><w:tc><w:p><w:r><w:t>A</w:t></w:r></w:p></w:tc>\
                   <w:tc><w:p><w:r><w:t>B</w:t></w:r></w:p></w:tc></w:tr>\
             <w:tr><w:tc><w:p><w:r><w:t>C</w:t></w:r></w:p></w:tc>\
                   <w:tc><w:p><w:r><w:t>D</w:t></w:r></w:p></w:tc></w:tr>\
             </w:tbl>",
        );
        let doc = parse_document_xml(&xml).unwrap();

        assert!(doc.paragraphs.is_empty());
        assert_eq!(doc.tables.len(), 1);
        assert_eq!(doc.tables[0].row_count(), 2);
        assert_eq!(doc.tables[0].rows[0].cells[0].text, "A");
        assert_eq!(doc.tables[0].rows[1].cells[1].text, "D");
    }

    #[test]
    fn test_cell_paragraphs_joined_by_newline() {
        let xml = document_xml(
            "<w:tbl><w:tr><w:tc>\
             <w:p><w:r><w:t>line1</w:t></w:r></w:p>\
             <w:p><w:r><w:t>line2</w:t></w:r></w:p>\
             </w:tc></w:tr></w:tbl>",
        );
        let doc = parse_document_xml(&xml).unwrap();
        assert_eq!(doc.tables[0].rows[0].cells[0].text, "line1\nline2");
    }

    #[test]
    fn test_cell_paragraphs_not_in_body_paragraphs() {
        let xml = document_xml(
            "<w:p><w:r><w:t>body</w:t></w:r></w:p>\
             <w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>",
        );
        let doc = parse_document_xml(&xml).unwrap();

        assert_eq!(doc.paragraphs.len(), 1);
        assert_eq!(doc.paragraphs[0].text, "body");
        assert_eq!(doc.tables[0].rows[0].cells[0].text, "cell");
    }

    #[test]
    fn test_tab_and_break_expansion() {
        let xml = document_xml(
            "<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p>",
        );
        let doc = parse_document_xml(&xml).unwrap();
        assert_eq!(doc.paragraphs[0].text, "a\tb\nc");
    }

    #[test]
    fn test_field_codes_skipped() {
        let xml = document_xml(
            "<w:p><w:r><w:instrText>PAGEREF _Toc1</w:instrText></w:r>\
             <w:r><w:t>visible</w:t></w:r></w:p>",
        );
        let doc = parse_document_xml(&xml).unwrap();
        assert_eq!(doc.paragraphs[0].text, "visible");
    }

    #[test]
    fn test_nested_table_content_not_collected() {
        let xml = document_xml(
            "<w:tbl><w:tr><w:tc>\
             <w:p><w:r><w:t>outer</w:t></w:r></w:p>\
             <w:tbl><w:tr><w:tc><w:p><w:r><w:t>inner</w:t></w:r></w:p></w:tc></w:tr></w:tbl>\
             </w:tc></w:tr></w:tbl>",
        );
        let doc = parse_document_xml(&xml).unwrap();

        assert_eq!(doc.tables.len(), 1);
        assert_eq!(doc.tables[0].rows[0].cells[0].text, "outer");
    }

    #[test]
    fn test_missing_body_is_an_error() {
        let xml = "<w:document xmlns:w=\"http://x\"><w:p><w:r><w:t>x</w:t></w:r></w:p></w:document>";
        assert!(matches!(
            parse_document_xml(xml),
            Err(Error::XmlParse(_))
        ));
    }

    #[test]
    fn test_empty_self_closing_body() {
        let doc = parse_document_xml("<w:document><w:body/></w:document>").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let bad = parse_document_xml("<w:document><w:body></w:p></w:document>");
        assert!(matches!(bad, Err(Error::XmlParse(_))));
    }

    #[test]
    fn test_parser_from_bytes_missing_entry() {
        use std::io::{Cursor, Write};
        use zip::write::SimpleFileOptions;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let data = writer.finish().unwrap().into_inner();

        let mut parser = DocxParser::from_bytes(data).unwrap();
        assert!(matches!(parser.parse(), Err(Error::MissingComponent(_))));
    }
}
