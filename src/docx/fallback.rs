//! Raw-markup fallback extraction.
//!
//! Used when the structured parser fails on a document. The whole
//! `word/document.xml` part is parsed into an owned [`RawElement`] tree and
//! text is recovered through three progressively looser tiers:
//!
//! 1. Every namespace-qualified paragraph element, anywhere in the tree,
//!    flattened to its descendant text.
//! 2. If no paragraphs were found, the concatenated text of every element
//!    under the root.
//! 3. If that also yields nothing, every element's direct text and tail
//!    text as separate items.
//!
//! Word documents vary in how paragraph markup is nested (inside tables,
//! headers, or unusual structural wrappers); degrading from structural to
//! textual scraping recovers *some* content rather than none.

use crate::error::{Error, Result};
use quick_xml::events::Event;
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

/// WordprocessingML namespace URI for the main document content.
pub const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// A node in a raw markup tree.
///
/// `text` holds character data before the first child; `tail` holds
/// character data between this element's end tag and the next sibling.
/// The structure is an owned tree with no cycles.
#[derive(Debug, Clone, Default)]
pub struct RawElement {
    /// Namespace URI the element's tag is bound to, if any.
    pub namespace: Option<String>,
    /// Local tag name (without prefix).
    pub name: String,
    /// Character data before the first child.
    pub text: String,
    /// Character data after this element, before the next sibling.
    pub tail: String,
    /// Child elements, in document order.
    pub children: Vec<RawElement>,
}

impl RawElement {
    /// Create an element with a qualified name and no content.
    pub fn new(namespace: Option<String>, name: impl Into<String>) -> Self {
        Self {
            namespace,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse an XML string into a tree rooted at the document element.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = NsReader::from_str(xml);
        reader.config_mut().trim_text(false);

        let mut buf = Vec::new();
        let mut stack: Vec<RawElement> = Vec::new();
        let mut root: Option<RawElement> = None;

        loop {
            match reader.read_resolved_event_into(&mut buf) {
                Ok((resolve, Event::Start(ref e))) => {
                    stack.push(RawElement::new(
                        namespace_of(&resolve),
                        String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                    ));
                }
                Ok((resolve, Event::Empty(ref e))) => {
                    let elem = RawElement::new(
                        namespace_of(&resolve),
                        String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                    );
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(elem),
                        None => {
                            if root.is_none() {
                                root = Some(elem);
                            }
                        }
                    }
                }
                Ok((_, Event::Text(ref e))) => {
                    let text = e.unescape().map_err(|e| Error::XmlParse(e.to_string()))?;
                    append_character_data(&mut stack, &text);
                }
                Ok((_, Event::CData(e))) => {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    append_character_data(&mut stack, &text);
                }
                Ok((_, Event::End(_))) => {
                    if let Some(elem) = stack.pop() {
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(elem),
                            None => {
                                if root.is_none() {
                                    root = Some(elem);
                                }
                            }
                        }
                    }
                }
                Ok((_, Event::Eof)) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::XmlParse(e.to_string())),
            }
            buf.clear();
        }

        root.ok_or_else(|| Error::XmlParse("no root element".to_string()))
    }

    /// Check whether this element has the given namespace URI and local name.
    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.name == name && self.namespace.as_deref() == Some(namespace)
    }

    /// Concatenated descendant text: this element's text, then each child
    /// subtree followed by that child's tail, depth-first. The element's own
    /// tail is not included.
    pub fn descendant_text(&self) -> String {
        let mut out = String::new();
        self.push_descendant_text(&mut out);
        out
    }

    fn push_descendant_text(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.push_descendant_text(out);
            out.push_str(&child.tail);
        }
    }
}

/// Direct character data goes to the open element's `text` until its first
/// child closes; afterwards it belongs to the last child's `tail`.
fn append_character_data(stack: &mut [RawElement], data: &str) {
    if let Some(top) = stack.last_mut() {
        match top.children.last_mut() {
            Some(last_child) => last_child.tail.push_str(data),
            None => top.text.push_str(data),
        }
    }
}

fn namespace_of(resolve: &ResolveResult) -> Option<String> {
    match resolve {
        ResolveResult::Bound(ns) => {
            Some(String::from_utf8_lossy(ns.clone().into_inner()).into_owned())
        }
        _ => None,
    }
}

/// Collect text items from a raw markup tree using the three-tier strategy.
///
/// Items are trimmed and non-empty; the caller joins them with blank lines.
pub fn collect_text(root: &RawElement) -> Vec<String> {
    // Tier 1: namespace-qualified paragraph scan
    let mut paragraphs = Vec::new();
    find_paragraphs(root, &mut paragraphs);

    let mut parts: Vec<String> = paragraphs
        .iter()
        .map(|p| p.descendant_text().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    // Tier 2: concatenated text fields of the whole tree
    if parts.is_empty() {
        let mut all = String::new();
        collect_text_fields(root, &mut all);
        let all = all.trim();
        if !all.is_empty() {
            parts.push(all.to_string());
        }
    }

    // Tier 3: per-element walk over direct text and tail text
    if parts.is_empty() {
        collect_text_and_tails(root, &mut parts);
    }

    parts
}

/// Parse raw document markup and return the collected text joined by
/// blank-line separators.
pub fn extract_from_str(xml: &str) -> Result<String> {
    let root = RawElement::parse(xml)?;
    Ok(collect_text(&root).join("\n\n"))
}

/// Depth-first scan for WordprocessingML paragraph elements. Matches are
/// descended into as well, so paragraphs nested in unusual wrappers (or in
/// other paragraphs) are still found.
fn find_paragraphs<'a>(elem: &'a RawElement, acc: &mut Vec<&'a RawElement>) {
    if elem.is(WORDML_NS, "p") {
        acc.push(elem);
    }
    for child in &elem.children {
        find_paragraphs(child, acc);
    }
}

fn collect_text_fields(elem: &RawElement, out: &mut String) {
    out.push_str(&elem.text);
    for child in &elem.children {
        collect_text_fields(child, out);
    }
}

fn collect_text_and_tails(elem: &RawElement, parts: &mut Vec<String>) {
    let text = elem.text.trim();
    if !text.is_empty() {
        parts.push(text.to_string());
    }
    let tail = elem.tail.trim();
    if !tail.is_empty() {
        parts.push(tail.to_string());
    }
    for child in &elem.children {
        collect_text_and_tails(child, parts);
    }
}
