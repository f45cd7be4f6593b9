//! The flattening engine: one traversal turns a parsed DOM into
//! [`DocumentContent`].
//!
//! Every callback updates tracker/indexer state first and appends text
//! second on enter, and appends text first and completes state second on
//! exit. That sequencing is what makes the recorded offsets valid: all text
//! a tag produces, including its own mandated newlines, lands between its
//! begin and end capture.

mod classify;
mod index;
mod tags;
mod walk;
mod wrap;

pub(crate) use classify::{ElementKind, classify};

use std::borrow::Cow;
use std::collections::BTreeMap;

use html5ever::tendril::TendrilSink;
use html5ever::{Attribute, ParseOpts, parse_document};
use log::debug;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use url::Url;

use crate::content::{COLUMN_INDEX_ATTR, DocumentContent, LINE_INDEX_ATTR, ROW_INDEX_ATTR};
use crate::error::{FlattenError, Result};
use crate::options::FlattenOptions;
use index::{LineCounter, TableGrid};
use tags::TagTracker;
use walk::{NodeVisitor, traverse};
use wrap::TextAccumulator;

/// Parses `html` and flattens the resulting document.
///
/// # Errors
///
/// Returns [`FlattenError::Parse`] when the input cannot be read into a DOM.
pub fn flatten_html(html: &str, options: &FlattenOptions) -> Result<DocumentContent> {
    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| FlattenError::Parse(e.to_string()))?;
    Ok(flatten_dom(&dom.document, options))
}

/// Flattens an already-parsed tree rooted at `root`.
///
/// `root` is typically the document handle of an [`RcDom`], but any subtree
/// works; the root element itself is tagged like every other element.
#[must_use]
pub fn flatten_dom(root: &Handle, options: &FlattenOptions) -> DocumentContent {
    let mut visitor = FlattenVisitor::new(options);
    traverse(root, &mut visitor);
    let content = visitor.finish();
    debug!(
        "flattened document: {} bytes of text, {} tags",
        content.text.len(),
        content.tags.len()
    );
    content
}

/// The traversal instance: exclusively owns all mutable flattening state.
struct FlattenVisitor<'a> {
    options: &'a FlattenOptions,
    text: TextAccumulator,
    tags: TagTracker,
    grid: TableGrid,
    lines: LineCounter,
    /// Number of open `script`/`style` ancestors; their text is code.
    raw_text_depth: usize,
}

impl<'a> FlattenVisitor<'a> {
    fn new(options: &'a FlattenOptions) -> Self {
        Self {
            options,
            text: TextAccumulator::new(options.wrap_width),
            tags: TagTracker::default(),
            grid: TableGrid::default(),
            lines: LineCounter::default(),
            raw_text_depth: 0,
        }
    }

    fn finish(self) -> DocumentContent {
        DocumentContent {
            text: self.text.into_text(),
            tags: self.tags.into_tags(),
        }
    }

    /// Opens the tag and stamps synthetic indices, before any text moves.
    fn open_tag(&mut self, name: &str, kind: ElementKind, attrs: &[Attribute]) {
        let attributes: BTreeMap<String, String> = attrs
            .iter()
            .map(|a| (a.name.local.to_string(), a.value.to_string()))
            .collect();
        self.tags.open(name, self.text.len(), attributes);

        match kind {
            ElementKind::Table => self.grid.enter_table(),
            ElementKind::Row => self.tags.stamp(ROW_INDEX_ATTR, self.grid.row()),
            ElementKind::Cell => {
                let column = self.grid.next_column();
                self.tags.stamp(COLUMN_INDEX_ATTR, column);
                self.tags.stamp(ROW_INDEX_ATTR, self.grid.row());
            }
            ElementKind::Line => {
                let line = self.lines.next();
                self.tags.stamp(LINE_INDEX_ATTR, line);
            }
            _ => {}
        }
    }

    /// Completes the tag, after all of its text (children and exit rules
    /// included) has been appended.
    fn close_tag(&mut self, name: &str, kind: ElementKind) {
        self.tags.close(name, self.text.len(), self.text.as_str());

        match kind {
            ElementKind::Table => self.grid.exit_table(),
            ElementKind::Row => self.grid.end_row(),
            _ => {}
        }
    }

    /// Resolves an `href` the way a base-aware parser exposes absolute URLs:
    /// unresolvable targets become the empty string, never an error.
    fn resolve_href(&self, href: Option<&str>) -> String {
        let Some(href) = href else {
            return String::new();
        };
        match &self.options.base_url {
            Some(base) => base
                .join(href)
                .map(|url| url.to_string())
                .unwrap_or_default(),
            None => Url::parse(href)
                .map(|url| url.to_string())
                .unwrap_or_default(),
        }
    }
}

impl NodeVisitor for FlattenVisitor<'_> {
    fn enter(&mut self, node: &Handle, _depth: usize) {
        match &node.data {
            NodeData::Text { contents } => {
                if self.raw_text_depth == 0 {
                    let contents = contents.borrow();
                    self.text.append(&normalize_whitespace(&contents));
                }
            }
            NodeData::Element { name, attrs, .. } => {
                let name = &*name.local;
                let kind = classify(name);
                self.open_tag(name, kind, &attrs.borrow());
                match kind {
                    ElementKind::ListItem => self.text.append("\n * "),
                    ElementKind::Term => self.text.append("  "),
                    ElementKind::Block | ElementKind::Row => self.text.append("\n"),
                    ElementKind::RawText => self.raw_text_depth += 1,
                    _ => {}
                }
            }
            // Document roots, comments, doctypes and processing instructions
            // produce neither text nor tags.
            _ => {}
        }
    }

    fn exit(&mut self, node: &Handle, _depth: usize) {
        if let NodeData::Element { name, attrs, .. } = &node.data {
            let name = &*name.local;
            let kind = classify(name);
            match kind {
                ElementKind::Break
                | ElementKind::Definition
                | ElementKind::Term
                | ElementKind::Block => self.text.append("\n"),
                ElementKind::Anchor => {
                    let href = attr_value(&attrs.borrow(), "href");
                    let resolved = self.resolve_href(href.as_deref());
                    self.text.append(&format!(" <{resolved}>"));
                }
                ElementKind::RawText => self.raw_text_depth -= 1,
                _ => {}
            }
            self.close_tag(name, kind);
        }
    }
}

fn attr_value(attrs: &[Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| a.value.to_string())
}

fn is_collapsible(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r')
}

/// Collapses runs of ASCII whitespace to a single space, untrimmed.
///
/// A whitespace-only node becomes exactly `" "`, which the accumulator's
/// lone-space rule then drops where it would pile up.
fn normalize_whitespace(text: &str) -> Cow<'_, str> {
    let mut prev_ws = false;
    let needs_work = text.chars().any(|c| {
        let ws = is_collapsible(c);
        let collapse = ws && (prev_ws || c != ' ');
        prev_ws = ws;
        collapse
    });
    if !needs_work {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut prev_ws = false;
    for c in text.chars() {
        if is_collapsible(c) {
            if !prev_ws {
                result.push(' ');
            }
            prev_ws = true;
        } else {
            result.push(c);
            prev_ws = false;
        }
    }
    Cow::Owned(result)
}
