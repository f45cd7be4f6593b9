//! The tag tracker: open-tag stack plus the emission-ordered tag list.

use std::collections::BTreeMap;

use crate::content::Tag;

/// Tracks open tags and completes them into an ordered list.
///
/// Each opened tag is appended to the output list immediately and completed
/// in place on close, so the final order is tag-open order, not close order.
/// The open stack holds indices into that list; enter/exit symmetry of the
/// traversal guarantees LIFO pairing, and a violation panics rather than
/// producing a silently desynchronized offset table.
#[derive(Debug, Default)]
pub(crate) struct TagTracker {
    tags: Vec<Tag>,
    open: Vec<usize>,
}

impl TagTracker {
    /// Opens a tag at `begin`, with a copy of the source attributes.
    pub(crate) fn open(&mut self, name: &str, begin: usize, attributes: BTreeMap<String, String>) {
        self.open.push(self.tags.len());
        self.tags.push(Tag {
            name: name.to_string(),
            begin,
            end: begin,
            text: String::new(),
            attributes,
        });
    }

    /// Stamps a synthetic attribute onto the innermost open tag.
    pub(crate) fn stamp(&mut self, key: &str, value: usize) {
        let idx = *self
            .open
            .last()
            .expect("no open tag to stamp an index attribute onto");
        self.tags[idx]
            .attributes
            .insert(key.to_string(), value.to_string());
    }

    /// Closes the innermost open tag at `end`, capturing its covered text
    /// from the full buffer.
    pub(crate) fn close(&mut self, name: &str, end: usize, buffer: &str) {
        let idx = self
            .open
            .pop()
            .unwrap_or_else(|| panic!("tag stack underflow on </{name}>"));
        let tag = &mut self.tags[idx];
        assert!(
            tag.name.eq_ignore_ascii_case(name),
            "tag stack mismatch: opened <{}>, closing </{name}>",
            tag.name
        );
        tag.end = end;
        tag.text = buffer[tag.begin..end].to_string();
    }

    /// Finishes tracking and returns the completed list.
    pub(crate) fn into_tags(self) -> Vec<Tag> {
        assert!(
            self.open.is_empty(),
            "{} tag(s) left open at end of traversal",
            self.open.len()
        );
        self.tags
    }
}
