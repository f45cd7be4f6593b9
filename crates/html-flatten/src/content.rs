//! Result types: the flattened text and its tag annotations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute key carrying the zero-based row index stamped on `tr` and
/// `th`/`td` tags.
pub const ROW_INDEX_ATTR: &str = "row-index";

/// Attribute key carrying the zero-based column index stamped on `th`/`td`
/// tags.
pub const COLUMN_INDEX_ATTR: &str = "column-index";

/// Attribute key carrying the zero-based document-wide line index stamped on
/// `line` tags.
pub const LINE_INDEX_ATTR: &str = "line-index";

/// One source element, located in the flattened text.
///
/// `begin` and `end` are byte offsets into [`DocumentContent::text`]; both
/// always fall on UTF-8 boundaries, so `&text[begin..end]` is valid and equal
/// to [`Tag::text`]. A parent's span covers every descendant's span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Element name, as reported by the parser.
    pub name: String,
    /// Offset of the first byte of covered text.
    pub begin: usize,
    /// Offset one past the last byte of covered text.
    pub end: usize,
    /// The flattened text this element produced, `text[begin..end]`.
    pub text: String,
    /// Source attributes, plus any synthetic `*-index` keys.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Tag {
    /// Looks up an attribute value.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// The result of flattening one document: the wrapped plain text and all
/// element tags in tag-open order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentContent {
    /// Flattened, word-wrapped text.
    pub text: String,
    /// Every element tag, ordered by begin offset (tag-open order).
    pub tags: Vec<Tag>,
}

impl DocumentContent {
    /// Tags matching a name, case-insensitively.
    pub fn tags_named(&self, name: &str) -> impl Iterator<Item = &Tag> {
        self.tags
            .iter()
            .filter(move |tag| tag.name.eq_ignore_ascii_case(name))
    }
}
