//! Flatten HTML into word-wrapped plain text with parallel tag annotations.
//!
//! One depth-first pass over a parsed document produces two things at once:
//! the flattened text (greedy word wrap, semantic spacing per tag) and, for
//! every source element, a [`Tag`] recording the exact byte span of the text
//! it produced. Table rows and cells are additionally stamped with synthetic
//! `row-index`/`column-index` attributes, nested tables counting
//! independently, and `line` elements with a flat, document-wide
//! `line-index`.
//!
//! # Examples
//!
//! ```rust
//! use html_flatten::{FlattenOptions, flatten_html};
//!
//! let content = flatten_html("<p>Hello</p><p>World</p>", &FlattenOptions::default()).unwrap();
//! assert_eq!(content.text, "\nHello\n\nWorld\n");
//!
//! let paragraphs: Vec<_> = content.tags_named("p").collect();
//! assert_eq!(paragraphs.len(), 2);
//! assert_eq!(&content.text[paragraphs[0].begin..paragraphs[0].end], "\nHello\n");
//! ```
//!
//! Offsets stay valid under wrapping and nesting: a parent's span always
//! covers its descendants' spans, and `tag.text` is always exactly
//! `content.text[tag.begin..tag.end]`.

pub mod error;
pub mod options;
pub mod structure;

mod content;
mod flattener;

pub use content::{COLUMN_INDEX_ATTR, DocumentContent, LINE_INDEX_ATTR, ROW_INDEX_ATTR, Tag};
pub use error::{FlattenError, Result};
pub use flattener::{flatten_dom, flatten_html};
pub use options::FlattenOptions;
