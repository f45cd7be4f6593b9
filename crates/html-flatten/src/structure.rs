//! Typed view of the tag list for table- and line-aware consumers.
//!
//! `table`, `tr`, `th`/`td` and `line` tags become dedicated structural
//! elements built from their stamped index attributes; every other tag is
//! passed through generically with its raw attributes. A structural tag
//! whose index attribute is missing or non-numeric is a configuration error
//! and fails the whole mapping; indices are never silently defaulted.

use serde::Serialize;

use crate::content::{COLUMN_INDEX_ATTR, LINE_INDEX_ATTR, ROW_INDEX_ATTR, Tag};
use crate::error::{FlattenError, Result};
use crate::flattener::{ElementKind, classify};

/// One tag, viewed structurally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StructuralElement {
    /// A `table` element.
    Table {
        /// Begin offset in the flattened text.
        begin: usize,
        /// End offset in the flattened text.
        end: usize,
    },
    /// A `tr` element.
    Row {
        /// Begin offset in the flattened text.
        begin: usize,
        /// End offset in the flattened text.
        end: usize,
        /// Zero-based row index within the owning table.
        row_index: usize,
    },
    /// A `th` or `td` element.
    Cell {
        /// Begin offset in the flattened text.
        begin: usize,
        /// End offset in the flattened text.
        end: usize,
        /// Zero-based row index within the owning table.
        row_index: usize,
        /// Zero-based column index within the row.
        column_index: usize,
    },
    /// A `line` element.
    Line {
        /// Begin offset in the flattened text.
        begin: usize,
        /// End offset in the flattened text.
        end: usize,
        /// Zero-based document-wide line index.
        line_index: usize,
    },
    /// Any other element, carried with its raw attributes.
    Generic(Tag),
}

/// Maps every tag onto its structural element, in input order.
///
/// # Errors
///
/// [`FlattenError::MissingIndex`] or [`FlattenError::InvalidIndex`] when a
/// structural tag violates the index-attribute contract.
pub fn map_structural(tags: &[Tag]) -> Result<Vec<StructuralElement>> {
    tags.iter().map(element_for).collect()
}

fn element_for(tag: &Tag) -> Result<StructuralElement> {
    let element = match classify(&tag.name) {
        ElementKind::Table => StructuralElement::Table {
            begin: tag.begin,
            end: tag.end,
        },
        ElementKind::Row => StructuralElement::Row {
            begin: tag.begin,
            end: tag.end,
            row_index: index_attr(tag, ROW_INDEX_ATTR)?,
        },
        ElementKind::Cell => StructuralElement::Cell {
            begin: tag.begin,
            end: tag.end,
            row_index: index_attr(tag, ROW_INDEX_ATTR)?,
            column_index: index_attr(tag, COLUMN_INDEX_ATTR)?,
        },
        ElementKind::Line => StructuralElement::Line {
            begin: tag.begin,
            end: tag.end,
            line_index: index_attr(tag, LINE_INDEX_ATTR)?,
        },
        _ => StructuralElement::Generic(tag.clone()),
    };
    Ok(element)
}

fn index_attr(tag: &Tag, attribute: &'static str) -> Result<usize> {
    let value = tag
        .attributes
        .get(attribute)
        .ok_or_else(|| FlattenError::MissingIndex {
            name: tag.name.clone(),
            begin: tag.begin,
            end: tag.end,
            attribute,
        })?;
    value.parse().map_err(|_| FlattenError::InvalidIndex {
        name: tag.name.clone(),
        attribute,
        value: value.clone(),
    })
}
