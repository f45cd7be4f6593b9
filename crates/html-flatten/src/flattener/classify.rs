//! One-time classification of element names.
//!
//! Every name-triggered behavior keys off [`ElementKind`], so the name is
//! compared once per node instead of once per rule.

use std::borrow::Cow;

/// Closed set of element roles the flattener distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementKind {
    /// `table`: pushes a fresh row/column scope.
    Table,
    /// `tr`: stamped with the current row, newline before content.
    Row,
    /// `th`/`td`: stamped with row and (post-incremented) column.
    Cell,
    /// `line`: stamped with the document-wide line counter.
    Line,
    /// `li`: bullet marker before content.
    ListItem,
    /// `dt`: indented, newline after.
    Term,
    /// `dd`: newline after.
    Definition,
    /// `p`, `h1`..`h5`: newline before and after content.
    Block,
    /// `br`: newline after.
    Break,
    /// `a`: resolved link target appended after content.
    Anchor,
    /// `script`/`style`: tagged, but their text children are code, not
    /// content, and never reach the flattened text.
    RawText,
    /// Anything else: tagged, but no effect on the text.
    Other,
}

/// Lowercases a name only when it is not lowercase already.
pub(crate) fn normalized_name(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

/// Maps an element name onto its [`ElementKind`], case-insensitively.
pub(crate) fn classify(name: &str) -> ElementKind {
    match normalized_name(name).as_ref() {
        "table" => ElementKind::Table,
        "tr" => ElementKind::Row,
        "th" | "td" => ElementKind::Cell,
        "line" => ElementKind::Line,
        "li" => ElementKind::ListItem,
        "dt" => ElementKind::Term,
        "dd" => ElementKind::Definition,
        "p" | "h1" | "h2" | "h3" | "h4" | "h5" => ElementKind::Block,
        "br" => ElementKind::Break,
        "a" => ElementKind::Anchor,
        "script" | "style" => ElementKind::RawText,
        _ => ElementKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("TABLE"), ElementKind::Table);
        assert_eq!(classify("Td"), ElementKind::Cell);
        assert_eq!(classify("LINE"), ElementKind::Line);
        assert_eq!(classify("line"), ElementKind::Line);
    }

    #[test]
    fn h6_is_not_a_block() {
        // The newline rules stop at h5; h6 never affected the text.
        assert_eq!(classify("h5"), ElementKind::Block);
        assert_eq!(classify("h6"), ElementKind::Other);
    }

    #[test]
    fn unknown_names_are_generic() {
        assert_eq!(classify("section"), ElementKind::Other);
        assert_eq!(classify("x-custom"), ElementKind::Other);
    }

    #[test]
    fn script_and_style_are_raw_text() {
        assert_eq!(classify("script"), ElementKind::RawText);
        assert_eq!(classify("STYLE"), ElementKind::RawText);
    }
}
