//! Error types for flattening and structural mapping.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, FlattenError>;

/// Errors produced by this crate.
///
/// Offset bookkeeping inside a traversal has no recoverable failure states;
/// a desynchronized tag list would be a bug and panics instead of surfacing
/// here. These variants cover the fallible edges: input parsing and the
/// index-attribute contract of the structural mapping.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlattenError {
    /// The HTML input could not be read into a DOM.
    #[error("failed to parse HTML: {0}")]
    Parse(String),

    /// A structural tag is missing the index attribute its kind requires.
    #[error("`{name}` tag at [{begin}, {end}) has no `{attribute}` attribute")]
    MissingIndex {
        /// Tag name as recorded in the tag list.
        name: String,
        /// Begin offset of the offending tag.
        begin: usize,
        /// End offset of the offending tag.
        end: usize,
        /// The absent attribute key.
        attribute: &'static str,
    },

    /// A structural tag carries an index attribute that is not an integer.
    #[error("`{name}` tag has non-numeric `{attribute}` value {value:?}")]
    InvalidIndex {
        /// Tag name as recorded in the tag list.
        name: String,
        /// The malformed attribute key.
        attribute: &'static str,
        /// The raw attribute value.
        value: String,
    },
}
