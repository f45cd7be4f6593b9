//! Flattening options.

use url::Url;

/// Wrap width used when none is configured.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Options controlling how a document is flattened.
///
/// Passed by reference into the entry points; one instance can serve any
/// number of documents.
#[derive(Debug, Clone)]
pub struct FlattenOptions {
    /// Maximum visual line width for greedy word wrapping, in chars.
    ///
    /// A single token longer than this is emitted unbroken on its own line.
    pub wrap_width: usize,
    /// Base URL that relative `href` values are resolved against when link
    /// targets are appended after `</a>`. Without one, only already-absolute
    /// targets survive; everything else resolves to the empty string.
    pub base_url: Option<Url>,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            base_url: None,
        }
    }
}

impl FlattenOptions {
    /// Creates the default option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wrap width.
    #[must_use]
    pub const fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    /// Sets the base URL for link resolution.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }
}
