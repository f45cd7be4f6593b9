//! The text accumulator: a growing buffer with greedy word wrapping.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Accumulates flattened text, wrapping greedily at a maximum visual width.
///
/// The column counter tracks chars on the current visual line; offsets handed
/// out by [`len`](Self::len) are byte positions in the buffer.
#[derive(Debug)]
pub(crate) struct TextAccumulator {
    buf: String,
    column: usize,
    max_width: usize,
}

impl TextAccumulator {
    pub(crate) fn new(max_width: usize) -> Self {
        Self {
            buf: String::new(),
            column: 0,
            max_width,
        }
    }

    /// Current buffer length in bytes; the begin/end offset of the next append.
    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.buf
    }

    pub(crate) fn into_text(self) -> String {
        self.buf
    }

    /// Appends `text`, wrapping it if it does not fit the current line.
    ///
    /// Rules, in order:
    /// 1. a leading newline restarts the visual line (markers like `"\n * "`
    ///    are appended as one piece and count the newline into the column);
    /// 2. a lone space is dropped at the start of the buffer or after
    ///    whitespace, so runs of collapsed text nodes don't pile up spaces;
    /// 3. text that fits is appended verbatim;
    /// 4. text that doesn't is split on whitespace and re-joined greedily,
    ///    breaking before each token that would overflow. A token longer than
    ///    the width goes out unbroken.
    pub(crate) fn append(&mut self, text: &str) {
        if text.starts_with('\n') {
            self.column = 0;
        }
        if text == " " && (self.buf.is_empty() || self.buf.ends_with([' ', '\n'])) {
            return;
        }

        let chars = text.chars().count();
        if self.column + chars > self.max_width {
            self.wrap(text);
        } else {
            self.buf.push_str(text);
            self.column += chars;
        }
    }

    fn wrap(&mut self, text: &str) {
        let mut words: Vec<&str> = WHITESPACE.split(text).collect();
        // A leading empty token stands in for leading whitespace and keeps its
        // separator space; trailing empties carry nothing.
        while words.len() > 1 && words.last() == Some(&"") {
            words.pop();
        }

        let last = words.len() - 1;
        for (i, raw) in words.iter().enumerate() {
            let word: Cow<'_, str> = if i < last {
                Cow::Owned(format!("{raw} "))
            } else {
                Cow::Borrowed(*raw)
            };
            let chars = word.chars().count();
            if self.column + chars > self.max_width {
                self.buf.push('\n');
                self.buf.push_str(&word);
                self.column = chars;
            } else {
                self.buf.push_str(&word);
                self.column += chars;
            }
        }
    }
}
