#![forbid(unsafe_code)]

//! Fixed-width line chunking.
//!
//! Every `char` counts as one column. Wrapping is purely positional: a
//! paragraph is cut into runs of exactly `max_len` characters, with no
//! regard for word boundaries.
//!
//! # Example
//! ```
//! use boxgrid_text::wrap::wrap;
//!
//! assert_eq!(wrap("1234567", 6, 0), "123456\n7");
//! assert_eq!(wrap("ab\ncd", 1, 0), "a\nb\nc\nd");
//!
//! // A negative max length disables chunking.
//! assert_eq!(wrap("1234567", -1, 0), "1234567");
//!
//! // Short lines are right-padded to the minimum length.
//! assert_eq!(wrap("ab\nc", 2, 3), "ab \nc  ");
//! ```

/// Number of spaces a tab expands to unless configured otherwise.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Options for [`wrap_with_options`].
///
/// Both bounds are signed: a negative `max_len` disables chunking and a
/// negative `min_len` disables padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WrapOptions {
    /// Maximum run length in characters.
    pub max_len: isize,
    /// Minimum line length; shorter lines are right-padded with spaces.
    pub min_len: isize,
    /// Spaces substituted for each tab character.
    pub tab_width: usize,
}

impl WrapOptions {
    /// Create options that chunk at `max_len` with no padding.
    #[must_use]
    pub fn new(max_len: isize) -> Self {
        Self {
            max_len,
            min_len: 0,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    /// Options that never chunk.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(-1)
    }

    /// Set the maximum run length.
    #[must_use]
    pub fn max_len(mut self, max_len: isize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Set the minimum line length.
    #[must_use]
    pub fn min_len(mut self, min_len: isize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Set the tab expansion width.
    #[must_use]
    pub fn tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// Run length as a `usize`, or `None` when chunking is disabled.
    #[inline]
    #[must_use]
    pub fn run_len(&self) -> Option<usize> {
        usize::try_from(self.max_len).ok()
    }

    /// Padding target as a `usize`, or `0` when padding is disabled.
    #[inline]
    #[must_use]
    pub fn pad_len(&self) -> usize {
        usize::try_from(self.min_len).unwrap_or(0)
    }
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Wrap `content` into a newline-joined grid.
///
/// Tabs become four spaces, each paragraph is chunked into runs of
/// `max_len` characters and every line is right-padded to `min_len`.
#[must_use]
pub fn wrap(content: &str, max_len: isize, min_len: isize) -> String {
    wrap_with_options(content, &WrapOptions::new(max_len).min_len(min_len))
}

/// Wrap with full options, returning the joined grid.
#[must_use]
pub fn wrap_with_options(content: &str, options: &WrapOptions) -> String {
    wrap_lines(content, options).join("\n")
}

/// Wrap with full options, returning one `String` per output line.
///
/// Always returns at least one line; empty content yields `[""]`.
#[must_use]
pub fn wrap_lines(content: &str, options: &WrapOptions) -> Vec<String> {
    let expanded = expand_tabs(content, options.tab_width);
    let pad = options.pad_len();

    let mut lines = Vec::new();
    for paragraph in expanded.split('\n') {
        match options.run_len() {
            Some(len) => lines.extend(chunk(paragraph, len)),
            None => lines.push(paragraph.to_string()),
        }
    }

    for line in &mut lines {
        pad_to(line, pad);
    }
    lines
}

/// Replace every tab with `tab_width` spaces.
#[must_use]
pub fn expand_tabs(content: &str, tab_width: usize) -> String {
    if !content.contains('\t') {
        return content.to_string();
    }
    content.replace('\t', &" ".repeat(tab_width))
}

/// Cut a single paragraph into runs of `len` characters.
///
/// The last run may be shorter. An empty paragraph yields one empty run.
/// `len == 0` yields one run per character.
#[must_use]
pub fn chunk(paragraph: &str, len: usize) -> Vec<String> {
    if paragraph.is_empty() {
        return vec![String::new()];
    }
    let chars: Vec<char> = paragraph.chars().collect();
    chars
        .chunks(len.max(1))
        .map(|run| run.iter().collect())
        .collect()
}

/// Right-pad `line` with spaces to `width` characters. Never truncates.
pub fn pad_to(line: &mut String, width: usize) {
    let current = line.chars().count();
    if current < width {
        line.extend(std::iter::repeat_n(' ', width - current));
    }
}
