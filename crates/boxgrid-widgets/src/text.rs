#![forbid(unsafe_code)]

//! Leaf text node.

use std::fmt;

use boxgrid_text::wrap::{WrapOptions, wrap_with_options};

use crate::Renderable;

/// Minimum length meaning "no padding".
const NO_MIN_LEN: isize = -1;

/// A block of wrapped text.
///
/// The bounds always satisfy `max_len() >= min_len()`. A negative minimum
/// means no padding and a negative maximum means no chunking.
///
/// The wrapped grid is computed once at construction. To change the
/// content build a new node, e.g. with [`TextNode::with_content`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    content: String,
    options: WrapOptions,
    grid: String,
}

impl TextNode {
    /// Text chunked at `max_len` characters. A negative `max_len` keeps
    /// every paragraph on one line.
    pub fn new(content: impl Into<String>, max_len: isize) -> Self {
        Self::from_options(content, WrapOptions::new(max_len).min_len(NO_MIN_LEN))
    }

    /// Text with both bounds.
    ///
    /// The bounds are clamped against each other, so the effective maximum
    /// is `max(max_len, min_len)` and the effective minimum is
    /// `min(max_len, min_len)`.
    pub fn bounded(content: impl Into<String>, max_len: isize, min_len: isize) -> Self {
        Self::from_options(content, WrapOptions::new(max_len).min_len(min_len))
    }

    /// Text that is never chunked; only tabs are expanded.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::from_options(content, WrapOptions::unbounded().min_len(NO_MIN_LEN))
    }

    /// Text wrapped with explicit options.
    ///
    /// The bounds are clamped the same way as in [`TextNode::bounded`].
    /// Clamping two negative bounds keeps both negative.
    pub fn from_options(content: impl Into<String>, options: WrapOptions) -> Self {
        let options = options
            .max_len(options.max_len.max(options.min_len))
            .min_len(options.max_len.min(options.min_len));
        let content = content.into();
        let grid = wrap_with_options(&content, &options);
        Self {
            content,
            options,
            grid,
        }
    }

    /// A new node with the same bounds and different content.
    #[must_use]
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self::from_options(content, self.options)
    }

    /// The raw content, before wrapping.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn max_len(&self) -> isize {
        self.options.max_len
    }

    pub fn min_len(&self) -> isize {
        self.options.min_len
    }

    pub fn options(&self) -> &WrapOptions {
        &self.options
    }

    /// Wrapped lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.grid.split('\n')
    }
}

impl Renderable for TextNode {
    fn render(&self) -> String {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "TextNode",
            max_len = self.options.max_len,
            min_len = self.options.min_len
        )
        .entered();

        self.grid.clone()
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fit_renders_single_line() {
        assert_eq!(TextNode::new("123456", 6).render(), "123456");
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(TextNode::new("1234567", 6).render(), "123456\n7");
    }

    #[test]
    fn negative_max_keeps_lines_whole() {
        let node = TextNode::new("a long unwrapped line", -1);
        assert_eq!(node.render(), "a long unwrapped line");
    }

    #[test]
    fn bounds_are_clamped() {
        let node = TextNode::bounded("abc", 2, 5);
        assert_eq!(node.max_len(), 5);
        assert_eq!(node.min_len(), 2);
        assert_eq!(node.render(), "abc");

        let node = TextNode::bounded("abcdefg", 3, 3);
        assert_eq!(node.render(), "abc\ndef\ng  ");
    }

    #[test]
    fn every_constructor_keeps_max_at_least_min() {
        let nodes = [
            TextNode::new("abc", -1),
            TextNode::new("abc", 2),
            TextNode::new("abc", -7),
            TextNode::bounded("abcde", 2, 4),
            TextNode::bounded("abcde", -3, -1),
            TextNode::plain("abc"),
            TextNode::from_options("abcde", WrapOptions::new(2).min_len(4)),
            TextNode::from_options("abcde", WrapOptions::new(-5).min_len(-1)),
            TextNode::from_options("a", WrapOptions::new(1).min_len(3)).with_content("abcde"),
        ];
        for node in &nodes {
            assert!(
                node.max_len() >= node.min_len(),
                "max {} < min {}",
                node.max_len(),
                node.min_len()
            );
        }
    }

    #[test]
    fn from_options_clamps_like_bounded() {
        let from_options = TextNode::from_options("abcde", WrapOptions::new(2).min_len(4));
        let bounded = TextNode::bounded("abcde", 2, 4);
        assert_eq!(from_options, bounded);
        assert_eq!(from_options.max_len(), 4);
        assert_eq!(from_options.min_len(), 2);
        assert_eq!(from_options.render(), "abcd\ne ");
    }

    #[test]
    fn negative_bounds_still_keep_lines_whole() {
        let node = TextNode::new("abc\nd", -1);
        assert_eq!(node.max_len(), -1);
        assert!(node.min_len() < 0);
        assert_eq!(node.render(), "abc\nd");

        let node = TextNode::from_options("abc", WrapOptions::new(-5).min_len(-1));
        assert_eq!(node.render(), "abc");
    }

    #[test]
    fn plain_expands_tabs_only() {
        let node = TextNode::plain("\tx\ny");
        assert_eq!(node.render(), "    x\ny");
        assert_eq!(node.lines().count(), 2);
    }

    #[test]
    fn with_content_keeps_bounds() {
        let node = TextNode::bounded("a", 4, 2);
        let next = node.with_content("abcdef");
        assert_eq!(next.options(), node.options());
        assert_eq!(next.content(), "abcdef");
        assert_eq!(next.render(), "abcd\nef");
        assert_eq!(node.render(), "a ");
    }

    #[test]
    fn display_matches_render() {
        let node = TextNode::new("hello world", 5);
        assert_eq!(node.to_string(), node.render());
    }
}
