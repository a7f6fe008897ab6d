#![forbid(unsafe_code)]

//! Block composition.
//!
//! Blocks are already-rendered strings. This crate places them either top
//! to bottom ([`stack`]) or left to right ([`side_by_side`]); it never
//! re-wraps or re-frames their contents.
//!
//! # Example
//! ```
//! use boxgrid_layout::{Axis, compose};
//!
//! assert_eq!(compose(Axis::Vertical, &["ab", "c"]), "ab\nc");
//! assert_eq!(compose(Axis::Horizontal, &["a\nb", "cd"]), "acd\nb  ");
//! ```

use boxgrid_text::grid::line_width;

/// The stacking direction of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

/// Measured extent of a rendered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockSize {
    /// Widest line, in columns.
    pub width: usize,
    /// Number of lines.
    pub height: usize,
}

/// Measure a rendered block.
///
/// An empty string is one empty line: width 0, height 1.
#[must_use]
pub fn measure(block: &str) -> BlockSize {
    let mut size = BlockSize::default();
    for line in block.split('\n') {
        size.width = size.width.max(line_width(line));
        size.height += 1;
    }
    size
}

/// Compose blocks along `axis`.
#[must_use]
pub fn compose<S: AsRef<str>>(axis: Axis, blocks: &[S]) -> String {
    match axis {
        Axis::Vertical => stack(blocks),
        Axis::Horizontal => side_by_side(blocks),
    }
}

/// Stack blocks top to bottom, joined by a single newline.
///
/// Widths are not reconciled.
#[must_use]
pub fn stack<S: AsRef<str>>(blocks: &[S]) -> String {
    #[cfg(feature = "tracing")]
    tracing::trace!(blocks = blocks.len(), "stack");

    blocks
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Place blocks left to right.
///
/// The result is as tall as the tallest block. A block that runs out of
/// lines is filled with blanks as wide as its own first line, so shorter
/// blocks are padded at the bottom.
#[must_use]
pub fn side_by_side<S: AsRef<str>>(blocks: &[S]) -> String {
    let columns: Vec<Vec<&str>> = blocks
        .iter()
        .map(|block| block.as_ref().split('\n').collect())
        .collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);
    let fillers: Vec<String> = columns
        .iter()
        .map(|lines| " ".repeat(lines.first().map_or(0, |line| line_width(line))))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(blocks = blocks.len(), height, "side_by_side");

    let mut rows = Vec::with_capacity(height);
    for y in 0..height {
        let mut row = String::new();
        for (lines, filler) in columns.iter().zip(&fillers) {
            row.push_str(lines.get(y).copied().unwrap_or(filler.as_str()));
        }
        rows.push(row);
    }
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_defaults_to_vertical() {
        assert_eq!(Axis::default(), Axis::Vertical);
    }

    #[test]
    fn stack_joins_without_blank_line() {
        assert_eq!(stack(&["A", "B"]), "A\nB");
        assert_eq!(stack(&["ab\ncd", "e"]), "ab\ncd\ne");
    }

    #[test]
    fn stack_empty_is_empty_string() {
        let none: [&str; 0] = [];
        assert_eq!(stack(&none), "");
    }

    #[test]
    fn side_by_side_empty_is_empty_string() {
        let none: [&str; 0] = [];
        assert_eq!(side_by_side(&none), "");
        assert_eq!(compose(Axis::Horizontal, &none), "");
    }

    #[test]
    fn side_by_side_bottom_pads_short_blocks() {
        let out = side_by_side(&["1\n2", "12", "123"]);
        assert_eq!(out, "112123\n2     ");
    }

    #[test]
    fn side_by_side_uses_each_blocks_own_width() {
        let out = side_by_side(&["aa", "b\nb\nb", "ccc"]);
        assert_eq!(out, "aabccc\n  b   \n  b   ");
    }

    #[test]
    fn side_by_side_filler_follows_first_line_width() {
        // Ragged block: filler takes the first line's width, not the widest.
        let out = side_by_side(&["x\nxyz", "1\n2\n3"]);
        assert_eq!(out, "x1\nxyz2\n 3");
    }

    #[test]
    fn side_by_side_single_block_is_identity() {
        assert_eq!(side_by_side(&["ab\ncd"]), "ab\ncd");
    }

    #[test]
    fn measure_block() {
        assert_eq!(measure(""), BlockSize { width: 0, height: 1 });
        assert_eq!(measure("ab\ncde\n"), BlockSize { width: 3, height: 3 });
    }

    #[cfg(feature = "serde")]
    #[test]
    fn axis_serde_lowercase() {
        let axis: Axis = serde_json::from_str("\"horizontal\"").unwrap();
        assert_eq!(axis, Axis::Horizontal);
        assert_eq!(serde_json::to_string(&Axis::Vertical).unwrap(), "\"vertical\"");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn block() -> impl Strategy<Value = String> {
        (1usize..6, 1usize..8).prop_map(|(w, h)| vec!["#".repeat(w); h].join("\n"))
    }

    proptest! {
        #[test]
        fn horizontal_height_is_max(blocks in proptest::collection::vec(block(), 1..6)) {
            let out = side_by_side(&blocks);
            let expected = blocks.iter().map(|b| measure(b).height).max().unwrap_or(0);
            prop_assert_eq!(out.split('\n').count(), expected);
        }

        #[test]
        fn horizontal_rows_are_uniform_for_rectangular_blocks(
            blocks in proptest::collection::vec(block(), 1..6)
        ) {
            let out = side_by_side(&blocks);
            let total: usize = blocks.iter().map(|b| measure(b).width).sum();
            for row in out.split('\n') {
                prop_assert_eq!(line_width(row), total);
            }
        }

        #[test]
        fn vertical_height_is_sum(blocks in proptest::collection::vec(block(), 1..6)) {
            let out = stack(&blocks);
            let expected: usize = blocks.iter().map(|b| measure(b).height).sum();
            prop_assert_eq!(measure(&out).height, expected);
        }
    }
}
