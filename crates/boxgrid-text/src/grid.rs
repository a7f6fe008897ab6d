#![forbid(unsafe_code)]

//! Rectangular character grids.
//!
//! A grid is a newline-joined string whose lines all have the same
//! character count. [`to_rectangle`] turns any multi-line string into one.

use std::fmt;

/// Errors raised while normalizing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input had no lines at all.
    EmptyContent,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "cannot rectangularize content with zero lines"),
        }
    }
}

impl std::error::Error for GridError {}

/// Width of a single line in columns.
#[inline]
#[must_use]
pub fn line_width(line: &str) -> usize {
    line.chars().count()
}

/// Widest line of a multi-line string.
#[must_use]
pub fn max_line_width(content: &str) -> usize {
    content.split('\n').map(line_width).max().unwrap_or(0)
}

/// Whether every line of `content` has the same width.
#[must_use]
pub fn is_rectangular(content: &str) -> bool {
    let mut widths = content.split('\n').map(line_width);
    match widths.next() {
        Some(first) => widths.all(|w| w == first),
        None => true,
    }
}

/// Right-pad every line to the widest line's width.
///
/// A string always has at least one line, so this cannot fail.
#[must_use]
pub fn to_rectangle(content: &str) -> String {
    let width = max_line_width(content);
    content
        .split('\n')
        .map(|line| pad_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Line-slice form of [`to_rectangle`].
///
/// # Errors
/// Returns [`GridError::EmptyContent`] when `lines` is empty.
pub fn to_rectangle_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<String>, GridError> {
    let width = lines
        .iter()
        .map(|line| line_width(line.as_ref()))
        .max()
        .ok_or(GridError::EmptyContent)?;
    Ok(lines
        .iter()
        .map(|line| pad_line(line.as_ref(), width))
        .collect())
}

fn pad_line(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(line.len() + width);
    out.push_str(line);
    crate::wrap::pad_to(&mut out, width);
    out
}
