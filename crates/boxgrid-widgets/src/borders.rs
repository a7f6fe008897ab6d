//! Border glyphs and border synthesis.
//!
//! Borders are drawn around whole blocks of text. A line border needs a
//! rectangular block; see [`boxgrid_text::to_rectangle`].

use std::fmt;

use boxgrid_text::grid::line_width;

/// Border characters for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub vertical: char,
    pub horizontal: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BorderSet {
    /// Single line, square corners (┌, ─, │).
    pub const PLAIN: Self = Self {
        vertical: '│',
        horizontal: '─',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
    };

    /// Rounded corners (╭, ╮, ╯, ╰).
    pub const ROUNDED: Self = Self {
        vertical: '│',
        horizontal: '─',
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
    };

    /// Double lines (║, ═).
    pub const DOUBLE: Self = Self {
        vertical: '║',
        horizontal: '═',
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
    };

    /// Thick lines (┃, ━).
    pub const THICK: Self = Self {
        vertical: '┃',
        horizontal: '━',
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
    };

    /// ASCII only (+, -, |).
    pub const ASCII: Self = Self {
        vertical: '|',
        horizontal: '-',
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
    };
}

/// Border style presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BorderType {
    /// Single line border with square corners.
    #[default]
    Plain,
    /// Single line border with rounded corners.
    Rounded,
    /// Double line border.
    Double,
    /// Thick line border.
    Thick,
    /// ASCII fallback for terminals without box-drawing glyphs.
    Ascii,
}

impl BorderType {
    pub fn to_border_set(&self) -> BorderSet {
        match self {
            BorderType::Plain => BorderSet::PLAIN,
            BorderType::Rounded => BorderSet::ROUNDED,
            BorderType::Double => BorderSet::DOUBLE,
            BorderType::Thick => BorderSet::THICK,
            BorderType::Ascii => BorderSet::ASCII,
        }
    }
}

bitflags::bitflags! {
    /// Bitflags for which borders to render.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Borders: u8 {
        const NONE   = 0b0000;
        const TOP    = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT   = 0b1000;
        const ALL    = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}

/// Errors from the border primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorderError {
    /// A line border was requested on a block whose lines differ in width.
    InvariantViolation {
        /// Zero-based index of the first offending line.
        line: usize,
        /// Width of the first line.
        expected: usize,
        /// Width of the offending line.
        found: usize,
    },
}

impl fmt::Display for BorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvariantViolation {
                line,
                expected,
                found,
            } => write!(
                f,
                "line border needs a rectangular block: line {line} is {found} wide, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for BorderError {}

/// Prefix and suffix every line with `n` spaces.
#[must_use]
pub fn add_blank_border(content: &str, n: usize) -> String {
    if n == 0 {
        return content.to_string();
    }
    let pad = " ".repeat(n);
    content
        .split('\n')
        .map(|line| format!("{pad}{line}{pad}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Draw a full [`BorderSet::PLAIN`] border around a rectangular block.
///
/// Every output line is two columns wider than the input.
///
/// # Errors
/// Returns [`BorderError::InvariantViolation`] if the lines of `content`
/// do not all share the first line's width.
pub fn add_line_border(content: &str) -> Result<String, BorderError> {
    add_border_with(content, Borders::ALL, BorderSet::PLAIN)
}

/// Draw the selected sides of a border with the given glyphs.
///
/// # Errors
/// Returns [`BorderError::InvariantViolation`] if `content` is not
/// rectangular.
pub fn add_border_with(
    content: &str,
    borders: Borders,
    set: BorderSet,
) -> Result<String, BorderError> {
    let width = check_rectangular(content)?;
    Ok(draw_border(content, width, borders, set))
}

fn check_rectangular(content: &str) -> Result<usize, BorderError> {
    let mut lines = content.split('\n').map(line_width).enumerate();
    let expected = lines.next().map_or(0, |(_, w)| w);
    match lines.find(|&(_, w)| w != expected) {
        Some((line, found)) => Err(BorderError::InvariantViolation {
            line,
            expected,
            found,
        }),
        None => Ok(expected),
    }
}

/// Border drawing without the rectangle check; `width` is the width of
/// every line in `content`.
pub(crate) fn draw_border(content: &str, width: usize, borders: Borders, set: BorderSet) -> String {
    if borders.is_empty() {
        return content.to_string();
    }

    let rule = |left: char, right: char| {
        let mut line = String::with_capacity((width + 2) * 3);
        if borders.contains(Borders::LEFT) {
            line.push(left);
        }
        line.extend(std::iter::repeat_n(set.horizontal, width));
        if borders.contains(Borders::RIGHT) {
            line.push(right);
        }
        line
    };

    let mut out = Vec::new();
    if borders.contains(Borders::TOP) {
        out.push(rule(set.top_left, set.top_right));
    }
    for line in content.split('\n') {
        let mut row = String::with_capacity(line.len() + 6);
        if borders.contains(Borders::LEFT) {
            row.push(set.vertical);
        }
        row.push_str(line);
        if borders.contains(Borders::RIGHT) {
            row.push(set.vertical);
        }
        out.push(row);
    }
    if borders.contains(Borders::BOTTOM) {
        out.push(rule(set.bottom_left, set.bottom_right));
    }
    out.join("\n")
}
