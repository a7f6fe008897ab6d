#![forbid(unsafe_code)]

//! Error model.
//!
//! Rendering a tree never fails. Errors only come out of the primitives
//! when they are called directly on input that breaks their contract:
//! rectangularizing zero lines, or drawing a line border around a block
//! that is not rectangular. Each crate owns its error type; [`Error`]
//! unifies them so callers can use `?` across crates.

use std::fmt;

pub use boxgrid_text::GridError;
pub use boxgrid_widgets::BorderError;

/// Top-level error type for boxgrid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Grid normalization failure.
    Grid(GridError),
    /// Border synthesis failure.
    Border(BorderError),
}

/// Standard result type for boxgrid APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Error type label for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Grid(_) => "grid",
            Self::Border(_) => "border",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(err) => write!(f, "{err}"),
            Self::Border(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            Self::Border(err) => Some(err),
        }
    }
}

impl From<GridError> for Error {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl From<BorderError> for Error {
    fn from(err: BorderError) -> Self {
        Self::Border(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;

    use super::*;

    fn border_lines(lines: &[&str]) -> Result<String> {
        let rect = boxgrid_text::to_rectangle_lines(lines)?.join("\n");
        Ok(boxgrid_widgets::add_line_border(&rect)?)
    }

    #[test]
    fn question_mark_converts_grid_error() {
        let err = border_lines(&[]).unwrap_err();
        assert_eq!(err, Error::Grid(GridError::EmptyContent));
        assert_eq!(err.error_type(), "grid");
        assert!(StdError::source(&err).is_some());
    }

    #[test]
    fn question_mark_converts_border_error() {
        let err: Error = boxgrid_widgets::add_line_border("ab\nc").unwrap_err().into();
        assert_eq!(err.error_type(), "border");
        assert!(format!("{err}").contains("rectangular"));
    }

    #[test]
    fn primitives_compose_on_valid_input() {
        assert_eq!(border_lines(&["ab", "c"]).unwrap(), "┌──┐\n│ab│\n│c │\n└──┘");
    }
}
