#![forbid(unsafe_code)]

//! Text normalization for boxgrid.
//!
//! Two steps turn raw strings into blocks the widgets can frame:
//! - [`wrap`]: tab expansion, fixed-width chunking and minimum-width padding.
//! - [`grid`]: rectangularization so every line shares one width.
//!
//! Widths are character counts; every `char` occupies one column.

pub mod grid;
pub mod wrap;

pub use grid::{
    GridError, is_rectangular, line_width, max_line_width, to_rectangle, to_rectangle_lines,
};
pub use wrap::{DEFAULT_TAB_WIDTH, WrapOptions, wrap, wrap_lines, wrap_with_options};
