#![forbid(unsafe_code)]

//! boxgrid public facade crate.
//!
//! Builds text pages for monospace terminals out of three node kinds:
//! wrapped text, frames (margin, border, padding) and layouts that stack
//! children vertically or place them side by side.
//!
//! # Example
//! ```
//! use boxgrid::prelude::*;
//!
//! let card = Frame::with_geometry(TextNode::new("1234567", 6), 1, 0, true);
//! assert_eq!(
//!     card.render(),
//!     "┌────────┐\n│ 123456 │\n│ 7      │\n└────────┘"
//! );
//!
//! let row = LayoutNode::horizontal()
//!     .child(TextNode::plain("a\nb"))
//!     .child(TextNode::plain("cd"));
//! assert_eq!(row.render(), "acd\nb  ");
//! ```

pub mod error;

pub use error::{BorderError, Error, GridError, Result};

// --- Text re-exports -------------------------------------------------------

pub use boxgrid_text::{
    WrapOptions, is_rectangular, line_width, max_line_width, to_rectangle, to_rectangle_lines,
    wrap, wrap_lines, wrap_with_options,
};

// --- Layout re-exports -----------------------------------------------------

pub use boxgrid_layout::{Axis, BlockSize, compose, measure, side_by_side, stack};

// --- Widget re-exports -----------------------------------------------------

pub use boxgrid_widgets::{
    BorderSet, BorderType, Borders, Frame, LayoutNode, Node, Renderable, TextNode,
    add_blank_border, add_border_with, add_line_border,
};

/// Prelude for day-to-day usage.
pub mod prelude {
    pub use crate::{
        Axis, BorderType, Borders, Error, Frame, LayoutNode, Node, Renderable, Result, TextNode,
        WrapOptions,
    };

    pub use crate::{layout, text, widgets};
}

pub use boxgrid_layout as layout;
pub use boxgrid_text as text;
pub use boxgrid_widgets as widgets;
