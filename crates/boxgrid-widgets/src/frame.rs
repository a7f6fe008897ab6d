#![forbid(unsafe_code)]

//! A frame around one child node: margin, optional border, padding.
//!
//! Geometry is applied from the inside out:
//!
//! ```text
//!  padding  border  margin  content  margin  border  padding
//! ```
//!
//! Margin sits between the content and the border; padding is the
//! outermost layer and is what separates neighbouring frames in a layout.
//! Both add columns on the left and right only.

use std::fmt;

use boxgrid_text::to_rectangle;
use boxgrid_text::grid::line_width;

use crate::Renderable;
use crate::borders::{BorderType, Borders, add_blank_border, draw_border};
use crate::node::Node;

/// A framed child.
///
/// [`Frame::new`] uses margin 1, padding 1 and a plain border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    child: Box<Node>,
    margin: usize,
    padding: usize,
    borders: Borders,
    border_type: BorderType,
}

impl Frame {
    /// Frame `child` with the default geometry.
    pub fn new(child: impl Into<Node>) -> Self {
        Self {
            child: Box::new(child.into()),
            margin: 1,
            padding: 1,
            borders: Borders::ALL,
            border_type: BorderType::Plain,
        }
    }

    /// Frame `child` with explicit geometry.
    pub fn with_geometry(
        child: impl Into<Node>,
        margin: usize,
        padding: usize,
        use_line_border: bool,
    ) -> Self {
        Self::new(child)
            .margin(margin)
            .padding(padding)
            .bordered(use_line_border)
    }

    /// Blank columns between content and border.
    #[must_use]
    pub fn margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    /// Blank columns outside the border.
    #[must_use]
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Draw all four border sides, or none.
    #[must_use]
    pub fn bordered(self, use_line_border: bool) -> Self {
        self.borders(if use_line_border {
            Borders::ALL
        } else {
            Borders::NONE
        })
    }

    #[must_use]
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    pub fn child(&self) -> &Node {
        &self.child
    }

    /// Blank columns between content and border, per side.
    pub fn margin_width(&self) -> usize {
        self.margin
    }

    /// Blank columns outside the border, per side.
    pub fn padding_width(&self) -> usize {
        self.padding
    }

    /// Whether any border side is drawn.
    pub fn use_line_border(&self) -> bool {
        !self.borders.is_empty()
    }
}

impl Renderable for Frame {
    fn render(&self) -> String {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Frame",
            margin = self.margin,
            padding = self.padding,
            bordered = self.use_line_border()
        )
        .entered();

        let content = to_rectangle(&self.child.render());
        let content = add_blank_border(&content, self.margin);
        let content = if self.use_line_border() {
            // Rectangular by construction, so the width of any line will do.
            let width = content.split('\n').next().map_or(0, line_width);
            draw_border(
                &content,
                width,
                self.borders,
                self.border_type.to_border_set(),
            )
        } else {
            content
        };
        add_blank_border(&content, self.padding)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
