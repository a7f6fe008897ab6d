#![forbid(unsafe_code)]

//! Layout node: an ordered list of children composed along one axis.
//!
//! This node is glue over [`boxgrid_layout::compose`]; it renders its
//! children and hands the blocks over.
//!
//! # Example
//!
//! ```
//! use boxgrid_widgets::{Frame, LayoutNode, Renderable, TextNode};
//!
//! let row = LayoutNode::horizontal()
//!     .child(Frame::with_geometry(TextNode::plain("a"), 0, 0, true))
//!     .child(Frame::with_geometry(TextNode::plain("b"), 0, 0, true));
//! assert_eq!(row.render(), "┌─┐┌─┐\n│a││b│\n└─┘└─┘");
//! ```

use std::fmt;

use boxgrid_layout::{Axis, compose};

use crate::Renderable;
use crate::node::Node;

/// Children composed along an [`Axis`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutNode {
    axis: Axis,
    children: Vec<Node>,
}

impl LayoutNode {
    /// Create an empty layout along `axis`.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            children: Vec::new(),
        }
    }

    /// Create an empty top-to-bottom layout.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Create an empty left-to-right layout.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Create a layout from existing children.
    pub fn with_children<I, N>(axis: Axis, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        Self {
            axis,
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.push(child);
        self
    }

    /// Append a child in place.
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Renderable for LayoutNode {
    fn render(&self) -> String {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "LayoutNode",
            axis = ?self.axis,
            children = self.children.len()
        )
        .entered();

        let blocks: Vec<String> = self.children.iter().map(Renderable::render).collect();
        compose(self.axis, &blocks)
    }
}

impl fmt::Display for LayoutNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Frame, TextNode};

    #[test]
    fn empty_layouts_render_empty() {
        assert_eq!(LayoutNode::vertical().render(), "");
        assert_eq!(LayoutNode::horizontal().render(), "");
        assert!(LayoutNode::default().is_empty());
    }

    #[test]
    fn vertical_keeps_child_order() {
        let layout = LayoutNode::with_children(
            Axis::Vertical,
            [TextNode::plain("1\n2"), TextNode::plain("12"), TextNode::plain("123")],
        );
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.render(), "1\n2\n12\n123");
    }

    #[test]
    fn horizontal_pads_bottom() {
        let layout = LayoutNode::with_children(
            Axis::Horizontal,
            [TextNode::plain("1\n2"), TextNode::plain("12"), TextNode::plain("123")],
        );
        assert_eq!(layout.render(), "112123\n2     ");
    }

    #[test]
    fn push_appends() {
        let mut layout = LayoutNode::vertical();
        layout.push(TextNode::plain("a"));
        layout.push(Frame::with_geometry(TextNode::plain("b"), 0, 0, false));
        assert_eq!(layout.children().len(), 2);
        assert_eq!(layout.render(), "a\nb");
    }

    #[test]
    fn nested_layout_in_frame() {
        let row = LayoutNode::horizontal()
            .child(TextNode::plain("ab"))
            .child(TextNode::plain("c\nd"));
        let frame = Frame::with_geometry(row, 0, 0, true);
        assert_eq!(frame.render(), "┌───┐\n│abc│\n│  d│\n└───┘");
    }
}
