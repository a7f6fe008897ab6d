#![forbid(unsafe_code)]

//! The closed set of renderable nodes.

use std::fmt;

use crate::Renderable;
use crate::frame::Frame;
use crate::layout::LayoutNode;
use crate::text::TextNode;

/// Any node of a render tree.
///
/// Nodes own their children, so a tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(TextNode),
    Frame(Frame),
    Layout(LayoutNode),
}

impl Renderable for Node {
    fn render(&self) -> String {
        match self {
            Node::Text(text) => text.render(),
            Node::Frame(frame) => frame.render(),
            Node::Layout(layout) => layout.render(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => fmt::Display::fmt(text, f),
            Node::Frame(frame) => fmt::Display::fmt(frame, f),
            Node::Layout(layout) => fmt::Display::fmt(layout, f),
        }
    }
}

impl From<TextNode> for Node {
    fn from(text: TextNode) -> Self {
        Node::Text(text)
    }
}

impl From<Frame> for Node {
    fn from(frame: Frame) -> Self {
        Node::Frame(frame)
    }
}

impl From<LayoutNode> for Node {
    fn from(layout: LayoutNode) -> Self {
        Node::Layout(layout)
    }
}
