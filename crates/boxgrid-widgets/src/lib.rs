#![forbid(unsafe_code)]

//! Render tree nodes for boxgrid.
//!
//! A tree is built from three node kinds:
//! - [`TextNode`]: wrapped text, the only leaf.
//! - [`Frame`]: one child plus margin, optional border and padding.
//! - [`LayoutNode`]: ordered children stacked or placed side by side.
//!
//! Rendering is depth-first: children render in order, then the parent
//! applies its own transform to their output.

pub mod borders;
pub mod frame;
pub mod layout;
pub mod node;
pub mod text;

pub use borders::{
    BorderError, BorderSet, BorderType, Borders, add_blank_border, add_border_with,
    add_line_border,
};
pub use frame::Frame;
pub use layout::LayoutNode;
pub use node::Node;
pub use text::TextNode;

/// Anything that renders to a block of text.
///
/// The result is newline-joined lines. Rendering has no side effects and
/// may be repeated.
pub trait Renderable {
    fn render(&self) -> String;
}

impl<R: Renderable + ?Sized> Renderable for Box<R> {
    fn render(&self) -> String {
        (**self).render()
    }
}
