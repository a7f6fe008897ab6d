#![no_main]

use arbitrary::Arbitrary;
use boxgrid_layout::Axis;
use boxgrid_text::grid::is_rectangular;
use boxgrid_widgets::{Frame, LayoutNode, Node, Renderable, TextNode};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Text { content: String, max_len: i8, min_len: i8 },
    Frame { margin: u8, padding: u8, bordered: bool },
    Layout { horizontal: bool, take: u8 },
}

fuzz_target!(|ops: Vec<Op>| {
    if ops.len() > 64 {
        return;
    }

    // Stack machine: text pushes a leaf, frame wraps the top, layout
    // gathers the top `take` nodes.
    let mut stack: Vec<Node> = Vec::new();
    for op in ops {
        match op {
            Op::Text { content, max_len, min_len } => {
                if content.len() > 256 {
                    continue;
                }
                stack.push(TextNode::bounded(content, max_len.into(), min_len.into()).into());
            }
            Op::Frame { margin, padding, bordered } => {
                if let Some(child) = stack.pop() {
                    let frame = Frame::with_geometry(
                        child,
                        usize::from(margin % 4),
                        usize::from(padding % 4),
                        bordered,
                    );
                    assert!(is_rectangular(&frame.render()));
                    stack.push(frame.into());
                }
            }
            Op::Layout { horizontal, take } => {
                let take = usize::from(take % 4).min(stack.len());
                let children = stack.split_off(stack.len() - take);
                let axis = if horizontal { Axis::Horizontal } else { Axis::Vertical };
                stack.push(LayoutNode::with_children(axis, children).into());
            }
        }
    }

    for node in &stack {
        let _ = node.render();
    }
});
