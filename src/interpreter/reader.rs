use crate::{
    ast::{Node, NodeKind},
    error::{ErrorKind, LispError},
    interpreter::value::{cells::Cells, core::Value},
    util::stack::ensure_sufficient_stack,
};

/// Converts a parse-tree node into a value tree.
///
/// Number nodes become `Value::Number`, or an `Invalid number` error when the
/// literal does not fit in an `i64`. Symbol nodes become `Value::Symbol`.
/// Q-expression nodes become `Value::QExpr`; the root, S-expression nodes and
/// stray delimiter or anchor nodes become `Value::SExpr`. List children are
/// read recursively, skipping bracket delimiters and input anchors.
///
/// # Example
/// ```
/// use lispty::{
///     ast::{Node, NodeKind},
///     interpreter::{reader::read, value::core::Value},
/// };
///
/// let tree = Node::branch(NodeKind::QExpr,
///                         vec![Node::leaf(NodeKind::Delimiter, "{", 1),
///                              Node::leaf(NodeKind::Number, "7", 1),
///                              Node::leaf(NodeKind::Delimiter, "}", 1)],
///                         1);
///
/// assert_eq!(read(&tree), Value::qexpr([Value::Number(7)]));
/// ```
#[must_use]
pub fn read(node: &Node) -> Value {
    match node.kind {
        NodeKind::Number => read_number(&node.text),
        NodeKind::Symbol => Value::symbol(node.text.as_str()),
        NodeKind::QExpr => Value::QExpr(read_children(node)),
        NodeKind::Root | NodeKind::SExpr | NodeKind::Delimiter | NodeKind::Anchor => {
            Value::SExpr(read_children(node))
        },
    }
}

fn read_number(text: &str) -> Value {
    text.parse::<i64>()
        .map_or_else(|_| LispError::new(ErrorKind::BadNumber).into(), Value::Number)
}

fn read_children(node: &Node) -> Cells {
    ensure_sufficient_stack(|| {
        node.children
            .iter()
            .filter(|child| !is_skipped(child))
            .map(read)
            .collect()
    })
}

/// Brackets and input anchors carry no value.
fn is_skipped(node: &Node) -> bool {
    matches!(node.text.as_str(), "(" | ")" | "{" | "}") || node.kind == NodeKind::Anchor
}
