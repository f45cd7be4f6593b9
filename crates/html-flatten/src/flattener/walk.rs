//! Depth-first traversal over a parsed DOM.
//!
//! The walker carries no domain state: it fires `enter` before a node's
//! children and `exit` after them, and the visitor does the rest. Text nodes
//! are visited like any other node.

use markup5ever_rcdom::Handle;

/// Callbacks fired once per node, in document order.
pub(crate) trait NodeVisitor {
    /// Called when a node is first reached, before its children.
    fn enter(&mut self, node: &Handle, depth: usize);
    /// Called after all of the node's children have been visited.
    fn exit(&mut self, node: &Handle, depth: usize);
}

/// Visits `root` and every descendant, depth first.
pub(crate) fn traverse<V: NodeVisitor>(root: &Handle, visitor: &mut V) {
    walk(root, 0, visitor);
}

fn walk<V: NodeVisitor>(node: &Handle, depth: usize, visitor: &mut V) {
    visitor.enter(node, depth);
    for child in node.children.borrow().iter() {
        walk(child, depth + 1, visitor);
    }
    visitor.exit(node, depth);
}
