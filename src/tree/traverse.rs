use super::{Content, Node};

/// A sink for the entries produced by the tree traversals
///
/// A traversal calls [`record`] exactly once per node, at the position
/// dictated by the traversal order. Implementations must preserve the order
/// of those calls.
///
/// [`record`]: Collector::record
pub trait Collector {
    /// Records a single `(key, content)` entry
    fn record(&mut self, key: char, content: &Content);
}

impl Collector for Vec<(char, Content)> {
    fn record(&mut self, key: char, content: &Content) {
        self.push((key, content.clone()));
    }
}

/// Any `FnMut(char, &Content)` closure can be used as a collector directly
impl<F: FnMut(char, &Content)> Collector for F {
    fn record(&mut self, key: char, content: &Content) {
        self(key, content)
    }
}

pub(super) fn preorder<C: Collector>(node: Option<&Node>, items: &mut C) {
    let node = match node {
        Some(node) => node,
        None => return,
    };

    items.record(node.key(), node.content());
    preorder(node.left(), items);
    preorder(node.right(), items);
}

pub(super) fn inorder<C: Collector>(node: Option<&Node>, items: &mut C) {
    let node = match node {
        Some(node) => node,
        None => return,
    };

    inorder(node.left(), items);
    items.record(node.key(), node.content());
    inorder(node.right(), items);
}

pub(super) fn postorder<C: Collector>(node: Option<&Node>, items: &mut C) {
    let node = match node {
        Some(node) => node,
        None => return,
    };

    postorder(node.left(), items);
    postorder(node.right(), items);
    items.record(node.key(), node.content());
}
