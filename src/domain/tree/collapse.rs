//! Collapsing of single-child folder chains.
//!
//! A folder whose only child is another folder is replaced in its parent by
//! that child, renamed `"<folder>/<child>"`. Recursion is post-order, so a
//! chain `a -> b -> c -> {files}` ends up as one `a/b/c` node. Top-level
//! nodes are never merged into their child; they have no parent sequence.

use super::arena::{IndexTree, NodeIdx};

pub(crate) fn collapse_forest(tree: &mut IndexTree) {
    for root in tree.roots.clone() {
        collapse_children(tree, root);
    }
}

fn collapse_children(tree: &mut IndexTree, parent: NodeIdx) {
    let children = tree.children(parent).to_vec();
    let mut merged = Vec::with_capacity(children.len());
    for child in children {
        collapse_children(tree, child);
        merged.push(merge_chain(tree, child));
    }
    tree.nodes[parent.index()].children = merged;
}

/// Returns the node that takes `idx`'s place in its parent.
///
/// The returned node never has exactly one folder child: `idx`'s children
/// were already merged, so its only child cannot qualify either.
fn merge_chain(tree: &mut IndexTree, idx: NodeIdx) -> NodeIdx {
    let only = match tree.children(idx) {
        [only] if !tree.is_leaf(idx) && !tree.is_leaf(*only) => *only,
        _ => return idx,
    };
    let part = format!("{}/{}", tree.node(idx).part, tree.node(only).part);
    tree.nodes[only.index()].part = part;
    only
}
