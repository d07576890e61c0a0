//! Tree construction from index records.
//!
//! Records are grouped by library root, descended by path segment, and each
//! record becomes its own leaf. Chains of single-child folders are then
//! collapsed and a sole wrapping root is stripped.

use tracing::debug;

use super::arena::{IndexTree, NodeIdx, TreeNode};
use super::collapse::collapse_forest;
use crate::models::IndexRecord;

/// Build the browsable forest for one snapshot with the default passes
pub fn build_tree(records: impl IntoIterator<Item = IndexRecord>) -> IndexTree {
    TreeBuilder::new().build(records)
}

/// Tree construction with individually switchable post-passes.
///
/// Both passes are on by default; turning them off is mostly useful for
/// inspecting the raw grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeBuilder {
    collapse: bool,
    strip_top: bool,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            collapse: true,
            strip_top: true,
        }
    }

    /// Merge chains of single-child folders into composite nodes
    pub fn collapse(mut self, enabled: bool) -> Self {
        self.collapse = enabled;
        self
    }

    /// Remove a single wrapping root shared by every file
    pub fn strip_top(mut self, enabled: bool) -> Self {
        self.strip_top = enabled;
        self
    }

    pub fn build(&self, records: impl IntoIterator<Item = IndexRecord>) -> IndexTree {
        let mut tree = IndexTree {
            records: records.into_iter().collect(),
            ..IndexTree::default()
        };

        for record in 0..tree.records.len() {
            insert_record(&mut tree, record);
        }
        if self.collapse {
            collapse_forest(&mut tree);
        }
        if self.strip_top {
            strip_top(&mut tree);
        }
        tree.compact();

        debug!(
            records = tree.records.len(),
            roots = tree.roots.len(),
            nodes = tree.nodes.len(),
            stripped = tree.stripped.is_some(),
            "built index tree"
        );
        tree
    }
}

fn alloc(tree: &mut IndexTree, node: TreeNode) -> NodeIdx {
    tree.nodes.push(node);
    NodeIdx::new(tree.nodes.len() - 1)
}

fn insert_record(tree: &mut IndexTree, record: usize) {
    let root = find_or_create_root(tree, record);

    let path = tree.records[record].relative_path().to_string();
    let mut segments: Vec<&str> = path.split('/').collect();
    // split always yields at least one segment
    let file = segments.pop().unwrap_or_default();

    let mut current = root;
    for segment in segments {
        current = find_or_create_folder(tree, current, segment);
    }

    let leaf = alloc(tree, TreeNode::leaf(file, record));
    tree.nodes[current.index()].children.push(leaf);
}

fn find_or_create_root(tree: &mut IndexTree, record: usize) -> NodeIdx {
    let name = &tree.records[record].root;
    if let Some(&existing) = tree.roots.iter().find(|&&r| tree.node(r).part == *name) {
        return existing;
    }
    let node = TreeNode::folder(name.clone());
    let idx = alloc(tree, node);
    tree.roots.push(idx);
    idx
}

/// Linear search over folder children; leaves with the same name are not
/// reused, so a node is never both a leaf and a parent.
fn find_or_create_folder(tree: &mut IndexTree, parent: NodeIdx, segment: &str) -> NodeIdx {
    let existing = tree
        .children(parent)
        .iter()
        .copied()
        .find(|&c| !tree.is_leaf(c) && tree.node(c).part == segment);
    if let Some(existing) = existing {
        return existing;
    }
    let idx = alloc(tree, TreeNode::folder(segment));
    tree.nodes[parent.index()].children.push(idx);
    idx
}

/// Replace a sole top-level library root by its children.
///
/// Only library roots are stripped: once the top level is made of folders
/// from inside the root, their names carry information and stay.
fn strip_top(tree: &mut IndexTree) {
    if let [only] = tree.roots[..] {
        if !tree.is_leaf(only) {
            tree.stripped = Some(tree.node(only).part.clone());
            tree.roots = tree.node(only).children.clone();
        }
    }
}
