//! Arena storage for the index forest.
//!
//! Nodes live in one `Vec` and refer to their children by [`NodeIdx`], so
//! size and row-state maps can key on node identity and collapsing can
//! reparent nodes without fighting ownership.

use crate::models::IndexRecord;

/// Handle to a node inside one [`IndexTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdx(usize);

impl NodeIdx {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the forest.
///
/// A node is a leaf iff `leaf` is set; leaves never have children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Path segment (root name, folder name, or collapsed `a/b` composite)
    pub part: String,
    /// Children in first-seen order
    pub children: Vec<NodeIdx>,
    /// Index into [`IndexTree::records`] for leaf nodes
    pub leaf: Option<usize>,
}

impl TreeNode {
    pub(crate) fn folder(part: impl Into<String>) -> Self {
        Self {
            part: part.into(),
            children: Vec::new(),
            leaf: None,
        }
    }

    pub(crate) fn leaf(part: impl Into<String>, record: usize) -> Self {
        Self {
            part: part.into(),
            children: Vec::new(),
            leaf: Some(record),
        }
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }
}

/// An immutable forest built from one index snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexTree {
    pub(crate) records: Vec<IndexRecord>,
    pub(crate) nodes: Vec<TreeNode>,
    pub(crate) roots: Vec<NodeIdx>,
    /// Name of the single wrapping root removed during top stripping
    pub(crate) stripped: Option<String>,
}

impl IndexTree {
    /// Top-level nodes in first-seen order
    pub fn roots(&self) -> &[NodeIdx] {
        &self.roots
    }

    /// All records of the snapshot, in input order
    pub fn records(&self) -> &[IndexRecord] {
        &self.records
    }

    /// Root name that was stripped because every file shared it
    pub fn stripped_root(&self) -> Option<&str> {
        self.stripped.as_deref()
    }

    pub fn node(&self, idx: NodeIdx) -> &TreeNode {
        &self.nodes[idx.0]
    }

    pub fn children(&self, idx: NodeIdx) -> &[NodeIdx] {
        &self.nodes[idx.0].children
    }

    pub fn is_leaf(&self, idx: NodeIdx) -> bool {
        self.nodes[idx.0].is_leaf()
    }

    /// Record behind a leaf node, `None` for folders
    pub fn record(&self, idx: NodeIdx) -> Option<&IndexRecord> {
        self.nodes[idx.0].leaf.map(|r| &self.records[r])
    }

    /// Number of nodes reachable from the roots
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Every node in the forest with its depth, pre-order
    pub fn walk(&self) -> Vec<(NodeIdx, usize)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(NodeIdx, usize)> = self.roots.iter().rev().map(|&r| (r, 0)).collect();
        while let Some((idx, depth)) = stack.pop() {
            out.push((idx, depth));
            for &child in self.children(idx).iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        out
    }

    /// Leaf nodes beneath `idx` (including `idx` itself if it is a leaf)
    pub fn leaves(&self, idx: NodeIdx) -> Vec<NodeIdx> {
        let mut out = Vec::new();
        let mut stack = vec![idx];
        while let Some(current) = stack.pop() {
            if self.is_leaf(current) {
                out.push(current);
            } else {
                stack.extend(self.children(current).iter().rev());
            }
        }
        out
    }

    /// Records beneath `idx`
    pub fn leaf_records(&self, idx: NodeIdx) -> impl Iterator<Item = &IndexRecord> + '_ {
        self.leaves(idx)
            .into_iter()
            .filter_map(move |leaf| self.record(leaf))
    }

    /// Find a node by its displayed path (`part`s joined with `/`).
    ///
    /// Composite parts match the corresponding run of segments; the first
    /// match in child order wins. A path may also start with the stripped
    /// root name, as printed above the forest.
    pub fn find(&self, node_path: &str) -> Option<NodeIdx> {
        let node_path = node_path.strip_prefix('/').unwrap_or(node_path);
        self.find_in(&self.roots, node_path).or_else(|| {
            let tail = node_path
                .strip_prefix(self.stripped.as_deref()?)?
                .strip_prefix('/')?;
            self.find_in(&self.roots, tail)
        })
    }

    fn find_in(&self, candidates: &[NodeIdx], rest: &str) -> Option<NodeIdx> {
        for &idx in candidates {
            let part = self.node(idx).part.as_str();
            if rest == part {
                return Some(idx);
            }
            let tail = rest.strip_prefix(part).and_then(|t| t.strip_prefix('/'));
            if let Some(tail) = tail {
                if let Some(found) = self.find_in(self.children(idx), tail) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Displayed path of a node from the top of the forest
    pub fn display_path(&self, idx: NodeIdx) -> Option<String> {
        let mut trail = Vec::new();
        for &root in &self.roots {
            if self.trail_to(root, idx, &mut trail) {
                let parts: Vec<&str> = trail.iter().map(|&n| self.node(n).part.as_str()).collect();
                return Some(parts.join("/"));
            }
        }
        None
    }

    fn trail_to(&self, current: NodeIdx, target: NodeIdx, trail: &mut Vec<NodeIdx>) -> bool {
        trail.push(current);
        if current == target {
            return true;
        }
        for &child in self.children(current) {
            if self.trail_to(child, target, trail) {
                return true;
            }
        }
        trail.pop();
        false
    }

    /// Drop nodes no longer reachable from the roots and renumber the rest
    /// in pre-order.
    pub(crate) fn compact(&mut self) {
        let order = self.walk();
        let mut remap = vec![None; self.nodes.len()];
        for (new, (old, _)) in order.iter().enumerate() {
            remap[old.0] = Some(NodeIdx(new));
        }
        let relink = |idx: &NodeIdx| remap[idx.0].unwrap_or(*idx);

        let nodes = order
            .iter()
            .map(|(old, _)| {
                let node = &self.nodes[old.0];
                TreeNode {
                    part: node.part.clone(),
                    children: node.children.iter().map(relink).collect(),
                    leaf: node.leaf,
                }
            })
            .collect();
        self.roots = self.roots.iter().map(relink).collect();
        self.nodes = nodes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tree::build_tree;
    use crate::models::FileSize;

    fn record(root: &str, path: &str) -> IndexRecord {
        IndexRecord::new(root, path, FileSize::Actual(1))
    }

    #[test]
    fn walk_is_preorder_with_depth() {
        let tree = build_tree(vec![
            record("lib", "a/1.mp3"),
            record("lib", "a/2.mp3"),
            record("lib", "b/1.mp3"),
        ]);

        let labels: Vec<(String, usize)> = tree
            .walk()
            .into_iter()
            .map(|(idx, depth)| (tree.node(idx).part.clone(), depth))
            .collect();

        assert_eq!(
            labels,
            vec![
                ("a".to_string(), 0),
                ("1.mp3".to_string(), 1),
                ("2.mp3".to_string(), 1),
                ("b".to_string(), 0),
                ("1.mp3".to_string(), 1),
            ]
        );
    }

    #[test]
    fn compact_numbers_nodes_in_preorder() {
        let tree = build_tree(vec![record("lib", "x/y/1.mp3"), record("lib", "x/y/2.mp3")]);

        let indices: Vec<usize> = tree.walk().into_iter().map(|(idx, _)| idx.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn find_resolves_composite_parts() {
        let tree = build_tree(vec![
            record("lib", "x/y/1.mp3"),
            record("lib", "x/y/2.mp3"),
            record("other", "z.mp3"),
        ]);

        let folder = tree.find("lib/x/y").expect("collapsed folder");
        assert_eq!(tree.node(folder).part, "x/y");

        let leaf = tree.find("lib/x/y/2.mp3").expect("leaf");
        assert_eq!(tree.record(leaf).unwrap().path, "x/y/2.mp3");

        assert_eq!(tree.find("lib/x"), None);
        assert_eq!(tree.find("missing"), None);
    }

    #[test]
    fn find_accepts_stripped_root_prefix() {
        let tree = build_tree(vec![record("library", "a/1.mp3"), record("library", "b/2.mp3")]);
        assert_eq!(tree.stripped_root(), Some("library"));

        let a = tree.find("a").expect("folder");
        assert_eq!(tree.find("library/a"), Some(a));
        assert_eq!(tree.find("/library/a/1.mp3"), tree.find("a/1.mp3"));
        assert_eq!(tree.find("library"), None);
        assert_eq!(tree.find("libraryx/a"), None);
    }

    #[test]
    fn display_path_matches_find() {
        let tree = build_tree(vec![record("lib", "a/b/c.mp3"), record("other", "d.mp3")]);

        for (idx, _) in tree.walk() {
            let path = tree.display_path(idx).unwrap();
            assert_eq!(tree.find(&path), Some(idx), "path {path}");
        }
    }

    #[test]
    fn leaves_include_self_for_leaf() {
        let tree = build_tree(vec![record("lib", "a.mp3"), record("lib", "b.mp3")]);

        let leaf = tree.roots()[0];
        assert!(tree.is_leaf(leaf));
        assert_eq!(tree.leaves(leaf), vec![leaf]);
    }
}
