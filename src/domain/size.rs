//! Size aggregation
//!
//! Computes, bottom-up, a size entry for every node of an [`IndexTree`]:
//! a leaf takes its record's size, a folder sums its children and is exact
//! only when every child is.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::domain::tree::{IndexTree, NodeIdx};
use crate::models::FileSize;

/// Aggregated size of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "bytes", rename_all = "lowercase")]
pub enum SizeEntry {
    Actual(u64),
    Estimated(u64),
}

impl SizeEntry {
    pub fn bytes(&self) -> u64 {
        match self {
            SizeEntry::Actual(bytes) | SizeEntry::Estimated(bytes) => *bytes,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, SizeEntry::Actual(_))
    }

    /// Sum of entries; exact only if all are exact. An empty sum is
    /// `Estimated(0)`.
    pub fn sum(entries: impl IntoIterator<Item = SizeEntry>) -> SizeEntry {
        let mut total = 0u64;
        let mut exact = true;
        let mut any = false;
        for entry in entries {
            any = true;
            total = total.saturating_add(entry.bytes());
            exact &= entry.is_exact();
        }
        if any && exact {
            SizeEntry::Actual(total)
        } else {
            SizeEntry::Estimated(total)
        }
    }
}

impl Default for SizeEntry {
    fn default() -> Self {
        SizeEntry::Estimated(0)
    }
}

impl From<FileSize> for SizeEntry {
    fn from(size: FileSize) -> Self {
        match size {
            FileSize::Actual(bytes) => SizeEntry::Actual(bytes),
            FileSize::Estimated(bytes) => SizeEntry::Estimated(bytes),
            FileSize::Unknown => SizeEntry::Estimated(0),
        }
    }
}

/// Side map from node identity to aggregated size.
///
/// Folders without children have no entry; [`SizeMap::get`] reports them
/// as `Estimated(0)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeMap {
    entries: HashMap<NodeIdx, SizeEntry>,
}

impl SizeMap {
    /// Aggregate sizes for the whole forest
    pub fn compute(tree: &IndexTree) -> Self {
        let mut map = Self::default();
        for &root in tree.roots() {
            map.aggregate(tree, root);
        }
        debug!(entries = map.entries.len(), "aggregated node sizes");
        map
    }

    /// Aggregate sizes for the subtree under `idx` only
    pub fn compute_subtree(tree: &IndexTree, idx: NodeIdx) -> Self {
        let mut map = Self::default();
        map.aggregate(tree, idx);
        map
    }

    fn aggregate(&mut self, tree: &IndexTree, idx: NodeIdx) -> Option<SizeEntry> {
        let entry = if let Some(record) = tree.record(idx) {
            Some(SizeEntry::from(record.file_size))
        } else if tree.children(idx).is_empty() {
            None
        } else {
            let children: Vec<SizeEntry> = tree
                .children(idx)
                .iter()
                .map(|&child| self.aggregate(tree, child).unwrap_or_default())
                .collect();
            Some(SizeEntry::sum(children))
        };

        if let Some(entry) = entry {
            self.entries.insert(idx, entry);
        }
        entry
    }

    /// Size of a node, `Estimated(0)` when absent
    pub fn get(&self, idx: NodeIdx) -> SizeEntry {
        self.entries.get(&idx).copied().unwrap_or_default()
    }

    /// Raw lookup distinguishing absent entries
    pub fn entry(&self, idx: NodeIdx) -> Option<SizeEntry> {
        self.entries.get(&idx).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size of the whole forest
    pub fn total(&self, tree: &IndexTree) -> SizeEntry {
        SizeEntry::sum(tree.roots().iter().map(|&root| self.get(root)))
    }
}
