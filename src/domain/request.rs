//! Download request built from the selection.
//!
//! An empty selection, or one covering every record, asks for everything;
//! otherwise the request lists the chosen `(root, path)` pairs in index order.
//! Identical records are one selectable unit and are listed once.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::selection::Selection;
use crate::domain::tree::IndexTree;

/// One file to fetch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DownloadItem {
    pub root: String,
    pub path: String,
}

/// What to ask the transfer engine for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum DownloadRequest {
    All,
    Partial(Vec<DownloadItem>),
}

impl DownloadRequest {
    pub fn from_selection(tree: &IndexTree, selection: &Selection) -> Self {
        let total = tree.records().len();
        if selection.is_empty() || selection.len() == total {
            debug!(total, "requesting full download");
            return DownloadRequest::All;
        }

        let mut emitted = HashSet::new();
        let items: Vec<DownloadItem> = tree
            .records()
            .iter()
            .filter(|record| selection.contains(record) && emitted.insert(*record))
            .map(|record| DownloadItem {
                root: record.root.clone(),
                path: record.path.clone(),
            })
            .collect();
        debug!(items = items.len(), total, "requesting partial download");
        DownloadRequest::Partial(items)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, DownloadRequest::All)
    }
}
