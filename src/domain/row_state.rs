//! Row-state classification
//!
//! Describes, for any node, whether everything beneath it is selected,
//! already downloaded, neither, or a mix. The state is never stored: it is
//! recomputed from the selection and the fixed `downloaded` flags.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::tree::{IndexTree, NodeIdx};
use crate::models::IndexRecord;

/// Selection/availability status of a node, in increasing mixedness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowState {
    /// Nothing selected, nothing downloaded
    None,
    /// Everything selected
    Selected,
    /// Everything already present locally
    Downloaded,
    /// Some downloaded, the rest unselected
    DownloadedOrNone,
    /// Some downloaded, the rest selected
    DownloadedOrSelected,
    /// Any other mix
    Indeterminate,
}

/// Per-category child counts for the folder rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Counts {
    none: usize,
    selected: usize,
    downloaded: usize,
    downloaded_or_none: usize,
    downloaded_or_selected: usize,
}

impl Counts {
    /// Indeterminate children are left out of the total on purpose: a folder
    /// with an indeterminate child can still be uniform over the others.
    fn add(&mut self, state: RowState) {
        match state {
            RowState::None => self.none += 1,
            RowState::Selected => self.selected += 1,
            RowState::Downloaded => self.downloaded += 1,
            RowState::DownloadedOrNone => self.downloaded_or_none += 1,
            RowState::DownloadedOrSelected => self.downloaded_or_selected += 1,
            RowState::Indeterminate => {}
        }
    }

    fn total(&self) -> usize {
        self.none
            + self.selected
            + self.downloaded
            + self.downloaded_or_none
            + self.downloaded_or_selected
    }

    fn state(&self) -> RowState {
        let total = self.total();
        if self.none == total {
            RowState::None
        } else if self.selected == total {
            RowState::Selected
        } else if self.downloaded == total {
            RowState::Downloaded
        } else if self.selected == 0 && self.downloaded_or_selected == 0 {
            RowState::DownloadedOrNone
        } else if self.none == 0 && self.downloaded_or_none == 0 {
            RowState::DownloadedOrSelected
        } else {
            RowState::Indeterminate
        }
    }
}

/// State of a single leaf record
pub fn leaf_state(record: &IndexRecord, is_selected: impl Fn(&IndexRecord) -> bool) -> RowState {
    if record.downloaded {
        RowState::Downloaded
    } else if is_selected(record) {
        RowState::Selected
    } else {
        RowState::None
    }
}

/// Classify one node. Returns `None` (no state) for a folder without
/// children.
pub fn classify<F>(tree: &IndexTree, idx: NodeIdx, is_selected: &F) -> Option<RowState>
where
    F: Fn(&IndexRecord) -> bool,
{
    if let Some(record) = tree.record(idx) {
        return Some(leaf_state(record, is_selected));
    }
    let children = tree.children(idx);
    if children.is_empty() {
        return None;
    }
    let mut counts = Counts::default();
    for &child in children {
        if let Some(state) = classify(tree, child, is_selected) {
            counts.add(state);
        }
    }
    Some(counts.state())
}

/// Row states of every node in the forest, computed in one bottom-up pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowStates {
    states: HashMap<NodeIdx, RowState>,
}

impl RowStates {
    pub fn compute<F>(tree: &IndexTree, is_selected: F) -> Self
    where
        F: Fn(&IndexRecord) -> bool,
    {
        let mut states = Self::default();
        for &root in tree.roots() {
            states.fill(tree, root, &is_selected);
        }
        states
    }

    fn fill<F>(&mut self, tree: &IndexTree, idx: NodeIdx, is_selected: &F) -> Option<RowState>
    where
        F: Fn(&IndexRecord) -> bool,
    {
        let state = if let Some(record) = tree.record(idx) {
            Some(leaf_state(record, is_selected))
        } else if tree.children(idx).is_empty() {
            None
        } else {
            let mut counts = Counts::default();
            for &child in tree.children(idx) {
                if let Some(state) = self.fill(tree, child, is_selected) {
                    counts.add(state);
                }
            }
            Some(counts.state())
        };

        if let Some(state) = state {
            self.states.insert(idx, state);
        }
        state
    }

    /// State of a node, `None` for childless folders
    pub fn get(&self, idx: NodeIdx) -> Option<RowState> {
        self.states.get(&idx).copied()
    }
}
