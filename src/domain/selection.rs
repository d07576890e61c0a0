//! Selection set and propagation
//!
//! The host owns a [`Selection`]. It changes only through single-leaf
//! toggles, [`select_subtree`] and [`click`], which applies the folder
//! toggle policy on top of the row state.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::domain::row_state::{classify, RowState};
use crate::domain::size::SizeEntry;
use crate::domain::tree::{IndexTree, NodeIdx};
use crate::models::IndexRecord;

/// Records the user currently wants to download.
///
/// Membership is by value: identical records are one selectable unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    records: HashSet<IndexRecord>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, record: &IndexRecord) -> bool {
        self.records.contains(record)
    }

    pub fn insert(&mut self, record: IndexRecord) -> bool {
        self.records.insert(record)
    }

    pub fn remove(&mut self, record: &IndexRecord) -> bool {
        self.records.remove(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexRecord> {
        self.records.iter()
    }

    /// Membership predicate for the row-state classifier
    pub fn predicate(&self) -> impl Fn(&IndexRecord) -> bool + '_ {
        move |record| self.contains(record)
    }

    /// Drop selected records that are not part of `tree`'s snapshot
    pub fn retain_known(&mut self, tree: &IndexTree) {
        let known: HashSet<&IndexRecord> = tree.records().iter().collect();
        self.records.retain(|record| known.contains(record));
    }

    /// Count and aggregated size of the selection
    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary {
            files: self.records.len(),
            size: SizeEntry::sum(self.records.iter().map(|r| SizeEntry::from(r.file_size))),
        }
    }
}

/// How much is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionSummary {
    pub files: usize,
    pub size: SizeEntry,
}

/// Add (`select == true`) or remove every leaf under `idx`, including `idx`
/// itself when it is a leaf.
pub fn select_subtree(tree: &IndexTree, idx: NodeIdx, select: bool, selection: &mut Selection) {
    let leaves = tree.leaves(idx);
    for &leaf in &leaves {
        if let Some(record) = tree.record(leaf) {
            if select {
                selection.insert(record.clone());
            } else {
                selection.remove(record);
            }
        }
    }
    debug!(leaves = leaves.len(), select, "applied subtree selection");
}

/// Flip a single leaf. Returns the new membership, or `None` if `idx` is a
/// folder.
pub fn toggle_leaf(tree: &IndexTree, idx: NodeIdx, selection: &mut Selection) -> Option<bool> {
    let record = tree.record(idx)?;
    if selection.remove(record) {
        Some(false)
    } else {
        selection.insert(record.clone());
        Some(true)
    }
}

/// What a click on a row does, given its current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    Select,
    Clear,
    Ignore,
}

impl ClickAction {
    /// Clicking clears anything with a selected part, selects anything
    /// without one, and leaves fully downloaded rows alone.
    pub fn for_state(state: Option<RowState>) -> Self {
        match state {
            Some(RowState::Selected)
            | Some(RowState::DownloadedOrSelected)
            | Some(RowState::Indeterminate) => ClickAction::Clear,
            Some(RowState::None) | Some(RowState::DownloadedOrNone) => ClickAction::Select,
            Some(RowState::Downloaded) | None => ClickAction::Ignore,
        }
    }
}

/// Apply the click-to-toggle policy to `idx`
pub fn click(tree: &IndexTree, idx: NodeIdx, selection: &mut Selection) -> ClickAction {
    let state = classify(tree, idx, &selection.predicate());
    let action = ClickAction::for_state(state);
    match action {
        ClickAction::Select => select_subtree(tree, idx, true, selection),
        ClickAction::Clear => select_subtree(tree, idx, false, selection),
        ClickAction::Ignore => {}
    }
    action
}

/// Select every record of the snapshot
pub fn select_all(tree: &IndexTree, selection: &mut Selection) {
    for &root in tree.roots() {
        select_subtree(tree, root, true, selection);
    }
}

/// Tri-state checkbox glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Checkbox {
    Unchecked,
    Checked,
    Indeterminate,
    /// Already present locally, not togglable
    Present,
}

impl Checkbox {
    /// Rendering of a classified row; childless folders render unchecked
    pub fn for_state(state: Option<RowState>) -> Self {
        match state {
            Some(RowState::None) | None => Checkbox::Unchecked,
            Some(RowState::Selected) | Some(RowState::DownloadedOrSelected) => Checkbox::Checked,
            Some(RowState::Downloaded) => Checkbox::Present,
            Some(RowState::DownloadedOrNone) | Some(RowState::Indeterminate) => {
                Checkbox::Indeterminate
            }
        }
    }

    /// The top-level "select all" box.
    ///
    /// Compares the raw selection size to the record count and ignores the
    /// `downloaded` flags, so it can disagree with the classifier at the root.
    pub fn root(selection: &Selection, total_records: usize) -> Self {
        if selection.is_empty() {
            Checkbox::Unchecked
        } else if selection.len() == total_records {
            Checkbox::Checked
        } else {
            Checkbox::Indeterminate
        }
    }
}
