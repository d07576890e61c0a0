//! JSON output utilities for CLI commands.
//!
//! `--json` output is one JSON document per command, written to stdout.

use std::io::{self, Write};

use serde::Serialize;
use sharetree::domain::row_state::{RowState, RowStates};
use sharetree::domain::selection::{Checkbox, Selection, SelectionSummary};
use sharetree::domain::size::{SizeEntry, SizeMap};
use sharetree::domain::tree::{IndexTree, NodeIdx};

/// A node of the `show --json` document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub part: String,
    /// `None` for childless folders
    pub state: Option<RowState>,
    pub size: SizeEntry,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeView>,
}

/// The whole forest as printed by `show --json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripped_root: Option<String>,
    pub root_checkbox: Checkbox,
    pub selected: SelectionSummary,
    pub total_files: usize,
    pub roots: Vec<NodeView>,
}

impl TreeDocument {
    pub fn new(tree: &IndexTree, selection: &Selection, node_id: Option<String>) -> Self {
        let sizes = SizeMap::compute(tree);
        let states = RowStates::compute(tree, selection.predicate());
        let total_files = tree.records().len();

        Self {
            node_id,
            stripped_root: tree.stripped_root().map(str::to_string),
            root_checkbox: Checkbox::root(selection, total_files),
            selected: selection.summary(),
            total_files,
            roots: tree
                .roots()
                .iter()
                .map(|&root| node_view(tree, root, &sizes, &states))
                .collect(),
        }
    }
}

fn node_view(tree: &IndexTree, idx: NodeIdx, sizes: &SizeMap, states: &RowStates) -> NodeView {
    NodeView {
        part: tree.node(idx).part.clone(),
        state: states.get(idx),
        size: sizes.get(idx),
        children: tree
            .children(idx)
            .iter()
            .map(|&child| node_view(tree, child, sizes, states))
            .collect(),
    }
}

/// Write a typed document as a single line of JSON.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Emit a typed document to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}
