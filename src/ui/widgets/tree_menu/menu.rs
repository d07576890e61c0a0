//! TreeMenu state management and action handling.
//!
//! The menu borrows the built forest and owns the selection. Row states are
//! recomputed from the selection after every change; nothing about them is
//! cached across actions.

use std::collections::HashSet;

use sharetree::domain::row_state::RowStates;
use sharetree::domain::selection::{
    click, select_all, Checkbox, ClickAction, Selection, SelectionSummary,
};
use sharetree::domain::size::{SizeEntry, SizeMap};
use sharetree::domain::tree::{IndexTree, NodeIdx};

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::{icons, icons_ascii};

use super::render::{
    label_column, render_help_bar, render_row, render_status_bar, render_tree_node, RenderStyle,
};

/// A visible row of the tree
#[derive(Debug, Clone)]
pub struct FlattenedNode {
    pub idx: NodeIdx,
    /// Depth level (0 = forest top)
    pub depth: usize,
    pub label: String,
    pub checkbox: Checkbox,
    /// Whether this node is expanded (for folders)
    pub expanded: bool,
    pub has_children: bool,
    /// Records beneath this node
    pub file_count: usize,
    pub size: SizeEntry,
}

/// Tree menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Click the row under the cursor
    Toggle,
    /// Expand node
    Expand,
    /// Collapse node
    Collapse,
    /// Select all
    SelectAll,
    /// Select none
    SelectNone,
    /// Confirm selection
    Confirm,
    /// Quit without confirming
    Quit,
}

/// Interactive tree menu over an index forest
pub struct TreeMenu<'t> {
    tree: &'t IndexTree,
    sizes: SizeMap,
    file_counts: Vec<usize>,
    selection: Selection,
    expanded: HashSet<NodeIdx>,
    /// Current cursor position in flattened view
    cursor: usize,
    last_click: Option<ClickAction>,
    flattened: Vec<FlattenedNode>,
}

impl<'t> TreeMenu<'t> {
    /// Create a menu with folders expanded down to `expand_depth` levels
    pub fn new(tree: &'t IndexTree, selection: Selection, expand_depth: usize) -> Self {
        let expanded = tree
            .walk()
            .into_iter()
            .filter(|&(idx, depth)| depth < expand_depth && !tree.children(idx).is_empty())
            .map(|(idx, _)| idx)
            .collect();

        let mut menu = Self {
            tree,
            sizes: SizeMap::compute(tree),
            file_counts: count_files(tree),
            selection,
            expanded,
            cursor: 0,
            last_click: None,
            flattened: Vec::new(),
        };
        menu.rebuild_flattened();
        menu
    }

    /// Rebuild the flattened node list
    pub fn rebuild_flattened(&mut self) {
        let states = RowStates::compute(self.tree, self.selection.predicate());
        let mut flattened = Vec::new();
        for &root in self.tree.roots() {
            self.flatten_node(root, 0, &states, &mut flattened);
        }
        self.flattened = flattened;

        // Ensure cursor is within bounds
        if !self.flattened.is_empty() && self.cursor >= self.flattened.len() {
            self.cursor = self.flattened.len() - 1;
        }
    }

    fn flatten_node(
        &self,
        idx: NodeIdx,
        depth: usize,
        states: &RowStates,
        out: &mut Vec<FlattenedNode>,
    ) {
        let children = self.tree.children(idx);
        let expanded = self.expanded.contains(&idx);
        out.push(FlattenedNode {
            idx,
            depth,
            label: self.tree.node(idx).part.clone(),
            checkbox: Checkbox::for_state(states.get(idx)),
            expanded,
            has_children: !children.is_empty(),
            file_count: self.file_counts[idx.index()],
            size: self.sizes.get(idx),
        });

        if expanded {
            for &child in children {
                self.flatten_node(child, depth + 1, states, out);
            }
        }
    }

    /// Handle a tree action. Returns `true` when the menu is done.
    pub fn handle_action(&mut self, action: TreeAction) -> bool {
        match action {
            TreeAction::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                false
            }
            TreeAction::Down => {
                if self.cursor + 1 < self.flattened.len() {
                    self.cursor += 1;
                }
                false
            }
            TreeAction::Toggle => {
                if let Some(idx) = self.current() {
                    self.last_click = Some(click(self.tree, idx, &mut self.selection));
                }
                self.rebuild_flattened();
                false
            }
            TreeAction::Expand => {
                if let Some(idx) = self.current() {
                    if !self.tree.children(idx).is_empty() {
                        self.expanded.insert(idx);
                    }
                }
                self.rebuild_flattened();
                false
            }
            TreeAction::Collapse => {
                if let Some(idx) = self.current() {
                    self.expanded.remove(&idx);
                }
                self.rebuild_flattened();
                false
            }
            TreeAction::SelectAll => {
                select_all(self.tree, &mut self.selection);
                self.last_click = None;
                self.rebuild_flattened();
                false
            }
            TreeAction::SelectNone => {
                self.selection.clear();
                self.last_click = None;
                self.rebuild_flattened();
                false
            }
            TreeAction::Confirm => true,
            TreeAction::Quit => true,
        }
    }

    /// Get the flattened view
    pub fn flattened_nodes(&self) -> &[FlattenedNode] {
        &self.flattened
    }

    fn current(&self) -> Option<NodeIdx> {
        self.flattened.get(self.cursor).map(|node| node.idx)
    }

    pub fn into_selection(self) -> Selection {
        self.selection
    }

    pub fn total_count(&self) -> usize {
        self.tree.records().len()
    }

    pub fn summary(&self) -> SelectionSummary {
        self.selection.summary()
    }

    pub fn root_checkbox(&self) -> Checkbox {
        Checkbox::root(&self.selection, self.total_count())
    }

    /// Render the visible rows with a cursor column
    pub fn render(&self, style: &RenderStyle) -> String {
        let width = label_column(&self.flattened);
        let mut out = String::new();

        for (i, node) in self.flattened.iter().enumerate() {
            let is_active = i == self.cursor;
            out.push_str(&render_tree_node(node, is_active, width, style));
            out.push('\n');
        }

        out
    }

    /// Render the visible rows without a cursor, for non-interactive output
    pub fn render_plain(&self, style: &RenderStyle) -> String {
        let width = label_column(&self.flattened);
        let mut out = String::new();
        for node in &self.flattened {
            out.push_str(&render_row(node, width, style));
            out.push('\n');
        }
        out
    }

    /// Render the status bar
    pub fn render_status_bar(&self, style: &RenderStyle) -> String {
        let mut status = render_status_bar(
            self.root_checkbox(),
            self.summary(),
            self.total_count(),
            style,
        );
        if self.last_click == Some(ClickAction::Ignore) {
            let icon = if style.unicode {
                icons::WARNING
            } else {
                icons_ascii::WARNING
            };
            let note = format!("{} already downloaded, nothing to select", icon);
            status.push('\n');
            status.push_str(&ColoredText::warning(note).render(style.color));
        }
        status
    }

    /// Render the help bar
    pub fn render_help_bar(&self, style: &RenderStyle) -> String {
        render_help_bar(style.unicode)
    }
}

/// Number of records beneath every node, indexed by node index
fn count_files(tree: &IndexTree) -> Vec<usize> {
    let mut counts = vec![0; tree.node_count()];
    // reverse pre-order visits children before their parent
    for (idx, _) in tree.walk().into_iter().rev() {
        let count = if tree.is_leaf(idx) {
            1
        } else {
            tree.children(idx)
                .iter()
                .map(|child| counts[child.index()])
                .sum()
        };
        counts[idx.index()] = count;
    }
    counts
}
