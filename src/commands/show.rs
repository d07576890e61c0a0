//! Show command handler
//!
//! Prints the forest with checkbox glyphs, sizes and file counts.

use std::path::Path;

use anyhow::Result;

use sharetree::config::Config;
use sharetree::domain::selection::Selection;
use sharetree::domain::tree::IndexTree;
use sharetree::presentation::ColorWhen;

use crate::commands::index::{apply_selects, load_index};
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, TreeDocument};
use crate::ui::widgets::tree_menu::{render_status_line, TreeMenu};

/// Execute the show command
pub fn cmd_show(
    index: &Path,
    select: &[String],
    depth: Option<usize>,
    json: bool,
    color: Option<ColorWhen>,
    config: &Config,
) -> Result<()> {
    let ui = UiContext::new(json, color, depth, config);
    let loaded = load_index(index)?;
    let selection = apply_selects(&loaded.tree, select)?;

    if ui.json {
        emit_event(&TreeDocument::new(&loaded.tree, &selection, loaded.node_id))?;
        return Ok(());
    }

    print!("{}", render_show(&loaded.tree, selection, &ui));
    Ok(())
}

/// Text rendering of `show`: tree rows, a blank line, the status line
pub fn render_show(tree: &IndexTree, selection: Selection, ui: &UiContext) -> String {
    let style = ui.render_style();
    let menu = TreeMenu::new(tree, selection, ui.expand_depth);

    let mut out = String::new();
    if let Some(root) = tree.stripped_root() {
        out.push_str(root);
        out.push_str("/\n");
    }
    out.push_str(&menu.render_plain(&style));
    out.push('\n');
    out.push_str(&render_status_line(
        menu.root_checkbox(),
        menu.summary(),
        menu.total_count(),
        &style,
    ));
    out.push('\n');
    out
}
