//! Terminal rendering functions for tree menu.
//!
//! This module renders tree rows, status bars, and help text to strings for
//! terminal output.

use sharetree::config::SizeUnits;
use sharetree::domain::selection::{Checkbox, SelectionSummary};
use unicode_width::UnicodeWidthStr;

use crate::ui::format::format_size;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::{checkbox_icon, icons, icons_ascii};

use super::menu::FlattenedNode;

/// How rows are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub unicode: bool,
    pub color: bool,
    pub show_sizes: bool,
    pub units: SizeUnits,
}

impl RenderStyle {
    /// Unicode glyphs, no color, decimal sizes
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            unicode: true,
            color: false,
            show_sizes: true,
            units: SizeUnits::Decimal,
        }
    }
}

/// Display width of the widest indent + label among `nodes`
pub fn label_column(nodes: &[FlattenedNode]) -> usize {
    nodes
        .iter()
        .map(|node| node.depth * 2 + node.label.width())
        .max()
        .unwrap_or(0)
}

/// Render a single row without the cursor column
pub fn render_row(node: &FlattenedNode, label_width: usize, style: &RenderStyle) -> String {
    let indent = "  ".repeat(node.depth);

    // Expansion icon (only for nodes with children)
    let (expand, collapse) = if style.unicode {
        (icons::EXPAND, icons::COLLAPSE)
    } else {
        (icons_ascii::EXPAND, icons_ascii::COLLAPSE)
    };
    let expand_icon = if !node.has_children {
        " ".repeat(expand.width() + 1)
    } else if node.expanded {
        format!("{} ", expand)
    } else {
        format!("{} ", collapse)
    };

    let glyph = ColoredText::checkbox(node.checkbox, style.unicode).render(style.color);
    let mut line = format!("{}{}{} {}", indent, expand_icon, glyph, node.label);

    if style.show_sizes {
        let used = indent.len() + node.label.width();
        let size = format!("{:>10}", format_size(node.size, style.units));
        line.push_str(&" ".repeat(label_width.saturating_sub(used) + 2));
        line.push_str(&ColoredText::dim(size).render(style.color));
    }

    // File count suffix
    if node.has_children {
        line.push_str(&format!("  ({})", files(node.file_count)));
    }

    line
}

/// Render a single tree node with its cursor column
pub fn render_tree_node(
    node: &FlattenedNode,
    is_active: bool,
    label_width: usize,
    style: &RenderStyle,
) -> String {
    let cursor = if is_active { "> " } else { "  " };
    format!("{}{}", cursor, render_row(node, label_width, style))
}

/// One-line summary: root checkbox, selected count and size
pub fn render_status_line(
    root: Checkbox,
    summary: SelectionSummary,
    total: usize,
    style: &RenderStyle,
) -> String {
    let glyph = ColoredText::checkbox(root, style.unicode).render(style.color);
    format!(
        "{} Selected: {}/{} ({})",
        glyph,
        summary.files,
        files(total),
        format_size(summary.size, style.units)
    )
}

/// Render the status bar: the summary line plus a glyph legend
pub fn render_status_bar(
    root: Checkbox,
    summary: SelectionSummary,
    total: usize,
    style: &RenderStyle,
) -> String {
    let icon = |checkbox| checkbox_icon(checkbox, style.unicode);
    format!(
        "{}\n\n{} = selected    {} = partial    {} = downloaded    {} = not selected",
        render_status_line(root, summary, total, style),
        icon(Checkbox::Checked),
        icon(Checkbox::Indeterminate),
        icon(Checkbox::Present),
        icon(Checkbox::Unchecked),
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(unicode: bool) -> String {
    let (vertical, horizontal) = if unicode {
        (icons::NAV_VERTICAL, icons::NAV_HORIZONTAL)
    } else {
        (icons_ascii::NAV_VERTICAL, icons_ascii::NAV_HORIZONTAL)
    };
    format!(
        "[a] All    [n] None    [Enter] Confirm    [q] Quit\n\
         (Use {} to navigate, Space to toggle, {} to expand/collapse)",
        vertical, horizontal
    )
}

fn files(count: usize) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", count)
    }
}
