//! Browse command handler
//!
//! Interactive selection over the index forest, then the same request
//! output as `request`.

use std::path::Path;

use anyhow::{bail, Result};
use dialoguer::Confirm;

use sharetree::config::Config;
use sharetree::domain::request::DownloadRequest;
use sharetree::domain::selection::Selection;
use sharetree::error::ShareTreeError;
use sharetree::presentation::ColorWhen;

use crate::commands::index::{describe, load_index, write_request, RequestDocument};
use crate::ui::context::UiContext;
use crate::ui::terminal::stdin_is_tty;
use crate::ui::theme::ShareTreeTheme;
use crate::ui::widgets::tree_menu::{run_interactive, TreeMenu};

/// Execute the browse command
pub fn cmd_browse(
    index: &Path,
    output: Option<&Path>,
    yes: bool,
    depth: Option<usize>,
    json: bool,
    color: Option<ColorWhen>,
    config: &Config,
) -> Result<()> {
    let ui = UiContext::new(json, color, depth, config);
    if !ui.caps.is_tty || !stdin_is_tty() {
        bail!("browse needs an interactive terminal; use `sharetree request --select` instead");
    }

    let loaded = load_index(index)?;
    let title = match &loaded.node_id {
        Some(node_id) => format!("sharetree browse · {}", node_id),
        None => format!("sharetree browse · {}", index.display()),
    };

    let mut menu = TreeMenu::new(&loaded.tree, Selection::new(), ui.expand_depth);
    if !run_interactive(&mut menu, ui.render_style(), &title)? {
        return Err(ShareTreeError::Aborted.into());
    }
    let selection = menu.into_selection();
    let request = DownloadRequest::from_selection(&loaded.tree, &selection);

    if !yes {
        let prompt = format!("Request {}?", describe(&request, loaded.tree.records().len()));
        let confirmed = Confirm::with_theme(&ShareTreeTheme::new(ui.unicode))
            .with_prompt(prompt)
            .default(true)
            .interact()?;
        if !confirmed {
            return Err(ShareTreeError::Aborted.into());
        }
    }

    write_request(&RequestDocument::new(loaded.node_id.as_deref(), &request), output)
}
