//! Request command handler
//!
//! Resolves `--select` paths into a download request.

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use sharetree::domain::request::DownloadRequest;

use crate::commands::index::{apply_selects, describe, load_index, write_request, RequestDocument};
use crate::ui::json::emit_event;

/// Execute the request command
pub fn cmd_request(index: &Path, select: &[String], output: Option<&Path>, json: bool) -> Result<()> {
    let loaded = load_index(index)?;
    let selection = apply_selects(&loaded.tree, select)?;
    let request = DownloadRequest::from_selection(&loaded.tree, &selection);

    let doc = RequestDocument::new(loaded.node_id.as_deref(), &request);
    write_request(&doc, output)?;

    if let Some(path) = output {
        let total = loaded.tree.records().len();
        if json {
            emit_event(&json!({
                "event": "request_written",
                "path": path.display().to_string(),
                "all": request.is_all(),
            }))?;
        } else {
            eprintln!("Requested {} -> {}", describe(&request, total), path.display());
        }
    }
    Ok(())
}
