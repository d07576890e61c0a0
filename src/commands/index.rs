//! Shared steps of every command: load the snapshot, build the forest,
//! apply `--select` paths, write the download request.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::info;

use sharetree::domain::request::DownloadRequest;
use sharetree::domain::selection::{select_subtree, Selection};
use sharetree::domain::tree::{build_tree, IndexTree};
use sharetree::error::{ShareTreeError, ShareTreeResult};
use sharetree::models::IndexSnapshot;

/// A built forest plus the peer it was indexed from
pub struct LoadedIndex {
    pub node_id: Option<String>,
    pub tree: IndexTree,
}

pub fn load_index(path: &Path) -> Result<LoadedIndex> {
    let snapshot = IndexSnapshot::load(path)
        .with_context(|| format!("failed to load index {}", path.display()))?;
    info!(
        path = %path.display(),
        records = snapshot.records.len(),
        "loaded index snapshot"
    );

    Ok(LoadedIndex {
        node_id: snapshot.node_id,
        tree: build_tree(snapshot.records),
    })
}

/// Select the subtree under every node path, in order
pub fn apply_selects(tree: &IndexTree, paths: &[String]) -> ShareTreeResult<Selection> {
    let mut selection = Selection::new();
    for path in paths {
        let idx = tree
            .find(path)
            .ok_or_else(|| ShareTreeError::NodeNotFound { path: path.clone() })?;
        select_subtree(tree, idx, true, &mut selection);
    }
    Ok(selection)
}

/// The request as written to disk or stdout
#[derive(Debug, Serialize)]
pub struct RequestDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    pub request: &'a DownloadRequest,
}

impl<'a> RequestDocument<'a> {
    pub fn new(node_id: Option<&'a str>, request: &'a DownloadRequest) -> Self {
        Self {
            node_id,
            created_at: Utc::now(),
            request,
        }
    }
}

/// Write `doc` as pretty JSON to `output`, or to stdout.
///
/// Files are replaced atomically.
pub fn write_request(doc: &RequestDocument<'_>, output: Option<&Path>) -> Result<()> {
    let mut json = serde_json::to_string_pretty(doc).map_err(ShareTreeError::from)?;
    json.push('\n');

    let Some(path) = output else {
        let mut out = std::io::stdout().lock();
        out.write_all(json.as_bytes())?;
        return Ok(());
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(json.as_bytes())?;
    tmp.persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// One-line description of a request for humans
pub fn describe(request: &DownloadRequest, total: usize) -> String {
    match request {
        DownloadRequest::All => format!("all {} files", total),
        DownloadRequest::Partial(items) => format!("{} of {} files", items.len(), total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sharetree::domain::request::DownloadItem;
    use sharetree::models::{FileSize, IndexRecord};
    use tempfile::tempdir;

    fn tree() -> IndexTree {
        build_tree(vec![
            IndexRecord::new("music", "a/1.mp3", FileSize::Actual(1)),
            IndexRecord::new("music", "b/2.mp3", FileSize::Actual(1)),
        ])
    }

    #[test]
    fn apply_selects_resolves_paths() {
        let tree = tree();
        let selection = apply_selects(&tree, &["a".to_string()]).unwrap();
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn apply_selects_unknown_path_fails() {
        let tree = tree();
        let err = apply_selects(&tree, &["c".to_string()]).unwrap_err();
        assert!(matches!(err, ShareTreeError::NodeNotFound { path } if path == "c"));
    }

    #[test]
    fn write_request_replaces_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(&path, "stale").unwrap();

        let request = DownloadRequest::Partial(vec![DownloadItem {
            root: "music".into(),
            path: "a/1.mp3".into(),
        }]);
        write_request(&RequestDocument::new(Some("peer"), &request), Some(&path)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["node_id"], "peer");
        assert_eq!(value["request"]["kind"], "partial");
        assert_eq!(value["request"]["items"][0]["path"], "a/1.mp3");
        assert!(value["created_at"].is_string());
    }

    #[test]
    fn describe_counts_items() {
        assert_eq!(describe(&DownloadRequest::All, 3), "all 3 files");
        assert_eq!(
            describe(&DownloadRequest::Partial(Vec::new()), 3),
            "0 of 3 files"
        );
    }
}
