//! Index value types shared by the tree, selection and request layers.
//!
//! These are exactly what the transfer engine hands over for a connected peer:
//! one [`IndexRecord`] per remote file, delivered as a whole snapshot.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ShareTreeError, ShareTreeResult};

/// Size of a remote file as reported by its owner.
///
/// `Estimated` is used for files that will be transcoded before transfer,
/// `Unknown` when the peer could not tell at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "bytes", rename_all = "lowercase")]
pub enum FileSize {
    Actual(u64),
    Estimated(u64),
    Unknown,
}

impl FileSize {
    /// Bytes contributed to a sum (`Unknown` counts as zero)
    pub fn bytes(&self) -> u64 {
        match self {
            FileSize::Actual(bytes) | FileSize::Estimated(bytes) => *bytes,
            FileSize::Unknown => 0,
        }
    }

    /// Whether this size is exact
    pub fn is_exact(&self) -> bool {
        matches!(self, FileSize::Actual(_))
    }
}

/// One file known to exist in a remote library.
///
/// Two records with identical fields are the same selectable unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexRecord {
    /// Remote device the file lives on
    #[serde(default)]
    pub node_id: String,
    /// Library root name
    pub root: String,
    /// Slash-separated path beneath the root
    pub path: String,
    pub file_size: FileSize,
    /// Already present on this device
    #[serde(default)]
    pub downloaded: bool,
}

impl IndexRecord {
    pub fn new(root: impl Into<String>, path: impl Into<String>, file_size: FileSize) -> Self {
        Self {
            node_id: String::new(),
            root: root.into(),
            path: path.into(),
            file_size,
            downloaded: false,
        }
    }

    /// Mark the record as already downloaded
    pub fn downloaded(mut self) -> Self {
        self.downloaded = true;
        self
    }

    /// Path with one redundant leading separator removed
    pub fn relative_path(&self) -> &str {
        self.path.strip_prefix('/').unwrap_or(&self.path)
    }
}

/// Accepted on-disk shapes of a snapshot file.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotDe {
    List(Vec<IndexRecord>),
    Table {
        #[serde(default)]
        node_id: Option<String>,
        records: Vec<IndexRecord>,
    },
}

/// A full index snapshot for one connected peer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct IndexSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    pub records: Vec<IndexRecord>,
}

impl IndexSnapshot {
    pub fn new(records: Vec<IndexRecord>) -> Self {
        Self {
            node_id: None,
            records,
        }
    }

    /// Parse a snapshot from JSON text.
    ///
    /// Accepts a bare array of records or `{ "node_id": .., "records": [..] }`.
    /// Records without a `node_id` inherit the snapshot's.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let snapshot = match serde_json::from_str::<SnapshotDe>(content)? {
            SnapshotDe::List(records) => Self::new(records),
            SnapshotDe::Table { node_id, records } => Self { node_id, records },
        };
        Ok(snapshot.inherit_node_id())
    }

    /// Load a snapshot file
    pub fn load(path: &Path) -> ShareTreeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| ShareTreeError::InvalidSnapshot {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn inherit_node_id(mut self) -> Self {
        if let Some(node_id) = &self.node_id {
            for record in &mut self.records {
                if record.node_id.is_empty() {
                    record.node_id = node_id.clone();
                }
            }
        }
        self
    }
}
