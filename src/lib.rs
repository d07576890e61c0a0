//! Sharetree - browse a peer's file index and choose what to download
//!
//! A connected peer publishes a flat list of index records (library root,
//! relative path, size, whether a copy is already present locally). Sharetree
//! turns that list into a folder forest, aggregates sizes, classifies each
//! row's selection state, and propagates selection changes so a host can
//! build a download request.

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::request::{DownloadItem, DownloadRequest};
pub use domain::row_state::{classify, RowState, RowStates};
pub use domain::selection::{
    click, select_all, select_subtree, toggle_leaf, Checkbox, ClickAction, Selection,
    SelectionSummary,
};
pub use domain::size::{SizeEntry, SizeMap};
pub use domain::tree::{build_tree, IndexTree, NodeIdx, TreeBuilder, TreeNode};
pub use error::{ShareTreeError, ShareTreeResult};
pub use models::{FileSize, IndexRecord, IndexSnapshot};
