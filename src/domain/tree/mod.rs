//! Index tree
//!
//! A forest of named nodes built from a flat list of index records.
//!
//! # Module Structure
//!
//! - `arena` - `IndexTree` storage, node handles and traversal
//! - `builder` - Grouping by root, path descent, top stripping
//! - `collapse` - Merging chains of single-child folders

mod arena;
mod builder;
mod collapse;

pub use arena::{IndexTree, NodeIdx, TreeNode};
pub use builder::{build_tree, TreeBuilder};
