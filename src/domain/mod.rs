//! Domain Layer
//!
//! The core of Sharetree: pure functions over an index snapshot, without I/O.
//!
//! ## Structure
//!
//! - `tree/` - Arena forest and the builder that groups, collapses and strips it
//! - `size` - Bottom-up size aggregation keyed by node identity
//! - `row_state` - Six-way selection/availability classification
//! - `selection` - Selection set, subtree select/clear and click policy
//! - `request` - Download request built from the selection
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Recompute from snapshot** - Row states and requests take the selection
//!    as a parameter; nothing is patched incrementally

pub mod request;
pub mod row_state;
pub mod selection;
pub mod size;
pub mod tree;
