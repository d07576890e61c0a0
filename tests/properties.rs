//! Property tests for sharetree.
//!
//! Properties use randomized index snapshots to protect the invariants of
//! tree building, size aggregation, row-state classification and selection.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/strategies.rs"]
mod strategies;

#[path = "properties/tree_builder.rs"]
mod tree_builder;

#[path = "properties/sizes.rs"]
mod sizes;

#[path = "properties/row_state.rs"]
mod row_state;
