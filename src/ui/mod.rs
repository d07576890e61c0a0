//! Terminal UI: theme tokens, capabilities, tree rendering, JSON output

pub mod context;
pub mod format;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod widgets;
