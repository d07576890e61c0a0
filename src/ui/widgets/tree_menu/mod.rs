//! Tree Menu Widget
//!
//! A hierarchical view of an index forest for picking files to download.
//! Clicking a row applies the folder toggle policy; folder glyphs follow the
//! row state of everything beneath them.
//!
//! # Module Structure
//!
//! - `menu` - TreeMenu state management and action handling
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod menu;
mod render;

pub use input::{key_to_action, run_interactive};
pub use menu::{FlattenedNode, TreeAction, TreeMenu};
pub use render::{render_status_line, RenderStyle};
