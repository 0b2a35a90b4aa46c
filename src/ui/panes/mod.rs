//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`input`]: The expression being edited and the prefix result of the last parse
//! - [`tokens`]: Token table for the last parse
//! - [`tree`]: Indented outline of the syntax tree, in traversal order
//! - [`history`]: Every expression submitted this session with its result
//! - [`status`]: Status bar with keybindings and counters
//! - `utils`: Shared block, scroll, and token styling helpers
//!
//! Each pane module exports a `render_*` function that draws into a given area.

mod utils;

pub mod history;
pub mod input;
pub mod status;
pub mod tokens;
pub mod tree;

pub use history::render_history_pane;
pub use input::{render_input_pane, render_result_pane};
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
pub use tree::{outline, render_tree_pane, OutlineRow};
