//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`step`]: the step at the cursor with its snapshot, pointers and answer
//! - [`log`]: rolling log of revealed steps
//! - [`input`]: committed input, or the editor while re-applying input
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function. Panes are
//! stateless apart from the scroll offsets the app lends them.

pub mod input;
pub mod log;
pub mod status;
pub mod step;

// Re-export render functions for convenience
pub use input::render_input_pane;
pub use log::render_log_pane;
pub use status::render_status_bar;
pub use step::render_step_pane;
