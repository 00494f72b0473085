//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, the keyboard event loop and the input editor
//! - **[`panes`]**: stateless render functions for each visible pane (step, log,
//!   input, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Workbench`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Workbench`]: crate::playback::Workbench
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
