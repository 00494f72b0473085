//! Playback of a finished trace
//!
//! - [`controller`]: the [`PlaybackController`] state machine and its timer
//! - [`log`]: the bounded [`PlaybackLog`] of revealed steps
//! - [`config`]: delay and log size ([`PlaybackConfig`])
//! - [`session`]: the object-safe [`Session`] view of any controller
//! - [`workbench`]: atomic re-apply of new input ([`Workbench`])
//!
//! There is no global clock. Each controller owns at most one timer, and the
//! caller drives it by passing the current [`Instant`](std::time::Instant) to
//! `play` and `poll`.

pub mod config;
pub mod controller;
pub mod log;
pub mod session;
pub mod workbench;

pub use config::PlaybackConfig;
pub use controller::{PlaybackController, PlaybackMode, PlaybackState, Timer, TimerId};
pub use log::{LogEntry, PlaybackLog};
pub use session::Session;
pub use workbench::Workbench;
