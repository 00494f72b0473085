//! # Introduction
//!
//! tracetty runs classic algorithms instrumented to record every meaningful
//! transition as a step. The recorded trace is then replayed step by step or
//! on a timer in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Text → Input parsers → Builder → Trace → Playback controller → TUI
//! ```
//!
//! 1. [`input`] parses free text into bounded lists, matrices, trees and
//!    edge lists, returning [`input::InputParseError`] on bad input.
//! 2. [`algorithms`] holds one builder per algorithm and the
//!    [`algorithms::Algorithm`] registry.
//! 3. [`trace`] is the step and trace model shared by every builder, along
//!    with the explicit call stack used by recursive builders.
//! 4. [`playback`] walks a cursor over a trace, manually or with a
//!    cancellable timer, and keeps the rolling log.
//! 5. [`ui`] is the ratatui front end; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Sliding window and two pointers: longest substring without repeats,
//! trapping rain water, 3Sum, product except self. Backtracking: combination
//! sum, permutations. Graph: course schedule (Kahn). Tree post-order: lowest
//! common ancestor, maximum path sum. Divide and conquer: bottom-up merge
//! sort. Matrix: spiral order, in-place rotation.

pub mod algorithms;
pub mod constants;
pub mod input;
pub mod playback;
pub mod trace;
pub mod ui;
