//! The playback state machine
//!
//! ```text
//!   Idle --play--> Playing <--play/pause--> Paused
//!     \              |  ^                     |
//!      \--step-->    |  +------play-----------+
//!                    v
//!   (cursor = N) Finished --play--> Playing (from cursor 0)
//! ```
//!
//! The cursor counts revealed steps: at cursor `k` steps `1..=k` have been
//! shown and step `k` is current. `reset` and `reapply` are the only ways to
//! move it backwards.

use super::config::PlaybackConfig;
use super::log::{LogEntry, PlaybackLog};
use crate::trace::{Step, StepKind, Trace};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    Idle,
    Playing,
    Paused,
    Finished,
}

/// Cursor and mode, read together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub cursor: usize,
    pub mode: PlaybackMode,
}

impl PlaybackState {
    fn idle() -> Self {
        PlaybackState {
            cursor: 0,
            mode: PlaybackMode::Idle,
        }
    }
}

/// Generation id of a scheduled timer
///
/// Every schedule gets a fresh id, so a tick carrying an old id can be told
/// apart from one for the live timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// The one repeating auto-play timer a controller may own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub id: TimerId,
    pub interval: Duration,
    pub next_due: Instant,
}

/// Walks a cursor across one [`Trace`]
#[derive(Debug)]
pub struct PlaybackController<K, S> {
    trace: Trace<K, S>,
    state: PlaybackState,
    log: PlaybackLog,
    /// Steps `1..=logged` are already in the log
    logged: usize,
    timer: Option<Timer>,
    next_timer: u64,
    config: PlaybackConfig,
}

impl<K: StepKind, S> PlaybackController<K, S> {
    pub fn new(trace: Trace<K, S>, config: PlaybackConfig) -> Self {
        PlaybackController {
            trace,
            state: PlaybackState::idle(),
            log: PlaybackLog::new(config.log_capacity()),
            logged: 0,
            timer: None,
            next_timer: 0,
            config,
        }
    }

    pub fn trace(&self) -> &Trace<K, S> {
        &self.trace
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor
    }

    pub fn mode(&self) -> PlaybackMode {
        self.state.mode
    }

    pub fn log(&self) -> &PlaybackLog {
        &self.log
    }

    pub fn config(&self) -> PlaybackConfig {
        self.config
    }

    pub fn timer(&self) -> Option<&Timer> {
        self.timer.as_ref()
    }

    /// Number of steps in the trace
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// The step at the cursor; `None` while nothing is revealed
    pub fn current(&self) -> Option<&Step<K, S>> {
        self.state
            .cursor
            .checked_sub(1)
            .and_then(|i| self.trace.get(i))
    }

    /// Start or resume auto-play
    ///
    /// From `Finished` playback restarts at cursor 0 with an empty log.
    /// Returns `false` if already playing.
    pub fn play(&mut self, now: Instant) -> bool {
        match self.state.mode {
            PlaybackMode::Playing => return false,
            PlaybackMode::Finished => self.rewind(),
            PlaybackMode::Idle | PlaybackMode::Paused => {}
        }

        self.cancel_timer();
        self.next_timer += 1;
        let timer = Timer {
            id: TimerId(self.next_timer),
            interval: self.config.delay(),
            next_due: now + self.config.delay(),
        };
        self.timer = Some(timer);
        self.state.mode = PlaybackMode::Playing;
        debug!(
            algorithm = self.trace.algorithm(),
            cursor = self.state.cursor,
            timer = timer.id.0,
            "play"
        );
        true
    }

    /// Stop auto-play, keeping the cursor
    pub fn pause(&mut self) -> bool {
        if self.state.mode != PlaybackMode::Playing {
            return false;
        }
        self.cancel_timer();
        self.state.mode = PlaybackMode::Paused;
        debug!(cursor = self.state.cursor, "pause");
        true
    }

    /// Reveal the next step by hand
    ///
    /// Returns `false` once every step is revealed. Stepping from `Idle`
    /// leaves the controller `Paused`.
    pub fn step(&mut self) -> bool {
        if self.state.cursor >= self.trace.len() {
            return false;
        }
        if self.state.mode == PlaybackMode::Idle {
            self.state.mode = PlaybackMode::Paused;
        }
        self.advance();
        true
    }

    /// Back to `Idle` at cursor 0 with an empty log
    pub fn reset(&mut self) {
        self.cancel_timer();
        self.rewind();
        self.state.mode = PlaybackMode::Idle;
        debug!(algorithm = self.trace.algorithm(), "reset");
    }

    /// Swap in a freshly built trace
    ///
    /// The timer is cancelled before anything else changes; the old trace,
    /// state and log are then replaced together.
    pub fn reapply(&mut self, trace: Trace<K, S>) {
        self.cancel_timer();
        self.trace = trace;
        self.state = PlaybackState::idle();
        self.log.clear();
        self.logged = 0;
        debug!(
            algorithm = self.trace.algorithm(),
            steps = self.trace.len(),
            "reapply"
        );
    }

    /// Timer callback: advance one step if `id` names the live timer
    pub fn tick(&mut self, id: TimerId) -> bool {
        match self.timer {
            Some(timer) if timer.id == id && self.state.mode == PlaybackMode::Playing => {
                self.advance();
                true
            }
            _ => {
                trace!(timer = id.0, "stale tick ignored");
                false
            }
        }
    }

    /// Fire every tick of the live timer that is due at `now`
    ///
    /// Returns the number of steps revealed.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.timer.as_mut() {
            if timer.next_due > now {
                break;
            }
            timer.next_due += timer.interval;
            let id = timer.id;
            if self.tick(id) {
                fired += 1;
            }
        }
        fired
    }

    /// Append every revealed step that is not yet logged
    ///
    /// Guarded by the watermark, so calling it again at the same cursor
    /// appends nothing. Returns the number of entries appended.
    pub fn sync_log(&mut self) -> usize {
        let mut appended = 0;
        while self.logged < self.state.cursor {
            let Some(step) = self.trace.get(self.logged) else {
                break;
            };
            self.log.push(LogEntry {
                index: step.index,
                kind: step.kind.label(),
                description: step.description.clone(),
            });
            self.logged += 1;
            appended += 1;
        }
        appended
    }

    /// Drop the live timer, if any
    pub fn cancel_timer(&mut self) -> bool {
        match self.timer.take() {
            Some(timer) => {
                trace!(timer = timer.id.0, "timer cancelled");
                true
            }
            None => false,
        }
    }

    fn advance(&mut self) {
        self.state.cursor += 1;
        self.sync_log();
        trace!(cursor = self.state.cursor, "advance");
        if self.state.cursor == self.trace.len() {
            self.cancel_timer();
            self.state.mode = PlaybackMode::Finished;
            debug!(
                algorithm = self.trace.algorithm(),
                steps = self.trace.len(),
                "finished"
            );
        }
    }

    fn rewind(&mut self) {
        self.state.cursor = 0;
        self.log.clear();
        self.logged = 0;
    }
}
