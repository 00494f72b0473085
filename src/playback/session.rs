//! Type-erased playback
//!
//! Every algorithm has its own step kind and snapshot type. [`Session`]
//! hides them behind one object-safe interface so the front end can hold any
//! controller as a `Box<dyn Session>`.

use super::controller::{PlaybackController, PlaybackState, TimerId};
use super::log::PlaybackLog;
use crate::trace::{SnapshotView, StepKind, StepView};
use std::any::Any;
use std::time::Instant;

pub trait Session {
    /// Name of the builder behind the trace
    fn algorithm(&self) -> &'static str;

    fn state(&self) -> PlaybackState;

    /// Number of steps in the trace
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn play(&mut self, now: Instant) -> bool;

    fn pause(&mut self) -> bool;

    fn step(&mut self) -> bool;

    fn reset(&mut self);

    fn tick(&mut self, id: TimerId) -> bool;

    fn poll(&mut self, now: Instant) -> usize;

    fn sync_log(&mut self) -> usize;

    fn cancel_timer(&mut self) -> bool;

    fn timer_id(&self) -> Option<TimerId>;

    fn log(&self) -> &PlaybackLog;

    /// The step at the cursor, rendered
    fn view(&self) -> Option<StepView>;

    /// Every step, rendered, regardless of the cursor
    fn views(&self) -> Vec<StepView>;

    /// The concrete controller, for swapping in a trace of its own type
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<K, S> Session for PlaybackController<K, S>
where
    K: StepKind + 'static,
    S: SnapshotView + 'static,
{
    fn algorithm(&self) -> &'static str {
        self.trace().algorithm()
    }

    fn state(&self) -> PlaybackState {
        PlaybackController::state(self)
    }

    fn len(&self) -> usize {
        PlaybackController::len(self)
    }

    fn play(&mut self, now: Instant) -> bool {
        PlaybackController::play(self, now)
    }

    fn pause(&mut self) -> bool {
        PlaybackController::pause(self)
    }

    fn step(&mut self) -> bool {
        PlaybackController::step(self)
    }

    fn reset(&mut self) {
        PlaybackController::reset(self)
    }

    fn tick(&mut self, id: TimerId) -> bool {
        PlaybackController::tick(self, id)
    }

    fn poll(&mut self, now: Instant) -> usize {
        PlaybackController::poll(self, now)
    }

    fn sync_log(&mut self) -> usize {
        PlaybackController::sync_log(self)
    }

    fn cancel_timer(&mut self) -> bool {
        PlaybackController::cancel_timer(self)
    }

    fn timer_id(&self) -> Option<TimerId> {
        self.timer().map(|t| t.id)
    }

    fn log(&self) -> &PlaybackLog {
        PlaybackController::log(self)
    }

    fn view(&self) -> Option<StepView> {
        let total = PlaybackController::len(self);
        self.current().map(|step| StepView::of(step, total))
    }

    fn views(&self) -> Vec<StepView> {
        let total = PlaybackController::len(self);
        self.trace().iter().map(|step| StepView::of(step, total)).collect()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sliding_window::longest_substring;
    use crate::playback::{PlaybackConfig, PlaybackMode};

    fn session(text: &str) -> Box<dyn Session> {
        let chars: Vec<char> = text.chars().collect();
        Box::new(PlaybackController::new(
            longest_substring(&chars),
            PlaybackConfig::default(),
        ))
    }

    #[test]
    fn test_boxed_session_drives_the_controller() {
        let mut s = session("abca");
        assert_eq!(s.algorithm(), "longest-substring");
        assert!(s.view().is_none());

        assert!(s.step());
        let view = s.view().unwrap();
        assert_eq!(view.index, 1);
        assert_eq!(view.kind, "init");
        assert_eq!(view.total, s.len());

        while s.step() {}
        assert_eq!(s.state().mode, PlaybackMode::Finished);
        assert_eq!(s.view().unwrap().answer, "longest length 3");
    }

    #[test]
    fn test_views_cover_the_whole_trace() {
        let s = session("ab");
        let views = s.views();
        assert_eq!(views.len(), s.len());
        assert_eq!(views.last().unwrap().kind, "done");
    }
}
