//! Execution traces
//!
//! A [`Trace`] is the complete, ordered history of one instrumented algorithm
//! run. Each entry is a [`Step`]: a kind tag, a human-readable description, a
//! fully owned snapshot of the state the view needs, and optional named
//! pointers and highlights.
//!
//! Builders never construct a `Trace` directly; they feed a [`TraceRecorder`],
//! which assigns the global 1-based step index and takes every snapshot by
//! value. Because a snapshot is moved into the recorder, later mutation of the
//! builder's working state cannot reach a step that has already been emitted.

pub mod frames;
pub mod view;

pub use frames::{CallStack, Frame};
pub use view::{SnapshotView, StepView};

use std::fmt;
use tracing::debug;

/// Algorithm-specific phase tag attached to every step
pub trait StepKind: Copy + Eq + fmt::Debug {
    /// Short lowercase label (`"expand"`, `"backtrack"`, ...)
    fn label(&self) -> &'static str;
}

/// Something the view should draw attention to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// Position in a one-dimensional array
    Index(usize),
    /// Matrix cell as (row, col)
    Cell(usize, usize),
    /// Graph or tree node id
    Node(usize),
    /// Directed edge (from, to)
    Edge(usize, usize),
}

/// Named pointer positions, kept in insertion order
///
/// A role that is present but set to `None` is a pointer that currently
/// points nowhere (e.g. `right` before the scan starts).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pointers {
    entries: Vec<(&'static str, Option<usize>)>,
}

impl Pointers {
    pub fn new() -> Self {
        Pointers {
            entries: Vec::new(),
        }
    }

    /// Builder-style [`set`](Self::set) for a pointer that has a position
    pub fn with(mut self, role: &'static str, position: usize) -> Self {
        self.set(role, Some(position));
        self
    }

    /// Builder-style [`set`](Self::set)
    pub fn with_opt(mut self, role: &'static str, position: Option<usize>) -> Self {
        self.set(role, position);
        self
    }

    /// Set or replace a pointer
    pub fn set(&mut self, role: &'static str, position: Option<usize>) {
        if let Some(entry) = self.entries.iter_mut().find(|(r, _)| *r == role) {
            entry.1 = position;
        } else {
            self.entries.push((role, position));
        }
    }

    /// Position of a pointer; `None` when the role is unset or null
    pub fn get(&self, role: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .and_then(|(_, p)| *p)
    }

    pub fn contains(&self, role: &str) -> bool {
        self.entries.iter().any(|(r, _)| *r == role)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<usize>)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One immutable entry of a trace
#[derive(Debug, Clone, PartialEq)]
pub struct Step<K, S> {
    /// 1-based position in the trace, unique and increasing
    pub index: usize,
    pub kind: K,
    pub description: String,
    pub snapshot: S,
    pub pointers: Pointers,
    pub highlights: Vec<Highlight>,
}

/// The finished, read-only step sequence from one builder run
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<K, S> {
    algorithm: &'static str,
    steps: Vec<Step<K, S>>,
}

impl<K, S> Trace<K, S> {
    /// Name of the builder that produced this trace
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for traces produced by a [`TraceRecorder`]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at a 0-based position
    pub fn get(&self, position: usize) -> Option<&Step<K, S>> {
        self.steps.get(position)
    }

    pub fn first(&self) -> Option<&Step<K, S>> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step<K, S>> {
        self.steps.last()
    }

    pub fn steps(&self) -> &[Step<K, S>] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<K, S>> {
        self.steps.iter()
    }

    pub fn descriptions(&self) -> impl Iterator<Item = &str> + '_ {
        self.steps.iter().map(|s| s.description.as_str())
    }
}

impl<K: StepKind, S> Trace<K, S> {
    /// Number of steps with the given kind
    pub fn count_kind(&self, kind: K) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }
}

impl<'a, K, S> IntoIterator for &'a Trace<K, S> {
    type Item = &'a Step<K, S>;
    type IntoIter = std::slice::Iter<'a, Step<K, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Append-only step sink used by every builder
#[derive(Debug)]
pub struct TraceRecorder<K, S> {
    algorithm: &'static str,
    steps: Vec<Step<K, S>>,
}

impl<K: StepKind, S> TraceRecorder<K, S> {
    pub fn new(algorithm: &'static str) -> Self {
        TraceRecorder {
            algorithm,
            steps: Vec::new(),
        }
    }

    /// Start a step; it is recorded once [`StepDraft::snapshot`] is called
    pub fn emit(&mut self, kind: K, description: impl Into<String>) -> StepDraft<'_, K, S> {
        StepDraft {
            recorder: self,
            kind,
            description: description.into(),
            pointers: Pointers::new(),
            highlights: Vec::new(),
        }
    }

    /// Number of steps recorded so far
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seal the recorder into a trace
    ///
    /// # Panics
    ///
    /// Panics if fewer than two steps were recorded. Every builder emits an
    /// init and a terminal step, so this only fires on a builder defect.
    pub fn finish(self) -> Trace<K, S> {
        assert!(
            self.steps.len() >= 2,
            "{} produced {} step(s); a trace needs an init and a terminal step",
            self.algorithm,
            self.steps.len()
        );
        debug!(
            algorithm = self.algorithm,
            steps = self.steps.len(),
            "trace finished"
        );
        Trace {
            algorithm: self.algorithm,
            steps: self.steps,
        }
    }

    fn push(&mut self, mut step: Step<K, S>) {
        step.index = self.steps.len() + 1;
        self.steps.push(step);
    }
}

/// A step under construction
#[must_use = "a step is only recorded once its snapshot is attached"]
pub struct StepDraft<'a, K: StepKind, S> {
    recorder: &'a mut TraceRecorder<K, S>,
    kind: K,
    description: String,
    pointers: Pointers,
    highlights: Vec<Highlight>,
}

impl<K: StepKind, S> StepDraft<'_, K, S> {
    pub fn pointers(mut self, pointers: Pointers) -> Self {
        self.pointers = pointers;
        self
    }

    pub fn highlight(mut self, highlight: Highlight) -> Self {
        self.highlights.push(highlight);
        self
    }

    pub fn highlights(mut self, highlights: impl IntoIterator<Item = Highlight>) -> Self {
        self.highlights.extend(highlights);
        self
    }

    /// Attach the owned snapshot and record the step
    pub fn snapshot(self, snapshot: S) {
        let StepDraft {
            recorder,
            kind,
            description,
            pointers,
            highlights,
        } = self;
        recorder.push(Step {
            index: 0,
            kind,
            description,
            snapshot,
            pointers,
            highlights,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Phase {
        Init,
        Work,
        Done,
    }

    impl StepKind for Phase {
        fn label(&self) -> &'static str {
            match self {
                Phase::Init => "init",
                Phase::Work => "work",
                Phase::Done => "done",
            }
        }
    }

    #[test]
    fn test_indices_are_one_based_and_increasing() {
        let mut rec: TraceRecorder<Phase, Vec<i64>> = TraceRecorder::new("demo");
        rec.emit(Phase::Init, "start").snapshot(vec![]);
        rec.emit(Phase::Work, "work").snapshot(vec![1]);
        rec.emit(Phase::Done, "end").snapshot(vec![1, 2]);
        let trace = rec.finish();

        let indices: Vec<usize> = trace.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(trace.algorithm(), "demo");
        assert_eq!(trace.count_kind(Phase::Work), 1);
    }

    #[test]
    fn test_snapshots_are_copied_on_emit() {
        let mut working = vec![3, 1, 2];
        let mut rec = TraceRecorder::new("demo");
        rec.emit(Phase::Init, "before").snapshot(working.clone());
        working.sort();
        rec.emit(Phase::Done, "after").snapshot(working.clone());
        working.clear();
        let trace = rec.finish();

        assert_eq!(trace.get(0).unwrap().snapshot, vec![3, 1, 2]);
        assert_eq!(trace.get(1).unwrap().snapshot, vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "a trace needs an init and a terminal step")]
    fn test_single_step_trace_is_a_defect() {
        let mut rec: TraceRecorder<Phase, ()> = TraceRecorder::new("broken");
        rec.emit(Phase::Init, "only").snapshot(());
        let _ = rec.finish();
    }

    #[test]
    fn test_pointers_replace_in_place() {
        let mut p = Pointers::new().with("left", 0).with("right", 4);
        p.set("left", Some(2));
        p.set("mid", None);

        assert_eq!(p.get("left"), Some(2));
        assert_eq!(p.get("mid"), None);
        assert!(p.contains("mid"));
        let roles: Vec<&str> = p.iter().map(|(r, _)| r).collect();
        assert_eq!(roles, vec!["left", "right", "mid"]);
    }

    #[test]
    fn test_draft_carries_pointers_and_highlights() {
        let mut rec = TraceRecorder::new("demo");
        rec.emit(Phase::Init, "init")
            .pointers(Pointers::new().with("i", 1))
            .highlight(Highlight::Index(1))
            .highlights([Highlight::Cell(0, 0)])
            .snapshot(0u8);
        rec.emit(Phase::Done, "done").snapshot(1u8);
        let trace = rec.finish();

        let first = trace.first().unwrap();
        assert_eq!(first.pointers.get("i"), Some(1));
        assert_eq!(
            first.highlights,
            vec![Highlight::Index(1), Highlight::Cell(0, 0)]
        );
        assert!(trace.last().unwrap().pointers.is_empty());
    }
}
