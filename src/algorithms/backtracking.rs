//! Backtracking over an implicit choice tree
//!
//! Both builders recurse natively and mirror the recursion in a
//! [`CallStack`]. A `Choose` step is emitted after the frame for the new call
//! is pushed; the matching `Backtrack` step is emitted after that frame is
//! popped and the choice undone. Every skipped or pruned branch gets its own
//! step, so the choice tree in the log is complete.

use crate::constants::MAX_SNAPSHOT_RESULTS;
use crate::trace::view::format_list;
use crate::trace::{CallStack, Frame, Highlight, SnapshotView, StepKind, Trace, TraceRecorder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacktrackKind {
    Init,
    Choose,
    Found,
    /// Candidate too large; it and every later candidate are cut
    Prune,
    /// Equal sibling of an already explored branch
    Skip,
    Backtrack,
    Done,
}

impl StepKind for BacktrackKind {
    fn label(&self) -> &'static str {
        match self {
            BacktrackKind::Init => "init",
            BacktrackKind::Choose => "choose",
            BacktrackKind::Found => "found",
            BacktrackKind::Prune => "prune",
            BacktrackKind::Skip => "skip",
            BacktrackKind::Backtrack => "backtrack",
            BacktrackKind::Done => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacktrackSnapshot {
    /// Candidates (combination sum) or sorted numbers (permutations)
    pub items: Vec<i64>,
    pub path: Vec<i64>,
    /// Target still to reach; combination sum only
    pub remaining: Option<i64>,
    /// Which items the current path uses; permutations only
    pub used: Vec<bool>,
    /// Results recorded so far
    pub found: usize,
    /// The latest results, at most [`MAX_SNAPSHOT_RESULTS`] of them; every
    /// result on the final step
    pub results: Vec<Vec<i64>>,
    pub frames: Vec<Frame>,
}

pub type BacktrackTrace = Trace<BacktrackKind, BacktrackSnapshot>;

struct Search {
    rec: TraceRecorder<BacktrackKind, BacktrackSnapshot>,
    stack: CallStack,
    items: Vec<i64>,
    path: Vec<i64>,
    remaining: Option<i64>,
    used: Vec<bool>,
    results: Vec<Vec<i64>>,
}

impl Search {
    fn new(algorithm: &'static str, items: Vec<i64>, remaining: Option<i64>) -> Self {
        let used = if remaining.is_none() {
            vec![false; items.len()]
        } else {
            Vec::new()
        };
        Search {
            rec: TraceRecorder::new(algorithm),
            stack: CallStack::new(),
            items,
            path: Vec::new(),
            remaining,
            used,
            results: Vec::new(),
        }
    }

    fn snapshot(&self, kept: usize) -> BacktrackSnapshot {
        let skipped = self.results.len().saturating_sub(kept);
        BacktrackSnapshot {
            items: self.items.clone(),
            path: self.path.clone(),
            remaining: self.remaining,
            used: self.used.clone(),
            found: self.results.len(),
            results: self.results[skipped..].to_vec(),
            frames: self.stack.to_vec(),
        }
    }

    fn emit(&mut self, kind: BacktrackKind, description: String, highlight: Option<usize>) {
        let kept = if kind == BacktrackKind::Done {
            self.results.len()
        } else {
            MAX_SNAPSHOT_RESULTS
        };
        let snapshot = self.snapshot(kept);
        self.rec
            .emit(kind, description)
            .highlights(highlight.map(Highlight::Index))
            .snapshot(snapshot);
    }

    fn finish(mut self, noun: &str) -> BacktrackTrace {
        let listed: Vec<String> = self.results.iter().map(|r| format_list(r)).collect();
        let description = format!(
            "Search complete: {} {}(s) {}",
            self.results.len(),
            noun,
            listed.join(" ")
        );
        self.emit(BacktrackKind::Done, description.trim_end().to_string(), None);
        self.rec.finish()
    }

    fn combination_dfs(&mut self, start: usize, remaining: i64) {
        if remaining == 0 {
            self.results.push(self.path.clone());
            let description = format!("Path {} hits the target; record it", format_list(&self.path));
            self.emit(BacktrackKind::Found, description, None);
            return;
        }

        for i in start..self.items.len() {
            let candidate = self.items[i];
            if candidate > remaining {
                let description = format!(
                    "{} > remaining {}; prune it and every larger candidate",
                    candidate, remaining
                );
                self.emit(BacktrackKind::Prune, description, Some(i));
                break;
            }

            self.path.push(candidate);
            self.remaining = Some(remaining - candidate);
            self.stack.push_frame(
                "dfs",
                format!("start={}, remaining={}", i, remaining - candidate),
            );
            let description = format!(
                "Choose {}; path {} leaves {}",
                candidate,
                format_list(&self.path),
                remaining - candidate
            );
            self.emit(BacktrackKind::Choose, description, Some(i));

            self.combination_dfs(i, remaining - candidate);

            self.stack.pop_frame();
            self.path.pop();
            self.remaining = Some(remaining);
            let description = format!(
                "Backtrack: remove {}; path {} leaves {}",
                candidate,
                format_list(&self.path),
                remaining
            );
            self.emit(BacktrackKind::Backtrack, description, Some(i));
        }
    }

    fn permutation_dfs(&mut self) {
        if self.path.len() == self.items.len() {
            self.results.push(self.path.clone());
            let description = format!("Permutation {} is complete; record it", format_list(&self.path));
            self.emit(BacktrackKind::Found, description, None);
            return;
        }

        for i in 0..self.items.len() {
            if self.used[i] {
                continue;
            }
            let value = self.items[i];
            if i > 0 && self.items[i - 1] == value && !self.used[i - 1] {
                let description = format!(
                    "{} at index {} repeats index {} at this depth; skip the branch",
                    value,
                    i,
                    i - 1
                );
                self.emit(BacktrackKind::Skip, description, Some(i));
                continue;
            }

            self.used[i] = true;
            self.path.push(value);
            self.stack
                .push_frame("permute", format!("depth={}", self.path.len()));
            let description = format!(
                "Choose {} (index {}); path {}",
                value,
                i,
                format_list(&self.path)
            );
            self.emit(BacktrackKind::Choose, description, Some(i));

            self.permutation_dfs();

            self.stack.pop_frame();
            self.path.pop();
            self.used[i] = false;
            let description = format!(
                "Backtrack: release {} (index {}); path {}",
                value,
                i,
                format_list(&self.path)
            );
            self.emit(BacktrackKind::Backtrack, description, Some(i));
        }
    }
}

/// Build the trace for every combination of `candidates` (reusable) that
/// sums to `target`
///
/// Candidates are deduplicated and sorted first, so each combination is
/// produced once, in non-decreasing order.
pub fn combination_sum(candidates: &[i64], target: i64) -> BacktrackTrace {
    let mut items = candidates.to_vec();
    items.sort_unstable();
    items.dedup();

    let mut search = Search::new("combination-sum", items, Some(target));
    search
        .stack
        .push_frame("dfs", format!("start=0, remaining={}", target));
    let description = format!(
        "Find combinations of {} summing to {}",
        format_list(&search.items),
        target
    );
    search.emit(BacktrackKind::Init, description, None);

    if search.items.iter().any(|c| *c <= 0) {
        let description = "Candidates must be positive; nothing to search".to_string();
        search.emit(BacktrackKind::Prune, description, None);
    } else {
        search.combination_dfs(0, target);
    }

    search.finish("combination")
}

/// Build the trace for all distinct permutations of `numbers`
pub fn permutations(numbers: &[i64]) -> BacktrackTrace {
    let mut items = numbers.to_vec();
    items.sort_unstable();

    let mut search = Search::new("permutations", items, None);
    search.stack.push_frame("permute", "depth=0");
    let description = format!(
        "Generate distinct permutations of {}",
        format_list(&search.items)
    );
    search.emit(BacktrackKind::Init, description, None);

    search.permutation_dfs();

    search.finish("permutation")
}

impl SnapshotView for BacktrackSnapshot {
    fn render(&self) -> Vec<String> {
        let mut lines = vec![format!("items     {}", format_list(&self.items))];
        if !self.used.is_empty() {
            let marks: Vec<&str> = self
                .used
                .iter()
                .map(|u| if *u { "x" } else { "." })
                .collect();
            lines.push(format!("used      [{}]", marks.join(", ")));
        }
        lines.push(format!("path      {}", format_list(&self.path)));
        if let Some(remaining) = self.remaining {
            lines.push(format!("remaining {}", remaining));
        }
        lines.push("call stack:".to_string());
        for frame in &self.frames {
            lines.push(format!(
                "  {}{}({})",
                "  ".repeat(frame.depth),
                frame.label,
                frame.arguments
            ));
        }
        lines.push(format!("results   {}", self.found));
        if self.found > self.results.len() {
            lines.push(format!("  ... {} earlier", self.found - self.results.len()));
        }
        for result in &self.results {
            lines.push(format!("  {}", format_list(result)));
        }
        lines
    }

    fn answer(&self) -> String {
        format!("{} result(s)", self.found)
    }
}
