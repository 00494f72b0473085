//! Longest substring without repeating characters (sliding window)
//!
//! The window `[left, right]` grows one character at a time. When the new
//! character is already inside, the window shrinks from the left until the
//! duplicate is gone. Each shrink, each expansion and each new best length
//! is its own step.

use crate::trace::view::{format_cells, marker_row};
use crate::trace::{Highlight, Pointers, SnapshotView, StepKind, Trace, TraceRecorder};
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Init,
    Expand,
    Shrink,
    Record,
    Done,
}

impl StepKind for WindowKind {
    fn label(&self) -> &'static str {
        match self {
            WindowKind::Init => "init",
            WindowKind::Expand => "expand",
            WindowKind::Shrink => "shrink",
            WindowKind::Record => "record",
            WindowKind::Done => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub chars: Vec<char>,
    pub left: usize,
    /// Last index inside the window; `None` before the scan starts
    pub right: Option<usize>,
    pub window_len: usize,
    pub best_len: usize,
    pub best_start: usize,
}

impl WindowSnapshot {
    /// Characters currently inside the window
    pub fn window(&self) -> String {
        self.chars[self.left..self.left + self.window_len]
            .iter()
            .collect()
    }

    pub fn best(&self) -> String {
        self.chars[self.best_start..self.best_start + self.best_len]
            .iter()
            .collect()
    }
}

pub type WindowTrace = Trace<WindowKind, WindowSnapshot>;

struct Scan<'a> {
    chars: &'a [char],
    left: usize,
    right: Option<usize>,
    best_len: usize,
    best_start: usize,
}

impl Scan<'_> {
    fn window_len(&self) -> usize {
        self.right.map_or(0, |r| r + 1 - self.left)
    }

    fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            chars: self.chars.to_vec(),
            left: self.left,
            right: self.right,
            window_len: self.window_len(),
            best_len: self.best_len,
            best_start: self.best_start,
        }
    }

    fn pointers(&self) -> Pointers {
        Pointers::new()
            .with("left", self.left)
            .with_opt("right", self.right)
    }
}

/// Build the trace for the longest substring without repeating characters
pub fn longest_substring(chars: &[char]) -> WindowTrace {
    let mut rec = TraceRecorder::new("longest-substring");
    let text: String = chars.iter().collect();
    let mut scan = Scan {
        chars,
        left: 0,
        right: None,
        best_len: 0,
        best_start: 0,
    };
    let mut seen: FxHashSet<char> = FxHashSet::default();

    rec.emit(
        WindowKind::Init,
        format!(
            "Scan \"{}\" ({} chars) for the longest window without repeats",
            text,
            chars.len()
        ),
    )
    .pointers(scan.pointers())
    .snapshot(scan.snapshot());

    for (right, &c) in chars.iter().enumerate() {
        while seen.contains(&c) {
            let dropped = chars[scan.left];
            seen.remove(&dropped);
            scan.left += 1;
            rec.emit(
                WindowKind::Shrink,
                format!(
                    "'{}' is already in the window; drop '{}' and move left to {}",
                    c, dropped, scan.left
                ),
            )
            .pointers(scan.pointers())
            .highlight(Highlight::Index(scan.left - 1))
            .snapshot(scan.snapshot());
        }

        seen.insert(c);
        scan.right = Some(right);
        rec.emit(
            WindowKind::Expand,
            format!(
                "Add '{}' at index {}; window [{}, {}] has length {}",
                c,
                right,
                scan.left,
                right,
                scan.window_len()
            ),
        )
        .pointers(scan.pointers())
        .highlight(Highlight::Index(right))
        .snapshot(scan.snapshot());

        if scan.window_len() > scan.best_len {
            scan.best_len = scan.window_len();
            scan.best_start = scan.left;
            let best: String = chars[scan.left..=right].iter().collect();
            rec.emit(
                WindowKind::Record,
                format!("New best length {}: \"{}\"", scan.best_len, best),
            )
            .pointers(scan.pointers())
            .snapshot(scan.snapshot());
        }
    }

    let best: String = chars[scan.best_start..scan.best_start + scan.best_len]
        .iter()
        .collect();
    rec.emit(
        WindowKind::Done,
        format!(
            "Longest substring without repeats is \"{}\" with length {}",
            best, scan.best_len
        ),
    )
    .pointers(scan.pointers())
    .snapshot(scan.snapshot());

    rec.finish()
}

impl SnapshotView for WindowSnapshot {
    fn render(&self) -> Vec<String> {
        let indices: Vec<usize> = (0..self.chars.len()).collect();
        let right = self.right.filter(|_| self.window_len > 0);
        vec![
            format!("index  {}", format_cells(&indices, 3)),
            format!("char   {}", format_cells(&self.chars, 3)),
            format!(
                "       {}",
                marker_row(
                    self.chars.len(),
                    3,
                    &[(Some(self.left), 'L'), (right, 'R')]
                )
            ),
            format!("window \"{}\" (length {})", self.window(), self.window_len),
            format!("best   \"{}\" (length {})", self.best(), self.best_len),
        ]
    }

    fn answer(&self) -> String {
        format!("longest length {}", self.best_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_classic_examples() {
        for (input, expected) in [("abcabcbb", 3), ("bbbbb", 1), ("pwwkew", 3), ("dvdf", 3)] {
            let trace = longest_substring(&chars(input));
            assert_eq!(
                trace.last().unwrap().snapshot.best_len,
                expected,
                "input {input}"
            );
        }
    }

    #[test]
    fn test_empty_input_is_init_and_done() {
        let trace = longest_substring(&[]);

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.get(0).unwrap().kind, WindowKind::Init);
        assert_eq!(trace.get(1).unwrap().kind, WindowKind::Done);
        assert_eq!(trace.last().unwrap().snapshot.window_len, 0);
        assert_eq!(trace.last().unwrap().snapshot.best_len, 0);
    }

    #[test]
    fn test_shrink_precedes_expand_of_duplicate() {
        let trace = longest_substring(&chars("aa"));
        let kinds: Vec<WindowKind> = trace.iter().map(|s| s.kind).collect();

        assert_eq!(
            kinds,
            vec![
                WindowKind::Init,
                WindowKind::Expand,
                WindowKind::Record,
                WindowKind::Shrink,
                WindowKind::Expand,
                WindowKind::Done,
            ]
        );
        let shrink = trace.get(3).unwrap();
        assert_eq!(shrink.pointers.get("left"), Some(1));
        assert_eq!(shrink.snapshot.window_len, 0);
    }

    #[test]
    fn test_window_text_matches_pointers() {
        let trace = longest_substring(&chars("abcabcbb"));
        for step in &trace {
            let snap = &step.snapshot;
            assert_eq!(snap.window().chars().count(), snap.window_len);
            let unique: FxHashSet<char> = snap.window().chars().collect();
            assert_eq!(unique.len(), snap.window_len, "step {}", step.index);
        }
        assert_eq!(trace.last().unwrap().snapshot.best(), "abc");
    }
}
