//! Bottom-up merge sort
//!
//! Pass `k` merges neighbouring runs of width `2^k`. Segment bounds depend
//! only on the pass width and the array length, so a pass where the last run
//! has no right partner simply leaves it in place.

use crate::trace::view::{format_cells, format_list};
use crate::trace::{Highlight, Pointers, SnapshotView, StepKind, Trace, TraceRecorder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    Init,
    Pass,
    Merge,
    Done,
}

impl StepKind for SortKind {
    fn label(&self) -> &'static str {
        match self {
            SortKind::Init => "init",
            SortKind::Pass => "pass",
            SortKind::Merge => "merge",
            SortKind::Done => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSnapshot {
    pub array: Vec<i64>,
    /// Run width of the current pass; 0 before the first pass
    pub width: usize,
    pub left: Vec<i64>,
    pub right: Vec<i64>,
    pub merged: Vec<i64>,
    /// Half-open span `[start, end)` written by the current merge
    pub span: Option<(usize, usize)>,
}

pub type SortTrace = Trace<SortKind, SortSnapshot>;

fn merge(left: &[i64], right: &[i64]) -> Vec<i64> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // <= keeps equal keys in their original order
        if left[i] <= right[j] {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

/// Build the trace for sorting `numbers` bottom-up
pub fn merge_sort(numbers: &[i64]) -> SortTrace {
    let mut rec = TraceRecorder::new("merge-sort");
    let n = numbers.len();
    let mut snap = SortSnapshot {
        array: numbers.to_vec(),
        width: 0,
        left: Vec::new(),
        right: Vec::new(),
        merged: Vec::new(),
        span: None,
    };

    rec.emit(
        SortKind::Init,
        format!("Sort {} bottom-up; every element starts as a run of 1", format_list(numbers)),
    )
    .snapshot(snap.clone());

    let mut width = 1;
    let mut pass = 0;
    while width < n {
        pass += 1;
        snap.width = width;
        snap.left.clear();
        snap.right.clear();
        snap.merged.clear();
        snap.span = None;
        rec.emit(
            SortKind::Pass,
            format!("Pass {}: merge neighbouring runs of width {}", pass, width),
        )
        .snapshot(snap.clone());

        let mut start = 0;
        while start < n {
            let mid = (start + width).min(n);
            let end = (start + 2 * width).min(n);
            if mid < end {
                snap.left = snap.array[start..mid].to_vec();
                snap.right = snap.array[mid..end].to_vec();
                snap.merged = merge(&snap.left, &snap.right);
                snap.array[start..end].copy_from_slice(&snap.merged);
                snap.span = Some((start, end));
                rec.emit(
                    SortKind::Merge,
                    format!(
                        "Merge {} and {} into {} at [{}, {})",
                        format_list(&snap.left),
                        format_list(&snap.right),
                        format_list(&snap.merged),
                        start,
                        end
                    ),
                )
                .pointers(
                    Pointers::new()
                        .with("start", start)
                        .with("mid", mid)
                        .with_opt("end", (end < n).then_some(end)),
                )
                .highlights((start..end).map(Highlight::Index))
                .snapshot(snap.clone());
            }
            start += 2 * width;
        }
        width *= 2;
    }

    snap.left.clear();
    snap.right.clear();
    snap.merged.clear();
    snap.span = None;
    rec.emit(
        SortKind::Done,
        format!("Sorted after {} pass(es): {}", pass, format_list(&snap.array)),
    )
    .snapshot(snap);

    rec.finish()
}

impl SnapshotView for SortSnapshot {
    fn render(&self) -> Vec<String> {
        let mut lines = vec![format!("array  {}", format_cells(&self.array, 4))];
        if let Some((start, end)) = self.span {
            let mut bar = vec![' '; self.array.len()];
            bar[start..end].iter_mut().for_each(|c| *c = '=');
            lines.push(format!("       {}", format_cells(&bar, 4).trim_end()));
        }
        if self.width > 0 {
            lines.push(format!("width  {}", self.width));
        }
        if !self.merged.is_empty() {
            lines.push(format!("left   {}", format_list(&self.left)));
            lines.push(format!("right  {}", format_list(&self.right)));
            lines.push(format!("merged {}", format_list(&self.merged)));
        }
        lines
    }

    fn answer(&self) -> String {
        format_list(&self.array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_elements_two_passes() {
        let trace = merge_sort(&[4, 2, 1, 3]);

        assert_eq!(trace.last().unwrap().snapshot.array, vec![1, 2, 3, 4]);
        assert_eq!(trace.count_kind(SortKind::Pass), 2);
        assert_eq!(trace.count_kind(SortKind::Merge), 3);
    }

    #[test]
    fn test_pass_count_is_ceil_log2() {
        for (n, passes) in [(0, 0), (1, 0), (2, 1), (3, 2), (5, 3), (8, 3), (9, 4), (16, 4)] {
            let numbers: Vec<i64> = (0..n as i64).rev().collect();
            let trace = merge_sort(&numbers);
            assert_eq!(trace.count_kind(SortKind::Pass), passes, "n = {n}");

            let mut expected = numbers.clone();
            expected.sort();
            assert_eq!(trace.last().unwrap().snapshot.array, expected);
        }
    }

    #[test]
    fn test_odd_tail_is_left_alone() {
        // width 2 over 5 elements: [0,4) merges, [4,5) has no partner
        let trace = merge_sort(&[5, 4, 3, 2, 1]);
        let second_pass: Vec<_> = trace
            .iter()
            .filter(|s| s.kind == SortKind::Merge && s.snapshot.width == 2)
            .collect();
        assert_eq!(second_pass.len(), 1);
        assert_eq!(second_pass[0].snapshot.span, Some((0, 4)));
    }

    #[test]
    fn test_merge_shows_both_halves() {
        let trace = merge_sort(&[3, 1]);
        let step = trace.iter().find(|s| s.kind == SortKind::Merge).unwrap();
        assert_eq!(step.snapshot.left, vec![3]);
        assert_eq!(step.snapshot.right, vec![1]);
        assert_eq!(step.snapshot.merged, vec![1, 3]);
        assert_eq!(step.pointers.get("mid"), Some(1));
    }
}
