//! 3Sum (sort + two pointers)
//!
//! After sorting, each index `i` is fixed in turn and `left`/`right` converge
//! on the rest of the array looking for `nums[i] + nums[left] + nums[right] == 0`.
//! Duplicate anchors and duplicate pair values are skipped with an explicit
//! step so every skipped branch is visible.

use crate::trace::view::{format_cells, format_list, marker_row};
use crate::trace::{Highlight, Pointers, SnapshotView, StepKind, Trace, TraceRecorder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreeSumKind {
    Init,
    Insufficient,
    Sorted,
    Fix,
    SkipDuplicate,
    Compare,
    Found,
    Converge,
    MoveLeft,
    MoveRight,
    Done,
}

impl StepKind for ThreeSumKind {
    fn label(&self) -> &'static str {
        match self {
            ThreeSumKind::Init => "init",
            ThreeSumKind::Insufficient => "insufficient",
            ThreeSumKind::Sorted => "sorted",
            ThreeSumKind::Fix => "fix",
            ThreeSumKind::SkipDuplicate => "skip-duplicate",
            ThreeSumKind::Compare => "compare",
            ThreeSumKind::Found => "found",
            ThreeSumKind::Converge => "converge",
            ThreeSumKind::MoveLeft => "move-left",
            ThreeSumKind::MoveRight => "move-right",
            ThreeSumKind::Done => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreeSumSnapshot {
    /// Input order until the sort step, sorted afterwards
    pub numbers: Vec<i64>,
    pub i: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
    /// Widened so any three `i64` values add without overflow
    pub sum: Option<i128>,
    pub triplets: Vec<[i64; 3]>,
}

pub type ThreeSumTrace = Trace<ThreeSumKind, ThreeSumSnapshot>;

impl ThreeSumSnapshot {
    fn pointers(&self) -> Pointers {
        Pointers::new()
            .with_opt("i", self.i)
            .with_opt("left", self.left)
            .with_opt("right", self.right)
    }
}

/// Build the trace for all unique zero-sum triplets of `numbers`
pub fn three_sum(numbers: &[i64]) -> ThreeSumTrace {
    let mut rec = TraceRecorder::new("three-sum");
    let n = numbers.len();
    let mut snap = ThreeSumSnapshot {
        numbers: numbers.to_vec(),
        i: None,
        left: None,
        right: None,
        sum: None,
        triplets: Vec::new(),
    };

    rec.emit(
        ThreeSumKind::Init,
        format!("Find unique triplets summing to 0 in {}", format_list(numbers)),
    )
    .pointers(snap.pointers())
    .snapshot(snap.clone());

    if n < 3 {
        rec.emit(
            ThreeSumKind::Insufficient,
            format!("Need at least 3 numbers, got {}; no triplets", n),
        )
        .pointers(snap.pointers())
        .snapshot(snap);
        return rec.finish();
    }

    snap.numbers.sort_unstable();
    rec.emit(
        ThreeSumKind::Sorted,
        format!("Sort to {}", format_list(&snap.numbers)),
    )
    .pointers(snap.pointers())
    .snapshot(snap.clone());
    let nums = snap.numbers.clone();

    for i in 0..n - 2 {
        snap.i = Some(i);
        snap.left = None;
        snap.right = None;
        snap.sum = None;

        if i > 0 && nums[i] == nums[i - 1] {
            rec.emit(
                ThreeSumKind::SkipDuplicate,
                format!(
                    "nums[{}]={} repeats the previous anchor; skip it",
                    i, nums[i]
                ),
            )
            .pointers(snap.pointers())
            .highlight(Highlight::Index(i))
            .snapshot(snap.clone());
            continue;
        }

        let (mut left, mut right) = (i + 1, n - 1);
        snap.left = Some(left);
        snap.right = Some(right);
        rec.emit(
            ThreeSumKind::Fix,
            format!(
                "Fix nums[{}]={}; look for a pair summing to {} in [{}, {}]",
                i,
                nums[i],
                -i128::from(nums[i]),
                left,
                right
            ),
        )
        .pointers(snap.pointers())
        .highlight(Highlight::Index(i))
        .snapshot(snap.clone());

        while left < right {
            let sum = i128::from(nums[i]) + i128::from(nums[left]) + i128::from(nums[right]);
            snap.sum = Some(sum);
            rec.emit(
                ThreeSumKind::Compare,
                format!(
                    "{} + {} + {} = {}",
                    nums[i], nums[left], nums[right], sum
                ),
            )
            .pointers(snap.pointers())
            .highlights([Highlight::Index(left), Highlight::Index(right)])
            .snapshot(snap.clone());

            if sum == 0 {
                let triplet = [nums[i], nums[left], nums[right]];
                snap.triplets.push(triplet);
                rec.emit(
                    ThreeSumKind::Found,
                    format!("Found triplet {}", format_list(&triplet)),
                )
                .pointers(snap.pointers())
                .highlights([
                    Highlight::Index(i),
                    Highlight::Index(left),
                    Highlight::Index(right),
                ])
                .snapshot(snap.clone());

                left += 1;
                right -= 1;
                snap.left = Some(left);
                snap.right = Some(right);
                rec.emit(
                    ThreeSumKind::Converge,
                    format!("Move both pointers inward to {} and {}", left, right),
                )
                .pointers(snap.pointers())
                .snapshot(snap.clone());

                while left < right && nums[left] == nums[left - 1] {
                    left += 1;
                    snap.left = Some(left);
                    rec.emit(
                        ThreeSumKind::SkipDuplicate,
                        format!("{} repeats on the left; advance left to {}", nums[left - 1], left),
                    )
                    .pointers(snap.pointers())
                    .snapshot(snap.clone());
                }
                while left < right && nums[right] == nums[right + 1] {
                    right -= 1;
                    snap.right = Some(right);
                    rec.emit(
                        ThreeSumKind::SkipDuplicate,
                        format!(
                            "{} repeats on the right; retreat right to {}",
                            nums[right + 1],
                            right
                        ),
                    )
                    .pointers(snap.pointers())
                    .snapshot(snap.clone());
                }
            } else if sum < 0 {
                left += 1;
                snap.left = Some(left);
                rec.emit(
                    ThreeSumKind::MoveLeft,
                    format!("Sum {} < 0: need larger, move left to {}", sum, left),
                )
                .pointers(snap.pointers())
                .snapshot(snap.clone());
            } else {
                right -= 1;
                snap.right = Some(right);
                rec.emit(
                    ThreeSumKind::MoveRight,
                    format!("Sum {} > 0: need smaller, move right to {}", sum, right),
                )
                .pointers(snap.pointers())
                .snapshot(snap.clone());
            }
        }
    }

    snap.i = None;
    snap.left = None;
    snap.right = None;
    snap.sum = None;
    let found: Vec<String> = snap.triplets.iter().map(|t| format_list(t)).collect();
    rec.emit(
        ThreeSumKind::Done,
        format!(
            "Found {} triplet(s): {}",
            snap.triplets.len(),
            if found.is_empty() {
                "none".to_string()
            } else {
                found.join(" ")
            }
        ),
    )
    .pointers(snap.pointers())
    .snapshot(snap);

    rec.finish()
}

impl SnapshotView for ThreeSumSnapshot {
    fn render(&self) -> Vec<String> {
        let n = self.numbers.len();
        let mut lines = vec![
            format!("nums  {}", format_cells(&self.numbers, 4)),
            format!(
                "      {}",
                marker_row(
                    n,
                    4,
                    &[(self.i, 'i'), (self.left, 'L'), (self.right, 'R')]
                )
            ),
        ];
        if let Some(sum) = self.sum {
            lines.push(format!("sum   {}", sum));
        }
        let found: Vec<String> = self.triplets.iter().map(|t| format_list(t)).collect();
        lines.push(format!("found {}", found.join(" ")));
        lines
    }

    fn answer(&self) -> String {
        format!("{} triplet(s)", self.triplets.len())
    }
}
