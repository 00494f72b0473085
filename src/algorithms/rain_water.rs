//! Trapping rain water (two pointers)
//!
//! `left` and `right` start at both ends and walk toward each other. The
//! shorter side is processed because its running maximum already bounds the
//! water above it. Ties go to the left: `heights[left] <= heights[right]`.
//! Comparison, accumulator update and pointer move are separate steps.

use crate::trace::view::{format_cells, marker_row};
use crate::trace::{Highlight, Pointers, SnapshotView, StepKind, Trace, TraceRecorder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainKind {
    Init,
    Compare,
    RaiseMax,
    Trap,
    MoveLeft,
    MoveRight,
    Done,
}

impl StepKind for RainKind {
    fn label(&self) -> &'static str {
        match self {
            RainKind::Init => "init",
            RainKind::Compare => "compare",
            RainKind::RaiseMax => "raise-max",
            RainKind::Trap => "trap",
            RainKind::MoveLeft => "move-left",
            RainKind::MoveRight => "move-right",
            RainKind::Done => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RainSnapshot {
    pub heights: Vec<i64>,
    /// Water settled above each column so far
    pub water: Vec<i64>,
    pub left: usize,
    pub right: usize,
    pub left_max: i64,
    pub right_max: i64,
    pub total: i64,
}

pub type RainTrace = Trace<RainKind, RainSnapshot>;

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Build the trace for trapping rain water over `heights`
pub fn trapping_rain_water(heights: &[i64]) -> RainTrace {
    let mut rec = TraceRecorder::new("trapping-rain-water");
    let n = heights.len();
    let mut snap = RainSnapshot {
        heights: heights.to_vec(),
        water: vec![0; n],
        left: 0,
        right: n.saturating_sub(1),
        left_max: 0,
        right_max: 0,
        total: 0,
    };
    let pointers = |s: &RainSnapshot| {
        if n == 0 {
            Pointers::new().with_opt("left", None).with_opt("right", None)
        } else {
            Pointers::new().with("left", s.left).with("right", s.right)
        }
    };

    rec.emit(
        RainKind::Init,
        format!("Trap water over {} bar(s); pointers start at both ends", n),
    )
    .pointers(pointers(&snap))
    .snapshot(snap.clone());

    while snap.left < snap.right {
        let (l, r) = (snap.left, snap.right);
        let side = if heights[l] <= heights[r] {
            Side::Left
        } else {
            Side::Right
        };

        let description = match side {
            Side::Left => format!(
                "heights[{}]={} <= heights[{}]={}: process the left side",
                l, heights[l], r, heights[r]
            ),
            Side::Right => format!(
                "heights[{}]={} > heights[{}]={}: process the right side",
                l, heights[l], r, heights[r]
            ),
        };
        rec.emit(RainKind::Compare, description)
            .pointers(pointers(&snap))
            .highlights([Highlight::Index(l), Highlight::Index(r)])
            .snapshot(snap.clone());

        let (index, running_max, label) = match side {
            Side::Left => (l, &mut snap.left_max, "left"),
            Side::Right => (r, &mut snap.right_max, "right"),
        };
        let height = heights[index];
        let (kind, description) = if height >= *running_max {
            *running_max = height;
            (
                RainKind::RaiseMax,
                format!("{} max rises to {} at index {}", label, height, index),
            )
        } else {
            let trapped = *running_max - height;
            snap.water[index] = trapped;
            snap.total += trapped;
            (
                RainKind::Trap,
                format!(
                    "Trap {} unit(s) above index {} ({} max {} - height {}); total {}",
                    trapped, index, label, *running_max, height, snap.total
                ),
            )
        };
        rec.emit(kind, description)
            .pointers(pointers(&snap))
            .highlight(Highlight::Index(index))
            .snapshot(snap.clone());

        let (kind, description) = match side {
            Side::Left => {
                snap.left += 1;
                (RainKind::MoveLeft, format!("Move left to {}", snap.left))
            }
            Side::Right => {
                snap.right -= 1;
                (RainKind::MoveRight, format!("Move right to {}", snap.right))
            }
        };
        rec.emit(kind, description)
            .pointers(pointers(&snap))
            .snapshot(snap.clone());
    }

    rec.emit(
        RainKind::Done,
        format!("Pointers met; {} unit(s) of water trapped", snap.total),
    )
    .pointers(pointers(&snap))
    .snapshot(snap);

    rec.finish()
}

impl SnapshotView for RainSnapshot {
    fn render(&self) -> Vec<String> {
        let n = self.heights.len();
        let (left, right) = if n == 0 {
            (None, None)
        } else {
            (Some(self.left), Some(self.right))
        };
        vec![
            format!("height {}", format_cells(&self.heights, 4)),
            format!("water  {}", format_cells(&self.water, 4)),
            format!(
                "       {}",
                marker_row(n, 4, &[(left, 'L'), (right, 'R')])
            ),
            format!(
                "left max {}  right max {}  total {}",
                self.left_max, self.right_max, self.total
            ),
        ]
    }

    fn answer(&self) -> String {
        format!("{} unit(s) trapped", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(heights: &[i64]) -> i64 {
        (0..heights.len())
            .map(|i| {
                let lmax = heights[..=i].iter().max().copied().unwrap_or(0);
                let rmax = heights[i..].iter().max().copied().unwrap_or(0);
                lmax.min(rmax) - heights[i]
            })
            .sum()
    }

    #[test]
    fn test_matches_reference() {
        for heights in [
            vec![0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1],
            vec![4, 2, 0, 3, 2, 5],
            vec![2, 2, 2],
            vec![5],
        ] {
            let trace = trapping_rain_water(&heights);
            assert_eq!(trace.last().unwrap().snapshot.total, reference(&heights));
        }
        let trace = trapping_rain_water(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]);
        assert_eq!(trace.last().unwrap().snapshot.total, 6);
    }

    #[test]
    fn test_tie_goes_left() {
        let trace = trapping_rain_water(&[3, 0, 3]);
        let compare = trace.get(1).unwrap();
        assert_eq!(compare.kind, RainKind::Compare);
        assert_eq!(trace.get(3).unwrap().kind, RainKind::MoveLeft);
    }

    #[test]
    fn test_each_column_gets_three_steps() {
        let heights = [1, 0, 2, 0, 1];
        let trace = trapping_rain_water(&heights);
        // init + 3 per processed column + done
        assert_eq!(trace.len(), 2 + 3 * (heights.len() - 1));
        assert_eq!(trace.count_kind(RainKind::Compare), heights.len() - 1);
    }

    #[test]
    fn test_empty_heights() {
        let trace = trapping_rain_water(&[]);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.first().unwrap().pointers.get("left"), None);
        assert_eq!(trace.last().unwrap().snapshot.total, 0);
    }

    #[test]
    fn test_pointers_never_cross() {
        let trace = trapping_rain_water(&[4, 2, 0, 3, 2, 5]);
        for step in &trace {
            assert!(step.snapshot.left <= step.snapshot.right);
        }
    }
}
