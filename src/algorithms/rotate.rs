//! In-place 90° clockwise rotation of a square matrix
//!
//! Rotation is a transpose followed by reversing every row. Each phase
//! announces itself with a `Phase` step and then emits one `Swap` per
//! exchanged pair of cells.

use crate::trace::view::{format_cells, format_list};
use crate::trace::{Highlight, Pointers, SnapshotView, StepKind, Trace, TraceRecorder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateKind {
    Init,
    Phase,
    Swap,
    Done,
}

impl StepKind for RotateKind {
    fn label(&self) -> &'static str {
        match self {
            RotateKind::Init => "init",
            RotateKind::Phase => "phase",
            RotateKind::Swap => "swap",
            RotateKind::Done => "done",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatePhase {
    Start,
    Transpose,
    Reverse,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotateSnapshot {
    pub matrix: Vec<Vec<i64>>,
    pub phase: RotatePhase,
    /// The two cells exchanged by this step
    pub swapped: Option<((usize, usize), (usize, usize))>,
}

pub type RotateTrace = Trace<RotateKind, RotateSnapshot>;

fn cursor(row: Option<usize>, col: Option<usize>) -> Pointers {
    Pointers::new().with_opt("row", row).with_opt("col", col)
}

/// Build the trace for rotating a square `matrix` clockwise in place
///
/// The caller guarantees the matrix is square.
pub fn rotate(matrix: &[Vec<i64>]) -> RotateTrace {
    let mut rec = TraceRecorder::new("rotate-matrix");
    let n = matrix.len();
    let mut snap = RotateSnapshot {
        matrix: matrix.to_vec(),
        phase: RotatePhase::Start,
        swapped: None,
    };

    rec.emit(
        RotateKind::Init,
        format!("Rotate a {}x{} matrix 90° clockwise in place", n, n),
    )
    .pointers(cursor(None, None))
    .snapshot(snap.clone());

    snap.phase = RotatePhase::Transpose;
    rec.emit(
        RotateKind::Phase,
        "Phase 1: transpose, swapping each cell above the diagonal with its mirror",
    )
    .pointers(cursor(None, None))
    .snapshot(snap.clone());

    for i in 0..n {
        for j in i + 1..n {
            let upper = snap.matrix[i][j];
            snap.matrix[i][j] = snap.matrix[j][i];
            snap.matrix[j][i] = upper;
            snap.swapped = Some(((i, j), (j, i)));
            rec.emit(
                RotateKind::Swap,
                format!(
                    "Swap ({}, {}) and ({}, {}): {} <-> {}",
                    i, j, j, i, upper, snap.matrix[i][j]
                ),
            )
            .pointers(cursor(Some(i), Some(j)))
            .highlights([Highlight::Cell(i, j), Highlight::Cell(j, i)])
            .snapshot(snap.clone());
        }
    }

    snap.phase = RotatePhase::Reverse;
    snap.swapped = None;
    rec.emit(RotateKind::Phase, "Phase 2: reverse every row")
        .pointers(cursor(None, None))
        .snapshot(snap.clone());

    for i in 0..n {
        for j in 0..n / 2 {
            let mirror = n - 1 - j;
            snap.matrix[i].swap(j, mirror);
            snap.swapped = Some(((i, j), (i, mirror)));
            rec.emit(
                RotateKind::Swap,
                format!(
                    "Row {}: swap columns {} and {} ({} <-> {})",
                    i, j, mirror, snap.matrix[i][mirror], snap.matrix[i][j]
                ),
            )
            .pointers(cursor(Some(i), Some(j)))
            .highlights([Highlight::Cell(i, j), Highlight::Cell(i, mirror)])
            .snapshot(snap.clone());
        }
    }

    snap.phase = RotatePhase::Finished;
    snap.swapped = None;
    rec.emit(RotateKind::Done, "Rotation complete")
        .pointers(cursor(None, None))
        .snapshot(snap);

    rec.finish()
}

impl SnapshotView for RotateSnapshot {
    fn render(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .matrix
            .iter()
            .enumerate()
            .map(|(r, row)| {
                let cells: Vec<String> = row
                    .iter()
                    .enumerate()
                    .map(|(c, v)| match self.swapped {
                        Some((a, b)) if a == (r, c) || b == (r, c) => format!("*{}", v),
                        _ => v.to_string(),
                    })
                    .collect();
                format_cells(&cells, 5)
            })
            .collect();
        let phase = match self.phase {
            RotatePhase::Start => "start",
            RotatePhase::Transpose => "transpose",
            RotatePhase::Reverse => "reverse rows",
            RotatePhase::Finished => "finished",
        };
        lines.push(format!("phase {}", phase));
        lines
    }

    fn answer(&self) -> String {
        let rows: Vec<String> = self
            .matrix
            .iter()
            .map(|row| format_list(row))
            .collect();
        format!("[{}]", rows.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotated(matrix: &[Vec<i64>]) -> Vec<Vec<i64>> {
        rotate(matrix).last().unwrap().snapshot.matrix.clone()
    }

    #[test]
    fn test_three_by_three() {
        let matrix = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        assert_eq!(
            rotated(&matrix),
            vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]
        );
    }

    #[test]
    fn test_four_rotations_are_identity() {
        let original: Vec<Vec<i64>> = (0..4).map(|r| (0..4).map(|c| r * 4 + c).collect()).collect();
        let mut matrix = original.clone();
        for _ in 0..4 {
            matrix = rotated(&matrix);
        }
        assert_eq!(matrix, original);
    }

    #[test]
    fn test_one_swap_per_exchange() {
        for n in 1..=6usize {
            let matrix = vec![vec![0; n]; n];
            let trace = rotate(&matrix);
            let transpose = n * (n - 1) / 2;
            let reverse = n * (n / 2);
            assert_eq!(trace.count_kind(RotateKind::Swap), transpose + reverse, "n = {n}");
            assert_eq!(trace.count_kind(RotateKind::Phase), 2);
        }
    }

    #[test]
    fn test_phases_are_ordered() {
        let trace = rotate(&[vec![1, 2], vec![3, 4]]);
        let phases: Vec<RotatePhase> = trace.iter().map(|s| s.snapshot.phase).collect();
        assert_eq!(
            phases,
            vec![
                RotatePhase::Start,
                RotatePhase::Transpose,
                RotatePhase::Transpose,
                RotatePhase::Reverse,
                RotatePhase::Reverse,
                RotatePhase::Reverse,
                RotatePhase::Finished,
            ]
        );
    }
}
