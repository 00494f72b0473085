//! Spiral order traversal
//!
//! Four boundaries close in on the matrix: walk the top row left to right,
//! the right column downward, the bottom row right to left, the left column
//! upward, shrinking the matching boundary after each leg. A leg with no
//! cells left is skipped along with its shrink. Boundaries are signed because
//! `bottom` and `right` can pass below zero on the last leg.

use crate::trace::view::{format_cells, format_list};
use crate::trace::{Highlight, Pointers, SnapshotView, StepKind, Trace, TraceRecorder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiralKind {
    Init,
    Visit,
    Shrink,
    Done,
}

impl StepKind for SpiralKind {
    fn label(&self) -> &'static str {
        match self {
            SpiralKind::Init => "init",
            SpiralKind::Visit => "visit",
            SpiralKind::Shrink => "shrink",
            SpiralKind::Done => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiralSnapshot {
    pub matrix: Vec<Vec<i64>>,
    pub visited: Vec<Vec<bool>>,
    pub result: Vec<i64>,
    pub top: i64,
    pub bottom: i64,
    pub left: i64,
    pub right: i64,
    /// Cell visited by this step
    pub cell: Option<(usize, usize)>,
}

impl SpiralSnapshot {
    fn pointers(&self) -> Pointers {
        let at = |b: i64| usize::try_from(b).ok();
        Pointers::new()
            .with_opt("top", at(self.top))
            .with_opt("bottom", at(self.bottom))
            .with_opt("left", at(self.left))
            .with_opt("right", at(self.right))
    }
}

pub type SpiralTrace = Trace<SpiralKind, SpiralSnapshot>;

struct Walker {
    rec: TraceRecorder<SpiralKind, SpiralSnapshot>,
    snap: SpiralSnapshot,
}

impl Walker {
    fn visit(&mut self, row: i64, col: i64) {
        let (r, c) = (row as usize, col as usize);
        let value = self.snap.matrix[r][c];
        self.snap.visited[r][c] = true;
        self.snap.result.push(value);
        self.snap.cell = Some((r, c));
        self.rec
            .emit(
                SpiralKind::Visit,
                format!("Visit ({}, {}) = {}", r, c, value),
            )
            .pointers(self.snap.pointers())
            .highlight(Highlight::Cell(r, c))
            .snapshot(self.snap.clone());
    }

    fn shrink(&mut self, description: String) {
        self.snap.cell = None;
        self.rec
            .emit(SpiralKind::Shrink, description)
            .pointers(self.snap.pointers())
            .snapshot(self.snap.clone());
    }
}

/// Build the trace for reading `matrix` in clockwise spiral order
pub fn spiral_order(matrix: &[Vec<i64>]) -> SpiralTrace {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, Vec::len);
    let mut walker = Walker {
        rec: TraceRecorder::new("spiral-order"),
        snap: SpiralSnapshot {
            matrix: matrix.to_vec(),
            visited: vec![vec![false; cols]; rows],
            result: Vec::new(),
            top: 0,
            bottom: rows as i64 - 1,
            left: 0,
            right: cols as i64 - 1,
            cell: None,
        },
    };

    walker
        .rec
        .emit(
            SpiralKind::Init,
            format!("Read a {}x{} matrix in spiral order", rows, cols),
        )
        .pointers(walker.snap.pointers())
        .snapshot(walker.snap.clone());

    while walker.snap.top <= walker.snap.bottom && walker.snap.left <= walker.snap.right {
        let (top, left, right) = (walker.snap.top, walker.snap.left, walker.snap.right);
        for col in left..=right {
            walker.visit(top, col);
        }
        walker.snap.top += 1;
        walker.shrink(format!("Top row done; top moves down to {}", walker.snap.top));

        if walker.snap.top <= walker.snap.bottom {
            let (top, bottom) = (walker.snap.top, walker.snap.bottom);
            for row in top..=bottom {
                walker.visit(row, right);
            }
            walker.snap.right -= 1;
            walker.shrink(format!(
                "Right column done; right moves in to {}",
                walker.snap.right
            ));
        }

        if walker.snap.top <= walker.snap.bottom && walker.snap.left <= walker.snap.right {
            let (bottom, left, right) = (walker.snap.bottom, walker.snap.left, walker.snap.right);
            for col in (left..=right).rev() {
                walker.visit(bottom, col);
            }
            walker.snap.bottom -= 1;
            walker.shrink(format!(
                "Bottom row done; bottom moves up to {}",
                walker.snap.bottom
            ));
        }

        if walker.snap.left <= walker.snap.right && walker.snap.top <= walker.snap.bottom {
            let (top, bottom, left) = (walker.snap.top, walker.snap.bottom, walker.snap.left);
            for row in (top..=bottom).rev() {
                walker.visit(row, left);
            }
            walker.snap.left += 1;
            walker.shrink(format!(
                "Left column done; left moves in to {}",
                walker.snap.left
            ));
        }
    }

    walker.snap.cell = None;
    let description = format!("Spiral order: {}", format_list(&walker.snap.result));
    let pointers = walker.snap.pointers();
    let snap = walker.snap;
    let mut rec = walker.rec;
    rec.emit(SpiralKind::Done, description)
        .pointers(pointers)
        .snapshot(snap);

    rec.finish()
}

impl SnapshotView for SpiralSnapshot {
    fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (r, row) in self.matrix.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(c, v)| {
                    if self.cell == Some((r, c)) {
                        format!("<{}>", v)
                    } else if self.visited[r][c] {
                        format!("({})", v)
                    } else {
                        v.to_string()
                    }
                })
                .collect();
            lines.push(format_cells(&cells, 6));
        }
        lines.push(format!(
            "top {}  bottom {}  left {}  right {}",
            self.top, self.bottom, self.left, self.right
        ));
        lines.push(format!("result {}", format_list(&self.result)));
        lines
    }

    fn answer(&self) -> String {
        format_list(&self.result)
    }
}
