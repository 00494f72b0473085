//! The outbound contract for whoever draws a step
//!
//! A view receives the step's description, its pointer map, its kind label
//! and a text rendering of the snapshot. It never receives colors or
//! positions; those belong to the consumer.

use super::{Highlight, Pointers, Step, StepKind};
use std::fmt::Display;

/// Text rendering of an algorithm-specific snapshot
pub trait SnapshotView {
    /// One entry per output line
    fn render(&self) -> Vec<String>;

    /// One-line statement of the answer as far as it is known
    fn answer(&self) -> String;
}

/// Everything a consumer needs to show one step
#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub index: usize,
    pub total: usize,
    pub kind: &'static str,
    pub description: String,
    pub pointers: Pointers,
    pub highlights: Vec<Highlight>,
    pub lines: Vec<String>,
    pub answer: String,
}

impl StepView {
    pub fn of<K: StepKind, S: SnapshotView>(step: &Step<K, S>, total: usize) -> Self {
        StepView {
            index: step.index,
            total,
            kind: step.kind.label(),
            description: step.description.clone(),
            pointers: step.pointers.clone(),
            highlights: step.highlights.clone(),
            lines: step.snapshot.render(),
            answer: step.snapshot.answer(),
        }
    }
}

/// `[1, 2, 3]`
pub fn format_list<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Values in fixed-width cells, used to line markers up under them
pub fn format_cells<T: Display>(values: &[T], width: usize) -> String {
    values
        .iter()
        .map(|v| format!("{:>width$}", v.to_string(), width = width))
        .collect::<Vec<_>>()
        .join("")
}

/// A row of markers under cells of `width`, e.g. `   L        R`
///
/// Later marks win when two land on the same cell.
pub fn marker_row(len: usize, width: usize, marks: &[(Option<usize>, char)]) -> String {
    let mut cells = vec![' '; len];
    for (position, mark) in marks {
        if let Some(p) = position {
            if *p < len {
                cells[*p] = *mark;
            }
        }
    }
    format_cells(&cells, width).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_list(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(format_list::<i64>(&[]), "[]");
        assert_eq!(format_cells(&[1, 22], 3), "  1 22");
        assert_eq!(marker_row(3, 3, &[(Some(0), 'L'), (Some(2), 'R')]), "  L     R");
        assert_eq!(marker_row(2, 2, &[(None, 'L'), (Some(5), 'R')]), "");
    }
}
