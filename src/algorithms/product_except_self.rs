//! Product of array except self (prefix and suffix accumulators)

use crate::trace::view::{format_cells, marker_row};
use crate::trace::{Highlight, Pointers, SnapshotView, StepKind, Trace, TraceRecorder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    Init,
    Prefix,
    PrefixAccumulate,
    Suffix,
    SuffixAccumulate,
    Done,
}

impl StepKind for ProductKind {
    fn label(&self) -> &'static str {
        match self {
            ProductKind::Init => "init",
            ProductKind::Prefix => "prefix",
            ProductKind::PrefixAccumulate => "prefix-accumulate",
            ProductKind::Suffix => "suffix",
            ProductKind::SuffixAccumulate => "suffix-accumulate",
            ProductKind::Done => "done",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductPhase {
    Start,
    Prefix,
    Suffix,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSnapshot {
    pub numbers: Vec<i64>,
    pub output: Vec<i64>,
    pub accumulator: i64,
    pub phase: ProductPhase,
    pub index: Option<usize>,
}

pub type ProductTrace = Trace<ProductKind, ProductSnapshot>;

/// Build the trace for product of array except self, without division
///
/// Products saturate at the `i64` bounds instead of overflowing. Parsed input
/// (at most ten values within ±30) stays well inside them.
pub fn product_except_self(numbers: &[i64]) -> ProductTrace {
    let mut rec = TraceRecorder::new("product-except-self");
    let n = numbers.len();
    let mut snap = ProductSnapshot {
        numbers: numbers.to_vec(),
        output: vec![1; n],
        accumulator: 1,
        phase: ProductPhase::Start,
        index: None,
    };

    rec.emit(
        ProductKind::Init,
        format!("Fill output with 1s; {} value(s) to process", n),
    )
    .snapshot(snap.clone());

    snap.phase = ProductPhase::Prefix;
    for i in 0..n {
        snap.index = Some(i);
        snap.output[i] = snap.accumulator;
        rec.emit(
            ProductKind::Prefix,
            format!(
                "output[{}] = product of everything left of {} = {}",
                i, i, snap.accumulator
            ),
        )
        .pointers(Pointers::new().with("i", i))
        .highlight(Highlight::Index(i))
        .snapshot(snap.clone());

        snap.accumulator = snap.accumulator.saturating_mul(numbers[i]);
        rec.emit(
            ProductKind::PrefixAccumulate,
            format!("prefix *= nums[{}] ({}) -> {}", i, numbers[i], snap.accumulator),
        )
        .pointers(Pointers::new().with("i", i))
        .snapshot(snap.clone());
    }

    snap.phase = ProductPhase::Suffix;
    snap.accumulator = 1;
    for i in (0..n).rev() {
        snap.index = Some(i);
        snap.output[i] = snap.output[i].saturating_mul(snap.accumulator);
        rec.emit(
            ProductKind::Suffix,
            format!(
                "output[{}] *= product of everything right of {} ({}) -> {}",
                i, i, snap.accumulator, snap.output[i]
            ),
        )
        .pointers(Pointers::new().with("i", i))
        .highlight(Highlight::Index(i))
        .snapshot(snap.clone());

        snap.accumulator = snap.accumulator.saturating_mul(numbers[i]);
        rec.emit(
            ProductKind::SuffixAccumulate,
            format!("suffix *= nums[{}] ({}) -> {}", i, numbers[i], snap.accumulator),
        )
        .pointers(Pointers::new().with("i", i))
        .snapshot(snap.clone());
    }

    snap.phase = ProductPhase::Finished;
    snap.index = None;
    rec.emit(
        ProductKind::Done,
        format!("Products except self: {:?}", snap.output),
    )
    .snapshot(snap);

    rec.finish()
}

impl SnapshotView for ProductSnapshot {
    fn render(&self) -> Vec<String> {
        let phase = match self.phase {
            ProductPhase::Start => "start",
            ProductPhase::Prefix => "prefix pass",
            ProductPhase::Suffix => "suffix pass",
            ProductPhase::Finished => "finished",
        };
        vec![
            format!("nums   {}", format_cells(&self.numbers, 6)),
            format!("output {}", format_cells(&self.output, 6)),
            format!(
                "       {}",
                marker_row(self.numbers.len(), 6, &[(self.index, '^')])
            ),
            format!("{}: accumulator {}", phase, self.accumulator),
        ]
    }

    fn answer(&self) -> String {
        format!("{:?}", self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(numbers: &[i64]) -> Vec<i64> {
        (0..numbers.len())
            .map(|i| {
                numbers
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, v)| *v)
                    .product()
            })
            .collect()
    }

    #[test]
    fn test_matches_reference() {
        for numbers in [vec![1, 2, 3, 4], vec![-1, 1, 0, -3, 3], vec![7], vec![0, 0]] {
            let trace = product_except_self(&numbers);
            assert_eq!(trace.last().unwrap().snapshot.output, reference(&numbers));
        }
        let trace = product_except_self(&[1, 2, 3, 4]);
        assert_eq!(trace.last().unwrap().snapshot.output, vec![24, 12, 8, 6]);
    }

    #[test]
    fn test_four_steps_per_element() {
        let trace = product_except_self(&[2, 3, 4]);
        assert_eq!(trace.len(), 2 + 4 * 3);
        assert_eq!(trace.count_kind(ProductKind::PrefixAccumulate), 3);
    }

    #[test]
    fn test_overflowing_products_saturate() {
        let trace = product_except_self(&[i64::MAX, 2, 3]);
        assert_eq!(
            trace.last().unwrap().snapshot.output,
            vec![6, i64::MAX, i64::MAX]
        );

        let trace = product_except_self(&[i64::MIN, -1, 1]);
        assert_eq!(
            trace.last().unwrap().snapshot.output,
            vec![-1, i64::MIN, i64::MAX]
        );
    }

    #[test]
    fn test_empty_input() {
        let trace = product_except_self(&[]);
        assert_eq!(trace.len(), 2);
        assert!(trace.last().unwrap().snapshot.output.is_empty());
    }
}
