//! Instrumented algorithms
//!
//! Each builder runs a classic algorithm on validated input and returns a
//! [`Trace`](crate::trace::Trace): every pointer move, comparison, choice and
//! merge becomes a step. Builders are pure. The same input always gives an
//! equal trace, and the answer in the last step matches what the plain
//! algorithm computes.
//!
//! | Module                  | Builders                                        |
//! |-------------------------|-------------------------------------------------|
//! | [`sliding_window`]      | `longest_substring`                             |
//! | [`rain_water`]          | `trapping_rain_water`                           |
//! | [`three_sum`]           | `three_sum`                                     |
//! | [`product_except_self`] | `product_except_self`                           |
//! | [`backtracking`]        | `combination_sum`, `permutations`               |
//! | [`course_schedule`]     | `course_schedule`                               |
//! | [`tree_recursion`]      | `lowest_common_ancestor`, `max_path_sum`        |
//! | [`merge_sort`]          | `merge_sort`                                    |
//! | [`spiral`]              | `spiral_order`                                  |
//! | [`rotate`]              | `rotate`                                        |
//!
//! [`registry`] ties them to names, input parsing and playback defaults.

pub mod backtracking;
pub mod course_schedule;
pub mod merge_sort;
pub mod product_except_self;
pub mod rain_water;
pub mod registry;
pub mod rotate;
pub mod sliding_window;
pub mod spiral;
pub mod three_sum;
pub mod tree_recursion;

pub use registry::{Algorithm, AlgorithmInput, AlgorithmSpec};
