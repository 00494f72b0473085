//! The catalogue of algorithms and how to feed them
//!
//! [`Algorithm`] names every builder. Its [`spec`](Algorithm::spec) holds the
//! display metadata and playback defaults; [`parse`](Algorithm::parse) turns
//! the two free-text fields (input and parameter) into an [`AlgorithmInput`],
//! which in turn builds a ready-to-play [`Session`].

use super::backtracking::{combination_sum, permutations};
use super::course_schedule::course_schedule;
use super::merge_sort::merge_sort;
use super::product_except_self::product_except_self;
use super::rain_water::trapping_rain_water;
use super::rotate::rotate;
use super::sliding_window::longest_substring;
use super::spiral::spiral_order;
use super::three_sum::three_sum;
use super::tree_recursion::{lowest_common_ancestor, max_path_sum};
use crate::constants::*;
use crate::input::lexer::Location;
use crate::input::{
    ensure_range, parse_char_sequence, parse_edge_list, parse_level_order_tree, parse_matrix,
    parse_number, parse_number_list, InputParseError, Tree,
};
use crate::playback::{PlaybackConfig, PlaybackController, Session};
use crate::trace::{SnapshotView, StepKind, Trace};
use clap::ValueEnum;
use std::fmt;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    LongestSubstring,
    TrappingRainWater,
    ThreeSum,
    ProductExceptSelf,
    CombinationSum,
    Permutations,
    CourseSchedule,
    LowestCommonAncestor,
    MaxPathSum,
    MergeSort,
    SpiralOrder,
    RotateMatrix,
}

/// Static description of one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmSpec {
    /// Kebab-case name, also the trace's algorithm name
    pub name: &'static str,
    pub title: &'static str,
    pub family: &'static str,
    pub input_hint: &'static str,
    /// `None` when the algorithm takes no parameter
    pub param_hint: Option<&'static str>,
    pub sample_input: &'static str,
    pub sample_param: &'static str,
    pub delay: Duration,
    pub log_capacity: usize,
}

impl Algorithm {
    pub const ALL: [Algorithm; 12] = [
        Algorithm::LongestSubstring,
        Algorithm::TrappingRainWater,
        Algorithm::ThreeSum,
        Algorithm::ProductExceptSelf,
        Algorithm::CombinationSum,
        Algorithm::Permutations,
        Algorithm::CourseSchedule,
        Algorithm::LowestCommonAncestor,
        Algorithm::MaxPathSum,
        Algorithm::MergeSort,
        Algorithm::SpiralOrder,
        Algorithm::RotateMatrix,
    ];

    pub fn spec(self) -> AlgorithmSpec {
        let ms = Duration::from_millis;
        match self {
            Algorithm::LongestSubstring => AlgorithmSpec {
                name: "longest-substring",
                title: "Longest Substring Without Repeating Characters",
                family: "sliding window",
                input_hint: "a string, e.g. abcabcbb",
                param_hint: None,
                sample_input: "abcabcbb",
                sample_param: "",
                delay: ms(1000),
                log_capacity: 16,
            },
            Algorithm::TrappingRainWater => AlgorithmSpec {
                name: "trapping-rain-water",
                title: "Trapping Rain Water",
                family: "two pointers",
                input_hint: "bar heights 0-99, e.g. 0,1,0,2,1,0,1,3,2,1,2,1",
                param_hint: None,
                sample_input: "0,1,0,2,1,0,1,3,2,1,2,1",
                sample_param: "",
                delay: ms(1000),
                log_capacity: 16,
            },
            Algorithm::ThreeSum => AlgorithmSpec {
                name: "three-sum",
                title: "3Sum",
                family: "two pointers",
                input_hint: "integers, e.g. -1,0,1,2,-1,-4",
                param_hint: None,
                sample_input: "-1,0,1,2,-1,-4",
                sample_param: "",
                delay: ms(1200),
                log_capacity: 16,
            },
            Algorithm::ProductExceptSelf => AlgorithmSpec {
                name: "product-except-self",
                title: "Product of Array Except Self",
                family: "prefix and suffix",
                input_hint: "integers -30..30, e.g. 1,2,3,4",
                param_hint: None,
                sample_input: "1,2,3,4",
                sample_param: "",
                delay: ms(900),
                log_capacity: 16,
            },
            Algorithm::CombinationSum => AlgorithmSpec {
                name: "combination-sum",
                title: "Combination Sum",
                family: "backtracking",
                input_hint: "candidates 2-16, e.g. 2,3,6,7",
                param_hint: Some("target 1-16"),
                sample_input: "2,3,6,7",
                sample_param: "7",
                delay: ms(800),
                log_capacity: 18,
            },
            Algorithm::Permutations => AlgorithmSpec {
                name: "permutations",
                title: "Permutations",
                family: "backtracking",
                input_hint: "up to 6 integers, e.g. 1,1,2",
                param_hint: None,
                sample_input: "1,2,3",
                sample_param: "",
                delay: ms(800),
                log_capacity: 18,
            },
            Algorithm::CourseSchedule => AlgorithmSpec {
                name: "course-schedule",
                title: "Course Schedule",
                family: "topological sort",
                input_hint: "number of courses 1-10",
                param_hint: Some("prerequisite pairs [a,b] meaning b before a, e.g. [[1,0],[2,1]]"),
                sample_input: "4",
                sample_param: "[[1,0],[2,0],[3,1],[3,2]]",
                delay: ms(1200),
                log_capacity: 16,
            },
            Algorithm::LowestCommonAncestor => AlgorithmSpec {
                name: "lowest-common-ancestor",
                title: "Lowest Common Ancestor of a Binary Tree",
                family: "tree post-order",
                input_hint: "level-order tree, e.g. [3,5,1,6,2,0,8,null,null,7,4]",
                param_hint: Some("two node values p q, e.g. 5 1"),
                sample_input: "[3,5,1,6,2,0,8,null,null,7,4]",
                sample_param: "7 4",
                delay: ms(1000),
                log_capacity: 16,
            },
            Algorithm::MaxPathSum => AlgorithmSpec {
                name: "max-path-sum",
                title: "Binary Tree Maximum Path Sum",
                family: "tree post-order",
                input_hint: "level-order tree, e.g. [-10,9,20,null,null,15,7]",
                param_hint: None,
                sample_input: "[-10,9,20,null,null,15,7]",
                sample_param: "",
                delay: ms(1000),
                log_capacity: 16,
            },
            Algorithm::MergeSort => AlgorithmSpec {
                name: "merge-sort",
                title: "Merge Sort (bottom-up)",
                family: "divide and conquer",
                input_hint: "integers, e.g. 5,2,4,6,1,3",
                param_hint: None,
                sample_input: "5,2,4,6,1,3,8,7",
                sample_param: "",
                delay: ms(1500),
                log_capacity: 14,
            },
            Algorithm::SpiralOrder => AlgorithmSpec {
                name: "spiral-order",
                title: "Spiral Matrix",
                family: "matrix",
                input_hint: "matrix rows, e.g. [[1,2,3],[4,5,6],[7,8,9]]",
                param_hint: None,
                sample_input: "[[1,2,3],[4,5,6],[7,8,9]]",
                sample_param: "",
                delay: ms(800),
                log_capacity: 16,
            },
            Algorithm::RotateMatrix => AlgorithmSpec {
                name: "rotate-matrix",
                title: "Rotate Image",
                family: "matrix",
                input_hint: "square matrix, e.g. 1 2 3; 4 5 6; 7 8 9",
                param_hint: None,
                sample_input: "[[1,2,3],[4,5,6],[7,8,9]]",
                sample_param: "",
                delay: ms(1000),
                log_capacity: 16,
            },
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn from_name(name: &str) -> Option<Algorithm> {
        Algorithm::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Playback defaults for this algorithm
    pub fn config(self) -> PlaybackConfig {
        let spec = self.spec();
        PlaybackConfig::new(spec.delay, spec.log_capacity)
    }

    /// Parse the input and parameter text for this algorithm
    ///
    /// The parameter is ignored by algorithms that take none.
    pub fn parse(self, input: &str, param: &str) -> Result<AlgorithmInput, InputParseError> {
        let parsed = match self {
            Algorithm::LongestSubstring => {
                AlgorithmInput::LongestSubstring(parse_char_sequence(input, MAX_SUBSTRING_LEN)?)
            }
            Algorithm::TrappingRainWater => {
                let heights = parse_number_list(input, MAX_HEIGHTS)?;
                ensure_range(&heights, 0, MAX_HEIGHT_VALUE)?;
                AlgorithmInput::TrappingRainWater(heights)
            }
            Algorithm::ThreeSum => {
                let numbers = parse_number_list(input, MAX_THREE_SUM_LEN)?;
                ensure_range(&numbers, -MAX_ABS_VALUE, MAX_ABS_VALUE)?;
                AlgorithmInput::ThreeSum(numbers)
            }
            Algorithm::ProductExceptSelf => {
                let numbers = parse_number_list(input, MAX_PRODUCT_LEN)?;
                ensure_range(&numbers, -MAX_PRODUCT_VALUE, MAX_PRODUCT_VALUE)?;
                AlgorithmInput::ProductExceptSelf(numbers)
            }
            Algorithm::CombinationSum => {
                let candidates = parse_number_list(input, MAX_CANDIDATES)?;
                ensure_range(&candidates, MIN_CANDIDATE, MAX_TARGET)?;
                let target = parse_number(param)?;
                ensure_range(&[target], 1, MAX_TARGET)?;
                AlgorithmInput::CombinationSum { candidates, target }
            }
            Algorithm::Permutations => {
                let numbers = parse_number_list(input, MAX_PERMUTATION_LEN)?;
                ensure_range(&numbers, -MAX_ABS_VALUE, MAX_ABS_VALUE)?;
                AlgorithmInput::Permutations(numbers)
            }
            Algorithm::CourseSchedule => {
                let courses = parse_number(input)?;
                ensure_range(&[courses], 1, MAX_COURSES as i64)?;
                let courses = courses as usize;
                let prerequisites = parse_edge_list(param, courses, MAX_PREREQUISITES)?;
                AlgorithmInput::CourseSchedule {
                    courses,
                    prerequisites,
                }
            }
            Algorithm::LowestCommonAncestor => {
                let tree = parse_tree(input)?;
                let targets = parse_number_list(param, 2)?;
                let &[p, q] = targets.as_slice() else {
                    let end = Location::new(1, param.trim_end().chars().count() + 1);
                    return Err(InputParseError::Malformed {
                        message: "expected two node values p and q".to_string(),
                        location: end,
                    });
                };
                AlgorithmInput::LowestCommonAncestor { tree, p, q }
            }
            Algorithm::MaxPathSum => AlgorithmInput::MaxPathSum(parse_tree(input)?),
            Algorithm::MergeSort => {
                let numbers = parse_number_list(input, MAX_SORT_LEN)?;
                ensure_range(&numbers, -MAX_ABS_VALUE, MAX_ABS_VALUE)?;
                AlgorithmInput::MergeSort(numbers)
            }
            Algorithm::SpiralOrder => {
                let matrix = parse_matrix(input, MAX_MATRIX_DIM, MAX_MATRIX_DIM, false)?;
                ensure_range(&matrix.concat(), -MAX_ABS_VALUE, MAX_ABS_VALUE)?;
                AlgorithmInput::SpiralOrder(matrix)
            }
            Algorithm::RotateMatrix => {
                let matrix = parse_matrix(input, MAX_MATRIX_DIM, MAX_MATRIX_DIM, true)?;
                ensure_range(&matrix.concat(), -MAX_ABS_VALUE, MAX_ABS_VALUE)?;
                AlgorithmInput::RotateMatrix(matrix)
            }
        };
        debug!(algorithm = self.name(), "input parsed");
        Ok(parsed)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn parse_tree(text: &str) -> Result<Tree, InputParseError> {
    let tree = parse_level_order_tree(text, MAX_TREE_NODES)?;
    let values: Vec<i64> = tree.nodes().iter().map(|n| n.value).collect();
    ensure_range(&values, -MAX_ABS_VALUE, MAX_ABS_VALUE)?;
    Ok(tree)
}

/// Validated input for one algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmInput {
    LongestSubstring(Vec<char>),
    TrappingRainWater(Vec<i64>),
    ThreeSum(Vec<i64>),
    ProductExceptSelf(Vec<i64>),
    CombinationSum { candidates: Vec<i64>, target: i64 },
    Permutations(Vec<i64>),
    CourseSchedule {
        courses: usize,
        prerequisites: Vec<(usize, usize)>,
    },
    LowestCommonAncestor { tree: Tree, p: i64, q: i64 },
    MaxPathSum(Tree),
    MergeSort(Vec<i64>),
    SpiralOrder(Vec<Vec<i64>>),
    RotateMatrix(Vec<Vec<i64>>),
}

/// Where a freshly built trace goes
trait TraceSink {
    type Output;

    fn accept<K, S>(self, trace: Trace<K, S>) -> Self::Output
    where
        K: StepKind + 'static,
        S: SnapshotView + 'static;
}

/// Wrap the trace in a new idle controller
struct NewSession(PlaybackConfig);

impl TraceSink for NewSession {
    type Output = Box<dyn Session>;

    fn accept<K, S>(self, trace: Trace<K, S>) -> Box<dyn Session>
    where
        K: StepKind + 'static,
        S: SnapshotView + 'static,
    {
        Box::new(PlaybackController::new(trace, self.0))
    }
}

/// Swap the trace into an existing controller
///
/// Falls back to a new controller only when the session holds a different
/// trace type; its timer is cancelled first either way.
struct Reapply<'a> {
    session: &'a mut Box<dyn Session>,
    config: PlaybackConfig,
}

impl TraceSink for Reapply<'_> {
    type Output = ();

    fn accept<K, S>(self, trace: Trace<K, S>)
    where
        K: StepKind + 'static,
        S: SnapshotView + 'static,
    {
        if let Some(controller) = self
            .session
            .as_any_mut()
            .downcast_mut::<PlaybackController<K, S>>()
        {
            controller.reapply(trace);
            return;
        }
        debug!(
            from = self.session.algorithm(),
            to = trace.algorithm(),
            "session type changed; replacing controller"
        );
        self.session.cancel_timer();
        *self.session = NewSession(self.config).accept(trace);
    }
}

impl AlgorithmInput {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AlgorithmInput::LongestSubstring(_) => Algorithm::LongestSubstring,
            AlgorithmInput::TrappingRainWater(_) => Algorithm::TrappingRainWater,
            AlgorithmInput::ThreeSum(_) => Algorithm::ThreeSum,
            AlgorithmInput::ProductExceptSelf(_) => Algorithm::ProductExceptSelf,
            AlgorithmInput::CombinationSum { .. } => Algorithm::CombinationSum,
            AlgorithmInput::Permutations(_) => Algorithm::Permutations,
            AlgorithmInput::CourseSchedule { .. } => Algorithm::CourseSchedule,
            AlgorithmInput::LowestCommonAncestor { .. } => Algorithm::LowestCommonAncestor,
            AlgorithmInput::MaxPathSum(_) => Algorithm::MaxPathSum,
            AlgorithmInput::MergeSort(_) => Algorithm::MergeSort,
            AlgorithmInput::SpiralOrder(_) => Algorithm::SpiralOrder,
            AlgorithmInput::RotateMatrix(_) => Algorithm::RotateMatrix,
        }
    }

    /// Build the trace and wrap it in an idle controller
    pub fn into_session(self, config: PlaybackConfig) -> Box<dyn Session> {
        self.build(NewSession(config))
    }

    /// Build the trace and swap it into `session`, leaving it `Idle`
    ///
    /// The live timer is cancelled before the swap. Timer ids keep counting,
    /// so a tick scheduled against the old trace stays stale.
    pub fn reapply(self, session: &mut Box<dyn Session>, config: PlaybackConfig) {
        self.build(Reapply { session, config })
    }

    fn build<T: TraceSink>(self, sink: T) -> T::Output {
        match self {
            AlgorithmInput::LongestSubstring(chars) => sink.accept(longest_substring(&chars)),
            AlgorithmInput::TrappingRainWater(heights) => {
                sink.accept(trapping_rain_water(&heights))
            }
            AlgorithmInput::ThreeSum(numbers) => sink.accept(three_sum(&numbers)),
            AlgorithmInput::ProductExceptSelf(numbers) => {
                sink.accept(product_except_self(&numbers))
            }
            AlgorithmInput::CombinationSum { candidates, target } => {
                sink.accept(combination_sum(&candidates, target))
            }
            AlgorithmInput::Permutations(numbers) => sink.accept(permutations(&numbers)),
            AlgorithmInput::CourseSchedule {
                courses,
                prerequisites,
            } => sink.accept(course_schedule(courses, &prerequisites)),
            AlgorithmInput::LowestCommonAncestor { tree, p, q } => {
                sink.accept(lowest_common_ancestor(&tree, p, q))
            }
            AlgorithmInput::MaxPathSum(tree) => sink.accept(max_path_sum(&tree)),
            AlgorithmInput::MergeSort(numbers) => sink.accept(merge_sort(&numbers)),
            AlgorithmInput::SpiralOrder(matrix) => sink.accept(spiral_order(&matrix)),
            AlgorithmInput::RotateMatrix(matrix) => sink.accept(rotate(&matrix)),
        }
    }
}
