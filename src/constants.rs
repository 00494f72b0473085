// Input bounds and playback defaults

use std::time::Duration;

/// Longest string accepted by the substring builder
pub const MAX_SUBSTRING_LEN: usize = 20;

/// Most bars accepted by the rain-water builder
pub const MAX_HEIGHTS: usize = 16;

/// Tallest bar accepted by the rain-water builder
pub const MAX_HEIGHT_VALUE: i64 = 99;

/// Most numbers accepted by the 3-sum builder
pub const MAX_THREE_SUM_LEN: usize = 12;

/// Most numbers accepted by the product-except-self builder
pub const MAX_PRODUCT_LEN: usize = 10;

/// Value bound for product-except-self, keeps products inside i64
pub const MAX_PRODUCT_VALUE: i64 = 30;

/// Most candidates accepted by the combination-sum builder
pub const MAX_CANDIDATES: usize = 6;

/// Smallest candidate accepted by the combination-sum builder
pub const MIN_CANDIDATE: i64 = 2;

/// Largest target accepted by the combination-sum builder
pub const MAX_TARGET: i64 = 16;

/// Most numbers accepted by the permutations builder
pub const MAX_PERMUTATION_LEN: usize = 6;

/// Most recent backtracking results kept in each intermediate snapshot
pub const MAX_SNAPSHOT_RESULTS: usize = 8;

/// Most numbers accepted by the merge-sort builder
pub const MAX_SORT_LEN: usize = 16;

/// Matrix bound for the spiral and rotate builders
pub const MAX_MATRIX_DIM: usize = 6;

/// Most nodes accepted by the tree builders
pub const MAX_TREE_NODES: usize = 15;

/// Most courses accepted by the course-schedule builder
pub const MAX_COURSES: usize = 10;

/// Most prerequisite pairs accepted by the course-schedule builder
pub const MAX_PREREQUISITES: usize = 20;

/// Magnitude bound for plain integer values (sort keys, tree values, cells)
pub const MAX_ABS_VALUE: i64 = 999;

/// Shortest auto-play delay between steps
pub const MIN_STEP_DELAY: Duration = Duration::from_millis(800);

/// Longest auto-play delay between steps
pub const MAX_STEP_DELAY: Duration = Duration::from_millis(2000);

/// Smallest rolling log
pub const MIN_LOG_CAPACITY: usize = 14;

/// Largest rolling log
pub const MAX_LOG_CAPACITY: usize = 18;

/// Log size used when an algorithm does not pick one
pub const DEFAULT_LOG_CAPACITY: usize = 16;
