//! Input normalization
//!
//! Turns free text into validated algorithm input:
//! - [`lexer`]: tokenization (text → tokens with line/column)
//! - [`lists`]: number lists, single numbers, character sequences
//! - [`matrix`]: rectangular and square matrices
//! - [`tree`]: arena binary trees from level-order text
//! - [`edges`]: directed edge lists
//! - [`errors`]: [`InputParseError`]
//!
//! Every parser is total: bad input comes back as an `Err`, never a panic.
//! Every parser also takes a size bound, which is what keeps downstream
//! traces short enough to replay.

pub mod edges;
pub mod errors;
pub mod lexer;
pub mod lists;
pub mod matrix;
pub mod tree;

pub use edges::parse_edge_list;
pub use errors::InputParseError;
pub use lists::{ensure_range, parse_char_sequence, parse_number, parse_number_list};
pub use matrix::parse_matrix;
pub use tree::{parse_level_order_tree, Tree, TreeNode};
