//! Binary trees and level-order parsing
//!
//! Trees are stored as an arena: nodes live in a `Vec` and link to their
//! children by index. Node ids are arena indices assigned in level order, so
//! the id of a node is stable for the lifetime of a trace and can be used as
//! a highlight identifier.

use super::errors::InputParseError;
use super::lexer::{tokenize, Location, Token};
use std::collections::VecDeque;

/// A node of a binary tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub value: i64,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// An arena-backed binary tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    root: Option<usize>,
}

impl Tree {
    pub fn empty() -> Self {
        Tree {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Build from LeetCode-style level order, `None` marking a missing child
    ///
    /// Trailing `None`s are ignored. Returns `None` if a value is listed
    /// under a missing parent.
    pub fn from_level_order(values: &[Option<i64>]) -> Option<Self> {
        let end = values
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |p| p + 1);
        let values = &values[..end];

        let mut tree = Tree::empty();
        let Some((first, rest)) = values.split_first() else {
            return Some(tree);
        };
        let root_value = (*first)?;
        let root = tree.push(root_value);
        tree.root = Some(root);

        let mut queue = VecDeque::from([root]);
        let mut rest = rest.iter();
        while let Some(parent) = queue.pop_front() {
            for is_left in [true, false] {
                let Some(slot) = rest.next() else {
                    return Some(tree);
                };
                if let Some(value) = slot {
                    let child = tree.push(*value);
                    if is_left {
                        tree.nodes[parent].left = Some(child);
                    } else {
                        tree.nodes[parent].right = Some(child);
                    }
                    queue.push_back(child);
                }
            }
        }

        if rest.next().is_some() {
            None
        } else {
            Some(tree)
        }
    }

    fn push(&mut self, value: i64) -> usize {
        self.nodes.push(TreeNode {
            value,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    pub fn root(&self) -> Option<usize> {
        self.root
    }

    pub fn node(&self, id: usize) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node (in level order) holding `value`
    pub fn find(&self, value: i64) -> Option<usize> {
        self.nodes.iter().position(|n| n.value == value)
    }

    /// Serialize back to level order, trailing `None`s trimmed
    pub fn to_level_order(&self) -> Vec<Option<i64>> {
        let mut out = Vec::new();
        let mut queue = VecDeque::from([self.root]);
        while let Some(slot) = queue.pop_front() {
            match slot.and_then(|id| self.nodes.get(id)) {
                Some(node) => {
                    out.push(Some(node.value));
                    queue.push_back(node.left);
                    queue.push_back(node.right);
                }
                None => out.push(None),
            }
        }
        while out.last() == Some(&None) {
            out.pop();
        }
        out
    }
}

/// Parse a level-order tree such as `[3,9,20,null,null,15,7]`
pub fn parse_level_order_tree(text: &str, max_nodes: usize) -> Result<Tree, InputParseError> {
    let tokens = tokenize(text);
    let mut values: Vec<Option<i64>> = Vec::new();
    let mut locations: Vec<Location> = Vec::new();
    let mut open = false;
    let mut closed = false;

    for token in &tokens {
        match token {
            Token::Number(_, loc) | Token::Null(loc) if closed => {
                return Err(InputParseError::malformed("value after closing ']'", *loc));
            }
            Token::Number(n, loc) => {
                values.push(Some(*n));
                locations.push(*loc);
            }
            Token::Null(loc) => {
                values.push(None);
                locations.push(*loc);
            }
            Token::LBracket(loc) => {
                if open || closed || !values.is_empty() {
                    return Err(InputParseError::malformed("unexpected '['", *loc));
                }
                open = true;
            }
            Token::RBracket(loc) => {
                if !open {
                    return Err(InputParseError::malformed("unmatched ']'", *loc));
                }
                open = false;
                closed = true;
            }
            Token::Word(word, loc) => {
                return Err(InputParseError::InvalidToken {
                    token: word.clone(),
                    location: *loc,
                });
            }
            Token::Eof(loc) if open => {
                return Err(InputParseError::malformed("missing ']'", *loc));
            }
            Token::Comma(_) | Token::Semicolon(_) | Token::Newline(_) | Token::Eof(_) => {}
        }
    }

    let node_count = values.iter().filter(|v| v.is_some()).count();
    if node_count > max_nodes {
        return Err(InputParseError::TooLong {
            len: node_count,
            max: max_nodes,
        });
    }

    Tree::from_level_order(&values).ok_or_else(|| {
        let loc = orphan_location(&values, &locations);
        InputParseError::malformed("value has no parent node", loc)
    })
}

/// Location of the first value that cannot be attached to a parent
fn orphan_location(values: &[Option<i64>], locations: &[Location]) -> Location {
    // Replay the level-order slot assignment to find the first orphan
    let mut open_slots = 0usize;
    for (i, value) in values.iter().enumerate() {
        if i == 0 {
            open_slots = if value.is_some() { 2 } else { 0 };
            continue;
        }
        if open_slots == 0 {
            return locations[i];
        }
        open_slots -= 1;
        if value.is_some() {
            open_slots += 2;
        }
    }
    locations.last().copied().unwrap_or(Location::new(1, 1))
}
