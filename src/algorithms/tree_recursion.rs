//! Post-order recursion over a binary tree
//!
//! Every node produces exactly three steps: `Descend` when its call starts,
//! `Combine` once both children have returned, and `Return` when its result
//! is handed to the parent. The recursion is mirrored in a [`CallStack`]
//! (pushed before `Descend`, popped before `Return`), and every result a
//! node has returned stays visible in the snapshot.

use crate::input::{Tree, TreeNode};
use crate::trace::{
    CallStack, Frame, Highlight, Pointers, SnapshotView, StepKind, Trace, TraceRecorder,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeKind {
    Init,
    Descend,
    Combine,
    Return,
    Done,
}

impl StepKind for TreeKind {
    fn label(&self) -> &'static str {
        match self {
            TreeKind::Init => "init",
            TreeKind::Descend => "descend",
            TreeKind::Combine => "combine",
            TreeKind::Return => "return",
            TreeKind::Done => "done",
        }
    }
}

/// State of a post-order walk producing `R` per node and an answer `A`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSnapshot<R, A> {
    pub tree: Tree,
    /// Indexed by node id; `None` until the node returns
    pub results: Vec<Option<R>>,
    pub current: Option<usize>,
    /// What the current node's left child returned, if it has one
    pub left: Option<R>,
    pub right: Option<R>,
    /// What the current node will return
    pub contribution: Option<R>,
    pub frames: Vec<Frame>,
    pub answer: A,
}

/// What a subtree reports in the ancestor search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcaReturn {
    Nothing,
    /// Node id of `p`, `q`, or their ancestor
    Found(usize),
}

impl fmt::Display for LcaReturn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LcaReturn::Nothing => write!(f, "nothing"),
            LcaReturn::Found(id) => write!(f, "node {}", id),
        }
    }
}

/// What a node reports in the path-sum search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathGain {
    /// Best downward path starting here, handed to the parent
    pub gain: i64,
    /// Best path that bends at this node
    pub through: i64,
}

impl fmt::Display for PathGain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "gain {} (through {})", self.gain, self.through)
    }
}

pub type LcaSnapshot = TreeSnapshot<LcaReturn, Option<usize>>;
pub type LcaTrace = Trace<TreeKind, LcaSnapshot>;
pub type PathSumSnapshot = TreeSnapshot<PathGain, Option<i64>>;
pub type PathSumTrace = Trace<TreeKind, PathSumSnapshot>;

struct Walk<'t, R, A> {
    tree: &'t Tree,
    label: &'static str,
    rec: TraceRecorder<TreeKind, TreeSnapshot<R, A>>,
    stack: CallStack,
    results: Vec<Option<R>>,
    current: Option<usize>,
    left: Option<R>,
    right: Option<R>,
    contribution: Option<R>,
    answer: A,
}

impl<'t, R: Clone + fmt::Display, A: Clone> Walk<'t, R, A> {
    fn new(algorithm: &'static str, label: &'static str, tree: &'t Tree, answer: A) -> Self {
        Walk {
            tree,
            label,
            rec: TraceRecorder::new(algorithm),
            stack: CallStack::new(),
            results: vec![None; tree.len()],
            current: None,
            left: None,
            right: None,
            contribution: None,
            answer,
        }
    }

    fn snapshot(&self) -> TreeSnapshot<R, A> {
        TreeSnapshot {
            tree: self.tree.clone(),
            results: self.results.clone(),
            current: self.current,
            left: self.left.clone(),
            right: self.right.clone(),
            contribution: self.contribution.clone(),
            frames: self.stack.to_vec(),
            answer: self.answer.clone(),
        }
    }

    fn emit(&mut self, kind: TreeKind, description: String, extra: &[Highlight]) {
        let snapshot = self.snapshot();
        let highlights = self.current.map(Highlight::Node).into_iter().chain(extra.iter().copied());
        self.rec
            .emit(kind, description)
            .pointers(Pointers::new().with_opt("node", self.current))
            .highlights(highlights)
            .snapshot(snapshot);
    }

    fn focus(&mut self, id: usize) {
        self.current = Some(id);
        let node = &self.tree.nodes()[id];
        self.left = node.left.and_then(|c| self.results[c].clone());
        self.right = node.right.and_then(|c| self.results[c].clone());
    }

    /// Walk the subtree at `id`; `combine` turns a node and its children's
    /// results into the node's own result plus a description
    fn visit<F>(&mut self, id: usize, combine: &mut F) -> R
    where
        F: FnMut(usize, &TreeNode, Option<&R>, Option<&R>, &mut A) -> (R, String),
    {
        let tree = self.tree;
        let node = &tree.nodes()[id];

        self.stack
            .push_frame(self.label, format!("node={} (value {})", id, node.value));
        self.focus(id);
        self.contribution = None;
        let description = format!(
            "Enter node {} (value {}); solve its subtrees first",
            id, node.value
        );
        self.emit(TreeKind::Descend, description, &[]);

        if let Some(child) = node.left {
            self.visit(child, combine);
        }
        if let Some(child) = node.right {
            self.visit(child, combine);
        }

        self.focus(id);
        let (result, description) = combine(
            id,
            node,
            self.left.as_ref(),
            self.right.as_ref(),
            &mut self.answer,
        );
        self.contribution = Some(result.clone());
        let children: Vec<Highlight> = [node.left, node.right]
            .into_iter()
            .flatten()
            .map(Highlight::Node)
            .collect();
        self.emit(TreeKind::Combine, description, &children);

        self.stack.pop_frame();
        self.results[id] = Some(result.clone());
        let description = match self.stack.current_frame() {
            Some(_) => format!("Node {} returns {} to its parent", id, result),
            None => format!("Root {} returns {}", id, result),
        };
        self.emit(TreeKind::Return, description, &[]);
        result
    }

    fn done(mut self, description: String) -> Trace<TreeKind, TreeSnapshot<R, A>> {
        self.current = None;
        self.left = None;
        self.right = None;
        self.contribution = None;
        self.emit(TreeKind::Done, description, &[]);
        self.rec.finish()
    }
}

/// Build the trace for the lowest common ancestor of the first nodes holding
/// values `p` and `q`
///
/// The walk visits the whole tree so that every node gets its three steps.
/// If either value is missing, the trace is just init and done with no
/// answer.
pub fn lowest_common_ancestor(tree: &Tree, p: i64, q: i64) -> LcaTrace {
    let mut walk = Walk::new("lowest-common-ancestor", "lca", tree, None);
    walk.emit(
        TreeKind::Init,
        format!(
            "Find the lowest common ancestor of {} and {} in a tree of {} node(s)",
            p,
            q,
            tree.len()
        ),
        &[],
    );

    let (p_id, q_id, root) = match (tree.find(p), tree.find(q), tree.root()) {
        (Some(p_id), Some(q_id), Some(root)) => (p_id, q_id, root),
        (p_id, q_id, _) => {
            let missing: Vec<String> = [(p, p_id), (q, q_id)]
                .iter()
                .filter(|(_, id)| id.is_none())
                .map(|(v, _)| v.to_string())
                .collect();
            return walk.done(format!(
                "Value(s) {} not in the tree; no common ancestor",
                missing.join(" and ")
            ));
        }
    };

    let mut combine = |id: usize,
                       node: &TreeNode,
                       left: Option<&LcaReturn>,
                       right: Option<&LcaReturn>,
                       answer: &mut Option<usize>| {
        let found = |r: Option<&LcaReturn>| match r {
            Some(LcaReturn::Found(n)) => Some(*n),
            _ => None,
        };
        match (found(left), found(right)) {
            _ if id == p_id || id == q_id => (
                LcaReturn::Found(id),
                format!("Node {} (value {}) is one of the targets; report itself", id, node.value),
            ),
            (Some(l), Some(r)) => {
                *answer = Some(id);
                (
                    LcaReturn::Found(id),
                    format!(
                        "Targets found on both sides (nodes {} and {}); node {} is the split point",
                        l, r, id
                    ),
                )
            }
            (Some(n), None) | (None, Some(n)) => (
                LcaReturn::Found(n),
                format!("Only one side found something; pass node {} upward", n),
            ),
            (None, None) => (
                LcaReturn::Nothing,
                format!("Neither subtree of node {} holds a target", id),
            ),
        }
    };
    let result = walk.visit(root, &mut combine);

    if let LcaReturn::Found(id) = result {
        walk.answer = Some(id);
    }
    let description = match walk.answer {
        Some(id) => format!(
            "Lowest common ancestor of {} and {} is node {} (value {})",
            p,
            q,
            id,
            tree.nodes()[id].value
        ),
        None => format!("No common ancestor of {} and {}", p, q),
    };
    walk.done(description)
}

/// Build the trace for the maximum path sum of a binary tree
///
/// A path may start and end anywhere but must follow parent-child links.
/// An empty tree has no answer.
pub fn max_path_sum(tree: &Tree) -> PathSumTrace {
    let mut walk = Walk::new("max-path-sum", "gain", tree, None);
    walk.emit(
        TreeKind::Init,
        format!("Find the maximum path sum over {} node(s)", tree.len()),
        &[],
    );

    let Some(root) = tree.root() else {
        return walk.done("Tree is empty; there is no path".to_string());
    };

    let mut combine = |id: usize,
                       node: &TreeNode,
                       left: Option<&PathGain>,
                       right: Option<&PathGain>,
                       best: &mut Option<i64>| {
        let left_gain = left.map_or(0, |g| g.gain.max(0));
        let right_gain = right.map_or(0, |g| g.gain.max(0));
        let through = node.value + left_gain + right_gain;
        let gain = node.value + left_gain.max(right_gain);
        let improved = best.map_or(true, |b| through > b);
        if improved {
            *best = Some(through);
        }
        let description = format!(
            "Node {}: {} + left {} + right {} = {}{}; hand up {}",
            id,
            node.value,
            left_gain,
            right_gain,
            through,
            if improved { " (new best)" } else { "" },
            gain
        );
        (PathGain { gain, through }, description)
    };
    walk.visit(root, &mut combine);

    let description = match walk.answer {
        Some(best) => format!("Maximum path sum is {}", best),
        None => "Tree is empty; there is no path".to_string(),
    };
    walk.done(description)
}

impl<R: fmt::Display, A> TreeSnapshot<R, A> {
    fn render_tree(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(root) = self.tree.root() {
            self.render_node(root, 0, &mut lines);
        } else {
            lines.push("(empty tree)".to_string());
        }
        lines
    }

    fn render_node(&self, id: usize, depth: usize, lines: &mut Vec<String>) {
        let node = &self.tree.nodes()[id];
        let marker = if self.current == Some(id) { ">" } else { " " };
        let result = match &self.results[id] {
            Some(r) => format!("  => {}", r),
            None => String::new(),
        };
        lines.push(format!(
            "{}{}#{} {}{}",
            marker,
            "  ".repeat(depth),
            id,
            node.value,
            result
        ));
        for child in [node.left, node.right].into_iter().flatten() {
            self.render_node(child, depth + 1, lines);
        }
    }

    fn render_focus(&self, lines: &mut Vec<String>) {
        let show = |r: &Option<R>| match r {
            Some(r) => r.to_string(),
            None => "-".to_string(),
        };
        if self.current.is_some() {
            lines.push(format!(
                "left {}  right {}  result {}",
                show(&self.left),
                show(&self.right),
                show(&self.contribution)
            ));
        }
        lines.push("call stack:".to_string());
        for frame in &self.frames {
            lines.push(format!(
                "  {}{}({})",
                "  ".repeat(frame.depth),
                frame.label,
                frame.arguments
            ));
        }
    }
}

impl SnapshotView for LcaSnapshot {
    fn render(&self) -> Vec<String> {
        let mut lines = self.render_tree();
        self.render_focus(&mut lines);
        lines
    }

    fn answer(&self) -> String {
        match self.answer {
            Some(id) => format!("ancestor: node {} (value {})", id, self.tree.nodes()[id].value),
            None => "ancestor: none yet".to_string(),
        }
    }
}

impl SnapshotView for PathSumSnapshot {
    fn render(&self) -> Vec<String> {
        let mut lines = self.render_tree();
        self.render_focus(&mut lines);
        lines
    }

    fn answer(&self) -> String {
        match self.answer {
            Some(best) => format!("best path sum {}", best),
            None => "best path sum: none".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(values: &[Option<i64>]) -> Tree {
        Tree::from_level_order(values).unwrap()
    }

    fn sample() -> Tree {
        // 3 / (5 / (6, 2 / (7, 4)), 1 / (0, 8))
        tree(&[
            Some(3),
            Some(5),
            Some(1),
            Some(6),
            Some(2),
            Some(0),
            Some(8),
            None,
            None,
            Some(7),
            Some(4),
        ])
    }

    fn reference_max_path(tree: &Tree) -> Option<i64> {
        fn gain(tree: &Tree, id: Option<usize>, best: &mut i64) -> i64 {
            let Some(id) = id else { return 0 };
            let node = tree.node(id).unwrap();
            let l = gain(tree, node.left, best).max(0);
            let r = gain(tree, node.right, best).max(0);
            *best = (*best).max(node.value + l + r);
            node.value + l.max(r)
        }
        let root = tree.root()?;
        let mut best = i64::MIN;
        gain(tree, Some(root), &mut best);
        Some(best)
    }

    #[test]
    fn test_lca_split_and_ancestor_cases() {
        let t = sample();
        let answer = |p, q| lowest_common_ancestor(&t, p, q).last().unwrap().snapshot.answer;

        assert_eq!(answer(5, 1), t.find(3));
        assert_eq!(answer(5, 4), t.find(5));
        assert_eq!(answer(7, 4), t.find(2));
        assert_eq!(answer(6, 6), t.find(6));
    }

    #[test]
    fn test_lca_missing_target() {
        let trace = lowest_common_ancestor(&sample(), 5, 42);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().unwrap().snapshot.answer, None);
        assert!(trace.last().unwrap().description.contains("42"));
    }

    #[test]
    fn test_three_steps_per_node() {
        let t = sample();
        let trace = lowest_common_ancestor(&t, 7, 8);
        for kind in [TreeKind::Descend, TreeKind::Combine, TreeKind::Return] {
            assert_eq!(trace.count_kind(kind), t.len());
        }
        assert_eq!(trace.len(), 3 * t.len() + 2);
    }

    #[test]
    fn test_frames_follow_descend_and_return() {
        let trace = max_path_sum(&sample());
        let mut depth = 0;
        for step in &trace {
            match step.kind {
                TreeKind::Descend => {
                    assert_eq!(step.snapshot.frames.len(), depth + 1);
                    depth += 1;
                }
                TreeKind::Return => {
                    assert_eq!(step.snapshot.frames.len(), depth - 1);
                    depth -= 1;
                }
                _ => assert_eq!(step.snapshot.frames.len(), depth),
            }
        }
        assert_eq!(depth, 0);
    }

    #[test]
    fn test_children_return_before_parent_combines() {
        let t = sample();
        let trace = max_path_sum(&t);
        for step in trace.iter().filter(|s| s.kind == TreeKind::Combine) {
            let id = step.snapshot.current.unwrap();
            let node = t.node(id).unwrap();
            for child in [node.left, node.right].into_iter().flatten() {
                assert!(step.snapshot.results[child].is_some());
            }
            assert!(step.snapshot.results[id].is_none());
            assert_eq!(step.snapshot.left.is_some(), node.left.is_some());
        }
    }

    #[test]
    fn test_max_path_sum_matches_reference() {
        for values in [
            vec![Some(1), Some(2), Some(3)],
            vec![Some(-10), Some(9), Some(20), None, None, Some(15), Some(7)],
            vec![Some(-3)],
            vec![Some(2), Some(-1), Some(-2)],
            vec![Some(5), Some(4), Some(8), Some(11), None, Some(13), Some(4)],
        ] {
            let t = tree(&values);
            let trace = max_path_sum(&t);
            assert_eq!(
                trace.last().unwrap().snapshot.answer,
                reference_max_path(&t),
                "tree {values:?}"
            );
        }
        let t = tree(&[Some(-10), Some(9), Some(20), None, None, Some(15), Some(7)]);
        assert_eq!(max_path_sum(&t).last().unwrap().snapshot.answer, Some(42));
    }

    #[test]
    fn test_empty_tree_has_no_answer() {
        let trace = max_path_sum(&Tree::empty());
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().unwrap().snapshot.answer, None);
        assert_eq!(trace.last().unwrap().kind, TreeKind::Done);
    }
}
