//! Explicit call stack for recursive builders
//!
//! Backtracking and tree-recursion builders run their recursion natively but
//! mirror it in a [`CallStack`]: a [`Frame`] is pushed before the step that
//! enters a call and popped before the step that returns from it. Each
//! snapshot stores a copy of the frames, so the view can draw the stack
//! without inspecting recursion depth.

/// One activation record of the mirrored recursion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Function-like label, e.g. `dfs` or `post_order`
    pub label: String,
    /// Human-readable arguments, e.g. `remaining=4, start=1`
    pub arguments: String,
    /// 0 for the outermost call
    pub depth: usize,
}

impl Frame {
    pub fn new(label: impl Into<String>, arguments: impl Into<String>, depth: usize) -> Self {
        Frame {
            label: label.into(),
            arguments: arguments.into(),
            depth,
        }
    }
}

/// The mirrored call stack
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallStack {
    frames: Vec<Frame>,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack { frames: Vec::new() }
    }

    /// Push a new frame one level deeper than the current top
    pub fn push_frame(&mut self, label: impl Into<String>, arguments: impl Into<String>) {
        let depth = self.frames.len();
        self.frames.push(Frame::new(label, arguments, depth));
    }

    /// Pop the top frame
    pub fn pop_frame(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Get the current (top) frame
    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Get all frames, outermost first
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Owned copy for a snapshot
    pub fn to_vec(&self) -> Vec<Frame> {
        self.frames.clone()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop_track_depth() {
        let mut stack = CallStack::new();
        stack.push_frame("dfs", "remaining=7");
        stack.push_frame("dfs", "remaining=5");

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.current_frame().unwrap().depth, 1);
        assert_eq!(stack.current_frame().unwrap().arguments, "remaining=5");

        let popped = stack.pop_frame().unwrap();
        assert_eq!(popped.depth, 1);
        assert_eq!(stack.depth(), 1);
        stack.pop_frame();
        assert!(stack.is_empty());
        assert!(stack.pop_frame().is_none());
    }

    #[test]
    fn test_copies_are_independent() {
        let mut stack = CallStack::new();
        stack.push_frame("dfs", "");
        let copy = stack.to_vec();
        stack.pop_frame();

        assert_eq!(copy.len(), 1);
        assert!(stack.frames().is_empty());
    }
}
