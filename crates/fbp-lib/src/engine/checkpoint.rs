//! Checkpoints for backtracking.
//!
//! Before every attempt that may fail the matcher saves a checkpoint.
//! On failure it restores the checkpoint verbatim, which undoes both the
//! cursor movement and every record the attempt committed.

/// Matcher state needed to undo one attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    /// Byte offset of the cursor.
    pub position: usize,
    /// Committed length of the match store.
    pub record_count: usize,
    /// Rule nesting depth.
    pub depth: u32,
}

/// Stack of open attempts, innermost last.
#[derive(Debug)]
pub struct CheckpointStack {
    stack: Vec<Checkpoint>,
}

impl CheckpointStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, checkpoint: Checkpoint) {
        self.stack.push(checkpoint);
    }

    pub fn pop(&mut self) -> Option<Checkpoint> {
        self.stack.pop()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

impl Default for CheckpointStack {
    fn default() -> Self {
        Self::new()
    }
}
