//! Snapshot undo/redo history for a single document.
//!
//! Each entry is the full text of the document before (undo) or after (redo)
//! a change. Both stacks are most-recent-first and bounded; pushing past the
//! bound evicts the oldest entry.

use std::collections::VecDeque;

/// Default bound for both stacks
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

/// Bounded undo/redo stacks of text snapshots.
#[derive(Debug, Clone)]
pub struct BufferHistory {
    undo_stack: VecDeque<String>,
    redo_stack: VecDeque<String>,
    max_depth: usize,
}

impl Default for BufferHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferHistory {
    /// Create a new history with the default depth
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_HISTORY_DEPTH)
    }

    /// Create a new history with the specified depth (at least 1)
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Record `previous` as the state to return to on undo, and drop any
    /// redo history.
    ///
    /// Nothing is pushed if `previous` already equals the most recent undo
    /// entry, so repeated snapshots of the same text collapse into one.
    pub fn record(&mut self, previous: &str) {
        self.redo_stack.clear();
        if self.undo_stack.front().is_some_and(|front| front == previous) {
            return;
        }
        push_bounded(&mut self.undo_stack, previous.to_string(), self.max_depth);
    }

    /// Pop the most recent undo entry, remembering `current` for redo.
    /// Returns the text to restore, or None if there is nothing to undo.
    pub fn undo(&mut self, current: &str) -> Option<String> {
        let restored = self.undo_stack.pop_front()?;
        push_bounded(&mut self.redo_stack, current.to_string(), self.max_depth);
        Some(restored)
    }

    /// Pop the most recent redo entry, remembering `current` for undo.
    /// Returns the text to restore, or None if there is nothing to redo.
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let restored = self.redo_stack.pop_front()?;
        push_bounded(&mut self.undo_stack, current.to_string(), self.max_depth);
        Some(restored)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Most recent undo entry
    pub fn peek_undo(&self) -> Option<&str> {
        self.undo_stack.front().map(String::as_str)
    }

    /// Most recent redo entry
    pub fn peek_redo(&self) -> Option<&str> {
        self.redo_stack.front().map(String::as_str)
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Get the number of entries in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of entries in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

fn push_bounded(stack: &mut VecDeque<String>, entry: String, max_depth: usize) {
    stack.push_front(entry);
    stack.truncate(max_depth);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_then_undo_redo() {
        let mut history = BufferHistory::new();
        history.record("a");
        assert_eq!(history.undo_count(), 1);
        assert!(!history.can_redo());

        let restored = history.undo("b");
        assert_eq!(restored.as_deref(), Some("a"));
        assert_eq!(history.peek_redo(), Some("b"));
        assert!(!history.can_undo());

        let restored = history.redo("a");
        assert_eq!(restored.as_deref(), Some("b"));
        assert_eq!(history.peek_undo(), Some("a"));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_on_empty_is_none() {
        let mut history = BufferHistory::new();
        assert_eq!(history.undo("x"), None);
        assert_eq!(history.redo("x"), None);
        assert_eq!(history.redo_count(), 0);
    }

    #[test]
    fn test_record_skips_duplicate_front() {
        let mut history = BufferHistory::new();
        history.record("same");
        history.record("same");
        assert_eq!(history.undo_count(), 1);
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = BufferHistory::new();
        history.record("a");
        history.undo("b");
        assert!(history.can_redo());

        history.record("a");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_max_depth_evicts_oldest() {
        let mut history = BufferHistory::new();
        for i in 0..=DEFAULT_HISTORY_DEPTH {
            history.record(&format!("v{}", i));
        }
        assert_eq!(history.undo_count(), DEFAULT_HISTORY_DEPTH);
        assert_eq!(history.peek_undo(), Some("v50"));

        // The oldest entry ("v0") is gone: draining reaches "v1" last
        let mut last = None;
        while let Some(text) = history.undo("") {
            last = Some(text);
        }
        assert_eq!(last.as_deref(), Some("v1"));
    }

    #[test]
    fn test_record_after_undos_starts_fresh_redo() {
        let mut history = BufferHistory::with_max_depth(3);
        for i in 0..3 {
            history.record(&format!("v{}", i));
        }
        for i in 0..3 {
            history.undo(&format!("r{}", i));
        }
        assert_eq!(history.redo_count(), 3);
        history.record("x");
        history.undo("y");
        assert_eq!(history.redo_count(), 1);
    }

    #[test]
    fn test_zero_depth_is_clamped() {
        let history = BufferHistory::with_max_depth(0);
        assert_eq!(history.max_depth(), 1);
    }
}
