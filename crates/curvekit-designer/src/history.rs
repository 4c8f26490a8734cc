//! Undo/Redo history for path edits
//!
//! A linear log of path snapshots plus a cursor. Snapshots share node storage
//! with the live path through `Arc`, so committing is O(1); the live path
//! copies its nodes on the next positional edit.

use curvekit_core::constants::DEFAULT_HISTORY_DEPTH;
use tracing::debug;

use crate::model::Path;

/// One committed state of the path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryEntry {
    pub path: Path,
}

impl HistoryEntry {
    pub fn new(path: Path) -> Self {
        Self { path }
    }
}

/// Linear undo/redo log.
///
/// Entry 0 is the initial (empty) path. `commit` discards every entry after the
/// cursor, appends and advances; `undo`/`redo` move the cursor by one and are
/// no-ops at the boundaries.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    entries: Vec<HistoryEntry>,
    index: usize,
    max_depth: usize,
}

impl HistoryManager {
    /// Create a new history with default depth (100)
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_HISTORY_DEPTH)
    }

    /// Create with custom maximum depth. A depth below 1 is raised to 1.
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            entries: vec![HistoryEntry::default()],
            index: 0,
            max_depth: max_depth.max(1),
        }
    }

    /// Records `path` as the newest state.
    pub fn commit(&mut self, path: Path) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry::new(path));

        // Trim if exceeds max depth
        if self.entries.len() > self.max_depth {
            let excess = self.entries.len() - self.max_depth;
            self.entries.drain(..excess);
        }
        self.index = self.entries.len() - 1;

        debug!(
            "History commit: entry {} of {}",
            self.index + 1,
            self.entries.len()
        );
    }

    /// Steps back one entry. Returns `false` at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.index -= 1;
        debug!("Undo to entry {}", self.index);
        true
    }

    /// Steps forward one entry. Returns `false` at the newest entry.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.index += 1;
        debug!("Redo to entry {}", self.index);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// The entry under the cursor.
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Drops every entry and starts over from the empty path.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(HistoryEntry::default());
        self.index = 0;
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}
