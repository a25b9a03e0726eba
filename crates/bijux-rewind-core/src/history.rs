// SPDX-License-Identifier: Apache-2.0

//! Bounded snapshot history with an undo/redo cursor.
//!
//! Entries are kept oldest first. The cursor designates the entry that
//! matches the live state; everything after it is the redo branch, which is
//! dropped as soon as a new state is recorded.

use std::collections::VecDeque;

use time::OffsetDateTime;

use crate::errors::{Result, RewindError};

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry<T> {
    id: u64,
    label: String,
    created_at: OffsetDateTime,
    state: T,
}

impl<T> HistoryEntry<T> {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    #[must_use]
    pub fn state(&self) -> &T {
        &self.state
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryInfo {
    pub total: usize,
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Where the cursor sits relative to the recorded sequence.
///
/// A history with a single entry is both at its start and at its end; it is
/// reported as `AtEnd` and [`History::is_at_start`] still holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryPosition {
    Empty,
    AtStart,
    Middle,
    AtEnd,
}

#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<HistoryEntry<T>>,
    cursor: Option<usize>,
    capacity: usize,
    next_id: u64,
}

impl<T> History<T> {
    /// Capacity is clamped to at least one entry.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            cursor: None,
            capacity,
            next_id: 0,
        }
    }

    /// Appends `state` after the cursor, discarding the redo branch, and moves
    /// the cursor to it. The oldest entries are evicted past capacity.
    pub fn record(
        &mut self,
        label: impl Into<String>,
        state: T,
        at: OffsetDateTime,
    ) -> &HistoryEntry<T> {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }
        self.next_id += 1;
        self.entries.push_back(HistoryEntry {
            id: self.next_id,
            label: label.into(),
            created_at: at,
            state,
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        let tail = self.entries.len() - 1;
        self.cursor = Some(tail);
        &self.entries[tail]
    }

    pub fn undo(&mut self) -> Result<&T> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                Ok(&self.entries[cursor - 1].state)
            }
            _ => Err(RewindError::NoHistory),
        }
    }

    pub fn redo(&mut self) -> Result<&T> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.entries.len() => {
                self.cursor = Some(cursor + 1);
                Ok(&self.entries[cursor + 1].state)
            }
            _ => Err(RewindError::NoFuture),
        }
    }

    /// Forgets every entry. The live state owned by the caller is untouched.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    #[must_use]
    pub fn info(&self) -> HistoryInfo {
        HistoryInfo {
            total: self.entries.len(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor
            .is_some_and(|cursor| cursor + 1 < self.entries.len())
    }

    #[must_use]
    pub fn position(&self) -> HistoryPosition {
        match self.cursor {
            None => HistoryPosition::Empty,
            Some(cursor) if cursor + 1 == self.entries.len() => HistoryPosition::AtEnd,
            Some(0) => HistoryPosition::AtStart,
            Some(_) => HistoryPosition::Middle,
        }
    }

    #[must_use]
    pub fn is_at_start(&self) -> bool {
        self.cursor == Some(0)
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor + 1 == self.entries.len())
    }

    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[must_use]
    pub fn current(&self) -> Option<&HistoryEntry<T>> {
        self.cursor.map(|cursor| &self.entries[cursor])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> impl ExactSizeIterator<Item = &HistoryEntry<T>> + '_ {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const AT: OffsetDateTime = datetime!(2024-01-01 00:00 UTC);

    #[test]
    fn empty_history_refuses_both_directions() {
        let mut history: History<u32> = History::new(4);
        assert_eq!(history.position(), HistoryPosition::Empty);
        assert!(!history.is_at_start());
        assert!(!history.is_at_end());
        assert_eq!(history.undo(), Err(RewindError::NoHistory));
        assert_eq!(history.redo(), Err(RewindError::NoFuture));
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn single_entry_is_both_start_and_end() {
        let mut history = History::new(4);
        history.record("a", 1, AT);
        assert_eq!(history.position(), HistoryPosition::AtEnd);
        assert!(history.is_at_start());
        assert!(history.is_at_end());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn cursor_walks_through_positions() {
        let mut history = History::new(8);
        for value in 0..3 {
            history.record(format!("v{value}"), value, AT);
        }
        assert_eq!(history.position(), HistoryPosition::AtEnd);
        assert_eq!(history.undo().copied(), Ok(1));
        assert_eq!(history.position(), HistoryPosition::Middle);
        assert_eq!(history.undo().copied(), Ok(0));
        assert_eq!(history.position(), HistoryPosition::AtStart);
        assert!(history.is_at_start());
        assert!(!history.is_at_end());
        assert_eq!(history.undo(), Err(RewindError::NoHistory));
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn recording_after_undo_discards_redo_branch() {
        let mut history = History::new(8);
        history.record("a", 'a', AT);
        history.record("b", 'b', AT);
        history.record("c", 'c', AT);
        history.undo().expect("undo c");
        history.undo().expect("undo b");
        history.record("d", 'd', AT);

        let states: Vec<char> = history.entries().map(|e| *e.state()).collect();
        assert_eq!(states, vec!['a', 'd']);
        assert!(!history.can_redo());
        assert_eq!(history.redo(), Err(RewindError::NoFuture));
    }

    #[test]
    fn overflow_evicts_oldest_and_keeps_cursor_on_latest() {
        let mut history = History::new(3);
        for value in 0..5 {
            history.record("step", value, AT);
        }
        let states: Vec<i32> = history.entries().map(|e| *e.state()).collect();
        assert_eq!(states, vec![2, 3, 4]);
        assert_eq!(history.current().map(|e| *e.state()), Some(4));
        assert_eq!(history.cursor(), Some(2));
    }

    #[test]
    fn ids_stay_monotonic_across_eviction_and_clear() {
        let mut history = History::new(2);
        let first = history.record("a", 0, AT).id();
        history.record("b", 1, AT);
        history.record("c", 2, AT);
        history.clear();
        let after_clear = history.record("d", 3, AT).id();
        assert!(after_clear > first);
        assert_eq!(after_clear, 4);
        assert_eq!(history.info().total, 1);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut history = History::new(0);
        history.record("a", 0, AT);
        history.record("b", 1, AT);
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.len(), 1);
    }
}
