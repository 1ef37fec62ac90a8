//! Bounded undo/redo history.

use std::collections::VecDeque;

use crate::core::error::Error;
use crate::core::types::Result;
use crate::voxel::store::BlockStore;
use super::transaction::{self, RegionTransaction};

/// Newest-first stack that forgets its oldest entry when full.
#[derive(Clone, Debug)]
pub struct BoundedStack {
    /// Front is newest
    entries: VecDeque<RegionTransaction>,
    /// Maximum number of entries kept
    capacity: usize,
}

impl BoundedStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push to the front, evicting from the back past capacity.
    ///
    /// Returns the evicted entry, if any.
    pub fn push(&mut self, transaction: RegionTransaction) -> Option<RegionTransaction> {
        self.entries.push_front(transaction);
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    /// Take the newest entry
    pub fn pop(&mut self) -> Option<RegionTransaction> {
        self.entries.pop_front()
    }

    /// Newest entry
    pub fn peek(&self) -> Option<&RegionTransaction> {
        self.entries.front()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Undo and redo stacks of reverse deltas.
///
/// By default a fresh edit leaves the redo stack alone, so a redo after an
/// unrelated edit replays onto blocks that may have changed since.
/// `clear_redo_on_edit` drops the redo stack instead.
#[derive(Clone, Debug)]
pub struct History {
    undo: BoundedStack,
    redo: BoundedStack,
    clear_redo_on_edit: bool,
}

impl History {
    pub fn new(capacity: usize, clear_redo_on_edit: bool) -> Self {
        Self {
            undo: BoundedStack::new(capacity),
            redo: BoundedStack::new(capacity),
            clear_redo_on_edit,
        }
    }

    /// Record the reverse delta of a fresh edit.
    ///
    /// Empty transactions changed nothing and are not recorded.
    pub fn record(&mut self, transaction: RegionTransaction) {
        if transaction.is_empty() {
            log::debug!("edit changed no blocks; not recorded");
            return;
        }
        if self.clear_redo_on_edit && !self.redo.is_empty() {
            log::debug!("dropping {} redo entries", self.redo.len());
            self.redo.clear();
        }
        if self.undo.push(transaction).is_some() {
            log::debug!("undo history full; oldest edit evicted");
        }
    }

    /// Revert the newest edit. Returns the number of blocks restored.
    ///
    /// Fails with `RegionUnavailable`, leaving both stacks untouched, if any
    /// cell of the edit is not loaded.
    pub fn undo(&mut self, store: &mut impl BlockStore) -> Result<usize> {
        Self::step(&mut self.undo, &mut self.redo, store)
    }

    /// Reapply the newest undone edit. Returns the number of blocks written.
    pub fn redo(&mut self, store: &mut impl BlockStore) -> Result<usize> {
        Self::step(&mut self.redo, &mut self.undo, store)
    }

    /// Apply the head of `from` and push its inverse onto `to`.
    fn step(from: &mut BoundedStack, to: &mut BoundedStack, store: &mut impl BlockStore) -> Result<usize> {
        let head = from.peek().ok_or(Error::EmptyHistory)?;
        if let Some(entry) = head.entries().iter().find(|e| !store.get_block(e.at).is_valid()) {
            log::debug!("edit touches unloaded block {}; history kept", entry.at);
            return Err(Error::RegionUnavailable);
        }
        let Some(transaction) = from.pop() else {
            return Err(Error::EmptyHistory);
        };
        let inverse = transaction::apply(store, &transaction);
        let count = inverse.len();
        to.push(inverse);
        Ok(count)
    }

    /// Forget everything
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn capacity(&self) -> usize {
        self.undo.capacity()
    }
}
