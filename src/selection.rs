//! Selection manager - the set of selected element ids.
//!
//! Selection is order-independent and forgiving: operations that reference
//! ids not present in the canvas are silent no-ops, never errors. The
//! editor clears the selection on undo/redo so it can never dangle across
//! history jumps.

use std::collections::HashSet;

#[derive(Clone, Debug, Default)]
pub struct SelectionManager {
    ids: HashSet<u64>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`. With `multi` false the selection is replaced by `{id}`;
    /// with `multi` true membership of `id` is toggled.
    pub fn select(&mut self, id: u64, multi: bool) {
        if multi {
            self.toggle(id);
        } else {
            self.ids.clear();
            self.ids.insert(id);
        }
    }

    /// Toggle membership of `id`.
    pub fn toggle(&mut self, id: u64) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Add `id` without disturbing the rest of the selection
    /// (marquee accumulation).
    pub fn insert(&mut self, id: u64) {
        self.ids.insert(id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.ids.iter().copied()
    }

    /// Snapshot of the selected ids, unordered.
    pub fn ids(&self) -> Vec<u64> {
        self.ids.iter().copied().collect()
    }

    /// Drop any id not accepted by `keep`. Used after deletions so the
    /// selection never references removed elements.
    pub fn retain(&mut self, keep: impl Fn(u64) -> bool) {
        self.ids.retain(|id| keep(*id));
    }
}
