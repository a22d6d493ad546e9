//! Per-session completion state, keyed by step position.
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct Checklist {
    done: HashMap<usize, bool>,
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unknown positions read as unchecked.
    pub fn is_checked(&self, position: usize) -> bool {
        self.done.get(&position).copied().unwrap_or(false)
    }

    /// Flip the entry for `position`, inserting `true` on first toggle.
    pub fn toggle(&mut self, position: usize) {
        let entry = self.done.entry(position).or_insert(false);
        *entry = !*entry;
    }

    pub fn completed_count(&self) -> usize {
        self.done.values().filter(|done| **done).count()
    }
}
