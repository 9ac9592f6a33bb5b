//! Structured record of the agent's own recent actions.

use arrayvec::ArrayVec;

use super::ActionKind;

/// Number of entries retained by [`ActionHistory`].
pub const HISTORY_CAPACITY: usize = 10;

/// One action the execution layer carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionHistoryEntry {
    pub kind: ActionKind,
    /// World tick at which the action was executed.
    pub timestamp: u64,
}

impl ActionHistoryEntry {
    pub const fn new(kind: ActionKind, timestamp: u64) -> Self {
        Self { kind, timestamp }
    }
}

/// Fixed-capacity ring of the most recent actions, oldest first.
///
/// Appended by the execution layer after every executed action. When full,
/// the oldest entry is dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActionHistory {
    entries: ArrayVec<ActionHistoryEntry, HISTORY_CAPACITY>,
}

impl ActionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, evicting the oldest one when full.
    pub fn push(&mut self, entry: ActionHistoryEntry) {
        if self.entries.is_full() {
            self.entries.remove(0);
        }
        self.entries.push(entry);
    }

    /// Convenience for `push(ActionHistoryEntry::new(kind, timestamp))`.
    pub fn record(&mut self, kind: ActionKind, timestamp: u64) {
        self.push(ActionHistoryEntry::new(kind, timestamp));
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&ActionHistoryEntry> {
        self.entries.last()
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> &[ActionHistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ActionHistoryEntry> for ActionHistory {
    fn from_iter<I: IntoIterator<Item = ActionHistoryEntry>>(iter: I) -> Self {
        let mut history = Self::new();
        for entry in iter {
            history.push(entry);
        }
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_evicts_oldest_when_full() {
        let mut history = ActionHistory::new();
        for tick in 0..12u64 {
            history.record(ActionKind::Move, tick);
        }
        history.record(ActionKind::Scan, 12);

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.entries()[0].timestamp, 3);
        assert_eq!(history.last().map(|e| e.kind), Some(ActionKind::Scan));
    }

    #[test]
    fn collects_from_iterator() {
        let history: ActionHistory = [ActionKind::Buy, ActionKind::Sell]
            .into_iter()
            .enumerate()
            .map(|(i, kind)| ActionHistoryEntry::new(kind, i as u64))
            .collect();

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].kind, ActionKind::Buy);
    }
}
