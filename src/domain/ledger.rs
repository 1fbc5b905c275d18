use tracing::debug;

use crate::{
    common::error::SplitError,
    domain::{
        entry::Entry,
        roster::Roster,
        token,
        totals::{self, Totals},
    },
};

/// Ordered cost lines for one session.
///
/// The ledger is never empty and its last entry is the open row: as soon as
/// text is typed into it, a fresh empty entry is appended behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<Entry>,
    active: usize,
}

impl Ledger {
    pub fn new(roster: &Roster) -> Self {
        Self {
            entries: vec![Entry::empty(roster)],
            active: 0,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the ledger always holds at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Row that should hold input focus.
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn entry(&self, index: usize) -> Result<&Entry, SplitError> {
        let len = self.entries.len();
        self.entries
            .get(index)
            .ok_or(SplitError::OutOfRange { index, len })
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut Entry, SplitError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(SplitError::OutOfRange { index, len })
    }

    /// Parses `raw` against the roster and stores it at `index`.
    ///
    /// `index == len()` appends. Typing into the last row opens a new empty row
    /// after it. Appending at `len()` places the new entry after the open row,
    /// which then stays behind as a blank row in the middle of the ledger.
    pub fn upsert(&mut self, index: usize, raw: &str, roster: &Roster) -> Result<(), SplitError> {
        let len = self.entries.len();
        if index > len {
            return Err(SplitError::OutOfRange { index, len });
        }
        if index == len {
            self.entries.push(Entry::empty(roster));
        }

        let parsed = token::parse(raw, roster);
        let typed = !raw.trim().is_empty() || !parsed.amount.is_empty();
        debug!(index, amount = %parsed.amount, "entry updated");
        self.entries[index].apply(parsed);

        if typed && index + 1 == self.entries.len() {
            self.entries.push(Entry::empty(roster));
            self.active = index + 1;
            debug!(rows = self.entries.len(), "opened a new row");
        }
        Ok(())
    }

    /// Removes the entry at `index`. Indices after `index` shift down by one.
    ///
    /// The ledger keeps its open row: if the removal leaves no entries, or
    /// leaves a last entry that already holds input, an empty entry is
    /// appended.
    pub fn delete(&mut self, index: usize, roster: &Roster) -> Result<Entry, SplitError> {
        let len = self.entries.len();
        if index >= len {
            return Err(SplitError::OutOfRange { index, len });
        }

        let removed = self.entries.remove(index);
        if self.entries.last().is_none_or(|last| !last.is_untouched()) {
            self.entries.push(Entry::empty(roster));
            debug!(rows = self.entries.len(), "reopened the trailing row");
        }
        if index < self.active {
            self.active -= 1;
        }
        self.active = self.active.min(self.entries.len() - 1);

        debug!(index, rows = self.entries.len(), "entry deleted");
        Ok(removed)
    }

    pub fn set_weight(&mut self, index: usize, name: &str, weight: u32) -> Result<(), SplitError> {
        let entry = self.entry_mut(index)?;
        let slot = entry
            .weights
            .get_mut(name)
            .ok_or_else(|| SplitError::UnknownParticipant(name.to_string()))?;
        *slot = weight;
        Ok(())
    }

    /// Flips a participant between selected (weight 1) and not selected.
    /// Returns the new weight.
    pub fn toggle(&mut self, index: usize, name: &str) -> Result<u32, SplitError> {
        let current = self.entry(index)?.weights.get(name).copied();
        let next = match current {
            Some(0) => 1,
            Some(_) => 0,
            None => return Err(SplitError::UnknownParticipant(name.to_string())),
        };
        self.set_weight(index, name, next)?;
        Ok(next)
    }

    /// Gives every entry a zero weight for a newly added participant.
    pub fn add_participant(&mut self, name: &str) {
        for entry in &mut self.entries {
            entry.weights.entry(name.to_string()).or_insert(0);
        }
    }

    pub fn remove_participant(&mut self, name: &str) {
        for entry in &mut self.entries {
            entry.weights.remove(name);
        }
    }

    pub fn compute_totals(&self, roster: &Roster) -> Totals {
        totals::compute(&self.entries, roster)
    }
}
