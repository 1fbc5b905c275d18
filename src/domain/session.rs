use tracing::{debug, info};

use crate::{
    common::error::SplitError,
    config::Config,
    domain::{
        entry::Entry,
        ledger::Ledger,
        roster::{ParticipantKind, Roster},
        totals::Totals,
    },
};

/// Everything one user works on: the roster and the ledger built against it.
///
/// Each session owns its state outright; there is nothing shared between
/// sessions. Every call runs to completion before the next one, and
/// [`Session::compute_totals`] always reflects the calls made so far.
///
/// # Examples
/// ```
/// use expense_splitter::domain::session::Session;
///
/// let mut session = Session::with_participants(["Mustafa", "Adhi", "Karan"]).unwrap();
/// session.upsert_entry(0, "75mak").unwrap();
///
/// let totals = session.compute_totals();
/// assert_eq!(totals.get("Adhi").unwrap().to_string(), "25.00");
/// assert_eq!(totals.grand_total().to_string(), "75.00");
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    roster: Roster,
    ledger: Ledger,
}

impl Session {
    /// A session whose roster is exactly `names`, all fixed.
    pub fn with_participants<I, S>(names: I) -> Result<Self, SplitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roster = Roster::with_fixed(names)?;
        let ledger = Ledger::new(&roster);
        Ok(Self { roster, ledger })
    }

    pub fn from_config(config: &Config) -> Result<Self, SplitError> {
        let mut session = Self::with_participants(&config.participants)?;
        for name in &config.temporary {
            session.add_participant(name)?;
        }
        info!(participants = session.roster.len(), "session started");
        Ok(session)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn entries(&self) -> &[Entry] {
        self.ledger.entries()
    }

    pub fn active_index(&self) -> usize {
        self.ledger.active_index()
    }

    /// Stores the parsed `raw` token at `index` (`index == len` appends).
    pub fn upsert_entry(&mut self, index: usize, raw: &str) -> Result<(), SplitError> {
        self.ledger.upsert(index, raw, &self.roster)
    }

    pub fn delete_entry(&mut self, index: usize) -> Result<Entry, SplitError> {
        self.ledger.delete(index, &self.roster)
    }

    pub fn toggle_participant(&mut self, index: usize, name: &str) -> Result<u32, SplitError> {
        self.ledger.toggle(index, name)
    }

    pub fn set_weight(&mut self, index: usize, name: &str, weight: u32) -> Result<(), SplitError> {
        self.ledger.set_weight(index, name, weight)
    }

    /// Adds a temporary participant. Existing entries get weight 0 for them.
    pub fn add_participant(&mut self, name: &str) -> Result<(), SplitError> {
        let stored = self.roster.add(name, ParticipantKind::Temporary)?;
        self.ledger.add_participant(stored);
        debug!(name = stored, "participant added");
        Ok(())
    }

    pub fn remove_participant(&mut self, name: &str) -> Result<(), SplitError> {
        let removed = self.roster.remove_temporary(name)?;
        self.ledger.remove_participant(removed.name());
        debug!(name, "participant removed");
        Ok(())
    }

    /// Drops all temporary participants and their weights.
    pub fn clear_temporary_participants(&mut self) {
        for name in self.roster.clear_temporary() {
            self.ledger.remove_participant(&name);
        }
        debug!(participants = self.roster.len(), "temporary participants cleared");
    }

    pub fn compute_totals(&self) -> Totals {
        self.ledger.compute_totals(&self.roster)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::common::money::Money;

    fn session() -> Session {
        Session::with_participants(["Mustafa", "Adhi", "Karan"]).unwrap()
    }

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn typing_rows_updates_totals() {
        let mut s = session();
        s.upsert_entry(0, "100m").unwrap();
        s.upsert_entry(1, "50mk").unwrap();

        let totals = s.compute_totals();
        assert_eq!(totals.get("Mustafa"), Some(&money("125")));
        assert_eq!(totals.get("Adhi"), Some(&money("0")));
        assert_eq!(totals.get("Karan"), Some(&money("25")));
        assert_eq!(totals.grand_total(), &money("150"));
        assert_eq!(s.entries().len(), 3);
        assert_eq!(s.active_index(), 2);
    }

    #[test]
    fn toggles_change_the_split() {
        let mut s = session();
        s.upsert_entry(0, "60").unwrap();
        assert!(!s.compute_totals().has_any_share());

        s.toggle_participant(0, "Adhi").unwrap();
        s.toggle_participant(0, "Karan").unwrap();
        s.set_weight(0, "Karan", 2).unwrap();

        let totals = s.compute_totals();
        assert_eq!(totals.get("Adhi"), Some(&money("20")));
        assert_eq!(totals.get("Karan"), Some(&money("40")));
    }

    #[test]
    fn new_participant_is_retrofitted_and_parsed() {
        let mut s = session();
        s.upsert_entry(0, "30mak").unwrap();
        s.add_participant("Priya").unwrap();

        assert!(s.entries().iter().all(|e| e.weights.get("Priya") == Some(&0)));
        assert_eq!(s.compute_totals().get("Priya"), Some(&Money::zero()));

        s.upsert_entry(1, "40p").unwrap();
        assert_eq!(s.compute_totals().get("Priya"), Some(&money("40")));
    }

    #[test]
    fn duplicate_names_leave_roster_unchanged() {
        let mut s = session();
        let before = s.roster().clone();
        assert_eq!(
            s.add_participant("Karan").unwrap_err(),
            SplitError::DuplicateName("Karan".into())
        );
        assert!(matches!(
            s.add_participant("Kim").unwrap_err(),
            SplitError::DuplicateInitial { initial: 'k', .. }
        ));
        assert_eq!(s.roster(), &before);
        assert!(s.entries().iter().all(|e| e.weights.len() == 3));
    }

    #[test]
    fn clearing_temporary_participants_drops_their_shares() {
        let mut s = session();
        s.add_participant("Priya").unwrap();
        s.add_participant("Zed").unwrap();
        s.upsert_entry(0, "90pzm").unwrap();
        assert_eq!(s.compute_totals().get("Zed"), Some(&money("30")));

        s.clear_temporary_participants();
        let totals = s.compute_totals();
        assert!(totals.get("Priya").is_none());
        assert_eq!(totals.get("Mustafa"), Some(&money("90")));
        assert!(s.entries().iter().all(|e| e.weights.len() == 3));
    }

    #[test]
    fn remove_one_participant() {
        let mut s = session();
        s.add_participant("Priya").unwrap();
        s.upsert_entry(0, "20pa").unwrap();
        s.remove_participant("Priya").unwrap();

        assert_eq!(s.compute_totals().get("Adhi"), Some(&money("20")));
        assert_eq!(
            s.remove_participant("Adhi").unwrap_err(),
            SplitError::FixedParticipant("Adhi".into())
        );
    }

    #[test]
    fn deleting_rows_keeps_one_entry() {
        let mut s = session();
        s.upsert_entry(0, "10m").unwrap();
        s.delete_entry(0).unwrap();
        s.delete_entry(0).unwrap();
        assert_eq!(s.entries().len(), 1);
        assert!(matches!(
            s.delete_entry(3),
            Err(SplitError::OutOfRange { index: 3, len: 1 })
        ));
    }

    #[test]
    fn from_config_seeds_fixed_and_temporary_members() {
        let config = Config {
            participants: vec!["Ana".into(), "Bo".into()],
            temporary: vec!["Cy".into()],
        };
        let mut s = Session::from_config(&config).unwrap();
        assert_eq!(s.roster().names().collect::<Vec<_>>(), ["Ana", "Bo", "Cy"]);

        s.clear_temporary_participants();
        assert_eq!(s.roster().names().collect::<Vec<_>>(), ["Ana", "Bo"]);
    }

    #[test]
    fn totals_are_idempotent() {
        let mut s = session();
        s.upsert_entry(0, "100m2k").unwrap();
        s.upsert_entry(1, "7.77mak").unwrap();
        assert_eq!(s.compute_totals(), s.compute_totals());
    }
}
