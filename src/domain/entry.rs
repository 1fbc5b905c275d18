use bigdecimal::BigDecimal;

use crate::{
    common::amount::parse_amount,
    domain::{
        roster::Roster,
        token::{ParsedToken, Weights},
    },
};

/// One cost line: amount text plus a weight per roster member.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entry {
    pub amount: String,
    pub weights: Weights,
}

impl Entry {
    /// A blank entry with every roster member deselected.
    pub fn empty(roster: &Roster) -> Self {
        Self {
            amount: String::new(),
            weights: roster.names().map(|name| (name.to_string(), 0)).collect(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.amount.trim().is_empty()
    }

    /// No amount and nobody selected: the row can serve as the open row.
    pub fn is_untouched(&self) -> bool {
        self.is_blank() && self.total_weight() == 0
    }

    /// The amount as an exact decimal, if it parses.
    pub fn parsed_amount(&self) -> Option<BigDecimal> {
        parse_amount(&self.amount)
    }

    pub fn weight(&self, name: &str) -> u32 {
        self.weights.get(name).copied().unwrap_or(0)
    }

    pub fn total_weight(&self) -> u64 {
        self.weights.values().map(|w| u64::from(*w)).sum()
    }

    pub fn apply(&mut self, parsed: ParsedToken) {
        self.amount = parsed.amount;
        self.weights = parsed.weights;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::token::parse;

    fn roster() -> Roster {
        Roster::with_fixed(["Mustafa", "Adhi", "Karan"]).unwrap()
    }

    #[test]
    fn empty_entry_covers_the_roster() {
        let entry = Entry::empty(&roster());
        assert!(entry.is_blank());
        assert_eq!(entry.weights.len(), 3);
        assert_eq!(entry.total_weight(), 0);
        assert!(entry.parsed_amount().is_none());
    }

    #[test]
    fn apply_replaces_amount_and_weights() {
        let roster = roster();
        let mut entry = Entry::empty(&roster);
        entry.apply(parse("90m2a", &roster));

        assert_eq!(entry.amount, "902");
        assert_eq!(entry.weight("Mustafa"), 2);
        assert_eq!(entry.weight("Adhi"), 1);
        assert_eq!(entry.weight("Karan"), 0);
        assert_eq!(entry.weight("Nobody"), 0);
        assert_eq!(entry.total_weight(), 3);
    }

    #[test]
    fn whitespace_amount_is_blank() {
        let entry = Entry {
            amount: "  ".into(),
            ..Entry::default()
        };
        assert!(entry.is_blank());
    }

    #[test]
    fn selections_without_amount_are_not_untouched() {
        let roster = roster();
        let mut entry = Entry::empty(&roster);
        assert!(entry.is_untouched());

        entry.apply(parse("mk", &roster));
        assert!(entry.is_blank());
        assert!(!entry.is_untouched());
    }
}
