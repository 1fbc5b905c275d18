use bigdecimal::{BigDecimal, Zero};
use tracing::trace;

use crate::{
    common::money::Money,
    domain::{entry::Entry, roster::Roster},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantShare {
    pub participant: String,
    pub amount: Money,
}

/// Per-participant shares in roster order plus their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    shares: Vec<ParticipantShare>,
    grand_total: Money,
}

impl Totals {
    pub fn shares(&self) -> &[ParticipantShare] {
        &self.shares
    }

    pub fn get(&self, participant: &str) -> Option<&Money> {
        self.shares
            .iter()
            .find(|s| s.participant == participant)
            .map(|s| &s.amount)
    }

    /// Sum of the rounded shares.
    pub fn grand_total(&self) -> &Money {
        &self.grand_total
    }

    /// Whether anybody owes anything at all.
    pub fn has_any_share(&self) -> bool {
        self.shares.iter().any(|s| !s.amount.is_zero())
    }
}

/// Splits every entry's amount across its selected participants.
///
/// Rows that cannot contribute are skipped silently: blank or malformed
/// amounts, negative amounts and rows where nobody is selected. Each share is
/// `amount * weight / total_weight` in exact decimal arithmetic. Running sums
/// are rounded half-up to cents only at the end, and the grand total is the
/// sum of those rounded shares.
///
/// # Examples
/// ```
/// use expense_splitter::domain::{ledger::Ledger, roster::Roster};
///
/// let roster = Roster::with_fixed(["Mustafa", "Adhi", "Karan"]).unwrap();
/// let mut ledger = Ledger::new(&roster);
/// ledger.upsert(0, "100", &roster).unwrap();
/// ledger.set_weight(0, "Mustafa", 2).unwrap();
/// ledger.set_weight(0, "Karan", 1).unwrap();
///
/// let totals = ledger.compute_totals(&roster);
/// assert_eq!(totals.get("Mustafa").unwrap().to_string(), "66.67");
/// assert_eq!(totals.get("Karan").unwrap().to_string(), "33.33");
/// assert_eq!(totals.grand_total().to_string(), "100.00");
/// ```
pub fn compute(entries: &[Entry], roster: &Roster) -> Totals {
    let zero = BigDecimal::zero();
    let mut running: Vec<BigDecimal> = vec![zero.clone(); roster.len()];

    for (row, entry) in entries.iter().enumerate() {
        if entry.is_blank() {
            continue;
        }
        let Some(amount) = entry.parsed_amount() else {
            trace!(row, text = %entry.amount, "skipping malformed amount");
            continue;
        };
        if amount < zero {
            trace!(row, %amount, "skipping negative amount");
            continue;
        }
        let total_weight = entry.total_weight();
        if total_weight == 0 {
            trace!(row, "skipping entry with nobody selected");
            continue;
        }

        let divisor = BigDecimal::from(total_weight);
        for (sum, participant) in running.iter_mut().zip(roster.iter()) {
            let weight = entry.weight(participant.name());
            if weight == 0 {
                continue;
            }
            *sum += (&amount * &BigDecimal::from(weight)) / &divisor;
        }
    }

    let shares: Vec<ParticipantShare> = roster
        .iter()
        .zip(running.iter())
        .map(|(participant, sum)| ParticipantShare {
            participant: participant.name().to_string(),
            amount: Money::round_half_up(sum),
        })
        .collect();
    let grand_total = shares.iter().map(|s| s.amount.clone()).sum();

    Totals {
        shares,
        grand_total,
    }
}
