pub mod entry;
pub mod ledger;
pub mod roster;
pub mod session;
pub mod token;
pub mod totals;
