//! Live expense splitting: a shorthand token parser that turns text such as
//! `100m2k` into an amount plus participant weights, and a ledger that splits
//! every line across its participants with exact decimal arithmetic.

pub mod app;
pub mod common;
pub mod config;
pub mod domain;
pub mod io;
pub mod worker;
