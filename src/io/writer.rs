use std::io::Write;

use crate::domain::totals::Totals;

/// Label of the final row carrying the grand total.
pub const GRAND_TOTAL_LABEL: &str = "TOTAL";

#[derive(serde::Serialize)]
/// Internal CSV output row representation: `participant,share`.
struct OutputRow<'a> {
    participant: &'a str,
    share: String,
}

/// Writes totals to a CSV writer.
///
/// The output has a `participant,share` header, one row per participant in
/// roster order, then a `TOTAL` row with the grand total. Amounts always have
/// exactly 2 decimal places.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use expense_splitter::domain::session::Session;
/// use expense_splitter::io::writer::write_totals;
///
/// let mut session = Session::with_participants(["Mustafa", "Karan"]).unwrap();
/// session.upsert_entry(0, "50mk").unwrap();
///
/// let mut out = Vec::new();
/// write_totals(&mut out, &session.compute_totals()).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "participant,share\nMustafa,25.00\nKaran,25.00\nTOTAL,50.00\n");
/// ```
pub fn write_totals<W: Write>(writer: W, totals: &Totals) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for share in totals.shares() {
        wtr.serialize(OutputRow {
            participant: &share.participant,
            share: share.amount.to_string_2dp(),
        })?;
    }
    wtr.serialize(OutputRow {
        participant: GRAND_TOTAL_LABEL,
        share: totals.grand_total().to_string_2dp(),
    })?;

    wtr.flush()?;
    Ok(())
}
