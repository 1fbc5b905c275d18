use crate::common::event::SessionEvent;
use std::io::Read;

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. `row` is blank
/// for roster actions, `value` is blank for `delete` and `clear`.
struct CsvRow {
    action: String,
    row: Option<usize>,
    value: Option<String>,
}

/// Reads session events from a CSV reader.
///
/// Supported headers: `action,row,value`.
/// Actions are case-insensitive: `edit`, `toggle`, `weight`, `delete`, `add`,
/// `remove` and `clear`. A `weight` value is written `Name:weight`. Errors
/// include the action and row for context.
///
/// # Examples
///
/// ```
/// use expense_splitter::io::reader::read_events;
/// use expense_splitter::common::event::SessionEvent;
/// use csv::ReaderBuilder;
///
/// let data = "action,row,value\n\
/// edit,0,100mk\n\
/// add,,Priya\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let events: Vec<_> = read_events(&mut rdr).collect();
///
/// assert!(matches!(&events[0], Ok(SessionEvent::Edit { row: 0, token }) if token == "100mk"));
/// assert!(matches!(&events[1], Ok(SessionEvent::AddParticipant { name }) if name == "Priya"));
/// ```
pub fn read_events<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<SessionEvent, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let action = row.action.trim().to_ascii_lowercase();

        let index = || {
            row.row
                .ok_or_else(|| format!("{action} missing row number"))
        };
        let value = || {
            row.value
                .clone()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| format!("{action} missing value"))
        };

        match action.as_str() {
            "edit" => Ok(SessionEvent::Edit {
                row: index()?,
                // Blank text is a legitimate edit: the user cleared the field.
                token: row.value.clone().unwrap_or_default(),
            }),
            "toggle" => Ok(SessionEvent::Toggle {
                row: index()?,
                participant: value()?,
            }),
            "weight" => {
                let row_index = index()?;
                let raw = value()?;
                let (participant, weight) = raw.rsplit_once(':').ok_or_else(|| {
                    format!("weight for row {row_index} must look like Name:weight, got {raw:?}")
                })?;
                let weight = weight
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| format!("weight for row {row_index}: {e}"))?;
                Ok(SessionEvent::Weight {
                    row: row_index,
                    participant: participant.trim().to_string(),
                    weight,
                })
            }
            "delete" => Ok(SessionEvent::Delete { row: index()? }),
            "add" => Ok(SessionEvent::AddParticipant { name: value()? }),
            "remove" => Ok(SessionEvent::RemoveParticipant { name: value()? }),
            "clear" => Ok(SessionEvent::ClearTemporary),
            other => Err(format!("unknown action: {other}")),
        }
    })
}
