/// A single user action sent from the reader to the worker for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Edit { row: usize, token: String },
    Toggle { row: usize, participant: String },
    Weight {
        row: usize,
        participant: String,
        weight: u32,
    },
    Delete { row: usize },
    AddParticipant { name: String },
    RemoveParticipant { name: String },
    ClearTemporary,
}
