#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing events csv path. usage: expense_splitter <events.csv> [config.json]")]
    MissingArg,
    #[error("failed to open input file: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Split(#[from] SplitError),
}

/// Failures raised by roster and ledger mutations.
///
/// Malformed amount text is never an error; it is simply left out of the totals.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error("entry {index} is out of range (ledger has {len} entries)")]
    OutOfRange { index: usize, len: usize },
    #[error("participant {0:?} already exists")]
    DuplicateName(String),
    #[error("participant {name:?} shares the initial '{initial}' with {existing:?}")]
    DuplicateInitial {
        name: String,
        initial: char,
        existing: String,
    },
    #[error("invalid participant name {0:?}: it must start with a letter")]
    InvalidName(String),
    #[error("unknown participant {0:?}")]
    UnknownParticipant(String),
    #[error("participant {0:?} is part of the fixed roster")]
    FixedParticipant(String),
}

impl SplitError {
    /// True when the error means the caller addressed something that does not
    /// exist, as opposed to a rejected user request.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            SplitError::OutOfRange { .. } | SplitError::UnknownParticipant(_)
        )
    }
}
