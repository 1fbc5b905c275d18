use std::io::{BufWriter, stdout};
use std::path::Path;

use tracing::{info, warn};

use crate::{
    common::error::AppError,
    config::Config,
    domain::session::Session,
    io::{reader, writer},
};

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let input_path = &args[1];

    let config = match args.get(2) {
        Some(path) => Config::load(Path::new(path))?,
        None => Config::default(),
    };
    let mut session = Session::from_config(&config)?;

    let file = std::fs::File::open(input_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);
    let events = reader::read_events(&mut reader);

    let mut processor = crate::worker::processor::Processor::new();
    let mut applied = 0usize;

    for event in events {
        let event = event.map_err(AppError::Parse)?;
        match processor.process(&mut session, event) {
            Ok(()) => applied += 1,
            // Rejected roster changes are reported and the replay carries on.
            Err(e) if !e.is_contract_violation() => warn!(error = %e, "event rejected"),
            Err(e) => return Err(e.into()),
        }
    }
    info!(applied, rows = session.entries().len(), "events replayed");

    // After replaying all events, write the totals to stdout
    let stdout = stdout();
    let writer = BufWriter::new(stdout.lock());
    writer::write_totals(writer, &session.compute_totals())?;

    Ok(())
}
