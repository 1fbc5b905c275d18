use crate::{
    common::{error::SplitError, event::SessionEvent},
    domain::session::Session,
};

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    /// Applies one event to the session, in order, to completion.
    pub fn process(&mut self, session: &mut Session, event: SessionEvent) -> Result<(), SplitError> {
        match event {
            SessionEvent::Edit { row, token } => {
                session.upsert_entry(row, &token)?;
            }
            SessionEvent::Toggle { row, participant } => {
                session.toggle_participant(row, &participant)?;
            }
            SessionEvent::Weight {
                row,
                participant,
                weight,
            } => {
                session.set_weight(row, &participant, weight)?;
            }
            SessionEvent::Delete { row } => {
                session.delete_entry(row)?;
            }
            SessionEvent::AddParticipant { name } => {
                session.add_participant(&name)?;
            }
            SessionEvent::RemoveParticipant { name } => {
                session.remove_participant(&name)?;
            }
            SessionEvent::ClearTemporary => {
                session.clear_temporary_participants();
            }
        }
        Ok(())
    }
}
