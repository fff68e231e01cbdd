//! Menu commands and how each one drives the event store.

use agenda_core::{EventId, EventStore, StoreError};

use crate::message::Message;

/// A fully collected menu command, ready to run against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddEvent {
        name: String,
        date: String,
        time: String,
    },
    DeleteEvent { id: EventId },
    SearchEvent { id: EventId },
    AddParticipant { id: EventId, participant: String },
    RemoveParticipant { id: EventId, participant: String },
    ListParticipants { id: EventId },
    CheckScheduleConflict { date: String, time: String },
    HandleReminders { current_date: String },
}

/// Run `command` and describe the outcome. Store errors become messages;
/// nothing here is fatal.
pub fn execute(store: &mut EventStore, command: Command) -> Vec<Message> {
    match command {
        Command::AddEvent { name, date, time } => match store.add_event(name, date, time) {
            Ok(id) => vec![Message::EventAdded(id)],
            Err(e) => vec![failure(e)],
        },
        Command::DeleteEvent { id } => match store.delete_event(id) {
            Ok(()) => vec![Message::EventDeleted(id)],
            Err(e) => vec![failure(e)],
        },
        Command::SearchEvent { id } => match store.search_event(id) {
            Ok(event) => vec![Message::event_found(event)],
            Err(e) => vec![failure(e)],
        },
        Command::AddParticipant { id, participant } => {
            match store.add_participant(id, participant) {
                Ok(()) => vec![Message::ParticipantAdded],
                Err(e) => vec![failure(e)],
            }
        }
        Command::RemoveParticipant { id, participant } => {
            match store.remove_participant(id, &participant) {
                Ok(()) => vec![Message::ParticipantRemoved],
                Err(e) => vec![failure(e)],
            }
        }
        Command::ListParticipants { id } => match store.search_event(id) {
            Ok(event) => std::iter::once(Message::ParticipantsHeader(event.name.clone()))
                .chain(
                    event
                        .participants
                        .iter()
                        .map(|p| Message::Participant(p.clone())),
                )
                .collect(),
            Err(e) => vec![failure(e)],
        },
        Command::CheckScheduleConflict { date, time } => {
            if store.check_schedule_conflict(&date, &time) {
                vec![Message::ScheduleConflict { date, time }]
            } else {
                vec![Message::NoScheduleConflict]
            }
        }
        Command::HandleReminders { current_date } => store
            .handle_reminders(&current_date)
            .iter()
            .map(Message::reminder_fired)
            .collect(),
    }
}

fn failure(err: StoreError) -> Message {
    match err {
        StoreError::EventNotFound(_) => Message::EventNotFound,
        StoreError::ParticipantNotFound { .. } => Message::ParticipantNotFound,
        StoreError::Conflict { .. } => Message::EventExists,
    }
}
