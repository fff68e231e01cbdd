//! Lines printed back to the user after each menu command.

use std::fmt;

use agenda_core::{Event, EventId, Reminder};

/// How a message should be emphasised when color is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Reminder,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    EventAdded(EventId),
    EventExists,
    EventDeleted(EventId),
    EventFound {
        name: String,
        date: String,
        time: String,
    },
    EventNotFound,
    ParticipantAdded,
    ParticipantRemoved,
    ParticipantNotFound,
    ParticipantsHeader(String),
    Participant(String),
    ScheduleConflict { date: String, time: String },
    NoScheduleConflict,
    ReminderFired {
        name: String,
        date: String,
        time: String,
    },
    InvalidChoice,
    InvalidEventId,
    Exiting,
}

impl Message {
    pub fn event_found(event: &Event) -> Self {
        Message::EventFound {
            name: event.name.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
        }
    }

    pub fn reminder_fired(reminder: &Reminder) -> Self {
        Message::ReminderFired {
            name: reminder.event.name.clone(),
            date: reminder.event.date.clone(),
            time: reminder.event.time.clone(),
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Message::EventAdded(_)
            | Message::EventDeleted(_)
            | Message::EventFound { .. }
            | Message::ParticipantAdded
            | Message::ParticipantRemoved
            | Message::NoScheduleConflict => Tone::Success,
            Message::EventExists
            | Message::EventNotFound
            | Message::ParticipantNotFound
            | Message::ScheduleConflict { .. }
            | Message::InvalidChoice
            | Message::InvalidEventId => Tone::Failure,
            Message::ReminderFired { .. } => Tone::Reminder,
            Message::ParticipantsHeader(_) | Message::Participant(_) | Message::Exiting => {
                Tone::Plain
            }
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::EventAdded(id) => write!(f, "Event added successfully with ID: {}", id),
            Message::EventExists => write!(f, "Event already exists at this time."),
            Message::EventDeleted(id) => write!(f, "Event with ID {} deleted successfully.", id),
            Message::EventFound { name, date, time } => {
                write!(f, "Event found: {} on {} at {}", name, date, time)
            }
            Message::EventNotFound => write!(f, "Event not found."),
            Message::ParticipantAdded => write!(f, "Participant added successfully."),
            Message::ParticipantRemoved => write!(f, "Participant removed successfully."),
            Message::ParticipantNotFound => write!(f, "Participant not found."),
            Message::ParticipantsHeader(name) => write!(f, "Participants for event {}:", name),
            Message::Participant(name) => write!(f, "- {}", name),
            Message::ScheduleConflict { date, time } => {
                write!(f, "Schedule conflict found for date and time: {} {}", date, time)
            }
            Message::NoScheduleConflict => write!(f, "No schedule conflict."),
            Message::ReminderFired { name, date, time } => {
                write!(f, "Reminder: {} on {} at {}", name, date, time)
            }
            Message::InvalidChoice => write!(f, "Invalid choice. Please try again."),
            Message::InvalidEventId => write!(f, "Invalid event ID."),
            Message::Exiting => write!(f, "Exiting..."),
        }
    }
}
