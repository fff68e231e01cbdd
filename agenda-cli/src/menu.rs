//! The interactive menu loop.

use std::str::FromStr;

use agenda_core::{EventId, EventStore};
use anyhow::Result;
use tracing::debug;

use crate::commands::{self, Command};
use crate::message::Message;
use crate::prompt::{Field, Prompter, Selection};
use crate::render::render_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddEvent,
    DeleteEvent,
    SearchEvent,
    AddParticipant,
    RemoveParticipant,
    ListParticipants,
    CheckScheduleConflict,
    HandleReminders,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::AddEvent,
        MenuChoice::DeleteEvent,
        MenuChoice::SearchEvent,
        MenuChoice::AddParticipant,
        MenuChoice::RemoveParticipant,
        MenuChoice::ListParticipants,
        MenuChoice::CheckScheduleConflict,
        MenuChoice::HandleReminders,
        MenuChoice::Exit,
    ];

    /// 1-based position in the printed menu
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).map_or(0, |i| i + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddEvent => "Add Event",
            MenuChoice::DeleteEvent => "Delete Event",
            MenuChoice::SearchEvent => "Search Event",
            MenuChoice::AddParticipant => "Add Participant",
            MenuChoice::RemoveParticipant => "Remove Participant",
            MenuChoice::ListParticipants => "List Participants",
            MenuChoice::CheckScheduleConflict => "Check Schedule Conflict",
            MenuChoice::HandleReminders => "Handle Reminders",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: usize = s.parse().map_err(|_| format!("Not a menu number: '{}'", s))?;
        n.checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| format!("No menu entry {}", n))
    }
}

/// Outcome of collecting a command's arguments.
enum Collected {
    Command(Command),
    Invalid(Message),
    Exit,
    Closed,
}

/// Drive `store` from `prompter` until the user exits or input runs out.
///
/// `today` is offered as the default for the reminder date where the
/// prompter supports defaults.
pub fn run(
    store: &mut EventStore,
    prompter: &mut dyn Prompter,
    color: bool,
    today: &str,
) -> Result<()> {
    loop {
        let choice = match prompter.select()? {
            Selection::Choice(choice) => choice,
            Selection::Invalid => {
                prompter.say(&render_line(&Message::InvalidChoice, color))?;
                continue;
            }
            Selection::Closed => {
                debug!("input closed, leaving menu");
                return Ok(());
            }
        };

        let command = match collect(choice, prompter, today)? {
            Collected::Command(command) => command,
            Collected::Invalid(message) => {
                prompter.say(&render_line(&message, color))?;
                continue;
            }
            Collected::Exit => {
                prompter.say(&render_line(&Message::Exiting, color))?;
                return Ok(());
            }
            Collected::Closed => return Ok(()),
        };

        debug!(?command, "executing");
        for message in commands::execute(store, command) {
            prompter.say(&render_line(&message, color))?;
        }
    }
}

/// Ask for whatever `choice` needs, in the order the classic menu asks.
fn collect(choice: MenuChoice, prompter: &mut dyn Prompter, today: &str) -> Result<Collected> {
    macro_rules! ask {
        ($field:expr) => {
            ask!($field, None)
        };
        ($field:expr, $default:expr) => {
            match prompter.ask($field, $default)? {
                Some(value) => value,
                None => return Ok(Collected::Closed),
            }
        };
    }
    macro_rules! ask_id {
        ($field:expr) => {
            match EventId::from_str(&ask!($field)) {
                Ok(id) => id,
                Err(_) => return Ok(Collected::Invalid(Message::InvalidEventId)),
            }
        };
    }

    let command = match choice {
        MenuChoice::AddEvent => Command::AddEvent {
            name: ask!(Field::EventName),
            date: ask!(Field::EventDate),
            time: ask!(Field::EventTime),
        },
        MenuChoice::DeleteEvent => Command::DeleteEvent {
            id: ask_id!(Field::DeleteId),
        },
        MenuChoice::SearchEvent => Command::SearchEvent {
            id: ask_id!(Field::SearchId),
        },
        MenuChoice::AddParticipant => Command::AddParticipant {
            id: ask_id!(Field::EventId),
            participant: ask!(Field::ParticipantName),
        },
        MenuChoice::RemoveParticipant => Command::RemoveParticipant {
            id: ask_id!(Field::EventId),
            participant: ask!(Field::ParticipantName),
        },
        MenuChoice::ListParticipants => Command::ListParticipants {
            id: ask_id!(Field::ListId),
        },
        MenuChoice::CheckScheduleConflict => Command::CheckScheduleConflict {
            date: ask!(Field::EventDate),
            time: ask!(Field::EventTime),
        },
        MenuChoice::HandleReminders => Command::HandleReminders {
            current_date: ask!(Field::CurrentDate, Some(today)),
        },
        MenuChoice::Exit => return Ok(Collected::Exit),
    };

    Ok(Collected::Command(command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::LinePrompter;
    use std::io::Cursor;

    #[test]
    fn choice_numbers_follow_menu_order() {
        assert_eq!(MenuChoice::AddEvent.number(), 1);
        assert_eq!(MenuChoice::Exit.number(), 9);
        assert_eq!("8".parse::<MenuChoice>(), Ok(MenuChoice::HandleReminders));
    }

    #[test]
    fn choice_parse_rejects_out_of_range() {
        assert!("0".parse::<MenuChoice>().is_err());
        assert!("10".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }

    /// Run the plain menu over `input` and return only the result lines
    /// (menu, prompts and blank lines stripped).
    fn session(store: &mut EventStore, input: &str) -> Vec<String> {
        let mut prompter = LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run(store, &mut prompter, false, "2024-01-01").unwrap();

        let out = String::from_utf8(prompter.into_output()).unwrap();
        out.lines()
            .map(strip_prompts)
            .filter(|l| {
                !l.is_empty()
                    && !l.starts_with("Event Scheduling System Menu")
                    && !l.chars().next().is_some_and(|c| c.is_ascii_digit())
            })
            .map(str::to_string)
            .collect()
    }

    fn strip_prompts(mut line: &str) -> &str {
        while let Some(rest) = line.strip_prefix("Enter ") {
            line = rest.split_once(": ").map_or("", |(_, after)| after);
        }
        line
    }

    #[test]
    fn add_search_and_exit() {
        let mut store = EventStore::new();
        let lines = session(&mut store, "1\nTeam sync\n2024-01-01\n10:00\n3\n1\n9\n");
        assert_eq!(
            lines,
            vec![
                "Event added successfully with ID: 1",
                "Event found: Team sync on 2024-01-01 at 10:00",
                "Exiting...",
            ]
        );
    }

    #[test]
    fn full_session_literal_output() {
        let mut store = EventStore::new();
        let input = concat!(
            "1\nStandup\n2024-01-01\n10:00\n",
            "1\nClash\n2024-01-01\n10:00\n",
            "1\nReview\n2024-01-03\n15:00\n",
            "4\n1\nAlice\n",
            "4\n1\nBob\n",
            "5\n1\nCarol\n",
            "6\n1\n",
            "7\n2024-01-03\n15:00\n",
            "7\n2024-01-03\n16:00\n",
            "2\n2\n",
            "2\n2\n",
            "8\n2024-01-02\n",
            "9\n",
        );

        let lines = session(&mut store, input);
        assert_eq!(
            lines,
            vec![
                "Event added successfully with ID: 1",
                "Event already exists at this time.",
                "Event added successfully with ID: 2",
                "Participant added successfully.",
                "Participant added successfully.",
                "Participant not found.",
                "Participants for event Standup:",
                "- Alice",
                "- Bob",
                "Schedule conflict found for date and time: 2024-01-03 15:00",
                "No schedule conflict.",
                "Event with ID 2 deleted successfully.",
                "Event not found.",
                "Reminder: Standup on 2024-01-01 at 10:00",
                "Exiting...",
            ]
        );
        assert_eq!(store.pending_reminders(), 1);
    }

    #[test]
    fn invalid_choice_and_id_keep_looping() {
        let mut store = EventStore::new();
        let lines = session(&mut store, "42\n3\nabc\n9\n");
        assert_eq!(
            lines,
            vec!["Invalid choice. Please try again.", "Invalid event ID.", "Exiting..."]
        );
    }

    #[test]
    fn end_of_input_stops_without_exit_message() {
        let mut store = EventStore::new();
        let lines = session(&mut store, "1\nHalf entered\n");
        assert!(lines.is_empty());
        assert!(store.is_empty());
    }
}
