//! Input front-ends for the menu: a plain line reader and a dialoguer UI.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use dialoguer::{Input, Select};

use crate::menu::MenuChoice;

/// A value the menu asks the user for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    EventName,
    EventDate,
    EventTime,
    EventId,
    DeleteId,
    SearchId,
    ListId,
    ParticipantName,
    CurrentDate,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::EventName => "event name",
            Field::EventDate => "event date (YYYY-MM-DD)",
            Field::EventTime => "event time (HH:MM)",
            Field::EventId => "event ID",
            Field::DeleteId => "event ID to delete",
            Field::SearchId => "event ID to search",
            Field::ListId => "event ID to list participants",
            Field::ParticipantName => "participant name",
            Field::CurrentDate => "current date (YYYY-MM-DD)",
        }
    }

    /// Free-text fields keep inner and leading whitespace; the rest are
    /// single tokens.
    fn is_free_text(self) -> bool {
        matches!(self, Field::EventName | Field::ParticipantName)
    }
}

/// Result of asking for a menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Choice(MenuChoice),
    Invalid,
    /// Input is exhausted; treat like Exit.
    Closed,
}

/// Where menu input comes from and where its output goes.
pub trait Prompter {
    fn select(&mut self) -> Result<Selection>;

    /// Ask for a value. `None` means input was exhausted.
    fn ask(&mut self, field: Field, default: Option<&str>) -> Result<Option<String>>;

    fn say(&mut self, line: &str) -> Result<()>;
}

/// Line-oriented prompter over any reader/writer pair, printing the classic
/// numbered menu. Used for piped input and in tests.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LinePrompter { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn select(&mut self) -> Result<Selection> {
        writeln!(self.output, "\nEvent Scheduling System Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        self.prompt("Enter your choice: ")?;

        let Some(line) = self.read_line()? else {
            return Ok(Selection::Closed);
        };
        Ok(match line.trim().parse::<MenuChoice>() {
            Ok(choice) => Selection::Choice(choice),
            Err(_) => Selection::Invalid,
        })
    }

    fn ask(&mut self, field: Field, _default: Option<&str>) -> Result<Option<String>> {
        self.prompt(&format!("Enter {}: ", field.label()))?;

        let line = self.read_line()?;
        Ok(line.map(|l| {
            if field.is_free_text() {
                l
            } else {
                l.trim().to_string()
            }
        }))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

/// Interactive terminal prompter: the menu is a `Select`, fields are `Input`s.
#[derive(Default)]
pub struct TermPrompter;

impl TermPrompter {
    pub fn new() -> Self {
        TermPrompter
    }
}

impl Prompter for TermPrompter {
    fn select(&mut self) -> Result<Selection> {
        println!();
        let items: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();
        let selection = Select::new()
            .with_prompt("Event Scheduling System Menu")
            .items(&items)
            .default(0)
            .interact_opt()?;

        Ok(match selection {
            Some(index) => Selection::Choice(MenuChoice::ALL[index]),
            None => Selection::Closed,
        })
    }

    fn ask(&mut self, field: Field, default: Option<&str>) -> Result<Option<String>> {
        let mut input = Input::<String>::new()
            .with_prompt(format!("  {}", capitalize(field.label())))
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        let value = input.interact_text()?;

        if field.is_free_text() {
            Ok(Some(value))
        } else {
            Ok(Some(value.trim().to_string()))
        }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn select_prints_menu_and_parses_choice() {
        let mut p = prompter("3\n");
        assert_eq!(p.select().unwrap(), Selection::Choice(MenuChoice::SearchEvent));

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.starts_with("\nEvent Scheduling System Menu:\n1. Add Event\n"));
        assert!(out.contains("9. Exit\n"));
        assert!(out.ends_with("Enter your choice: "));
    }

    #[test]
    fn select_rejects_out_of_range_and_garbage() {
        let mut p = prompter("0\nten\n");
        assert_eq!(p.select().unwrap(), Selection::Invalid);
        assert_eq!(p.select().unwrap(), Selection::Invalid);
        assert_eq!(p.select().unwrap(), Selection::Closed);
    }

    #[test]
    fn free_text_keeps_spaces_tokens_are_trimmed() {
        let mut p = prompter("  Team sync  \n 2024-01-01 \r\n");
        assert_eq!(
            p.ask(Field::EventName, None).unwrap().as_deref(),
            Some("  Team sync  ")
        );
        assert_eq!(
            p.ask(Field::EventDate, None).unwrap().as_deref(),
            Some("2024-01-01")
        );
        assert_eq!(p.ask(Field::EventTime, None).unwrap(), None);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(
            out,
            "Enter event name: Enter event date (YYYY-MM-DD): Enter event time (HH:MM): "
        );
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("event ID"), "Event ID");
        assert_eq!(capitalize(""), "");
    }
}
