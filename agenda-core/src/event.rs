//! Event types held by the store.

use std::fmt;

/// Identifier assigned to an event when it is added. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub u64);

impl EventId {
    pub const FIRST: EventId = EventId(1);

    pub(crate) fn next(self) -> EventId {
        EventId(self.0 + 1)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EventId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EventId)
    }
}

/// A scheduled event.
///
/// `date` (YYYY-MM-DD) and `time` (HH:MM) are kept as the strings the user
/// typed. They are only ever compared lexicographically, which orders
/// correctly as long as they are zero-padded and fixed-width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub date: String,
    pub time: String,
    /// Insertion order, duplicates allowed
    pub participants: Vec<String>,
}

impl Event {
    pub fn new(id: EventId, name: String, date: String, time: String) -> Self {
        Event {
            id,
            name,
            date,
            time,
            participants: Vec::new(),
        }
    }

    /// True if this event occupies exactly the given slot.
    pub fn occupies(&self, date: &str, time: &str) -> bool {
        self.date == date && self.time == time
    }

    /// "YYYY-MM-DD HH:MM"
    pub fn slot(&self) -> String {
        format!("{} {}", self.date, self.time)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {} at {}", self.name, self.date, self.time)
    }
}
