//! Pending reminders, ordered by date.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::event::{Event, EventId};

/// A queued reminder: the event's date plus a snapshot of the event taken
/// when it was added. The snapshot is not refreshed if the event changes or
/// is deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub date: String,
    pub event: Event,
}

impl Reminder {
    pub fn for_event(event: &Event) -> Self {
        Reminder {
            date: event.date.clone(),
            event: event.clone(),
        }
    }

    /// Due once `current_date` reaches or passes the reminder's date.
    pub fn is_due(&self, current_date: &str) -> bool {
        self.date.as_str() <= current_date
    }

    fn sort_key(&self) -> (&str, &str, EventId) {
        (&self.date, &self.event.time, self.event.id)
    }
}

impl Ord for Reminder {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Reminder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-ordered queue of reminders: earliest date first, then time, then id.
#[derive(Debug, Default, Clone)]
pub struct ReminderQueue {
    heap: BinaryHeap<Reverse<Reminder>>,
}

impl ReminderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, reminder: Reminder) {
        self.heap.push(Reverse(reminder));
    }

    pub fn peek(&self) -> Option<&Reminder> {
        self.heap.peek().map(|Reverse(r)| r)
    }

    /// Pop every reminder whose date is <= `current_date`, earliest first.
    /// Stops at the first reminder that is not yet due.
    pub fn pop_due(&mut self, current_date: &str) -> Vec<Reminder> {
        let mut fired = Vec::new();
        while self.peek().is_some_and(|r| r.is_due(current_date)) {
            if let Some(Reverse(reminder)) = self.heap.pop() {
                fired.push(reminder);
            }
        }
        fired
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
