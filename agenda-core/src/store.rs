//! The event store: owns every event and the reminder queue.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::event::{Event, EventId};
use crate::reminder::{Reminder, ReminderQueue};

/// In-memory store of events, keyed by id, plus their pending reminders.
///
/// Single owner, no interior mutability: callers hold it by value and pass
/// `&mut` into whatever drives it.
#[derive(Debug)]
pub struct EventStore {
    next_id: EventId,
    events: BTreeMap<EventId, Event>,
    reminders: ReminderQueue,
}

impl Default for EventStore {
    fn default() -> Self {
        EventStore {
            next_id: EventId::FIRST,
            events: BTreeMap::new(),
            reminders: ReminderQueue::new(),
        }
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    // MUTATIONS:

    /// Add an event, rejecting it if another event already occupies the same
    /// date and time. A rejected add consumes no id.
    pub fn add_event(
        &mut self,
        name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> StoreResult<EventId> {
        let (date, time) = (date.into(), time.into());

        if self.check_schedule_conflict(&date, &time) {
            debug!(%date, %time, "rejected event: slot taken");
            return Err(StoreError::Conflict { date, time });
        }

        let id = self.next_id;
        self.next_id = id.next();

        let event = Event::new(id, name.into(), date, time);
        self.reminders.push(Reminder::for_event(&event));
        debug!(%id, name = %event.name, slot = %event.slot(), "added event");
        self.events.insert(id, event);

        Ok(id)
    }

    /// Remove an event. Its queued reminder, if any, stays in the queue.
    pub fn delete_event(&mut self, id: EventId) -> StoreResult<()> {
        self.events
            .remove(&id)
            .ok_or(StoreError::EventNotFound(id))?;
        debug!(%id, "deleted event");
        Ok(())
    }

    pub fn add_participant(
        &mut self,
        id: EventId,
        participant: impl Into<String>,
    ) -> StoreResult<()> {
        let event = self.event_mut(id)?;
        let participant = participant.into();
        debug!(%id, %participant, "added participant");
        event.participants.push(participant);
        Ok(())
    }

    /// Remove the first participant equal to `participant`.
    pub fn remove_participant(&mut self, id: EventId, participant: &str) -> StoreResult<()> {
        let event = self.event_mut(id)?;
        let pos = event
            .participants
            .iter()
            .position(|p| p == participant)
            .ok_or_else(|| StoreError::ParticipantNotFound {
                id,
                participant: participant.to_string(),
            })?;
        event.participants.remove(pos);
        debug!(%id, %participant, "removed participant");
        Ok(())
    }

    /// Fire every reminder dated on or before `current_date`, earliest first.
    /// Fired reminders are dropped from the queue.
    pub fn handle_reminders(&mut self, current_date: &str) -> Vec<Reminder> {
        let fired = self.reminders.pop_due(current_date);
        for reminder in &fired {
            info!(id = %reminder.event.id, date = %reminder.date, "reminder fired");
        }
        fired
    }

    // QUERIES:

    pub fn search_event(&self, id: EventId) -> StoreResult<&Event> {
        self.events.get(&id).ok_or(StoreError::EventNotFound(id))
    }

    pub fn list_participants(&self, id: EventId) -> StoreResult<&[String]> {
        self.search_event(id).map(|e| e.participants.as_slice())
    }

    /// True if a live event sits at exactly this date and time.
    pub fn check_schedule_conflict(&self, date: &str, time: &str) -> bool {
        self.events.values().any(|e| e.occupies(date, time))
    }

    /// Live events in id order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The id the next successful `add_event` will assign.
    pub fn next_id(&self) -> EventId {
        self.next_id
    }

    /// Reminders still waiting to fire, including ones for deleted events.
    pub fn pending_reminders(&self) -> usize {
        self.reminders.len()
    }

    fn event_mut(&mut self, id: EventId) -> StoreResult<&mut Event> {
        self.events.get_mut(&id).ok_or(StoreError::EventNotFound(id))
    }
}
