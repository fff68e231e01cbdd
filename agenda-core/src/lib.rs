//! Core types for agenda.
//!
//! - [`EventStore`] owns every event and the reminder queue
//! - [`Event`] / [`EventId`] describe a single scheduled event
//! - [`ReminderQueue`] holds date-ordered reminder snapshots
//! - [`AgendaConfig`] is the user configuration shared with the CLI

pub mod config;
pub mod error;
pub mod event;
pub mod reminder;
pub mod store;

pub use config::AgendaConfig;
pub use error::{AgendaError, AgendaResult, StoreError, StoreResult};
pub use event::{Event, EventId};
pub use reminder::{Reminder, ReminderQueue};
pub use store::EventStore;
