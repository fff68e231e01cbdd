//! Error types for agenda operations.

use thiserror::Error;

use crate::event::EventId;

/// Outcomes of a rejected store operation.
///
/// None of these are fatal: the store is left untouched whenever one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("Participant '{participant}' not found in event {id}")]
    ParticipantNotFound { id: EventId, participant: String },

    #[error("Event already exists at {date} {time}")]
    Conflict { date: String, time: String },
}

/// Errors outside the store, currently only from loading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgendaError {
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for event store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
