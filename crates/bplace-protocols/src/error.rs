//! Bot orchestration errors.
//!
//! Submission failures are never surfaced as `Err` values - the client
//! returns classified [`SubmitOutcome`](crate::types::SubmitOutcome)s so
//! callers can decide whether to stop, wait or retry. `BotError` only
//! covers the orchestration layer around the core: registry lookups and
//! paint-plan loading.

use thiserror::Error;

use crate::bot::BotKind;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Unknown bot kind: {0}")]
    UnknownKind(String),

    #[error("Bot already registered: {0}")]
    AlreadyRegistered(BotKind),

    #[error("No bot registered for kind: {0}")]
    NotRegistered(BotKind),

    #[error("Invalid paint plan: {0}")]
    InvalidPlan(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Bot run failed: {0}")]
    RunFailed(String),
}
