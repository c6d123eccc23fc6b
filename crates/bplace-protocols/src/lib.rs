//! # bPlace Protocols
//!
//! Shared definitions for the bplace-bot workspace: the paint-batch data
//! model, classified submission outcomes, and the bot-registration
//! interface. Contains no I/O - the HTTP side lives in `bplace-client`.

pub mod bot;
pub mod error;
pub mod types;

pub use bot::{Bot, BotKind, BotRegistry};
pub use error::BotError;
pub use types::{BatchOutcome, PaintBatch, PaintSummary, SubmitOutcome};
