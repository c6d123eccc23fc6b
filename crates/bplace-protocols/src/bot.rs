//! Bot registration interface.
//!
//! Bots are selected by a type tag and registered as trait objects. The
//! registry never fetches or executes code over the network - a bot is a
//! compiled-in implementation of [`Bot`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::BotError;
use crate::types::PaintSummary;

/// Type tag identifying a bot implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotKind {
    /// Paints throwaway pixels to spend charges.
    Farm,
    /// Paints an image from a precomputed batch plan.
    Image,
    /// Watches a region and repairs overwritten pixels.
    Guard,
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Farm => write!(f, "farm"),
            Self::Image => write!(f, "image"),
            Self::Guard => write!(f, "guard"),
        }
    }
}

impl FromStr for BotKind {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "farm" => Ok(Self::Farm),
            "image" => Ok(Self::Image),
            "guard" => Ok(Self::Guard),
            other => Err(BotError::UnknownKind(other.to_string())),
        }
    }
}

/// An automation routine driving the paint client.
#[async_trait]
pub trait Bot: Send + Sync {
    /// The type tag this bot is registered under.
    fn kind(&self) -> BotKind;

    /// One-line human-readable description.
    fn describe(&self) -> &str;

    /// Run the bot to completion.
    async fn run(&self) -> Result<PaintSummary, BotError>;
}

/// Registry mapping type tags to bot implementations.
#[derive(Default)]
pub struct BotRegistry {
    bots: HashMap<BotKind, Arc<dyn Bot>>,
}

impl BotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bot under its own kind. Double registration is an error.
    pub fn register(&mut self, bot: Arc<dyn Bot>) -> Result<(), BotError> {
        let kind = bot.kind();
        if self.bots.contains_key(&kind) {
            return Err(BotError::AlreadyRegistered(kind));
        }
        self.bots.insert(kind, bot);
        Ok(())
    }

    pub fn get(&self, kind: BotKind) -> Option<Arc<dyn Bot>> {
        self.bots.get(&kind).cloned()
    }

    /// Resolve a raw type tag to a registered bot.
    pub fn resolve(&self, tag: &str) -> Result<Arc<dyn Bot>, BotError> {
        let kind = tag.parse::<BotKind>()?;
        self.get(kind).ok_or(BotError::NotRegistered(kind))
    }

    pub fn kinds(&self) -> Vec<BotKind> {
        self.bots.keys().copied().collect()
    }
}

#[cfg(test)]
#[path = "bot_tests.rs"]
mod tests;
