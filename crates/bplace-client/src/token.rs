//! Paint token source.
//!
//! The wire payload carries a `t` field reserved for bot-detection
//! tokens. This deployment performs no token computation and accepts a
//! fixed placeholder, but the slot is kept behind a trait so a deployment
//! that does require one can plug in a real source.

use std::sync::Arc;

/// Supplies the value of the `t` field in paint payloads.
pub trait TokenSource: Send + Sync {
    fn paint_token(&self) -> &str;
}

/// A fixed token value.
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The placeholder this deployment accepts.
    pub fn skip() -> Arc<dyn TokenSource> {
        Arc::new(Self::new("skip"))
    }
}

impl TokenSource for StaticToken {
    fn paint_token(&self) -> &str {
        &self.0
    }
}
