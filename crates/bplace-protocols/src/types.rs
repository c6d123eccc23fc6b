//! Paint data model and classified submission outcomes.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A set of pixel paint operations destined for a single tile.
///
/// `coords` and `colors` are kept as raw JSON values: the upstream
/// planning step emits coordinates in one of three shapes (flat numbers,
/// `{x,y}` records, `[x,y]` pairs) and the client normalizes them to the
/// wire format right before dispatch. The `coords.len() / 2 ==
/// colors.len()`, non-empty invariant is enforced there - a batch that
/// fails it is rejected with a synthetic 400 before any network call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaintBatch {
    #[serde(alias = "tileX")]
    pub tile_x: i32,
    #[serde(alias = "tileY")]
    pub tile_y: i32,
    pub coords: Value,
    pub colors: Value,
}

/// Classified result of a single paint submission.
///
/// Every failure mode is folded into this shape - nothing is thrown past
/// the submitter boundary. `status` is 0 when no response was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub status: u16,
    pub body: Value,
    pub success: bool,
}

impl SubmitOutcome {
    /// Malformed or mismatched coordinate/color input. No request is made.
    pub fn rejected() -> Self {
        Self {
            status: 400,
            body: json!({"error": "Invalid coords/colors format"}),
            success: false,
        }
    }

    /// HTTP 403: the session cookie is missing, stale or lacks permission.
    pub fn forbidden() -> Self {
        Self {
            status: 403,
            body: json!({"error": "Forbidden - check session"}),
            success: false,
        }
    }

    /// The client-side deadline elapsed before a response arrived.
    pub fn timeout() -> Self {
        Self {
            status: 408,
            body: json!({"error": "Request timeout"}),
            success: false,
        }
    }

    /// Any other transport failure. Status 0 marks "no response received".
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            body: json!({"error": message.into()}),
            success: false,
        }
    }
}

/// Result of a batch submission: a [`SubmitOutcome`] plus the number of
/// pixels the server confirmed. A 200 response may paint fewer pixels
/// than were submitted, so `painted` is reported separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub status: u16,
    pub body: Value,
    pub success: bool,
    pub painted: u64,
}

impl From<SubmitOutcome> for BatchOutcome {
    fn from(outcome: SubmitOutcome) -> Self {
        let painted = outcome.body.get("painted").and_then(Value::as_u64).unwrap_or(0);
        Self {
            status: outcome.status,
            body: outcome.body,
            success: outcome.success,
            painted,
        }
    }
}

/// Aggregate of a sequential batch-loop run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintSummary {
    pub painted: u64,
    pub tiles_ok: usize,
    pub tiles_failed: usize,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
