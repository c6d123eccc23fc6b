//! Pixel submitter.
//!
//! Builds the wire payload from normalized coordinates/colors, POSTs it
//! to the per-tile paint endpoint and classifies the outcome. Every
//! failure mode comes back as a [`SubmitOutcome`] - callers never need
//! exception handling, and this layer never retries.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue};
use serde_json::{Value, json};
use tracing::{debug, error, warn};

use bplace_protocols::types::{BatchOutcome, SubmitOutcome};

use crate::api::PaintRequest;
use crate::coords;
use crate::token::{StaticToken, TokenSource};

pub const DEFAULT_BASE_URL: &str = "https://bplace.org";

/// The upstream API expects JSON text under a non-JSON content type.
pub(crate) const PAINT_CONTENT_TYPE: &str = "text/plain;charset=UTF-8";

/// Deadline for the single-pixel path. The batch path runs unbounded.
const PIXEL_DEADLINE: Duration = Duration::from_secs(20);

/// Client for the bPlace paint, session and health endpoints.
///
/// Holds no mutable state between calls; session auth lives in the
/// cookie jar (and an optional fixed `Cookie` header standing in for a
/// browser session).
pub struct PaintClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    token: Arc<dyn TokenSource>,
    pixel_deadline: Duration,
}

impl PaintClient {
    pub fn new(session_cookie: Option<&str>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, session_cookie)
    }

    pub fn with_base_url(base_url: impl Into<String>, session_cookie: Option<&str>) -> Self {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = session_cookie {
            match HeaderValue::from_str(cookie) {
                Ok(value) => {
                    headers.insert(COOKIE, value);
                }
                Err(_) => warn!("session cookie contains invalid header characters; ignoring"),
            }
        }
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .user_agent("bplace-bot/0.1")
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            token: StaticToken::skip(),
            pixel_deadline: PIXEL_DEADLINE,
        }
    }

    /// Replace the `t` token source.
    pub fn with_token_source(mut self, token: Arc<dyn TokenSource>) -> Self {
        self.token = token;
        self
    }

    /// Override the single-pixel deadline.
    pub fn with_pixel_deadline(mut self, deadline: Duration) -> Self {
        self.pixel_deadline = deadline;
        self
    }

    /// Submit pixels on the latency-sensitive single/manual path.
    ///
    /// Inputs are normalized first; a mismatched or empty batch is
    /// rejected with a synthetic 400 before any network call. The request
    /// carries a 20-second deadline.
    pub async fn post_pixel(
        &self,
        coords_input: &Value,
        colors_input: &Value,
        tile_x: i32,
        tile_y: i32,
    ) -> SubmitOutcome {
        self.dispatch(tile_x, tile_y, coords_input, colors_input, Some(self.pixel_deadline))
            .await
    }

    /// Submit a batch on the automated paint path.
    ///
    /// Same validation and classification as [`post_pixel`](Self::post_pixel)
    /// but with no deadline (large runs favor uninterrupted completion),
    /// and the server-confirmed `painted` count is extracted for progress
    /// reporting.
    pub async fn post_pixel_batch(
        &self,
        tile_x: i32,
        tile_y: i32,
        coords_input: &Value,
        colors_input: &Value,
    ) -> BatchOutcome {
        self.dispatch(tile_x, tile_y, coords_input, colors_input, None)
            .await
            .into()
    }

    async fn dispatch(
        &self,
        tile_x: i32,
        tile_y: i32,
        coords_input: &Value,
        colors_input: &Value,
        deadline: Option<Duration>,
    ) -> SubmitOutcome {
        let (coords_norm, colors_norm) = coords::normalize(coords_input, colors_input);
        if coords_norm.is_empty()
            || colors_norm.is_empty()
            || coords_norm.len() != colors_norm.len() * 2
        {
            warn!(
                tile_x,
                tile_y,
                pairs = coords_norm.len() / 2,
                colors = colors_norm.len(),
                "invalid coords/colors for paint request"
            );
            return SubmitOutcome::rejected();
        }

        let request = PaintRequest {
            colors: &colors_norm,
            coords: &coords_norm,
            t: self.token.paint_token(),
        };
        let body = match serde_json::to_string(&request) {
            Ok(body) => body,
            Err(e) => return SubmitOutcome::network(e.to_string()),
        };

        debug!(tile_x, tile_y, pixels = colors_norm.len(), "sending paint request");
        let url = format!("{}/s0/pixel/{tile_x}/{tile_y}", self.base_url);
        let mut builder = self
            .http
            .post(url)
            .header(CONTENT_TYPE, PAINT_CONTENT_TYPE)
            .body(body);
        if let Some(deadline) = deadline {
            builder = builder.timeout(deadline);
        }

        match builder.send().await {
            Ok(response) => self.classify(response).await,
            Err(e) if e.is_timeout() => {
                warn!(tile_x, tile_y, "paint request timed out");
                SubmitOutcome::timeout()
            }
            Err(e) => {
                warn!(tile_x, tile_y, error = %e, "paint request failed");
                SubmitOutcome::network(e.to_string())
            }
        }
    }

    /// Classify a response into the outcome taxonomy. A malformed or
    /// absent JSON body never propagates; it parses to an empty object.
    pub(crate) async fn classify(&self, response: reqwest::Response) -> SubmitOutcome {
        let status = response.status();

        if status == StatusCode::FORBIDDEN {
            // Drain the body; the classification is fixed regardless of content.
            let _ = response.text().await;
            error!("403 Forbidden from paint endpoint - check session");
            return SubmitOutcome::forbidden();
        }

        if (500..=504).contains(&status.as_u16()) {
            error!(status = status.as_u16(), "server error from paint endpoint");
        }

        let success = status.is_success();
        let body = match response.text().await {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|_| json!({})),
            Err(_) => json!({}),
        };
        SubmitOutcome {
            status: status.as_u16(),
            body,
            success,
        }
    }
}

impl Default for PaintClient {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
