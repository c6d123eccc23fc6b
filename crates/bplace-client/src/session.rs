//! Session state, server health and charge purchases.
//!
//! Thin wrappers over `GET /me`, `GET /health` and `POST /purchase`.
//! Like the submitter, these return structured results instead of
//! erroring: a dead connection yields a logged-out/offline shape with
//! the server's documented defaults filled in.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::{Value, json};

use bplace_protocols::types::SubmitOutcome;

use crate::api::{ProductOrder, PurchaseRequest};
use crate::client::{PAINT_CONTENT_TYPE, PaintClient};

const DEFAULT_CHARGE_REGEN_MS: u64 = 30_000;
const PURCHASE_DEADLINE: Duration = Duration::from_secs(15);

/// Account state reported by `GET /me`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub success: bool,
    pub user: Value,
    pub charges: u64,
    pub max_charges: u64,
    pub charge_regen_ms: u64,
    pub droplets: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SessionInfo {
    fn logged_out(error: String) -> Self {
        Self {
            success: false,
            user: Value::Null,
            charges: 0,
            max_charges: 0,
            charge_regen_ms: DEFAULT_CHARGE_REGEN_MS,
            droplets: 0,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Online,
    Error,
    Offline,
}

/// Server state reported by `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthInfo {
    pub database: bool,
    pub up: bool,
    pub uptime: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub last_check: DateTime<Utc>,
}

impl HealthInfo {
    fn down(status: HealthStatus, status_code: Option<u16>, error: Option<String>) -> Self {
        Self {
            database: false,
            up: false,
            uptime: "N/A".to_string(),
            status,
            status_code,
            error,
            last_check: Utc::now(),
        }
    }
}

impl PaintClient {
    /// Fetch account/session state. Absent fields fall back to the
    /// server's documented defaults (30 s charge cooldown, zero counts).
    pub async fn get_session(&self) -> SessionInfo {
        let result = self.http.get(format!("{}/me", self.base_url)).send().await;
        let me: Value = match result {
            Ok(response) => match response.json().await {
                Ok(body) => body,
                Err(e) => return SessionInfo::logged_out(e.to_string()),
            },
            Err(e) => return SessionInfo::logged_out(e.to_string()),
        };

        let charges = (me["charges"]["count"].as_f64().unwrap_or(0.0)) as u64;
        let max_charges = (me["charges"]["max"].as_f64().unwrap_or(0.0)) as u64;
        let charge_regen_ms = me["charges"]["cooldownMs"]
            .as_u64()
            .unwrap_or(DEFAULT_CHARGE_REGEN_MS);
        let droplets = me["droplets"].as_i64().unwrap_or(0);

        SessionInfo {
            success: true,
            user: me,
            charges,
            max_charges,
            charge_regen_ms,
            droplets,
            error: None,
        }
    }

    /// Probe `GET /health`. A non-2xx response reports `error` with the
    /// status code; a transport failure reports `offline`.
    pub async fn check_health(&self) -> HealthInfo {
        let result = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await;
        match result {
            Ok(response) if response.status().is_success() => {
                match response.json::<Value>().await {
                    Ok(body) => HealthInfo {
                        database: body["database"].as_bool().unwrap_or(false),
                        up: body["up"].as_bool().unwrap_or(false),
                        uptime: body["uptime"].as_str().unwrap_or("N/A").to_string(),
                        status: HealthStatus::Online,
                        status_code: None,
                        error: None,
                        last_check: Utc::now(),
                    },
                    Err(e) => HealthInfo::down(HealthStatus::Offline, None, Some(e.to_string())),
                }
            }
            Ok(response) => HealthInfo::down(
                HealthStatus::Error,
                Some(response.status().as_u16()),
                None,
            ),
            Err(e) => HealthInfo::down(HealthStatus::Offline, None, Some(e.to_string())),
        }
    }

    /// Buy a product (e.g. +5 max charges). Same text/plain body quirk as
    /// the paint endpoint, 15-second deadline. This endpoint does not get
    /// a distinct timeout status; any transport failure classifies as 0.
    pub async fn purchase_product(&self, product_id: u32, amount: u32) -> SubmitOutcome {
        let request = PurchaseRequest {
            product: ProductOrder {
                id: product_id,
                amount,
            },
        };
        let body = match serde_json::to_string(&request) {
            Ok(body) => body,
            Err(e) => return SubmitOutcome::network(e.to_string()),
        };

        let result = self
            .http
            .post(format!("{}/purchase", self.base_url))
            .header(CONTENT_TYPE, PAINT_CONTENT_TYPE)
            .timeout(PURCHASE_DEADLINE)
            .body(body)
            .send()
            .await;
        match result {
            Ok(response) => {
                let status = response.status();
                let success = status.is_success();
                let body = response
                    .json::<Value>()
                    .await
                    .unwrap_or_else(|_| json!({}));
                SubmitOutcome {
                    status: status.as_u16(),
                    body,
                    success,
                }
            }
            Err(e) => SubmitOutcome::network(e.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
