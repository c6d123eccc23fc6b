//! # bPlace Client
//!
//! HTTP client for the bPlace pixel canvas. The core is the pixel
//! submission pipeline: coordinate/color normalization ([`coords`]),
//! per-tile request dispatch with timeout and error classification
//! ([`client`]), and the sequential batch loop ([`painter`]).
//!
//! Authentication is cookie-based; the `t` token field in the wire
//! payload is a fixed placeholder on this deployment (see [`token`]).

pub mod api;
pub mod client;
pub mod coords;
pub mod painter;
pub mod session;
pub mod token;

pub use client::PaintClient;
pub use coords::CoordInput;
pub use painter::paint_batches;
pub use session::{HealthInfo, HealthStatus, SessionInfo};
pub use token::{StaticToken, TokenSource};
