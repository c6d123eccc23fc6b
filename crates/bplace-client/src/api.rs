//! Wire types for the bPlace HTTP API.

use serde::Serialize;

/// Body of `POST /s0/pixel/{tileX}/{tileY}`.
///
/// Serialized as JSON but sent with `Content-Type: text/plain;charset=UTF-8`;
/// the upstream API expects that mismatch and the client must preserve it.
#[derive(Debug, Serialize)]
pub struct PaintRequest<'a> {
    pub colors: &'a [i32],
    pub coords: &'a [u16],
    /// Bot-detection token slot. Fixed placeholder on this deployment.
    pub t: &'a str,
}

/// Body of `POST /purchase`.
#[derive(Debug, Serialize)]
pub struct PurchaseRequest {
    pub product: ProductOrder,
}

#[derive(Debug, Serialize)]
pub struct ProductOrder {
    pub id: u32,
    pub amount: u32,
}
