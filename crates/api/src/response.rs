//! Shared response envelope types for API handlers.
//!
//! All API responses wrap their payload in `{ "data": ... }`. Use
//! [`DataResponse`] instead of ad-hoc `serde_json::json!` so the payload
//! type stays checked at compile time.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
