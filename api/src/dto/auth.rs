//! Verification protocol request/response bodies
//!
//! Field names follow the wire contract (camelCase). Request fields are
//! optional so a missing field reaches the service as an empty value and is
//! reported through the protocol's own error taxonomy rather than as a
//! deserialization failure.

use serde::{Deserialize, Serialize};

/// Request body for POST /start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartRequest {
    /// Phone number in E.164-like format, e.g. "+15555555555"
    #[serde(default)]
    pub phone: Option<String>,
}

/// Response body for a successful POST /start
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    /// Opaque identifier of the pending verification session
    pub session_id: String,
    /// Session lifetime in seconds
    pub ttl: i64,
}

/// Request body for POST /verify
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub otp: Option<String>,
}

/// Response body for a successful POST /verify
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    /// Bearer token unlocking guarded content
    pub access_token: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

/// Response body for a successful GET /guard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardResponse {
    pub ok: bool,
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
