use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Request to open a session
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Session token returned on successful login. The token must be sent as
/// `Authorization: Bearer <token>` on every resource request.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: String,
}
