use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Portal entity. `credentials` holds arbitrary JSON entered as free text
/// in the console and parsed before it ever reaches the proxy.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Portal {
    pub id: String,
    pub name: String,
    pub link: String,
    #[ts(skip)]
    pub credentials: Option<serde_json::Value>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

/// Request to create a new portal
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreatePortalRequest {
    pub name: Option<String>,
    pub link: Option<String>,
    #[ts(skip)]
    pub credentials: Option<serde_json::Value>,
    pub notes: Option<String>,
}

/// Request to update a portal
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpdatePortalRequest {
    pub name: Option<String>,
    pub link: Option<String>,
    #[ts(skip)]
    pub credentials: Option<serde_json::Value>,
    pub notes: Option<String>,
}

/// Response containing a list of portals
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PortalsResponse {
    pub portals: Vec<Portal>,
}
