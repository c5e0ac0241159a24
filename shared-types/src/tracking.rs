use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Activity-tracking entry. Append-mostly: the API exposes list and create
/// only, never update or delete.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrackingEntry {
    pub id: String,
    pub entity_type: String,
    pub entity_id: String,
    pub action: String,
    #[ts(skip)]
    pub details: Option<serde_json::Value>,
    pub timestamp: Option<String>,
}

/// Request to append a tracking entry
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateTrackingRequest {
    pub entity_type: Option<String>,
    pub entity_id: Option<String>,
    pub action: Option<String>,
    #[ts(skip)]
    pub details: Option<serde_json::Value>,
}

/// Response containing the tracking log
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrackingEntriesResponse {
    pub entries: Vec<TrackingEntry>,
}
