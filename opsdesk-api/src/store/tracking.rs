use serde_json::json;
use shared_types::{CreateTrackingRequest, TrackingEntry};

use super::{StoreClient, StoreError};
use crate::normalize::{require_text, NormalizeError};

const TABLE: &str = "tracking";

pub fn create_payload(req: &CreateTrackingRequest) -> Result<serde_json::Value, NormalizeError> {
    let entity_type = require_text(&req.entity_type, "entity_type")?;
    let entity_id = require_text(&req.entity_id, "entity_id")?;
    let action = require_text(&req.action, "action")?;

    Ok(json!({
        "entity_type": entity_type,
        "entity_id": entity_id,
        "action": action,
        "details": req.details,
    }))
}

pub async fn list_entries(store: &StoreClient) -> Result<Vec<TrackingEntry>, StoreError> {
    store.list(TABLE).await
}

pub async fn insert_entry(
    store: &StoreClient,
    payload: &serde_json::Value,
) -> Result<TrackingEntry, StoreError> {
    store.insert(TABLE, payload).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_requires_all_three_fields() {
        let req = CreateTrackingRequest {
            entity_type: Some("client".to_string()),
            entity_id: Some("u1".to_string()),
            action: None,
            details: None,
        };

        assert_eq!(create_payload(&req), Err(NormalizeError::MissingField("action")));
    }

    #[test]
    fn test_create_payload_keeps_details_json() {
        let req = CreateTrackingRequest {
            entity_type: Some("client".to_string()),
            entity_id: Some("u1".to_string()),
            action: Some("created".to_string()),
            details: Some(json!({"field": "value"})),
        };

        let payload = create_payload(&req).unwrap();
        assert_eq!(payload["details"]["field"], "value");
    }
}
