use serde_json::json;
use shared_types::{CreatePortalRequest, Portal, UpdatePortalRequest};

use super::{StoreClient, StoreError};
use crate::normalize::{opt_text, require_text, NormalizeError};

const TABLE: &str = "portals";

/// `credentials` arrives already parsed as JSON; the console rejects
/// malformed text before it gets here, so the proxy just passes it through.
pub fn create_payload(req: &CreatePortalRequest) -> Result<serde_json::Value, NormalizeError> {
    let name = require_text(&req.name, "name")?;
    let link = require_text(&req.link, "link")?;

    Ok(json!({
        "name": name,
        "link": link,
        "credentials": req.credentials,
        "notes": opt_text(&req.notes),
    }))
}

pub fn update_payload(req: &UpdatePortalRequest) -> serde_json::Value {
    json!({
        "name": opt_text(&req.name),
        "link": opt_text(&req.link),
        "credentials": req.credentials,
        "notes": opt_text(&req.notes),
    })
}

pub async fn list_portals(store: &StoreClient) -> Result<Vec<Portal>, StoreError> {
    store.list(TABLE).await
}

pub async fn insert_portal(
    store: &StoreClient,
    payload: &serde_json::Value,
) -> Result<Portal, StoreError> {
    store.insert(TABLE, payload).await
}

pub async fn update_portal(
    store: &StoreClient,
    id: &str,
    payload: &serde_json::Value,
) -> Result<Portal, StoreError> {
    store.update(TABLE, id, payload).await
}

pub async fn delete_portal(store: &StoreClient, id: &str) -> Result<(), StoreError> {
    store.delete(TABLE, id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_passes_credentials_through() {
        let req = CreatePortalRequest {
            name: Some("Billing portal".to_string()),
            link: Some("https://portal.example.com".to_string()),
            credentials: Some(json!({"user": "a", "pass": "b"})),
            notes: None,
        };

        let payload = create_payload(&req).unwrap();
        assert_eq!(payload["credentials"]["user"], "a");
        assert_eq!(payload["credentials"]["pass"], "b");
    }

    #[test]
    fn test_create_payload_requires_name_and_link() {
        let req = CreatePortalRequest {
            name: Some("Billing portal".to_string()),
            link: None,
            credentials: None,
            notes: None,
        };

        assert_eq!(create_payload(&req), Err(NormalizeError::MissingField("link")));
    }
}
