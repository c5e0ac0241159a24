use serde_json::json;
use shared_types::{Client, CreateClientRequest, UpdateClientRequest};

use super::{StoreClient, StoreError};
use crate::normalize::{opt_text, require_text, NormalizeError};

const TABLE: &str = "clients";

/// Canonical insert payload: trimmed values or explicit nulls, never
/// missing keys. Fails before any outbound call if `name` is absent.
pub fn create_payload(req: &CreateClientRequest) -> Result<serde_json::Value, NormalizeError> {
    let name = require_text(&req.name, "name")?;

    Ok(json!({
        "name": name,
        "contact": opt_text(&req.contact),
        "email": opt_text(&req.email),
    }))
}

/// Update resubmits the whole record; required fields are not re-checked
/// here, matching create-time-only validation.
pub fn update_payload(req: &UpdateClientRequest) -> serde_json::Value {
    json!({
        "name": opt_text(&req.name),
        "contact": opt_text(&req.contact),
        "email": opt_text(&req.email),
    })
}

pub async fn list_clients(store: &StoreClient) -> Result<Vec<Client>, StoreError> {
    store.list(TABLE).await
}

pub async fn insert_client(
    store: &StoreClient,
    payload: &serde_json::Value,
) -> Result<Client, StoreError> {
    store.insert(TABLE, payload).await
}

pub async fn update_client(
    store: &StoreClient,
    id: &str,
    payload: &serde_json::Value,
) -> Result<Client, StoreError> {
    store.update(TABLE, id, payload).await
}

pub async fn delete_client(store: &StoreClient, id: &str) -> Result<(), StoreError> {
    store.delete(TABLE, id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_normalizes_blank_optionals() {
        let req = CreateClientRequest {
            name: Some("  Acme  ".to_string()),
            contact: Some("".to_string()),
            email: Some("a@x.com".to_string()),
        };

        let payload = create_payload(&req).unwrap();
        assert_eq!(payload["name"], "Acme");
        assert!(payload["contact"].is_null());
        assert_eq!(payload["email"], "a@x.com");
    }

    #[test]
    fn test_create_payload_requires_name() {
        let req = CreateClientRequest {
            name: Some("   ".to_string()),
            contact: None,
            email: None,
        };

        assert_eq!(create_payload(&req), Err(NormalizeError::MissingField("name")));
    }
}
