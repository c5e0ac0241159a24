//! Outbound client for the external data store's REST interface.
//!
//! Every operation is a single stateless HTTP call: `select=*` list reads,
//! inserts with `Prefer: return=representation` so the created row is
//! echoed back, `PATCH`/`DELETE` keyed by `id=eq.<id>`. Nothing is retried
//! and nothing is cached.

pub mod clients;
pub mod forms;
pub mod payments;
pub mod portals;
pub mod projects;
pub mod tracking;

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The outbound call itself failed (DNS, connect, body read).
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store rejected the request ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    /// Nominal success but the response did not contain the expected
    /// echoed record.
    #[error("store response did not echo a record")]
    Shape,
}

pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl StoreClient {
    pub fn new(base_url: &str, service_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn row_url(&self, table: &str, id: &str) -> String {
        format!("{}/rest/v1/{}?id=eq.{}", self.base_url, table, id)
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    /// Fetch the full collection of a table, verbatim.
    pub async fn list<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, StoreError> {
        let url = format!("{}?select=*", self.table_url(table));
        let response = self.authed(self.http.get(url)).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Insert a normalized payload and return the echoed row.
    pub async fn insert<T: DeserializeOwned>(
        &self,
        table: &str,
        payload: &serde_json::Value,
    ) -> Result<T, StoreError> {
        let response = self
            .authed(self.http.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(payload)
            .send()
            .await?;
        let response = check_status(response).await?;
        extract_echoed(response.json().await?)
    }

    /// Overwrite the row with the given id and return the echoed result.
    pub async fn update<T: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
        payload: &serde_json::Value,
    ) -> Result<T, StoreError> {
        let response = self
            .authed(self.http.patch(self.row_url(table, id)))
            .header("Prefer", "return=representation")
            .json(payload)
            .send()
            .await?;
        let response = check_status(response).await?;
        extract_echoed(response.json().await?)
    }

    /// Delete by id. Success is the store acknowledging; no body expected.
    pub async fn delete(&self, table: &str, id: &str) -> Result<(), StoreError> {
        let response = self.authed(self.http.delete(self.row_url(table, id))).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let detail = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "no detail".to_string());

    Err(StoreError::Rejected { status, detail })
}

/// The store echoes inserted/updated rows as a one-element array. Anything
/// else counts as a shape failure, even on a 2xx status.
fn extract_echoed<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, StoreError> {
    match body {
        serde_json::Value::Array(mut rows) if !rows.is_empty() => {
            serde_json::from_value(rows.remove(0)).map_err(|_| StoreError::Shape)
        }
        _ => Err(StoreError::Shape),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared_types::Client;

    #[test]
    fn test_urls_follow_rest_conventions() {
        let store = StoreClient::new("https://db.example.com/", "key");

        assert_eq!(store.table_url("clients"), "https://db.example.com/rest/v1/clients");
        assert_eq!(
            store.row_url("clients", "u1"),
            "https://db.example.com/rest/v1/clients?id=eq.u1"
        );
    }

    #[test]
    fn test_extract_echoed_takes_first_row() {
        let body = json!([
            {"id": "u1", "name": "Acme", "contact": null, "email": "a@x.com", "created_at": "2024-01-01"}
        ]);

        let client: Client = extract_echoed(body).unwrap();
        assert_eq!(client.id, "u1");
        assert_eq!(client.contact, None);
    }

    #[test]
    fn test_extract_echoed_rejects_empty_array() {
        let result: Result<Client, _> = extract_echoed(json!([]));
        assert!(matches!(result, Err(StoreError::Shape)));
    }

    #[test]
    fn test_extract_echoed_rejects_non_array() {
        // e.g. a PostgREST error object that slipped through with a 2xx
        let result: Result<Client, _> = extract_echoed(json!({"message": "oops"}));
        assert!(matches!(result, Err(StoreError::Shape)));

        let result: Result<Client, _> = extract_echoed(json!(null));
        assert!(matches!(result, Err(StoreError::Shape)));
    }

    #[test]
    fn test_extract_echoed_rejects_malformed_row() {
        // missing required `id`
        let result: Result<Client, _> = extract_echoed(json!([{"name": "Acme"}]));
        assert!(matches!(result, Err(StoreError::Shape)));
    }
}
