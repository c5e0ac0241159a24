use serde_json::json;
use shared_types::{CreateFormRequest, Form, UpdateFormRequest};

use super::{StoreClient, StoreError};
use crate::normalize::{opt_text, require_text, NormalizeError};

const TABLE: &str = "forms";

pub fn create_payload(req: &CreateFormRequest) -> Result<serde_json::Value, NormalizeError> {
    let name = require_text(&req.name, "name")?;
    let link = require_text(&req.link, "link")?;

    Ok(json!({
        "name": name,
        "link": link,
        "excel_link": opt_text(&req.excel_link),
        "notes": opt_text(&req.notes),
    }))
}

pub fn update_payload(req: &UpdateFormRequest) -> serde_json::Value {
    json!({
        "name": opt_text(&req.name),
        "link": opt_text(&req.link),
        "excel_link": opt_text(&req.excel_link),
        "notes": opt_text(&req.notes),
    })
}

pub async fn list_forms(store: &StoreClient) -> Result<Vec<Form>, StoreError> {
    store.list(TABLE).await
}

pub async fn insert_form(
    store: &StoreClient,
    payload: &serde_json::Value,
) -> Result<Form, StoreError> {
    store.insert(TABLE, payload).await
}

pub async fn update_form(
    store: &StoreClient,
    id: &str,
    payload: &serde_json::Value,
) -> Result<Form, StoreError> {
    store.update(TABLE, id, payload).await
}

pub async fn delete_form(store: &StoreClient, id: &str) -> Result<(), StoreError> {
    store.delete(TABLE, id).await
}
