use serde_json::json;
use shared_types::{CreateProjectRequest, Project, UpdateProjectRequest};

use super::{StoreClient, StoreError};
use crate::normalize::{opt_text, require_text, NormalizeError};

const TABLE: &str = "projects";

/// `client_id` is forwarded as-is after trimming; the store does not
/// enforce the reference.
pub fn create_payload(req: &CreateProjectRequest) -> Result<serde_json::Value, NormalizeError> {
    let name = require_text(&req.name, "name")?;

    Ok(json!({
        "name": name,
        "client_id": opt_text(&req.client_id),
        "status": opt_text(&req.status),
        "description": opt_text(&req.description),
    }))
}

pub fn update_payload(req: &UpdateProjectRequest) -> serde_json::Value {
    json!({
        "name": opt_text(&req.name),
        "client_id": opt_text(&req.client_id),
        "status": opt_text(&req.status),
        "description": opt_text(&req.description),
    })
}

pub async fn list_projects(store: &StoreClient) -> Result<Vec<Project>, StoreError> {
    store.list(TABLE).await
}

pub async fn insert_project(
    store: &StoreClient,
    payload: &serde_json::Value,
) -> Result<Project, StoreError> {
    store.insert(TABLE, payload).await
}

pub async fn update_project(
    store: &StoreClient,
    id: &str,
    payload: &serde_json::Value,
) -> Result<Project, StoreError> {
    store.update(TABLE, id, payload).await
}

pub async fn delete_project(store: &StoreClient, id: &str) -> Result<(), StoreError> {
    store.delete(TABLE, id).await
}
