use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Project entity. `client_id` is a soft foreign key: the proxy forwards
/// whatever identifier it is given and the store does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client_id: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
}

/// Request to create a new project
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub client_id: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
}

/// Request to update a project
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub client_id: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
}

/// Response containing a list of projects
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}
