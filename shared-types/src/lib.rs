use serde::{Deserialize, Serialize};

pub mod auth;
pub mod client;
pub mod form;
pub mod payment;
pub mod portal;
pub mod project;
pub mod tracking;

pub use auth::{LoginRequest, LoginResponse};
pub use client::{Client, ClientsResponse, CreateClientRequest, UpdateClientRequest};
pub use form::{CreateFormRequest, Form, FormsResponse, UpdateFormRequest};
pub use payment::{CreatePaymentRequest, Payment, PaymentsResponse, UpdatePaymentRequest};
pub use portal::{CreatePortalRequest, Portal, PortalsResponse, UpdatePortalRequest};
pub use project::{CreateProjectRequest, Project, ProjectsResponse, UpdateProjectRequest};
pub use tracking::{CreateTrackingRequest, TrackingEntriesResponse, TrackingEntry};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response for delete operations, which echo no record
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}
