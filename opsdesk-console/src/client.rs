//! HTTP client for the opsdesk API. One request per operation, no retries;
//! the session token from `login` rides along as a bearer header on every
//! subsequent call.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use shared_types::{
    Client, ClientsResponse, CreateClientRequest, CreateFormRequest, CreatePaymentRequest,
    CreatePortalRequest, CreateProjectRequest, CreateTrackingRequest, DeleteResponse,
    ErrorResponse, Form, FormsResponse, LoginRequest, LoginResponse, Payment, PaymentsResponse,
    Portal, PortalsResponse, Project, ProjectsResponse, TrackingEntriesResponse, TrackingEntry,
    UpdateClientRequest, UpdateFormRequest, UpdatePaymentRequest, UpdatePortalRequest,
    UpdateProjectRequest,
};

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The request itself failed (network, connect).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with an `{error}` envelope.
    #[error("{0}")]
    Api(String),

    /// A success status with a body that does not parse.
    #[error("unexpected response shape")]
    Shape,

    /// No session: `login` has not been called (or was logged out).
    #[error("not logged in")]
    NoSession,
}

pub struct ConsoleClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ConsoleClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn has_session(&self) -> bool {
        self.token.is_some()
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ConsoleError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&request)
            .send()
            .await?;
        let login: LoginResponse = read_body(response).await?;

        self.token = Some(login.token);
        Ok(())
    }

    pub async fn logout(&mut self) -> Result<(), ConsoleError> {
        let token = self.token.take().ok_or(ConsoleError::NoSession)?;

        let response = self
            .http
            .post(format!("{}/api/auth/logout", self.base_url))
            .bearer_auth(&token)
            .send()
            .await?;
        let _: DeleteResponse = read_body(response).await?;
        Ok(())
    }

    fn bearer(&self) -> Result<&str, ConsoleError> {
        self.token.as_deref().ok_or(ConsoleError::NoSession)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ConsoleError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        read_body(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ConsoleError> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(self.bearer()?)
            .json(body)
            .send()
            .await?;
        read_body(response).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ConsoleError> {
        let response = self
            .http
            .put(format!("{}{}", self.base_url, path))
            .bearer_auth(self.bearer()?)
            .json(body)
            .send()
            .await?;
        read_body(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ConsoleError> {
        let response = self
            .http
            .delete(format!("{}{}", self.base_url, path))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let _: DeleteResponse = read_body(response).await?;
        Ok(())
    }

    // Clients

    pub async fn list_clients(&self) -> Result<Vec<Client>, ConsoleError> {
        let response: ClientsResponse = self.get("/api/clients").await?;
        Ok(response.clients)
    }

    pub async fn create_client(&self, req: &CreateClientRequest) -> Result<Client, ConsoleError> {
        self.post("/api/clients", req).await
    }

    pub async fn update_client(
        &self,
        id: &str,
        req: &UpdateClientRequest,
    ) -> Result<Client, ConsoleError> {
        self.put(&format!("/api/clients/{}", id), req).await
    }

    pub async fn delete_client(&self, id: &str) -> Result<(), ConsoleError> {
        self.delete(&format!("/api/clients/{}", id)).await
    }

    // Projects

    pub async fn list_projects(&self) -> Result<Vec<Project>, ConsoleError> {
        let response: ProjectsResponse = self.get("/api/projects").await?;
        Ok(response.projects)
    }

    pub async fn create_project(
        &self,
        req: &CreateProjectRequest,
    ) -> Result<Project, ConsoleError> {
        self.post("/api/projects", req).await
    }

    pub async fn update_project(
        &self,
        id: &str,
        req: &UpdateProjectRequest,
    ) -> Result<Project, ConsoleError> {
        self.put(&format!("/api/projects/{}", id), req).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), ConsoleError> {
        self.delete(&format!("/api/projects/{}", id)).await
    }

    // Payments

    pub async fn list_payments(&self) -> Result<Vec<Payment>, ConsoleError> {
        let response: PaymentsResponse = self.get("/api/payments").await?;
        Ok(response.payments)
    }

    pub async fn create_payment(
        &self,
        req: &CreatePaymentRequest,
    ) -> Result<Payment, ConsoleError> {
        self.post("/api/payments", req).await
    }

    pub async fn update_payment(
        &self,
        id: &str,
        req: &UpdatePaymentRequest,
    ) -> Result<Payment, ConsoleError> {
        self.put(&format!("/api/payments/{}", id), req).await
    }

    pub async fn delete_payment(&self, id: &str) -> Result<(), ConsoleError> {
        self.delete(&format!("/api/payments/{}", id)).await
    }

    // Portals

    pub async fn list_portals(&self) -> Result<Vec<Portal>, ConsoleError> {
        let response: PortalsResponse = self.get("/api/portals").await?;
        Ok(response.portals)
    }

    pub async fn create_portal(&self, req: &CreatePortalRequest) -> Result<Portal, ConsoleError> {
        self.post("/api/portals", req).await
    }

    pub async fn update_portal(
        &self,
        id: &str,
        req: &UpdatePortalRequest,
    ) -> Result<Portal, ConsoleError> {
        self.put(&format!("/api/portals/{}", id), req).await
    }

    pub async fn delete_portal(&self, id: &str) -> Result<(), ConsoleError> {
        self.delete(&format!("/api/portals/{}", id)).await
    }

    // Forms

    pub async fn list_forms(&self) -> Result<Vec<Form>, ConsoleError> {
        let response: FormsResponse = self.get("/api/forms").await?;
        Ok(response.forms)
    }

    pub async fn create_form(&self, req: &CreateFormRequest) -> Result<Form, ConsoleError> {
        self.post("/api/forms", req).await
    }

    pub async fn update_form(
        &self,
        id: &str,
        req: &UpdateFormRequest,
    ) -> Result<Form, ConsoleError> {
        self.put(&format!("/api/forms/{}", id), req).await
    }

    pub async fn delete_form(&self, id: &str) -> Result<(), ConsoleError> {
        self.delete(&format!("/api/forms/{}", id)).await
    }

    // Tracking

    pub async fn list_tracking(&self) -> Result<Vec<TrackingEntry>, ConsoleError> {
        let response: TrackingEntriesResponse = self.get("/api/tracking").await?;
        Ok(response.entries)
    }

    pub async fn create_tracking(
        &self,
        req: &CreateTrackingRequest,
    ) -> Result<TrackingEntry, ConsoleError> {
        self.post("/api/tracking", req).await
    }
}

async fn read_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ConsoleError> {
    if response.status().is_success() {
        return response.json().await.map_err(|_| ConsoleError::Shape);
    }

    let status = response.status();
    let message = response
        .json::<ErrorResponse>()
        .await
        .map(|e| e.error)
        .unwrap_or_else(|_| "operation failed".to_string());

    tracing::warn!("API call failed ({}): {}", status, message);
    Err(ConsoleError::Api(message))
}
