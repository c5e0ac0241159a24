use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Client entity as stored by the external data store
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<String>,
}

/// Request to create a new client
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateClientRequest {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
}

/// Request to update a client; the full record is resubmitted, not a patch
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
}

/// Response containing a list of clients
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClientsResponse {
    pub clients: Vec<Client>,
}
