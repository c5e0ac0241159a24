use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Form entity
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Form {
    pub id: String,
    pub name: String,
    pub link: String,
    pub excel_link: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

/// Request to create a new form
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateFormRequest {
    pub name: Option<String>,
    pub link: Option<String>,
    pub excel_link: Option<String>,
    pub notes: Option<String>,
}

/// Request to update a form
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpdateFormRequest {
    pub name: Option<String>,
    pub link: Option<String>,
    pub excel_link: Option<String>,
    pub notes: Option<String>,
}

/// Response containing a list of forms
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormsResponse {
    pub forms: Vec<Form>,
}
