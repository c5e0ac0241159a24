use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Payment entity. `project_id` is required but only soft-enforced: the
/// proxy checks presence, not referential integrity.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Payment {
    pub id: String,
    pub project_id: String,
    pub amount: f64,
    pub status: Option<String>,
    pub payment_date: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

/// Request to create a new payment
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreatePaymentRequest {
    pub project_id: Option<String>,
    pub amount: Option<f64>,
    pub status: Option<String>,
    pub payment_date: Option<String>,
    pub notes: Option<String>,
}

/// Request to update a payment
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpdatePaymentRequest {
    pub project_id: Option<String>,
    pub amount: Option<f64>,
    pub status: Option<String>,
    pub payment_date: Option<String>,
    pub notes: Option<String>,
}

/// Response containing a list of payments
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentsResponse {
    pub payments: Vec<Payment>,
}
