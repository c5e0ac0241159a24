use serde_json::json;
use shared_types::{CreatePaymentRequest, Payment, UpdatePaymentRequest};

use super::{StoreClient, StoreError};
use crate::normalize::{opt_text, require_amount, require_text, NormalizeError};

const TABLE: &str = "payments";

pub fn create_payload(req: &CreatePaymentRequest) -> Result<serde_json::Value, NormalizeError> {
    let project_id = require_text(&req.project_id, "project_id")?;
    let amount = require_amount(req.amount, "amount")?;

    Ok(json!({
        "project_id": project_id,
        "amount": amount,
        "status": opt_text(&req.status),
        "payment_date": opt_text(&req.payment_date),
        "notes": opt_text(&req.notes),
    }))
}

pub fn update_payload(req: &UpdatePaymentRequest) -> serde_json::Value {
    // A non-finite amount degrades to null rather than poisoning the JSON
    let amount = req.amount.filter(|a| a.is_finite());

    json!({
        "project_id": opt_text(&req.project_id),
        "amount": amount,
        "status": opt_text(&req.status),
        "payment_date": opt_text(&req.payment_date),
        "notes": opt_text(&req.notes),
    })
}

pub async fn list_payments(store: &StoreClient) -> Result<Vec<Payment>, StoreError> {
    store.list(TABLE).await
}

pub async fn insert_payment(
    store: &StoreClient,
    payload: &serde_json::Value,
) -> Result<Payment, StoreError> {
    store.insert(TABLE, payload).await
}

pub async fn update_payment(
    store: &StoreClient,
    id: &str,
    payload: &serde_json::Value,
) -> Result<Payment, StoreError> {
    store.update(TABLE, id, payload).await
}

pub async fn delete_payment(store: &StoreClient, id: &str) -> Result<(), StoreError> {
    store.delete(TABLE, id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_requires_project_and_amount() {
        let req = CreatePaymentRequest {
            project_id: None,
            amount: Some(10.0),
            status: None,
            payment_date: None,
            notes: None,
        };
        assert!(create_payload(&req).is_err());

        let req = CreatePaymentRequest {
            project_id: Some("p1".to_string()),
            amount: Some(f64::NAN),
            status: None,
            payment_date: None,
            notes: None,
        };
        assert_eq!(create_payload(&req), Err(NormalizeError::InvalidAmount("amount")));
    }

    #[test]
    fn test_create_payload_keeps_finite_amount() {
        let req = CreatePaymentRequest {
            project_id: Some(" p1 ".to_string()),
            amount: Some(1250.75),
            status: Some("paid".to_string()),
            payment_date: None,
            notes: Some("  ".to_string()),
        };

        let payload = create_payload(&req).unwrap();
        assert_eq!(payload["project_id"], "p1");
        assert_eq!(payload["amount"], 1250.75);
        assert_eq!(payload["status"], "paid");
        assert!(payload["payment_date"].is_null());
        assert!(payload["notes"].is_null());
    }
}
