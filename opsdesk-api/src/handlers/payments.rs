use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use shared_types::{CreatePaymentRequest, DeleteResponse, PaymentsResponse, UpdatePaymentRequest};
use std::sync::Arc;

use crate::error::ApiError;
use crate::sessions::{require_session, SessionStore};
use crate::store::payments as store;
use crate::store::StoreClient;

pub async fn list_payments(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let payments = store::list_payments(&store_client).await.map_err(|e| {
        tracing::error!("Failed to list payments: {}", e);
        ApiError::Store("Failed to load payments".to_string())
    })?;

    Ok(HttpResponse::Ok().json(PaymentsResponse { payments }))
}

pub async fn create_payment(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
    request: web::Json<CreatePaymentRequest>,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let payload = store::create_payload(&request).map_err(ApiError::from)?;

    let payment = store::insert_payment(&store_client, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create payment: {}", e);
            ApiError::Store("Failed to create payment".to_string())
        })?;

    Ok(HttpResponse::Ok().json(payment))
}

pub async fn update_payment(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
    path: web::Path<String>,
    request: web::Json<UpdatePaymentRequest>,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let id = path.into_inner();
    let payload = store::update_payload(&request);

    let payment = store::update_payment(&store_client, &id, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update payment {}: {}", id, e);
            ApiError::Store("Failed to update payment".to_string())
        })?;

    Ok(HttpResponse::Ok().json(payment))
}

pub async fn delete_payment(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let id = path.into_inner();
    store::delete_payment(&store_client, &id).await.map_err(|e| {
        tracing::error!("Failed to delete payment {}: {}", id, e);
        ApiError::Store("Failed to delete payment".to_string())
    })?;

    Ok(HttpResponse::Ok().json(DeleteResponse { success: true }))
}
