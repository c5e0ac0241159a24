use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use shared_types::{CreateTrackingRequest, TrackingEntriesResponse};
use std::sync::Arc;

use crate::error::ApiError;
use crate::sessions::{require_session, SessionStore};
use crate::store::tracking as store;
use crate::store::StoreClient;

// The tracking log is append-mostly: list and create only.

pub async fn list_entries(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let entries = store::list_entries(&store_client).await.map_err(|e| {
        tracing::error!("Failed to list tracking entries: {}", e);
        ApiError::Store("Failed to load tracking entries".to_string())
    })?;

    Ok(HttpResponse::Ok().json(TrackingEntriesResponse { entries }))
}

pub async fn create_entry(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
    request: web::Json<CreateTrackingRequest>,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let payload = store::create_payload(&request).map_err(ApiError::from)?;

    let entry = store::insert_entry(&store_client, &payload).await.map_err(|e| {
        tracing::error!("Failed to append tracking entry: {}", e);
        ApiError::Store("Failed to create tracking entry".to_string())
    })?;

    Ok(HttpResponse::Ok().json(entry))
}
