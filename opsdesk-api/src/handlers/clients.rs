use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use shared_types::{ClientsResponse, CreateClientRequest, DeleteResponse, UpdateClientRequest};
use std::sync::Arc;

use crate::error::ApiError;
use crate::sessions::{require_session, SessionStore};
use crate::store::clients as store;
use crate::store::StoreClient;

pub async fn list_clients(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let clients = store::list_clients(&store_client).await.map_err(|e| {
        tracing::error!("Failed to list clients: {}", e);
        ApiError::Store("Failed to load clients".to_string())
    })?;

    Ok(HttpResponse::Ok().json(ClientsResponse { clients }))
}

pub async fn create_client(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
    request: web::Json<CreateClientRequest>,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    // Validation short-circuits here, before any outbound call
    let payload = store::create_payload(&request).map_err(ApiError::from)?;

    let client = store::insert_client(&store_client, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create client: {}", e);
            ApiError::Store("Failed to create client".to_string())
        })?;

    Ok(HttpResponse::Ok().json(client))
}

pub async fn update_client(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
    path: web::Path<String>,
    request: web::Json<UpdateClientRequest>,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let id = path.into_inner();
    let payload = store::update_payload(&request);

    let client = store::update_client(&store_client, &id, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update client {}: {}", id, e);
            ApiError::Store("Failed to update client".to_string())
        })?;

    Ok(HttpResponse::Ok().json(client))
}

pub async fn delete_client(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let id = path.into_inner();
    store::delete_client(&store_client, &id).await.map_err(|e| {
        tracing::error!("Failed to delete client {}: {}", id, e);
        ApiError::Store("Failed to delete client".to_string())
    })?;

    Ok(HttpResponse::Ok().json(DeleteResponse { success: true }))
}
