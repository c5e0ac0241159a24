use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use shared_types::{CreatePortalRequest, DeleteResponse, PortalsResponse, UpdatePortalRequest};
use std::sync::Arc;

use crate::error::ApiError;
use crate::sessions::{require_session, SessionStore};
use crate::store::portals as store;
use crate::store::StoreClient;

pub async fn list_portals(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let portals = store::list_portals(&store_client).await.map_err(|e| {
        tracing::error!("Failed to list portals: {}", e);
        ApiError::Store("Failed to load portals".to_string())
    })?;

    Ok(HttpResponse::Ok().json(PortalsResponse { portals }))
}

pub async fn create_portal(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
    request: web::Json<CreatePortalRequest>,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let payload = store::create_payload(&request).map_err(ApiError::from)?;

    let portal = store::insert_portal(&store_client, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create portal: {}", e);
            ApiError::Store("Failed to create portal".to_string())
        })?;

    Ok(HttpResponse::Ok().json(portal))
}

pub async fn update_portal(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
    path: web::Path<String>,
    request: web::Json<UpdatePortalRequest>,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let id = path.into_inner();
    let payload = store::update_payload(&request);

    let portal = store::update_portal(&store_client, &id, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update portal {}: {}", id, e);
            ApiError::Store("Failed to update portal".to_string())
        })?;

    Ok(HttpResponse::Ok().json(portal))
}

pub async fn delete_portal(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let id = path.into_inner();
    store::delete_portal(&store_client, &id).await.map_err(|e| {
        tracing::error!("Failed to delete portal {}: {}", id, e);
        ApiError::Store("Failed to delete portal".to_string())
    })?;

    Ok(HttpResponse::Ok().json(DeleteResponse { success: true }))
}
