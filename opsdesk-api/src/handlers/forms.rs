use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use shared_types::{CreateFormRequest, DeleteResponse, FormsResponse, UpdateFormRequest};
use std::sync::Arc;

use crate::error::ApiError;
use crate::sessions::{require_session, SessionStore};
use crate::store::forms as store;
use crate::store::StoreClient;

pub async fn list_forms(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let forms = store::list_forms(&store_client).await.map_err(|e| {
        tracing::error!("Failed to list forms: {}", e);
        ApiError::Store("Failed to load forms".to_string())
    })?;

    Ok(HttpResponse::Ok().json(FormsResponse { forms }))
}

pub async fn create_form(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
    request: web::Json<CreateFormRequest>,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let payload = store::create_payload(&request).map_err(ApiError::from)?;

    let form = store::insert_form(&store_client, &payload).await.map_err(|e| {
        tracing::error!("Failed to create form: {}", e);
        ApiError::Store("Failed to create form".to_string())
    })?;

    Ok(HttpResponse::Ok().json(form))
}

pub async fn update_form(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
    path: web::Path<String>,
    request: web::Json<UpdateFormRequest>,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let id = path.into_inner();
    let payload = store::update_payload(&request);

    let form = store::update_form(&store_client, &id, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update form {}: {}", id, e);
            ApiError::Store("Failed to update form".to_string())
        })?;

    Ok(HttpResponse::Ok().json(form))
}

pub async fn delete_form(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let id = path.into_inner();
    store::delete_form(&store_client, &id).await.map_err(|e| {
        tracing::error!("Failed to delete form {}: {}", id, e);
        ApiError::Store("Failed to delete form".to_string())
    })?;

    Ok(HttpResponse::Ok().json(DeleteResponse { success: true }))
}
