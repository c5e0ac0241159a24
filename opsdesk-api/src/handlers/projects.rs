use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use shared_types::{CreateProjectRequest, DeleteResponse, ProjectsResponse, UpdateProjectRequest};
use std::sync::Arc;

use crate::error::ApiError;
use crate::sessions::{require_session, SessionStore};
use crate::store::projects as store;
use crate::store::StoreClient;

pub async fn list_projects(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let projects = store::list_projects(&store_client).await.map_err(|e| {
        tracing::error!("Failed to list projects: {}", e);
        ApiError::Store("Failed to load projects".to_string())
    })?;

    Ok(HttpResponse::Ok().json(ProjectsResponse { projects }))
}

pub async fn create_project(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
    request: web::Json<CreateProjectRequest>,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let payload = store::create_payload(&request).map_err(ApiError::from)?;

    let project = store::insert_project(&store_client, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create project: {}", e);
            ApiError::Store("Failed to create project".to_string())
        })?;

    Ok(HttpResponse::Ok().json(project))
}

pub async fn update_project(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
    path: web::Path<String>,
    request: web::Json<UpdateProjectRequest>,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let id = path.into_inner();
    let payload = store::update_payload(&request);

    let project = store::update_project(&store_client, &id, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update project {}: {}", id, e);
            ApiError::Store("Failed to update project".to_string())
        })?;

    Ok(HttpResponse::Ok().json(project))
}

pub async fn delete_project(
    store_client: web::Data<Arc<StoreClient>>,
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    require_session(&req, &sessions).await?;

    let id = path.into_inner();
    store::delete_project(&store_client, &id).await.map_err(|e| {
        tracing::error!("Failed to delete project {}: {}", id, e);
        ApiError::Store("Failed to delete project".to_string())
    })?;

    Ok(HttpResponse::Ok().json(DeleteResponse { success: true }))
}
