use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use shared_types::{DeleteResponse, LoginRequest, LoginResponse};
use std::sync::Arc;

use crate::config::AdminConfig;
use crate::error::ApiError;
use crate::sessions::{bearer_token, SessionStore};

pub async fn login(
    admin: web::Data<AdminConfig>,
    sessions: web::Data<Arc<SessionStore>>,
    request: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    let req = request.into_inner();

    // Empty configured credentials refuse everything
    let configured = !admin.username.is_empty() && !admin.password.is_empty();
    if !configured || req.username != admin.username || req.password != admin.password {
        return Err(ApiError::Unauthorized("Invalid username or password".to_string()).into());
    }

    let (token, expires_at) = sessions.issue(&req.username).await;
    tracing::info!("Session opened for {}", req.username);

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        expires_at: expires_at.to_rfc3339(),
    }))
}

pub async fn logout(
    sessions: web::Data<Arc<SessionStore>>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let token = bearer_token(&req)
        .ok_or_else(|| ApiError::Unauthorized("Missing session token".to_string()))?;

    sessions.revoke(token).await;

    Ok(HttpResponse::Ok().json(DeleteResponse { success: true }))
}
