use actix_web::{web, HttpResponse};
use crate::services::auth_service;
use crate::services::auth_service::{AuthRequest, AuthSuccess, LoginResponse, SignupResponse};
use crate::storage::JsonFileStore;
use crate::utils::error::AppError;

#[utoipa::path(
    post,
    path = "/api/auth",
    tag = "Auth",
    request_body = AuthRequest,
    responses(
        (status = 200, description = "Signup acknowledged or login succeeded", body = LoginResponse),
        (status = 400, description = "Invalid email/password format, duplicate user or unknown action"),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "User database unavailable")
    )
)]
pub async fn authenticate(
    store: web::Data<JsonFileStore>,
    request: web::Json<AuthRequest>,
) -> HttpResponse {
    log::info!("🔐 POST /api/auth - action: {}, email: {}", request.action, request.email);

    match auth_service::authenticate(store.get_ref(), &request).await {
        Ok(AuthSuccess::UserCreated) => {
            log::info!("✅ User created: {}", request.email);
            HttpResponse::Ok().json(SignupResponse {
                message: "User created successfully".to_string(),
            })
        }
        Ok(AuthSuccess::LoggedIn(user)) => {
            log::info!("✅ Login successful: {}", request.email);
            HttpResponse::Ok().json(LoginResponse { user })
        }
        Err(AppError::StorageError(detail)) => {
            // Storage faults are terminal for the request; the caller gets
            // no diagnostic detail
            log::error!("❌ Storage fault handling {}: {}", request.action, detail);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            }))
        }
        Err(e @ AppError::InvalidCredentials) => {
            log::warn!("❌ Login failed: {}", request.email);
            HttpResponse::Unauthorized().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
        Err(e) => {
            log::warn!("❌ Rejected {} for {}: {}", request.action, request.email, e);
            HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}
