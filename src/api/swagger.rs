use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GreenFuture Portal Service API",
        version = "1.0.0",
        description = "Credential store service backing the GreenFuture donation portal.\n\n**Features:**\n- Email/password signup and login over a single action-dispatched endpoint\n- File-backed user collection\n- Health monitoring",
        contact(
            name = "GreenFuture Portal Team",
            email = "support@greenfuture.org"
        )
    ),
    paths(
        crate::api::auth::authenticate,
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::services::auth_service::AuthRequest,
            crate::services::auth_service::SignupResponse,
            crate::services::auth_service::LoginResponse,
            crate::models::user::UserInfo,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Signup and login. The request's `action` field selects the operation."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    )
)]
pub struct ApiDoc;
