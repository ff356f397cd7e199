use axum::Json;
use utoipa::OpenApi;

pub const WEBHOOK_TAG: &str = "Webhook";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Release Notifier",
        description = "Announces release commits from push webhooks on Slack",
    ),
    paths(
        crate::api::handlers::webhook::greeting,
        crate::api::handlers::webhook::receive_push,
        crate::api::handlers::health::health_check,
        crate::api::handlers::health::liveness_check,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::PushWebhookRequest,
            crate::api::dto::CommitPayload,
            crate::api::dto::WebhookResponse,
            crate::api::dto::HealthResponse,
            crate::api::dto::HealthStatus,
        )
    ),
    tags(
        (name = WEBHOOK_TAG, description = "Push webhook intake"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
