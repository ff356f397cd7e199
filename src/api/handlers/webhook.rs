//! Push webhook intake handlers.

use axum::{
    Extension, Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::api::doc::WEBHOOK_TAG;
use crate::api::dto::{ErrorResponse, PushWebhookRequest, WebhookResponse};
use crate::api::middleware::{RequestId, handle_json_rejection};
use crate::state::AppState;

/// Body of `GET /`.
pub const GREETING: &str = "Hello World! ";

/// Creates webhook routes.
///
/// Routes:
/// - GET /   - Greeting, doubles as a reachability probe for the sender
/// - POST /  - Push webhook intake
pub fn webhook_routes() -> Router<AppState> {
    Router::new().route("/", get(greeting).post(receive_push))
}

/// GET / - Fixed greeting
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain")),
    tag = WEBHOOK_TAG
)]
pub async fn greeting() -> &'static str {
    GREETING
}

/// POST / - Receive a push event
///
/// Commits are processed in payload order and the response is sent once every
/// release announcement has been attempted. Delivery failures are reported in
/// the counters, not as an error status.
#[utoipa::path(
    post,
    path = "/",
    request_body = PushWebhookRequest,
    responses(
        (status = 200, description = "Commits processed", body = WebhookResponse),
        (status = 400, description = "Malformed payload", body = ErrorResponse)
    ),
    tag = WEBHOOK_TAG
)]
pub async fn receive_push(
    State(state): State<AppState>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    payload: Result<Json<PushWebhookRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Rejected push payload");
            return handle_json_rejection(rejection, Some(&request_id));
        }
    };

    let commits = payload.into_commits();
    tracing::info!(commits = commits.len(), "Push event received");

    let summary = state.services.releases.process_commits(&commits).await;
    Json(WebhookResponse::from(summary)).into_response()
}
