use crate::{error::Result, state::AppState, utils::middleware::AdminAuth};
use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;
use validator::Validate;

/// Trigger endpoints. The messaging and CRUD controllers call these after
/// their own mutation has committed; emission is best-effort and never fails
/// the triggering operation.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/message", post(message_received))
        .route("/modification", post(resource_modified))
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewMessageEventRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ModificationEventRequest {
    #[validate(length(min = 1, max = 100))]
    pub resource_type: String,

    #[validate(length(min = 1, max = 200))]
    pub resource_name: String,

    #[validate(length(min = 1, max = 50))]
    pub action: String,
}

async fn message_received(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewMessageEventRequest>,
) -> Result<Json<Value>> {
    request.validate()?;

    if let Err(e) = state
        .notification_service
        .notify_of_new_message(&request.name, &request.email, &request.message)
        .await
    {
        warn!("Failed to notify admins of new message: {}", e);
    }

    Ok(Json(json!({
        "success": true
    })))
}

async fn resource_modified(
    State(state): State<Arc<AppState>>,
    AdminAuth(actor): AdminAuth,
    Json(request): Json<ModificationEventRequest>,
) -> Result<Json<Value>> {
    request.validate()?;

    if let Err(e) = state
        .notification_service
        .notify_of_modification(
            &actor,
            &request.resource_type,
            &request.resource_name,
            &request.action,
        )
        .await
    {
        warn!("Failed to notify admins of modification: {}", e);
    }

    Ok(Json(json!({
        "success": true
    })))
}
