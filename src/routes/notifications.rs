use crate::{error::Result, state::AppState, utils::middleware::AdminAuth};
use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// The current admin's notification inbox.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/:id/read", put(mark_notification_read))
}

#[derive(Debug, Deserialize)]
pub struct ListNotificationsQuery {
    pub unread: Option<bool>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

async fn list_notifications(
    State(state): State<Arc<AppState>>,
    AdminAuth(user): AdminAuth,
    Query(query): Query<ListNotificationsQuery>,
) -> Result<Json<Value>> {
    let notifications = state
        .notification_service
        .list_notifications(
            &user.id,
            query.unread.unwrap_or(false),
            query.page,
            query.limit,
        )
        .await?;

    Ok(Json(json!({
        "success": true,
        "data": notifications
    })))
}

async fn mark_notification_read(
    State(state): State<Arc<AppState>>,
    AdminAuth(user): AdminAuth,
    Path(notification_id): Path<String>,
) -> Result<Json<Value>> {
    let notification = state
        .notification_service
        .mark_read(&notification_id, &user.id)
        .await?;

    Ok(Json(json!({
        "success": true,
        "data": notification
    })))
}
