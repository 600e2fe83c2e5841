use crate::{error::AppError, models::user::AdminUser, state::AppState};
use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Authentication middleware. Verifies the bearer token and attaches the
/// resolved dashboard user to the request; unauthenticated requests pass
/// through and are rejected per-handler by the extractors below.
pub async fn auth_middleware(
    State(app_state): State<Arc<AppState>>,
    headers: HeaderMap,
    mut request: Request<Body>,
    next: Next<Body>,
) -> Result<Response, AppError> {
    if let Some(auth_header) = headers.get("authorization") {
        if let Ok(auth_str) = auth_header.to_str() {
            if auth_str.starts_with("Bearer ") {
                let token = &auth_str[7..];

                match app_state.auth_service.verify_jwt(token) {
                    Ok(claims) => match app_state.user_service.get_by_id(&claims.sub).await {
                        Ok(Some(user)) => {
                            debug!("Authenticated user: {} ({})", user.id, user.email);
                            request.extensions_mut().insert(user);
                        }
                        Ok(None) => {
                            warn!("Token subject {} has no user record", claims.sub);
                        }
                        Err(e) => {
                            warn!("Failed to load user for token subject: {}", e);
                        }
                    },
                    Err(e) => {
                        debug!("JWT verification failed: {}", e);
                    }
                }
            }
        }
    }

    Ok(next.run(request).await)
}

/// Extractor for handlers that require an authenticated admin.
pub struct AdminAuth(pub AdminUser);

#[async_trait::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AdminUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        if !user.is_admin {
            return Err(AppError::forbidden("Admin access required"));
        }

        Ok(AdminAuth(user))
    }
}
