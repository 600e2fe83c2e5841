use crate::services::{AuthService, NotificationService, UserService};

/// Shared application state: the service layer, cloned cheaply per request.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,

    pub user_service: UserService,

    pub notification_service: NotificationService,
}
