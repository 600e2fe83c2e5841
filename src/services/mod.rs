pub mod auth;
pub mod composer;
pub mod database;
pub mod labels;
pub mod notification;
pub mod user;

pub use auth::AuthService;
pub use database::Database;
pub use notification::{NotificationService, SurrealNotificationStore};
pub use user::UserService;
