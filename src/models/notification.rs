use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted admin notification. Created only by the notification service;
/// the only mutation afterwards is marking it read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    #[serde(with = "crate::utils::serde_helpers::thing_id")]
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub link: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

/// The composed fields shared by every recipient's record for one event.
/// Each persisted notification gets its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPayload {
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub link: Option<String>,
}
