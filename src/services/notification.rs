use crate::{
    config::Config,
    error::Result,
    models::event::ContentEvent,
    models::notification::Notification,
    models::user::AdminUser,
    services::composer::compose,
    services::user::AdminDirectory,
    services::Database,
};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Persistence capability for notification records. Injected into the
/// service at construction so the fan-out rule itself stays storage-free.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn insert(&self, notification: Notification) -> Result<Notification>;

    async fn list_for_user(
        &self,
        user_id: &str,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>>;

    /// Marks one of `user_id`'s notifications read. Returns `None` when no
    /// notification with that id belongs to the user.
    async fn mark_read(&self, notification_id: &str, user_id: &str) -> Result<Option<Notification>>;
}

/// The canonical admin-notification rule set: who gets notified on a content
/// mutation, with what message, and how self-notifications are avoided.
///
/// This is the sole write path for notification records. Emission is a
/// one-shot compose-then-fan-out; callers invoke it after their own mutation
/// has committed, and treat it as best-effort.
#[derive(Clone)]
pub struct NotificationService {
    directory: Arc<dyn AdminDirectory>,
    store: Arc<dyn NotificationStore>,
    config: Config,
}

impl NotificationService {
    pub async fn new(
        directory: Arc<dyn AdminDirectory>,
        store: Arc<dyn NotificationStore>,
        config: &Config,
    ) -> Result<Self> {
        Ok(Self {
            directory,
            store,
            config: config.clone(),
        })
    }

    /// A visitor submitted a contact-form message; every admin hears about it.
    pub async fn notify_of_new_message(
        &self,
        sender_name: &str,
        sender_email: &str,
        body: &str,
    ) -> Result<()> {
        self.emit(ContentEvent::NewMessage {
            sender_name: sender_name.to_string(),
            sender_email: sender_email.to_string(),
            body: body.to_string(),
        })
        .await
    }

    /// An admin changed a managed resource; every other admin hears about it.
    pub async fn notify_of_modification(
        &self,
        actor: &AdminUser,
        resource_type: &str,
        resource_name: &str,
        action: &str,
    ) -> Result<()> {
        self.emit(ContentEvent::Modification {
            actor: actor.clone(),
            resource_type: resource_type.to_string(),
            resource_name: resource_name.to_string(),
            action: action.to_string(),
        })
        .await
    }

    async fn emit(&self, event: ContentEvent) -> Result<()> {
        let recipients = self.select_recipients(&event).await?;
        if recipients.is_empty() {
            debug!("No eligible recipients for event, skipping emission");
            return Ok(());
        }

        let payload = compose(&event);

        let mut delivered = 0usize;
        for recipient in &recipients {
            // One independent record per recipient; a failed insert must not
            // stop delivery to the remaining recipients.
            let record = Notification {
                id: Uuid::new_v4().to_string(),
                user_id: recipient.id.clone(),
                title: payload.title.clone(),
                message: payload.message.clone(),
                notification_type: payload.notification_type,
                link: payload.link.clone(),
                is_read: false,
                created_at: Utc::now(),
            };

            match self.store.insert(record).await {
                Ok(_) => delivered += 1,
                Err(e) => {
                    warn!("Failed to deliver notification to user {}: {}", recipient.id, e);
                }
            }
        }

        info!(
            "Notified {}/{} admins: {}",
            delivered,
            recipients.len(),
            payload.title
        );
        Ok(())
    }

    /// Admins eligible for this event. Modification events exclude the
    /// acting admin; an actor id unknown to the directory simply matches
    /// nobody and excludes only itself.
    async fn select_recipients(&self, event: &ContentEvent) -> Result<Vec<AdminUser>> {
        let admins = self.directory.list_admins().await?;

        Ok(match event {
            ContentEvent::NewMessage { .. } => admins,
            ContentEvent::Modification { actor, .. } => admins
                .into_iter()
                .filter(|admin| admin.id != actor.id)
                .collect(),
        })
    }

    pub async fn list_notifications(
        &self,
        user_id: &str,
        unread_only: bool,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<Notification>> {
        let page = page.unwrap_or(1).max(1);
        let limit = limit
            .unwrap_or(self.config.default_notifications_per_page as i64)
            .min(100);
        let offset = (page - 1) * limit;

        self.store
            .list_for_user(user_id, unread_only, limit, offset)
            .await
    }

    pub async fn mark_read(&self, notification_id: &str, user_id: &str) -> Result<Notification> {
        self.store
            .mark_read(notification_id, user_id)
            .await?
            .ok_or_else(|| crate::error::AppError::not_found("Notification"))
    }
}

/// SurrealDB-backed notification store.
#[derive(Clone)]
pub struct SurrealNotificationStore {
    db: Arc<Database>,
}

impl SurrealNotificationStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationStore for SurrealNotificationStore {
    async fn insert(&self, notification: Notification) -> Result<Notification> {
        self.db.create("notification", notification).await
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>> {
        let query = if unread_only {
            r#"
                SELECT * FROM notification
                WHERE user_id = $user_id AND is_read = false
                ORDER BY created_at DESC
                LIMIT $limit
                START $offset
            "#
        } else {
            r#"
                SELECT * FROM notification
                WHERE user_id = $user_id
                ORDER BY created_at DESC
                LIMIT $limit
                START $offset
            "#
        };

        let mut response = self
            .db
            .query_with_params(
                query,
                json!({
                    "user_id": user_id,
                    "limit": limit,
                    "offset": offset
                }),
            )
            .await?;
        let notifications: Vec<Notification> = response.take(0)?;

        Ok(notifications)
    }

    async fn mark_read(&self, notification_id: &str, user_id: &str) -> Result<Option<Notification>> {
        let pure_id = notification_id
            .strip_prefix("notification:")
            .unwrap_or(notification_id);

        let mut response = self
            .db
            .query_with_params(
                r#"
                    UPDATE notification
                    SET is_read = true
                    WHERE id = type::thing('notification', $id) AND user_id = $user_id
                    RETURN AFTER
                "#,
                json!({
                    "id": pure_id,
                    "user_id": user_id
                }),
            )
            .await?;
        let updated: Vec<Notification> = response.take(0)?;

        Ok(updated.into_iter().next())
    }
}
