use crate::{
    error::Result,
    models::user::AdminUser,
    services::Database,
};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Read-only view over the dashboard user store. Eligibility for
/// notifications is decided against this directory at emission time.
#[async_trait]
pub trait AdminDirectory: Send + Sync {
    async fn list_admins(&self) -> Result<Vec<AdminUser>>;
}

#[derive(Clone)]
pub struct UserService {
    db: Arc<Database>,
}

impl UserService {
    pub async fn new(db: Arc<Database>) -> Result<Self> {
        Ok(Self { db })
    }

    pub async fn get_admins(&self) -> Result<Vec<AdminUser>> {
        debug!("Loading admin users");

        let mut response = self
            .db
            .query("SELECT * FROM user WHERE is_admin = true")
            .await?;
        let admins: Vec<AdminUser> = response.take(0)?;

        Ok(admins)
    }

    pub async fn get_by_id(&self, user_id: &str) -> Result<Option<AdminUser>> {
        // Token subjects may carry the table prefix; the store does not.
        let pure_id = user_id.strip_prefix("user:").unwrap_or(user_id);

        let mut response = self
            .db
            .query_with_params(
                "SELECT * FROM user WHERE id = type::thing('user', $user_id)",
                json!({ "user_id": pure_id }),
            )
            .await?;
        let users: Vec<AdminUser> = response.take(0)?;

        Ok(users.into_iter().next())
    }
}

#[async_trait]
impl AdminDirectory for UserService {
    async fn list_admins(&self) -> Result<Vec<AdminUser>> {
        self.get_admins().await
    }
}
