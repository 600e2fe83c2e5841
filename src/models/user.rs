use serde::{Deserialize, Serialize};

/// A dashboard user as stored by the user-store collaborator. This service
/// only ever reads users; it never creates or mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(with = "crate::utils::serde_helpers::thing_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}
