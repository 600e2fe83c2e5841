use crate::models::user::AdminUser;

/// An ephemeral description of a mutation that should fan out to admins.
/// Events are never persisted; they exist only for one emit call.
#[derive(Debug, Clone)]
pub enum ContentEvent {
    /// A visitor submitted a message through the public contact form.
    NewMessage {
        sender_name: String,
        sender_email: String,
        body: String,
    },
    /// An admin created, updated or deleted a managed resource.
    /// `action` stays a free string at this boundary so unknown actions
    /// degrade to identity labels instead of failing.
    Modification {
        actor: AdminUser,
        resource_type: String,
        resource_name: String,
        action: String,
    },
}
