use crate::models::event::ContentEvent;
use crate::models::notification::{NotificationPayload, NotificationType};
use crate::services::labels::{action_label, resource_label};

/// Number of characters of an inbound message body shown in the
/// notification preview.
const MESSAGE_PREVIEW_CHARS: usize = 50;

/// Builds the notification payload for an event. Pure: same event in, same
/// payload out, no I/O.
pub fn compose(event: &ContentEvent) -> NotificationPayload {
    match event {
        ContentEvent::NewMessage {
            sender_name,
            sender_email,
            body,
        } => NotificationPayload {
            title: "رسالة جديدة من مستخدم".to_string(),
            message: format!(
                "{} ({}) أرسل رسالة: {}...",
                sender_name,
                sender_email,
                preview(body)
            ),
            notification_type: NotificationType::Warning,
            link: Some("/admin/messages".to_string()),
        },
        ContentEvent::Modification {
            actor,
            resource_type,
            resource_name,
            action,
        } => NotificationPayload {
            title: "تعديل بواسطة مشرف".to_string(),
            message: format!(
                "قام {} بـ{} {} {}",
                actor.name,
                action_label(action),
                resource_label(resource_type),
                resource_name
            ),
            notification_type: NotificationType::Info,
            link: Some(format!("/admin/{}", normalize_resource_path(resource_type))),
        },
    }
}

/// First 50 characters of a message body. The "..." marker is appended by the
/// caller unconditionally, even for short bodies; that mirrors what the
/// dashboard has always shown.
fn preview(body: &str) -> String {
    body.chars().take(MESSAGE_PREVIEW_CHARS).collect()
}

/// Lower-cases and replaces spaces (only spaces) with hyphens to form the
/// deep-link path segment. Other punctuation passes through unchanged.
fn normalize_resource_path(resource_type: &str) -> String {
    resource_type.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::AdminUser;

    fn admin(id: &str, name: &str) -> AdminUser {
        AdminUser {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@wasl.example", id),
            is_admin: true,
        }
    }

    fn modification(actor_name: &str, resource_type: &str, resource_name: &str, action: &str) -> ContentEvent {
        ContentEvent::Modification {
            actor: admin("1", actor_name),
            resource_type: resource_type.to_string(),
            resource_name: resource_name.to_string(),
            action: action.to_string(),
        }
    }

    #[test]
    fn test_new_message_payload() {
        let event = ContentEvent::NewMessage {
            sender_name: "Ali".to_string(),
            sender_email: "ali@x.com".to_string(),
            body: "Hello, I need help with...".to_string(),
        };

        let payload = compose(&event);

        assert_eq!(payload.notification_type, NotificationType::Warning);
        assert_eq!(payload.link.as_deref(), Some("/admin/messages"));
        assert!(payload.message.contains("Ali"));
        assert!(payload.message.contains("ali@x.com"));
    }

    #[test]
    fn test_short_body_keeps_full_text_and_ellipsis() {
        let event = ContentEvent::NewMessage {
            sender_name: "Ali".to_string(),
            sender_email: "ali@x.com".to_string(),
            body: "short".to_string(),
        };

        let payload = compose(&event);

        // The marker is appended even when nothing was cut off.
        assert!(payload.message.contains("short..."));
    }

    #[test]
    fn test_long_body_is_cut_at_fifty_chars() {
        let body = "a".repeat(80);
        let event = ContentEvent::NewMessage {
            sender_name: "Ali".to_string(),
            sender_email: "ali@x.com".to_string(),
            body,
        };

        let payload = compose(&event);

        let expected = format!("{}...", "a".repeat(50));
        assert!(payload.message.contains(&expected));
        assert!(!payload.message.contains(&"a".repeat(51)));
    }

    #[test]
    fn test_modification_payload() {
        let payload = compose(&modification("Sara", "benefit", "Gold Plan", "updated"));

        assert_eq!(payload.notification_type, NotificationType::Info);
        assert_eq!(payload.link.as_deref(), Some("/admin/benefit"));
        assert!(payload.message.contains("Sara"));
        assert!(payload.message.contains("تعديل"));
        assert!(payload.message.contains("ميزة"));
        assert!(payload.message.contains("Gold Plan"));
    }

    #[test]
    fn test_unmapped_resource_type_appears_literally() {
        let payload = compose(&modification("Sara", "widget", "Thing", "updated"));

        assert!(payload.message.contains("widget"));
        assert_eq!(payload.link.as_deref(), Some("/admin/widget"));
    }

    #[test]
    fn test_unmapped_action_falls_back_to_raw_string() {
        let payload = compose(&modification("Sara", "benefit", "Gold Plan", "archived"));

        assert!(payload.message.contains("archived"));
    }

    #[test]
    fn test_link_normalization_replaces_spaces_only() {
        let payload = compose(&modification("Sara", "Speed Test Settings", "Main", "updated"));
        assert_eq!(payload.link.as_deref(), Some("/admin/speed-test-settings"));

        // Other punctuation passes through untouched.
        let payload = compose(&modification("Sara", "About_Page!", "Main", "updated"));
        assert_eq!(payload.link.as_deref(), Some("/admin/about_page!"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let event = modification("Sara", "package", "Fiber 100", "created");
        assert_eq!(compose(&event), compose(&event));
    }
}
