use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Localized labels for the admin dashboard. Lookups are case-insensitive on
/// the lower-cased key; an unknown key comes back unchanged so new resource
/// types degrade to their raw name instead of erroring.

static ACTION_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("created", "إنشاء"),
        ("updated", "تعديل"),
        ("deleted", "حذف"),
    ])
});

static RESOURCE_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("benefit", "ميزة"),
        ("benefits", "ميزة"),
        ("package", "باقة"),
        ("packages", "باقة"),
        ("user", "مستخدم"),
        ("users", "مستخدم"),
        ("faq", "سؤال شائع"),
        ("faqs", "سؤال شائع"),
        ("support-info", "معلومات الدعم"),
        ("contact-info", "معلومات التواصل"),
        ("speed-test-setting", "إعدادات فحص السرعة"),
        ("speed-test-settings", "إعدادات فحص السرعة"),
        ("premium-service", "خدمة مميزة"),
        ("premium-services", "خدمة مميزة"),
        ("announcement", "إعلان"),
        ("announcements", "إعلان"),
        ("about-page", "صفحة من نحن"),
        ("hero-setting", "إعدادات الواجهة"),
        ("hero-settings", "إعدادات الواجهة"),
        ("message", "رسالة"),
        ("messages", "رسالة"),
    ])
});

/// Localized verb for a mutation action, falling back to the input itself.
pub fn action_label(action: &str) -> String {
    ACTION_LABELS
        .get(action.to_lowercase().as_str())
        .map(|label| label.to_string())
        .unwrap_or_else(|| action.to_string())
}

/// Localized noun for a managed resource type, falling back to the input
/// itself.
pub fn resource_label(resource_type: &str) -> String {
    RESOURCE_LABELS
        .get(resource_type.to_lowercase().as_str())
        .map(|label| label.to_string())
        .unwrap_or_else(|| resource_type.to_string())
}
