// ============================================================================
// NOTIFICATION MODEL - Message text + kind
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    /// Class name applied to the message box
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(text: impl Into<String>, kind: NotificationKind) -> Self {
        Self { text: text.into(), kind }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, NotificationKind::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, NotificationKind::Error)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, NotificationKind::Info)
    }
}
