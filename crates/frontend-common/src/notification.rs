//! Toast notifications

use std::fmt;

/// Visual category of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Background and text colour
    fn colors(self) -> (&'static str, &'static str) {
        match self {
            Self::Success => ("#d4edda", "#155724"),
            Self::Error => ("#f8d7da", "#721c24"),
            Self::Info => ("#d1ecf1", "#0c5460"),
        }
    }
}

/// Unknown kinds render as [`NotificationKind::Info`]
impl From<&str> for NotificationKind {
    fn from(kind: &str) -> Self {
        match kind {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const BASE_STYLE: &str = "position:fixed;top:20px;right:20px;padding:15px 25px;\
border-radius:5px;z-index:9999;font-weight:500;box-shadow:0 3px 10px rgba(0,0,0,0.2);";

/// A transient banner shown in the top-right corner of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// CSS classes, e.g. `notification notification-error`
    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.kind)
    }

    /// Inline style: fixed position plus the kind's colours
    pub fn style(&self) -> String {
        let (background, color) = self.kind.colors();
        format!("{BASE_STYLE}background:{background};color:{color};")
    }
}

/// Renders notifications and removes them after a delay
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Show `notification` for `duration_ms`, then remove it
    fn notify(&self, notification: &Notification, duration_ms: u32);
}
