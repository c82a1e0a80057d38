//! Driven port for user-visible notifications.
//!
//! Services report outcomes ("Login successful!", "User already exists")
//! through this port; the adapter decides how to surface them.

use std::fmt;
use std::time::Duration;

/// How long a notification stays visible before it is dismissed.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        };
        f.write_str(label)
    }
}

/// A message for the user with its severity and display lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub dismiss_after: Duration,
}

impl Notification {
    /// Build a notification with the standard display lifetime.
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            dismiss_after: NOTIFICATION_TTL,
        }
    }

    /// Shorthand for [`Severity::Success`].
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    /// Shorthand for [`Severity::Error`].
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    /// Shorthand for [`Severity::Info`].
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }
}

/// Sink for notifications. Delivery is fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Surface `notification` to the user.
    fn notify(&self, notification: Notification);
}
