//! Notifier adapter that emits notifications as tracing events.

use tracing::{error, info, warn};

use crate::domain::ports::{Notification, Notifier, Severity};

/// Tracing target every notification is emitted under.
pub const NOTIFICATION_TARGET: &str = "social::notification";

/// Routes notifications to the tracing subscriber at a matching level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let Notification {
            message,
            severity,
            dismiss_after,
        } = notification;
        let dismiss_after_ms = dismiss_after.as_millis();
        match severity {
            Severity::Success | Severity::Info => {
                info!(target: NOTIFICATION_TARGET, %severity, dismiss_after_ms, "{message}");
            }
            Severity::Warning => {
                warn!(target: NOTIFICATION_TARGET, %severity, dismiss_after_ms, "{message}");
            }
            Severity::Error => {
                error!(target: NOTIFICATION_TARGET, %severity, dismiss_after_ms, "{message}");
            }
        }
    }
}
