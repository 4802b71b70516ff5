//! In-process notification hub backed by a `tokio::sync::broadcast` channel.
//!
//! [`NotificationCenter`] is the one place every view controller reports
//! user-facing outcomes. It is designed to be shared via
//! `Arc<NotificationCenter>` across controllers; any number of surfaces
//! (status bar, toast renderer, test harness) can subscribe independently.

use tokio::sync::broadcast;

use postforge_core::types::Timestamp;

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// How strongly a notification should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral progress information.
    Info,
    /// A mutation the backend confirmed.
    Success,
    /// A failed or rejected action; the user must re-trigger manually.
    Error,
}

/// A user-facing outcome report.
#[derive(Debug, Clone)]
pub struct Notification {
    pub severity: Severity,
    /// Short headline, e.g. `"Post Generated"`.
    pub title: String,
    /// One-sentence detail under the headline.
    pub message: String,
    /// When the notification was created (UTC).
    pub timestamp: Timestamp,
}

impl Notification {
    /// Create a notification stamped with the current time.
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// In-process fan-out hub for [`Notification`]s.
pub struct NotificationCenter {
    sender: broadcast::Sender<Notification>,
}

impl NotificationCenter {
    /// Create a center with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed notifications are
    /// dropped and slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a notification to all current subscribers.
    ///
    /// With zero subscribers the notification is silently dropped.
    pub fn publish(&self, notification: Notification) {
        // Ignore the SendError; it only means there are no receivers.
        let _ = self.sender.send(notification);
    }

    /// Subscribe to all notifications published on this center.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    /// Report a confirmed mutation.
    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.publish(Notification::new(Severity::Success, title, message));
    }

    /// Report neutral progress.
    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.publish(Notification::new(Severity::Info, title, message));
    }

    /// Report a failed or rejected action.
    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.publish(Notification::new(Severity::Error, title, message));
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
