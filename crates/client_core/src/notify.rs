//! Operator-facing notifications emitted by the workflow controllers.

use std::time::Duration;

use tokio::sync::broadcast;

pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub duration: Duration,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            duration,
        }
    }

    pub fn no_results(duration: Duration) -> Self {
        Self::new(
            NotificationKind::Info,
            "No results",
            "No data found for this flow id.",
            duration,
        )
    }

    pub fn submitted(duration: Duration) -> Self {
        Self::new(
            NotificationKind::Success,
            "Success",
            "Endpoints sent for documentation.",
            duration,
        )
    }

    pub fn error(description: impl Into<String>, duration: Duration) -> Self {
        Self::new(NotificationKind::Error, "Error", description, duration)
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<F> Notifier for F
where
    F: Fn(Notification) + Send + Sync,
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

/// Fans notifications out to any number of presentation-layer subscribers.
pub struct BroadcastNotifier {
    events: broadcast::Sender<Notification>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity);
        Self { events }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.events.subscribe()
    }
}

impl Notifier for BroadcastNotifier {
    fn notify(&self, notification: Notification) {
        // Err only means there are no subscribers.
        let _ = self.events.send(notification);
    }
}
