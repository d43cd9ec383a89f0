//! # Notifications
//!
//! Transient messages (the toasts) and background state changes flow out
//! through a [`Notifier`]. The stdio loop plugs in [`ChannelNotifier`].
//! [`NoOpNotifier`] suits callers that only read snapshots.

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::protocol::{Event, Outbound};
use crate::state::Snapshot;

pub const CHECKOUT_MESSAGE: &str = "Order placed successfully! Your food is on the way!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Sink for notifications and out-of-band state changes.
pub trait Notifier: Send + Sync {
    /// Shows a transient message.
    fn notify(&self, notification: &Notification);

    /// Store state changed outside intent dispatch (timer fired, fetch landed).
    fn state_changed(&self, snapshot: &Snapshot);
}

/// Drops everything.
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn notify(&self, _notification: &Notification) {}
    fn state_changed(&self, _snapshot: &Snapshot) {}
}

/// Logs through `tracing` only.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.kind {
            NotificationKind::Success => info!(message = %notification.message, "Notification"),
            NotificationKind::Error => warn!(message = %notification.message, "Notification"),
        }
    }

    fn state_changed(&self, _snapshot: &Snapshot) {
        debug!("State changed in background");
    }
}

/// Forwards to the stdout writer task.
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Outbound>,
}

impl ChannelNotifier {
    pub fn new(tx: mpsc::UnboundedSender<Outbound>) -> Self {
        ChannelNotifier { tx }
    }

    fn send(&self, outbound: Outbound) {
        if self.tx.send(outbound).is_err() {
            debug!("Output channel closed, dropping event");
        }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: &Notification) {
        TracingNotifier.notify(notification);
        self.send(Outbound::Event(Event::Notification {
            notification: notification.clone(),
        }));
    }

    fn state_changed(&self, snapshot: &Snapshot) {
        self.send(Outbound::Event(Event::State {
            snapshot: snapshot.clone(),
        }));
    }
}
