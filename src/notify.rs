//! Toast-style notifications for transient user-facing messages.
//!
//! DESIGN
//! ======
//! A `tokio::sync::broadcast` channel. Publishers never wait and never fail:
//! when no listener is subscribed the message is dropped. Notifications are
//! advisory feedback, not a durable log.

use std::fmt;

use serde::Serialize;
use tokio::sync::broadcast;

/// How long a toast stays visible unless the publisher says otherwise.
pub const DEFAULT_LIFE_MS: u64 = 3000;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warn,
    Error,
    Secondary,
    Contrast,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Secondary => "secondary",
            Self::Contrast => "contrast",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    pub life_ms: u64,
}

impl Notification {
    #[must_use]
    pub fn new(severity: Severity, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self { severity, summary: summary.into(), detail: detail.into(), life_ms: DEFAULT_LIFE_MS }
    }

    #[must_use]
    pub fn with_life_ms(mut self, life_ms: u64) -> Self {
        self.life_ms = life_ms;
        self
    }
}

/// Cloneable publish handle. All clones feed the same listeners.
#[derive(Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Publish to every mounted listener. Returns how many received it.
    pub fn publish(&self, notification: Notification) -> usize {
        if let Ok(listeners) = self.tx.send(notification) {
            listeners
        } else {
            tracing::debug!("no notification listener mounted; message dropped");
            0
        }
    }

    /// Convenience wrapper for `publish(Notification::new(..))`.
    pub fn show(&self, severity: Severity, summary: &str, detail: &str) -> usize {
        self.publish(Notification::new(severity, summary, detail))
    }

    /// Mount a listener. Only messages published after this call are delivered.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;
