use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::error::Result;

pub mod recent;

pub use recent::RecentNotifications;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
}

/// A short user-facing message raised after a store operation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait NotificationSink: Send + Sync {
    fn name(&self) -> &str;
    async fn deliver(&self, notification: &Notification) -> Result<()>;
}

/// Writes every notification to the log.
pub struct LogSink;

#[async_trait]
impl NotificationSink for LogSink {
    fn name(&self) -> &str {
        "log"
    }

    async fn deliver(&self, notification: &Notification) -> Result<()> {
        match notification.level {
            Level::Success => tracing::info!("Notification: {}", notification.message),
            Level::Error => tracing::warn!("Notification: {}", notification.message),
        }
        Ok(())
    }
}

/// Fans notifications out to every registered sink. Delivery is fire and
/// forget: a failing sink is logged and the rest still receive the message.
pub struct NotificationManager {
    sinks: RwLock<Vec<Arc<dyn NotificationSink>>>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            sinks: RwLock::new(Vec::new()),
        }
    }

    pub async fn register(&self, sink: Arc<dyn NotificationSink>) {
        tracing::info!("Registered notification sink: {}", sink.name());
        self.sinks.write().await.push(sink);
    }

    pub async fn notify(&self, notification: Notification) {
        let sinks = self.sinks.read().await;

        for sink in sinks.iter() {
            if let Err(e) = sink.deliver(&notification).await {
                tracing::error!(
                    "Notification sink {} failed to deliver: {:?}",
                    sink.name(),
                    e
                );
            }
        }
    }

    pub async fn success(&self, message: impl Into<String>) {
        self.notify(Notification::success(message)).await;
    }

    pub async fn error(&self, message: impl Into<String>) {
        self.notify(Notification::error(message)).await;
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
