use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Notification, NotificationSink};
use crate::error::Result;

/// Keeps the most recent notifications so clients can poll them.
pub struct RecentNotifications {
    capacity: usize,
    buffer: Mutex<VecDeque<Notification>>,
}

impl RecentNotifications {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Oldest first.
    pub async fn snapshot(&self) -> Vec<Notification> {
        self.buffer.lock().await.iter().cloned().collect()
    }

    pub async fn drain(&self) -> Vec<Notification> {
        self.buffer.lock().await.drain(..).collect()
    }
}

#[async_trait]
impl NotificationSink for RecentNotifications {
    fn name(&self) -> &str {
        "recent"
    }

    async fn deliver(&self, notification: &Notification) -> Result<()> {
        if self.capacity == 0 {
            return Ok(());
        }

        let mut buffer = self.buffer.lock().await;
        if buffer.len() == self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(notification.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_oldest_dropped_at_capacity() {
        let recent = RecentNotifications::new(2);
        for message in ["one", "two", "three"] {
            recent.deliver(&Notification::success(message)).await.unwrap();
        }

        let messages: Vec<String> = recent.snapshot().await.into_iter().map(|n| n.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[tokio::test]
    async fn test_drain_empties_buffer() {
        let recent = RecentNotifications::new(4);
        recent.deliver(&Notification::error("Login failed: Invalid credentials")).await.unwrap();

        assert_eq!(recent.drain().await.len(), 1);
        assert!(recent.snapshot().await.is_empty());
    }
}
