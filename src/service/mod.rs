pub mod content_store;
pub mod filters;

use std::sync::Arc;

use crate::{
    auth::{FileIdentitySlot, FixedCredentials, IdentitySlot, Latency, MemoryIdentitySlot, SessionStore},
    config::Settings,
    notify::{LogSink, NotificationManager, RecentNotifications},
};

pub use content_store::{ContentStore, DashboardStats};
pub use filters::EventStatus;

/// Everything request handlers need, built once at startup.
pub struct ServiceContext {
    pub content: Arc<ContentStore>,
    pub session: Arc<SessionStore>,
    pub notifications: Arc<NotificationManager>,
    pub recent_notifications: Arc<RecentNotifications>,
}

impl ServiceContext {
    pub fn new(
        content: Arc<ContentStore>,
        session: Arc<SessionStore>,
        notifications: Arc<NotificationManager>,
        recent_notifications: Arc<RecentNotifications>,
    ) -> Self {
        Self {
            content,
            session,
            notifications,
            recent_notifications,
        }
    }

    /// Wire up the stores from settings and restore any persisted session.
    pub async fn from_settings(settings: &Settings) -> Self {
        let notifications = Arc::new(NotificationManager::new());
        let recent_notifications = Arc::new(RecentNotifications::new(settings.notifications.history_capacity));
        notifications.register(Arc::new(LogSink)).await;
        notifications.register(recent_notifications.clone()).await;

        let content = if settings.content.seed {
            ContentStore::seeded(notifications.clone())
        } else {
            tracing::info!("Content seeding disabled; starting with empty collections");
            ContentStore::empty(notifications.clone())
        };

        let slot: Arc<dyn IdentitySlot> = match &settings.auth.identity_slot_path {
            Some(path) => Arc::new(FileIdentitySlot::new(path)),
            None => Arc::new(MemoryIdentitySlot::new()),
        };

        let session = SessionStore::new(
            Arc::new(FixedCredentials::demo()),
            slot,
            notifications.clone(),
            Latency::from_config(&settings.auth),
        );
        session.boot().await;

        Self::new(
            Arc::new(content),
            Arc::new(session),
            notifications,
            recent_notifications,
        )
    }
}
