use std::sync::Arc;

use ecell::{
    auth::{FixedCredentials, IdentitySlot, Latency, MemoryIdentitySlot, SessionState, SessionStore},
    domain::{Identity, Role},
    error::AppError,
    notify::{Level, NotificationManager, RecentNotifications},
};

struct Harness {
    session: SessionStore,
    slot: Arc<MemoryIdentitySlot>,
    recent: Arc<RecentNotifications>,
}

async fn harness_with_slot(slot: MemoryIdentitySlot) -> Harness {
    let slot = Arc::new(slot);
    let recent = Arc::new(RecentNotifications::new(16));
    let notifications = Arc::new(NotificationManager::new());
    notifications.register(recent.clone()).await;

    let session = SessionStore::new(
        Arc::new(FixedCredentials::demo()),
        slot.clone(),
        notifications,
        Latency::none(),
    );
    session.boot().await;

    Harness { session, slot, recent }
}

async fn harness() -> Harness {
    harness_with_slot(MemoryIdentitySlot::new()).await
}

#[tokio::test]
async fn test_sign_in_as_admin() -> anyhow::Result<()> {
    let h = harness().await;

    let identity = h.session.sign_in("admin@ecell.com", "admin123").await?;

    assert_eq!(identity.role, Role::Admin);
    assert!(h.session.is_admin().await);
    assert_eq!(h.session.current().await, Some(identity.clone()));
    assert_eq!(h.slot.load().await?, Some(identity));

    // The serialized identity has no room for a secret.
    let json = serde_json::to_value(h.session.current().await)?;
    assert!(json.get("password").is_none());
    assert!(json.get("secret").is_none());
    Ok(())
}

#[tokio::test]
async fn test_sign_in_as_regular_user() -> anyhow::Result<()> {
    let h = harness().await;

    let identity = h.session.sign_in("user@ecell.com", "user123").await?;

    assert_eq!(identity.name, "Regular User");
    assert!(!h.session.is_admin().await);
    Ok(())
}

#[tokio::test]
async fn test_sign_in_with_unknown_credentials() -> anyhow::Result<()> {
    let h = harness().await;

    let err = h.session.sign_in("nobody@x.com", "wrong").await.unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
    assert_eq!(h.session.current().await, None);
    assert_eq!(h.session.state().await, SessionState::Anonymous);

    let notes = h.recent.snapshot().await;
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].level, Level::Error);
    assert_eq!(notes[0].message, "Login failed: Invalid credentials");
    Ok(())
}

#[tokio::test]
async fn test_failed_sign_in_keeps_existing_identity() -> anyhow::Result<()> {
    let h = harness().await;
    let admin = h.session.sign_in("admin@ecell.com", "admin123").await?;

    assert!(h.session.sign_in("admin@ecell.com", "nope").await.is_err());

    assert_eq!(h.session.current().await, Some(admin));
    Ok(())
}

#[tokio::test]
async fn test_sign_up_with_taken_email() -> anyhow::Result<()> {
    let h = harness().await;

    let err = h.session.sign_up("Someone", "user@ecell.com", "pw").await.unwrap_err();

    assert!(matches!(err, AppError::AlreadyExists(_)));
    assert_eq!(h.session.state().await, SessionState::Anonymous);
    assert_eq!(h.slot.load().await?, None);
    Ok(())
}

#[tokio::test]
async fn test_sign_up_creates_user_that_cannot_sign_in_again() -> anyhow::Result<()> {
    let h = harness().await;

    let identity = h.session.sign_up("New Person", "new@x.com", "secret1").await?;
    assert_eq!(identity.id, "3");
    assert_eq!(identity.role, Role::User);
    assert_eq!(h.session.current().await, Some(identity));

    h.session.sign_out().await;

    // Sign-up never reaches the credential list.
    let err = h.session.sign_in("new@x.com", "secret1").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidCredentials));
    Ok(())
}

#[tokio::test]
async fn test_sign_out_clears_everything() -> anyhow::Result<()> {
    let h = harness().await;
    h.session.sign_in("admin@ecell.com", "admin123").await?;

    h.session.sign_out().await;

    assert_eq!(h.session.current().await, None);
    assert!(!h.session.is_admin().await);
    assert_eq!(h.slot.load().await?, None);

    // Signing out again is harmless.
    h.session.sign_out().await;
    assert_eq!(h.session.state().await, SessionState::Anonymous);
    Ok(())
}

#[tokio::test]
async fn test_reset_password_never_reveals_accounts() -> anyhow::Result<()> {
    let h = harness().await;

    h.session.reset_password("user@ecell.com").await;
    h.session.reset_password("nobody@x.com").await;

    assert_eq!(h.session.state().await, SessionState::Anonymous);
    assert!(h.recent.snapshot().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_boot_restores_persisted_identity() -> anyhow::Result<()> {
    let stored = Identity {
        id: "1".to_string(),
        email: "admin@ecell.com".to_string(),
        name: "Admin User".to_string(),
        role: Role::Admin,
    };
    let h = harness_with_slot(MemoryIdentitySlot::with_identity(stored.clone())).await;

    assert_eq!(h.session.state().await, SessionState::Authenticated(stored));
    assert!(h.session.is_admin().await);
    Ok(())
}

#[tokio::test]
async fn test_store_starts_loading_until_boot() -> anyhow::Result<()> {
    let session = SessionStore::new(
        Arc::new(FixedCredentials::demo()),
        Arc::new(MemoryIdentitySlot::new()),
        Arc::new(NotificationManager::new()),
        Latency::none(),
    );

    assert_eq!(session.state().await, SessionState::Loading);
    assert!(!session.is_admin().await);

    assert_eq!(session.boot().await, SessionState::Anonymous);
    Ok(())
}
