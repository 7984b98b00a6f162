use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::{
    auth::{CredentialVerifier, IdentitySlot},
    config::AuthConfig,
    domain::{Identity, Role},
    error::{AppError, Result},
    notify::NotificationManager,
};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, persisted identity not yet read.
    Loading,
    Anonymous,
    Authenticated(Identity),
}

/// Artificial delays applied before auth operations resolve.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latency {
    pub sign_in: Duration,
    pub reset: Duration,
}

impl Latency {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            sign_in: Duration::from_millis(config.sign_in_latency_ms),
            reset: Duration::from_millis(config.reset_latency_ms),
        }
    }
}

/// Tracks at most one signed-in identity for the whole site.
pub struct SessionStore {
    state: RwLock<SessionState>,
    credentials: Arc<dyn CredentialVerifier>,
    slot: Arc<dyn IdentitySlot>,
    notifications: Arc<NotificationManager>,
    latency: Latency,
}

impl SessionStore {
    pub fn new(
        credentials: Arc<dyn CredentialVerifier>,
        slot: Arc<dyn IdentitySlot>,
        notifications: Arc<NotificationManager>,
        latency: Latency,
    ) -> Self {
        Self {
            state: RwLock::new(SessionState::Loading),
            credentials,
            slot,
            notifications,
            latency,
        }
    }

    /// Restore the identity from the slot. Only the first call reads it;
    /// later calls leave the state alone.
    pub async fn boot(&self) -> SessionState {
        let mut state = self.state.write().await;
        if *state != SessionState::Loading {
            return state.clone();
        }

        *state = match self.slot.load().await {
            Ok(Some(identity)) => {
                tracing::info!("Restored session for {}", identity.email);
                SessionState::Authenticated(identity)
            }
            Ok(None) => SessionState::Anonymous,
            Err(e) => {
                tracing::warn!("Ignoring unreadable identity slot: {}", e);
                SessionState::Anonymous
            }
        };

        state.clone()
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn current(&self) -> Option<Identity> {
        match &*self.state.read().await {
            SessionState::Authenticated(identity) => Some(identity.clone()),
            _ => None,
        }
    }

    pub async fn is_admin(&self) -> bool {
        matches!(
            &*self.state.read().await,
            SessionState::Authenticated(identity) if identity.is_admin()
        )
    }

    pub async fn sign_in(&self, email: &str, secret: &str) -> Result<Identity> {
        simulate_latency(self.latency.sign_in).await;

        let result = self.try_sign_in(email, secret).await;
        match &result {
            Ok(_) => self.notifications.success("Logged in successfully").await,
            Err(e) => self.notifications.error(format!("Login failed: {}", e)).await,
        }
        result
    }

    async fn try_sign_in(&self, email: &str, secret: &str) -> Result<Identity> {
        let identity = self
            .credentials
            .verify_credentials(email, secret)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        self.authenticate(identity.clone()).await;
        tracing::info!("Signed in {} ({:?})", identity.email, identity.role);
        Ok(identity)
    }

    /// Creates a `user` identity and signs it in. The new identity is not
    /// added to the credential verifier, so it cannot sign in again later.
    pub async fn sign_up(&self, name: &str, email: &str, secret: &str) -> Result<Identity> {
        simulate_latency(self.latency.sign_in).await;

        let result = self.try_sign_up(name, email, secret).await;
        match &result {
            Ok(_) => self.notifications.success("Account created successfully").await,
            Err(e) => self.notifications.error(format!("Signup failed: {}", e)).await,
        }
        result
    }

    async fn try_sign_up(&self, name: &str, email: &str, _secret: &str) -> Result<Identity> {
        if self.credentials.is_registered(email).await? {
            return Err(AppError::AlreadyExists("User already exists".to_string()));
        }

        let identity = Identity {
            id: (self.credentials.registered_count().await? + 1).to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role: Role::User,
        };

        self.authenticate(identity.clone()).await;
        tracing::info!("Signed up {}", identity.email);
        Ok(identity)
    }

    pub async fn sign_out(&self) {
        *self.state.write().await = SessionState::Anonymous;

        if let Err(e) = self.slot.clear().await {
            tracing::warn!("Failed to clear identity slot: {}", e);
        }

        self.notifications.success("Logged out successfully").await;
    }

    /// Always succeeds, whether or not the email is known, so callers cannot
    /// probe which addresses have accounts.
    pub async fn reset_password(&self, email: &str) {
        simulate_latency(self.latency.reset).await;

        match self.credentials.is_registered(email).await {
            Ok(true) => tracing::debug!("Password reset requested for {}", email),
            Ok(false) => tracing::debug!("Password reset requested for unknown address {}", email),
            Err(e) => tracing::warn!("Password reset lookup failed: {}", e),
        }
    }

    async fn authenticate(&self, identity: Identity) {
        if let Err(e) = self.slot.store(&identity).await {
            tracing::warn!("Failed to persist identity: {}", e);
        }
        *self.state.write().await = SessionState::Authenticated(identity);
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
