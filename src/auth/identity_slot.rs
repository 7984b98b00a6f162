use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use crate::{domain::Identity, error::Result};

/// A single persisted value holding the signed-in identity, read once at
/// boot so a restart keeps the session.
#[async_trait]
pub trait IdentitySlot: Send + Sync {
    async fn load(&self) -> Result<Option<Identity>>;
    async fn store(&self, identity: &Identity) -> Result<()>;
    async fn clear(&self) -> Result<()>;
}

/// Keeps the identity as a JSON document on disk.
pub struct FileIdentitySlot {
    path: PathBuf,
}

impl FileIdentitySlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl IdentitySlot for FileIdentitySlot {
    async fn load(&self) -> Result<Option<Identity>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }

    async fn store(&self, identity: &Identity) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let raw = serde_json::to_string(identity)?;
        fs::write(&self.path, raw).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Keeps the identity in memory only.
#[derive(Default)]
pub struct MemoryIdentitySlot {
    value: Mutex<Option<Identity>>,
}

impl MemoryIdentitySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(identity: Identity) -> Self {
        Self {
            value: Mutex::new(Some(identity)),
        }
    }
}

#[async_trait]
impl IdentitySlot for MemoryIdentitySlot {
    async fn load(&self) -> Result<Option<Identity>> {
        Ok(self.value.lock().await.clone())
    }

    async fn store(&self, identity: &Identity) -> Result<()> {
        *self.value.lock().await = Some(identity.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.value.lock().await = None;
        Ok(())
    }
}
