use async_trait::async_trait;
use subtle::ConstantTimeEq;

use crate::{
    domain::{Identity, Role},
    error::Result,
};

/// Answers whether an (email, secret) pair belongs to a known identity.
/// The session store only talks to this trait, so a real credential
/// service can replace the fixed list without touching session logic.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify_credentials(&self, email: &str, secret: &str) -> Result<Option<Identity>>;
    async fn is_registered(&self, email: &str) -> Result<bool>;
    async fn registered_count(&self) -> Result<usize>;
}

struct Entry {
    identity: Identity,
    secret: String,
}

/// A hardcoded list of identities.
pub struct FixedCredentials {
    entries: Vec<Entry>,
}

impl FixedCredentials {
    pub fn new(entries: Vec<(Identity, String)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(identity, secret)| Entry { identity, secret })
                .collect(),
        }
    }

    /// The two demo accounts the site ships with.
    pub fn demo() -> Self {
        Self::new(vec![
            (
                Identity {
                    id: "1".to_string(),
                    email: "admin@ecell.com".to_string(),
                    name: "Admin User".to_string(),
                    role: Role::Admin,
                },
                "admin123".to_string(),
            ),
            (
                Identity {
                    id: "2".to_string(),
                    email: "user@ecell.com".to_string(),
                    name: "Regular User".to_string(),
                    role: Role::User,
                },
                "user123".to_string(),
            ),
        ])
    }
}

#[async_trait]
impl CredentialVerifier for FixedCredentials {
    async fn verify_credentials(&self, email: &str, secret: &str) -> Result<Option<Identity>> {
        let found = self.entries.iter().find(|entry| {
            entry.identity.email == email
                && bool::from(entry.secret.as_bytes().ct_eq(secret.as_bytes()))
        });

        Ok(found.map(|entry| entry.identity.clone()))
    }

    async fn is_registered(&self, email: &str) -> Result<bool> {
        Ok(self.entries.iter().any(|entry| entry.identity.email == email))
    }

    async fn registered_count(&self) -> Result<usize> {
        Ok(self.entries.len())
    }
}
