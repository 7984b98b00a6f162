pub mod credentials;
pub mod identity_slot;
pub mod session;

pub use credentials::{CredentialVerifier, FixedCredentials};
pub use identity_slot::{FileIdentitySlot, IdentitySlot, MemoryIdentitySlot};
pub use session::{Latency, SessionState, SessionStore};
